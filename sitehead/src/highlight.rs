use sitehead_router::NavKey;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{self, NAV_LINKS, PAGE_ATTR};

pub(crate) const ACTIVE_CLASS: &str = "active";

/// Mark the nav link of the current page active and clear every other one.
///
/// The page is taken from `<body data-page>`, or from `fallback` when the body
/// does not declare one. Returns the page that was marked, if any.
pub(crate) fn highlight_current_page(
    root: &Element,
    fallback: Option<NavKey>,
) -> Result<Option<String>, JsValue> {
    let Some(current) =
        dom::body_page(root).or_else(|| fallback.map(|key| key.as_str().to_owned()))
    else {
        return Ok(None);
    };

    for link in dom::query_all(root, NAV_LINKS)? {
        let is_current = link.get_attribute(PAGE_ATTR).as_deref() == Some(current.as_str());
        link.class_list().toggle_with_force(ACTIVE_CLASS, is_current)?;
    }

    Ok(Some(current))
}
