use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Header elements, all looked up inside the header root.
pub(crate) const NAV_MENU: &str = "#navMenu";
pub(crate) const MENU_TOGGLE: &str = ".menu-toggle";
pub(crate) const NAV_LINKS: &str = "nav a[data-page]";
pub(crate) const LANG_SWITCH: &str = ".lang-switch";
pub(crate) const LOGO: &str = "a.logo";

pub(crate) const PAGE_ATTR: &str = "data-page";

pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = root.query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `data-page` of the document body, the page's own declaration of which
/// nav entry it belongs to.
pub(crate) fn body_page(root: &Element) -> Option<String> {
    root.owner_document()?
        .body()?
        .get_attribute(PAGE_ATTR)
        .filter(|page| !page.is_empty())
}
