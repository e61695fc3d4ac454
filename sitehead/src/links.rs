use sitehead_router::{LanguageLinks, NavKey, NavLinkTargets};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{self, LANG_SWITCH, LOGO, NAV_LINKS, PAGE_ATTR};

/// Point the language switch at the two language variants of the page.
///
/// The switch holds the German anchor first and the English anchor second.
/// Returns `false` when the header has no complete switch.
pub(crate) fn update_language_switch(
    root: &Element,
    links: &LanguageLinks,
) -> Result<bool, JsValue> {
    let Some(switch) = root.query_selector(LANG_SWITCH)? else {
        return Ok(false);
    };

    let anchors = dom::query_all(&switch, "a")?;
    let [german, english, ..] = anchors.as_slice() else {
        return Ok(false);
    };

    german.set_attribute("href", &links.german_url)?;
    english.set_attribute("href", &links.english_url)?;

    Ok(true)
}

/// Rewrite every nav link tagged with a known `data-page` key, and the logo.
///
/// Returns the number of anchors rewritten.
pub(crate) fn update_nav_links(
    root: &Element,
    targets: &NavLinkTargets,
) -> Result<usize, JsValue> {
    let mut rewritten = 0;

    for link in dom::query_all(root, NAV_LINKS)? {
        let Some(href) = link
            .get_attribute(PAGE_ATTR)
            .and_then(|page| NavKey::parse(&page))
            .and_then(|key| targets.get(key))
        else {
            continue;
        };

        link.set_attribute("href", href)?;
        rewritten += 1;
    }

    if let Some(logo) = root.query_selector(LOGO)? {
        logo.set_attribute("href", &targets.logo)?;
        rewritten += 1;
    }

    Ok(rewritten)
}
