#![cfg(target_arch = "wasm32")]
#![allow(missing_docs)]

use sitehead::web_sys::{self, Element};
use sitehead::{SiteConfig, SiteHeader};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const HEADER: &str = r##"
<a class="logo" href="index.html">Praxis</a>
<button class="menu-toggle" aria-expanded="false">Menu</button>
<nav id="navMenu">
  <a data-page="home" href="index.html">Start</a>
  <a data-page="costs" href="behandlungskosten.html">Kosten</a>
  <a data-page="about" href="ueber-mich.html">Über mich</a>
  <a data-page="contact" href="kontakt.html">Kontakt</a>
  <a data-page="faq" href="faq.html">FAQ</a>
</nav>
<div class="lang-switch"><a href="#">DE</a><a href="#">EN</a></div>
"##;

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(markup: &str) -> Element {
    let container = document().create_element("header").unwrap();
    container.set_inner_html(markup);
    document().body().unwrap().append_child(&container).unwrap();
    container
}

fn set_body_page(page: Option<&str>) {
    let body = document().body().unwrap();
    match page {
        Some(page) => body.set_attribute("data-page", page).unwrap(),
        None => body.remove_attribute("data-page").unwrap(),
    }
}

fn href(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .get_attribute("href")
        .unwrap()
}

fn lang_hrefs(root: &Element) -> (String, String) {
    (
        href(root, ".lang-switch a:nth-child(1)"),
        href(root, ".lang-switch a:nth-child(2)"),
    )
}

/// Bubbling plain `Event`, so anchors do not navigate the test page away.
fn dispatch_click(target: &web_sys::EventTarget) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn click(root: &Element, selector: &str) {
    dispatch_click(&root.query_selector(selector).unwrap().unwrap());
}

#[wasm_bindgen_test]
fn test_rewrites_links_for_english_project_page() {
    set_body_page(None);
    let root = mount(HEADER);
    let mut header = SiteHeader::with_config(root.clone(), SiteConfig::default());

    header.init_at("/praxis/en/contact.html").unwrap();

    assert_eq!(
        lang_hrefs(&root),
        (
            "/praxis/kontakt.html".to_owned(),
            "/praxis/en/contact.html".to_owned()
        )
    );
    assert_eq!(href(&root, "a.logo"), "/praxis/en/index.html");
    assert_eq!(href(&root, "a[data-page=costs]"), "/praxis/en/costs.html");
    assert_eq!(href(&root, "a[data-page=about]"), "/praxis/en/about.html");

    root.remove();
}

#[wasm_bindgen_test]
fn test_unknown_page_keeps_current_language_link() {
    set_body_page(None);
    let root = mount(HEADER);
    let mut header = SiteHeader::with_config(root.clone(), SiteConfig::default());

    header.init_at("/project/unknown.html").unwrap();

    assert_eq!(
        lang_hrefs(&root),
        (
            "/project/unknown.html".to_owned(),
            "/project/en/index.html".to_owned()
        )
    );

    root.remove();
}

#[wasm_bindgen_test]
fn test_configured_base_path_wins_over_detection() {
    set_body_page(None);
    let root = mount(HEADER);
    let config = SiteConfig {
        base_path: Some("/en/".to_owned()),
        debug: true,
    };
    let mut header = SiteHeader::with_config(root.clone(), config);

    header.init_at("/en/faq.html").unwrap();

    assert_eq!(
        lang_hrefs(&root),
        ("/en/faq.html".to_owned(), "/en/en/faq.html".to_owned())
    );

    root.remove();
}

#[wasm_bindgen_test]
fn test_missing_language_switch_skips_only_that_feature() {
    set_body_page(None);
    let root = mount(
        r#"<nav id="navMenu"><a data-page="faq" href="faq.html">FAQ</a></nav>"#,
    );
    let mut header = SiteHeader::with_config(root.clone(), SiteConfig::default());

    header.init_at("/en/faq.html").unwrap();

    assert_eq!(href(&root, "a[data-page=faq]"), "/en/faq.html");
    assert!(!header.menu_bound());
    assert_eq!(header.state().passes, 1);

    root.remove();
}

#[wasm_bindgen_test]
fn test_highlight_from_body_and_from_path() {
    let root = mount(HEADER);
    let mut header = SiteHeader::with_config(root.clone(), SiteConfig::default());

    set_body_page(Some("about"));
    header.init_at("/kontakt.html").unwrap();
    let active = root.query_selector("nav a.active").unwrap().unwrap();
    assert_eq!(active.get_attribute("data-page").as_deref(), Some("about"));

    set_body_page(None);
    header.init_at("/kontakt.html").unwrap();
    let active = root.query_selector_all("nav a.active").unwrap();
    assert_eq!(active.length(), 1);
    assert!(
        root.query_selector("a[data-page=contact]")
            .unwrap()
            .unwrap()
            .class_list()
            .contains("active")
    );

    root.remove();
}

#[wasm_bindgen_test]
fn test_menu_toggle_and_repeated_init() {
    set_body_page(None);
    let root = mount(HEADER);
    let mut header = SiteHeader::with_config(root.clone(), SiteConfig::default());
    let nav = root.query_selector("#navMenu").unwrap().unwrap();
    let toggle = root.query_selector(".menu-toggle").unwrap().unwrap();

    header.init_at("/").unwrap();
    header.init_at("/").unwrap();
    header.init_at("/").unwrap();

    assert!(header.menu_bound());
    assert_eq!(header.state().passes, 3);
    assert!(!header.menu_open());

    // A listener bound more than once would flip the menu back shut
    click(&root, ".menu-toggle");
    assert!(header.menu_open());
    assert!(nav.class_list().contains("show-menu"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    // Clicking a nav link closes the menu
    click(&root, "a[data-page=faq]");
    assert!(!header.menu_open());
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    // Clicking elsewhere in the document closes it too
    click(&root, ".menu-toggle");
    assert!(header.menu_open());
    dispatch_click(&document().body().unwrap());
    assert!(!header.menu_open());
    assert!(!nav.class_list().contains("show-menu"));

    root.remove();
}

#[wasm_bindgen_test]
fn test_dropping_handle_releases_listeners() {
    set_body_page(None);
    let root = mount(HEADER);
    let nav = root.query_selector("#navMenu").unwrap().unwrap();

    {
        let mut header = SiteHeader::with_config(root.clone(), SiteConfig::default());
        header.init_at("/").unwrap();
    }

    click(&root, ".menu-toggle");
    assert!(!nav.class_list().contains("show-menu"));

    root.remove();
}
