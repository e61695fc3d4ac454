use sitehead_router::{active_nav_key, map_language_switch, map_nav_links, resolve_in};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

use crate::config::SiteConfig;
use crate::console;
use crate::highlight::highlight_current_page;
use crate::links::{update_language_switch, update_nav_links};
use crate::menu::Menu;

/// What a [`SiteHeader`] has done to its root so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InitState {
    /// Menu listeners are attached. Set once, never cleared.
    pub menu_bound: bool,
    /// Completed initialization passes.
    pub passes: u32,
}

/// Handle to an inserted header fragment.
///
/// Created once the header markup is in the document; [`SiteHeader::init`]
/// may then be called any number of times. Menu listeners are bound on the
/// first pass only and released when the handle is dropped, while the
/// links are recomputed from the current location on every pass.
#[wasm_bindgen]
#[derive(Debug)]
pub struct SiteHeader {
    root: Element,
    config: SiteConfig,
    state: InitState,
    menu: Option<Menu>,
}

#[wasm_bindgen]
impl SiteHeader {
    /// New handle for `root`, configured from `window.SITE_CONFIG`.
    #[wasm_bindgen(constructor)]
    pub fn new(root: Element) -> SiteHeader {
        Self::with_config(root, SiteConfig::from_window())
    }

    /// Run the initialization pass against `location.pathname`.
    pub fn init(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("No global window object")?;
        let path = window.location().pathname()?;

        self.init_at(&path)
    }

    /// Run the initialization pass as if the page were at `path`.
    ///
    /// Each feature whose elements are missing is skipped without affecting
    /// the others. DOM failures are logged and the first one is returned
    /// once every feature has run.
    #[wasm_bindgen(js_name = initAt)]
    pub fn init_at(&mut self, path: &str) -> Result<(), JsValue> {
        let debug = self.config.debug;
        let mut first_error = None;

        if !self.state.menu_bound {
            match Menu::bind(&self.root) {
                Ok(Some(menu)) => {
                    self.menu = Some(menu);
                    self.state.menu_bound = true;
                }
                Ok(None) => console::debug(debug, "no menu toggle in header, skipping menu"),
                Err(err) => record(&mut first_error, err),
            }
        }

        let location = resolve_in(path, &self.config.deployment(path));
        if debug {
            console::debug(debug, &format!("resolved {path} to {}", to_json(&location)));
        }

        match highlight_current_page(&self.root, active_nav_key(&location)) {
            Ok(Some(page)) => console::debug(debug, &format!("active page: {page}")),
            Ok(None) => console::debug(debug, "no current page, skipping highlight"),
            Err(err) => record(&mut first_error, err),
        }

        let nav_targets = map_nav_links(&location);
        match update_nav_links(&self.root, &nav_targets) {
            Ok(count) => console::debug(debug, &format!("rewrote {count} navigation links")),
            Err(err) => record(&mut first_error, err),
        }

        let language_links = map_language_switch(&location);
        match update_language_switch(&self.root, &language_links) {
            Ok(true) => {
                let links = to_json(&language_links);
                console::debug(debug, &format!("language switch: {links}"));
            }
            Ok(false) => console::debug(debug, "no language switch in header, skipping"),
            Err(err) => record(&mut first_error, err),
        }

        self.state.passes += 1;

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[wasm_bindgen(getter, js_name = menuBound)]
    pub fn menu_bound(&self) -> bool {
        self.state.menu_bound
    }

    #[wasm_bindgen(getter, js_name = menuOpen)]
    pub fn menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(Menu::is_open)
    }
}

impl SiteHeader {
    pub fn with_config(root: Element, config: SiteConfig) -> SiteHeader {
        Self {
            root,
            config,
            state: InitState::default(),
            menu: None,
        }
    }

    pub fn state(&self) -> InitState {
        self.state
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// Create a [`SiteHeader`] for `root` and run its first initialization pass.
///
/// Call after the header fragment has been inserted into the document and
/// keep the returned handle alive for as long as the header is shown.
#[wasm_bindgen(js_name = initSiteHeader)]
pub fn init_site_header(root: Element) -> Result<SiteHeader, JsValue> {
    let mut header = SiteHeader::new(root);
    header.init()?;

    Ok(header)
}

fn record(first_error: &mut Option<JsValue>, err: JsValue) {
    console::error(&err);
    if first_error.is_none() {
        *first_error = Some(err);
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
