//! Praxis demo site.
//!
//! Every page carries an empty `<header id="site-header">`. On load the
//! client fetches the header fragment for the page's language, inserts it,
//! announces the insertion with a `site:header-inserted` event, and hands the
//! container to [`sitehead::init_site_header`].
//!
//! ```sh
//! wasm-pack build demos/praxis --target web --out-dir static/pkg -- --features wasm
//! cargo run -p praxis --features server --bin server
//! ```

#![allow(missing_docs)]

use sitehead::sitehead_router::{ResolvedLocation, join_path};

/// Element the header fragment is inserted into.
pub const HEADER_CONTAINER_ID: &str = "site-header";
/// Event dispatched on the document once the fragment is in place.
pub const HEADER_INSERTED_EVENT: &str = "site:header-inserted";

/// URL of the header fragment matching the page's language.
pub fn header_fragment_url(location: &ResolvedLocation) -> String {
    let fragment = if location.is_english {
        "partials/header-en.html"
    } else {
        "partials/header.html"
    };

    join_path(&location.base_prefix, fragment)
}

#[cfg(target_arch = "wasm32")]
mod client {
    use std::cell::RefCell;

    use sitehead::sitehead_router::resolve_in;
    use sitehead::{SiteConfig, SiteHeader, init_site_header};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use super::{HEADER_CONTAINER_ID, HEADER_INSERTED_EVENT, header_fragment_url};

    thread_local! {
        static HEADER: RefCell<Option<SiteHeader>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        sitehead::set_panic_hook();

        wasm_bindgen_futures::spawn_local(async {
            if let Err(err) = load_header().await {
                web_sys::console::error_2(&"Failed to load site header:".into(), &err);
            }
        });
    }

    async fn load_header() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("No global window object")?;
        let document = window.document().ok_or("No document object")?;
        let container = document
            .get_element_by_id(HEADER_CONTAINER_ID)
            .ok_or("No header container")?;

        let path = window.location().pathname()?;
        let config = SiteConfig::from_window();
        let location = resolve_in(&path, &config.deployment(&path));
        let url = header_fragment_url(&location);

        let response: web_sys::Response = JsFuture::from(window.fetch_with_str(&url))
            .await?
            .dyn_into()?;

        if !response.ok() {
            return Err(format!("Fetching {url} failed with status {}", response.status()).into());
        }

        let html = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .ok_or("Header fragment is not text")?;

        container.set_inner_html(&html);

        let event_init = web_sys::CustomEventInit::new();
        event_init.set_detail(&JsValue::from_str(&url));
        let event =
            web_sys::CustomEvent::new_with_event_init_dict(HEADER_INSERTED_EVENT, &event_init)?;
        document.dispatch_event(&event)?;

        let header = init_site_header(container)?;
        HEADER.with(|slot| *slot.borrow_mut() = Some(header));

        Ok(())
    }
}
