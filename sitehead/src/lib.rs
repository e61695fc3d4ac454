#![allow(missing_docs)]
//! Browser side of the site header: mobile menu, active nav link, and
//! language-aware link targets.
//!
//! ```js
//! import init, { initSiteHeader } from "./sitehead.js";
//!
//! await init();
//! const container = document.getElementById("site-header");
//! container.innerHTML = await (await fetch("partials/header.html")).text();
//! const header = initSiteHeader(container);
//! ```

pub use js_sys;
pub use sitehead_router;
pub use wasm_bindgen;
pub use web_sys;

mod config;
mod console;
mod dom;
mod header;
mod highlight;
mod links;
mod menu;
mod signal;

pub use config::{CONFIG_GLOBAL, SiteConfig};
pub use header::{InitState, SiteHeader, init_site_header};

/// Forward Rust panics to the browser console.
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
