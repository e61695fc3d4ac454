//! Optional per-site settings read from `window.SITE_CONFIG`.
//!
//! ```html
//! <script>window.SITE_CONFIG = { base_path: "/praxis/", debug: true };</script>
//! ```

use serde::Deserialize;
use sitehead_router::Deployment;
use wasm_bindgen::JsValue;

use crate::console;

/// Name of the global the config is read from.
pub const CONFIG_GLOBAL: &str = "SITE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Mount point of the site, e.g. `/` or `/praxis/`. When unset it is
    /// inferred from the first segment of each path.
    pub base_path: Option<String>,
    /// Log resolution details to the browser console.
    pub debug: bool,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the config global, falling back to defaults when it is missing
    /// or malformed.
    pub fn from_window() -> Self {
        let Some(value) = get_config_value() else {
            return Self::default();
        };

        let Some(json) = js_sys::JSON::stringify(&value)
            .ok()
            .and_then(|json| json.as_string())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                console::warn(&format!("Ignoring malformed {CONFIG_GLOBAL}: {err}"));
                Self::default()
            }
        }
    }

    /// Deployment to resolve `path` in.
    pub fn deployment(&self, path: &str) -> Deployment {
        match &self.base_path {
            Some(base) => Deployment::from_base_path(base),
            None => Deployment::detect(path),
        }
    }
}

fn get_config_value() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;

    if value.is_undefined() || value.is_null() {
        return None;
    }

    Some(value)
}
