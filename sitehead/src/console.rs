use wasm_bindgen::JsValue;

const PREFIX: &str = "[sitehead]";

pub(crate) fn debug(enabled: bool, message: &str) {
    if enabled {
        web_sys::console::log_1(&format!("{PREFIX} {message}").into());
    }
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&format!("{PREFIX} {message}").into());
}

pub(crate) fn error(err: &JsValue) {
    web_sys::console::error_2(&PREFIX.into(), err);
}
