//! Mobile navigation menu.
//!
//! Clicking the toggle flips the menu, clicks inside the nav stay inside it,
//! and a click on any nav link or anywhere else on the page closes it.

use std::fmt;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget};

use crate::dom::{self, MENU_TOGGLE, NAV_MENU};
use crate::signal::Signal;

pub(crate) const OPEN_CLASS: &str = "show-menu";

/// An event listener that is removed again when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

pub(crate) struct Menu {
    open: Signal<bool>,
    _listeners: Vec<Listener>,
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("open", &self.open.get())
            .field("listeners", &self._listeners.len())
            .finish()
    }
}

impl Menu {
    /// Wire up the menu inside `root`. `Ok(None)` when the header has no nav
    /// or no toggle.
    pub(crate) fn bind(root: &Element) -> Result<Option<Self>, JsValue> {
        let Some(nav) = root.query_selector(NAV_MENU)? else {
            return Ok(None);
        };
        let Some(toggle) = root.query_selector(MENU_TOGGLE)? else {
            return Ok(None);
        };
        let document = root.owner_document().ok_or("No document object")?;

        let open = Signal::new(false);

        {
            let nav = nav.clone();
            let toggle = toggle.clone();
            open.subscribe(move |is_open| {
                let _ = nav.class_list().toggle_with_force(OPEN_CLASS, *is_open);
                let expanded = if *is_open { "true" } else { "false" };
                let _ = toggle.set_attribute("aria-expanded", expanded);
            });
        }
        open.set(false);

        let mut listeners = Vec::new();

        let on_toggle = {
            let open = open.clone();
            move |event: Event| {
                event.stop_propagation();
                open.update(|is_open| !is_open);
            }
        };
        listeners.push(Listener::attach(&toggle, "click", on_toggle)?);

        listeners.push(Listener::attach(&nav, "click", |event: Event| {
            event.stop_propagation();
        })?);

        let close = {
            let open = open.clone();
            move |_event: Event| open.set(false)
        };
        listeners.push(Listener::attach(&document, "click", close.clone())?);

        for link in dom::query_all(&nav, "a")? {
            listeners.push(Listener::attach(&link, "click", close.clone())?);
        }

        Ok(Some(Self {
            open,
            _listeners: listeners,
        }))
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open.get()
    }
}
