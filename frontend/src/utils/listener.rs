use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::{Result, SiteError};

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, callback, None)
    }

    /// Registers with `passive: false` so the handler may cancel the event.
    pub fn active<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        Self::register(target, event, callback, Some(options))
    }

    /// Registers with `passive: true` for high-frequency observers.
    pub fn passive<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        Self::register(target, event, callback, Some(options))
    }

    fn register<F>(
        target: &EventTarget,
        event: &'static str,
        callback: F,
        options: Option<AddEventListenerOptions>,
    ) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let function = callback.as_ref().unchecked_ref();
        match options {
            Some(options) => target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event, function, &options,
                ),
            None => target.add_event_listener_with_callback(event, function),
        }
        .map_err(|err| SiteError::listener(event, err))?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
