use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Calls back the first time an element becomes visible, then stops
/// observing. Dropping the handle disconnects early.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityWatch {
    pub fn once<F>(element: &Element, threshold: f64, on_visible: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map_or(false, |entry| entry.is_intersecting())
                });
                if !visible {
                    return;
                }
                observer.disconnect();
                if let Some(on_visible) = on_visible.take() {
                    on_visible();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
