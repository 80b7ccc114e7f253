use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{Result, SiteError};
use crate::scroll::FrameControl;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop with an explicit lifetime. The tick runs
/// once per frame until it returns [`FrameControl::Stop`] or the handle is
/// dropped; dropping cancels the pending frame synchronously.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Result<Self>
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let pending = pending.clone();
            // weak so the closure does not keep its own slot alive
            let slot = Rc::downgrade(&callback);
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                pending.set(None);
                if tick(timestamp) == FrameControl::Stop {
                    return;
                }
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                let slot = slot.borrow();
                if let Some(next) = slot.as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(handle) => pending.set(Some(handle)),
                        Err(err) => log::warn!("frame loop stopped: {:?}", err),
                    }
                }
            })
        };

        let handle = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        pending.set(Some(handle));
        *callback.borrow_mut() = Some(closure);

        Ok(Self {
            window,
            pending,
            callback,
        })
    }

    /// Fires `tick` on the next frame only.
    pub fn once<F>(tick: F) -> Result<Self>
    where
        F: FnOnce(f64) + 'static,
    {
        let mut tick = Some(tick);
        Self::start(move |timestamp| {
            if let Some(tick) = tick.take() {
                tick(timestamp);
            }
            FrameControl::Stop
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn stop(&self) {
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.callback.borrow_mut().take();
    }
}
