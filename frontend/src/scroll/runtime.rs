use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, WheelEvent, Window};

use crate::config::SnapConfig;
use crate::error::{Result, SiteError};
use crate::utils::dom;
use crate::utils::frame_loop::FrameLoop;
use crate::utils::listener::Listener;

use super::controller::{KeyOutcome, SnapController, WheelOutcome};
use super::driver::Navigation;
use super::gesture::WheelSample;
use super::surface::{ScrollSurface, WindowSurface};

struct Shared {
    window: Window,
    document: Document,
    controller: RefCell<SnapController<WindowSurface>>,
    frames: RefCell<Option<FrameLoop>>,
}

impl Shared {
    fn refresh_sections(&self) {
        let candidates = dom::collect_sections(&self.document);
        self.controller.borrow_mut().refresh_sections(candidates);
    }

    /// Starts the frame loop for an animated navigation. Replacing the stored
    /// loop drops the previous one, cancelling its pending frame.
    fn drive(self: &Rc<Self>, navigation: Navigation) {
        let Navigation::Animating { id, .. } = navigation else {
            self.frames.borrow_mut().take();
            return;
        };
        let shared: Weak<Shared> = Rc::downgrade(self);
        let started = FrameLoop::start(move |timestamp| match shared.upgrade() {
            Some(shared) => shared.controller.borrow_mut().on_frame(id, timestamp),
            None => super::FrameControl::Stop,
        });
        match started {
            Ok(frames) => *self.frames.borrow_mut() = Some(frames),
            Err(err) => {
                log::warn!("scroll animation unavailable, jumping instead: {}", err);
                let mut controller = self.controller.borrow_mut();
                controller.teardown();
                controller.surface().scroll_to(navigation.target_y());
            }
        }
    }

    fn on_wheel(self: &Rc<Self>, event: &WheelEvent) {
        let sample = WheelSample {
            delta_x: event.delta_x(),
            delta_y: event.delta_y(),
            zoom_modifier: event.ctrl_key() || event.meta_key(),
            in_opt_out_zone: dom::in_opt_out_zone(&self.window, event.target()),
        };
        let outcome = self.controller.borrow_mut().on_wheel(&sample);
        if outcome.intercepts() {
            event.prevent_default();
            event.stop_propagation();
        }
        if let WheelOutcome::Navigated(navigation) = outcome {
            self.drive(navigation);
        }
    }

    fn on_key(self: &Rc<Self>, event: &KeyboardEvent) {
        let in_zone = dom::in_opt_out_zone(&self.window, event.target());
        let outcome = self.controller.borrow_mut().on_key(&event.key(), in_zone);
        if let KeyOutcome::Handled(navigation) = outcome {
            event.prevent_default();
            if let Some(navigation) = navigation {
                self.drive(navigation);
            }
        }
    }
}

/// The snap controller bound to the browser window. Listeners and any
/// running animation live exactly as long as this value.
pub struct SnapRuntime {
    shared: Rc<Shared>,
    _listeners: Vec<Listener>,
}

impl SnapRuntime {
    pub fn install(config: SnapConfig) -> Result<Self> {
        let surface = WindowSurface::new()?;
        let window = surface.window().clone();
        let document = window.document().ok_or(SiteError::NoDocument)?;
        let shared = Rc::new(Shared {
            window: window.clone(),
            document,
            controller: RefCell::new(SnapController::new(config, surface)),
            frames: RefCell::new(None),
        });
        shared.refresh_sections();

        let target: &web_sys::EventTarget = window.as_ref();
        let listeners = vec![
            Listener::active(target, "wheel", {
                let shared = shared.clone();
                move |event| {
                    if let Some(event) = event.dyn_ref::<WheelEvent>() {
                        shared.on_wheel(event);
                    }
                }
            })?,
            Listener::new(target, "keydown", {
                let shared = shared.clone();
                move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        shared.on_key(event);
                    }
                }
            })?,
            Listener::new(target, "resize", {
                let shared = shared.clone();
                move |_| shared.refresh_sections()
            })?,
            Listener::new(target, "load", {
                let shared = shared.clone();
                move |_| shared.refresh_sections()
            })?,
        ];

        log::info!(
            "scroll snap installed over {} sections",
            shared.controller.borrow().registry().len()
        );
        Ok(Self {
            shared,
            _listeners: listeners,
        })
    }

    /// Smooth-scrolls to section `id`. Returns false when `id` is not a snap
    /// target so the caller can fall back to native anchor scrolling; a
    /// request during a running animation is dropped and reported handled.
    pub fn navigate_to(&self, id: &str) -> bool {
        self.shared.refresh_sections();
        let navigation = self.shared.controller.borrow_mut().navigate_to(id);
        match navigation {
            Some(navigation) => {
                self.shared.drive(navigation);
                true
            }
            None => self.shared.controller.borrow().is_animating(),
        }
    }

    pub fn refresh(&self) {
        self.shared.refresh_sections();
    }
}

impl Drop for SnapRuntime {
    fn drop(&mut self) {
        self.shared.frames.borrow_mut().take();
        self.shared.controller.borrow_mut().teardown();
        log::debug!("scroll snap torn down");
    }
}
