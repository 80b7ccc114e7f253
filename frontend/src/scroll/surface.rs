use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::error::{Result, SiteError};

/// The scrollable viewport as seen by the snap controller.
pub trait ScrollSurface {
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn scroll_to(&self, y: f64);
    fn prefers_reduced_motion(&self) -> bool;
    /// Monotonic milliseconds on the same time origin as frame timestamps.
    fn now(&self) -> f64;
    /// Suspends (`false`) or restores (`true`) CSS scroll snapping and smooth
    /// scroll behaviour on the root while a scripted animation runs.
    fn set_native_snap(&self, _enabled: bool) {}
}

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion(window: &Window) -> bool {
    matches!(
        window.match_media(REDUCED_MOTION_QUERY),
        Ok(Some(query)) if query.matches()
    )
}

/// Root style values captured before an animation overrides them.
#[derive(Debug, Default)]
struct SavedRootStyle {
    snap_type: String,
    scroll_behavior: String,
}

pub struct WindowSurface {
    window: Window,
    root: HtmlElement,
    saved: RefCell<Option<SavedRootStyle>>,
}

impl WindowSurface {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let root = window
            .document()
            .ok_or(SiteError::NoDocument)?
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| SiteError::MissingElement("html".to_string()))?;
        Ok(Self {
            window,
            root,
            saved: RefCell::new(None),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl ScrollSurface for WindowSurface {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn prefers_reduced_motion(&self) -> bool {
        prefers_reduced_motion(&self.window)
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    fn set_native_snap(&self, enabled: bool) {
        let style = self.root.style();
        let mut saved = self.saved.borrow_mut();
        if enabled {
            if let Some(previous) = saved.take() {
                let _ = style.set_property("scroll-snap-type", &previous.snap_type);
                let _ = style.set_property("scroll-behavior", &previous.scroll_behavior);
            }
        } else if saved.is_none() {
            *saved = Some(SavedRootStyle {
                snap_type: style.get_property_value("scroll-snap-type").unwrap_or_default(),
                scroll_behavior: style.get_property_value("scroll-behavior").unwrap_or_default(),
            });
            let _ = style.set_property("scroll-snap-type", "none");
            let _ = style.set_property("scroll-behavior", "auto");
        }
    }
}
