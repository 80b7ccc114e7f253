//! Section-to-section scroll snapping.
//!
//! [`registry`], [`gesture`], [`driver`] and [`controller`] are plain Rust
//! over the [`surface::ScrollSurface`] trait; [`runtime`] binds them to the
//! browser window.

pub mod controller;
pub mod driver;
pub mod gesture;
pub mod registry;
pub mod runtime;
pub mod surface;

pub use driver::FrameControl;
pub use registry::SectionCandidate;
pub use runtime::SnapRuntime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Down the page.
    Forward,
    Backward,
}
