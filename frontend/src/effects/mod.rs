//! Decorative canvas effects and the registry that keeps them unique.

pub mod glitch;
pub mod registry;

pub use registry::EffectRegistry;
