// src/display/mod.rs
//! Host display capability consumed by the geometry adapter.
//!
//! - DisplayHost: what the adapter may ask of the host (size, pixel scale)
//! - StaticDisplay: fixed metrics, used when nothing else is installed
//! - MockDisplay: adjustable test double

pub mod host;
pub mod mock;
pub mod static_display;

pub use host::{DisplayHost, ScreenSize};
pub use mock::MockDisplay;
pub use static_display::StaticDisplay;

#[cfg(test)]
mod tests;
