// src/lib.rs

//! Device-aware scaling of UI lengths.
//!
//! Layout constants are authored against a 414-point-wide reference screen.
//! Before use they are scaled for the current device width class and snapped
//! to the physical pixel grid of the display. See [`geometry::normalize`].

pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod layout;

pub use config::{Config, DisplayConfig, CONFIG};
pub use display::{DisplayHost, ScreenSize, StaticDisplay};
pub use error::GeometryError;
pub use geometry::{
    normalize, pixel_round, scale_for_device_class, DeviceWidthClass, Insets, PixelGrid,
    ScreenGeometryAdapter, ScreenLength, Size,
};
pub use layout::VideoScreenMetrics;
