// src/geometry/mod.rs

//! Design-reference to device length conversion.
//!
//! A length is first multiplied by the ratio of its [`DeviceWidthClass`],
//! then snapped to the [`PixelGrid`] of the display. The two steps are
//! exposed separately as [`scale_for_device_class`] and [`pixel_round`].

pub mod adapter;
pub mod device;
pub mod ext;
pub mod rounding;

pub use adapter::{global, install, normalize, ScreenGeometryAdapter};
pub use device::{scale_for_device_class, DeviceWidthClass, REFERENCE_WIDTH_PT};
pub use ext::ScreenLength;
pub use rounding::{pixel_round, PixelGrid};

use serde::{Deserialize, Serialize};

/// Width and height in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(diameter: f64) -> Self {
        Self::new(diameter, diameter)
    }

    /// Normalizes both dimensions with the process-wide adapter.
    pub fn normalized(self) -> Self {
        global().normalize_size(self)
    }
}

/// Edge insets in logical points.
///
/// `f64::INFINITY` on an edge means "take all remaining space"; negative
/// values grow the area (hit-test outsets).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Normalizes every edge with the process-wide adapter.
    pub fn normalized(self) -> Self {
        global().normalize_insets(self)
    }
}
