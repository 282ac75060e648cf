// src/display/static_display.rs
//! Display host with fixed metrics.

use crate::config::DisplayConfig;
use crate::display::host::{DisplayHost, ScreenSize};
use crate::error::GeometryError;

/// A display whose size and pixel scale never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticDisplay {
    size: ScreenSize,
    pixel_scale: f64,
}

impl StaticDisplay {
    pub fn new(width: f64, height: f64, pixel_scale: f64) -> Self {
        Self {
            size: ScreenSize::new(width, height),
            pixel_scale,
        }
    }

    /// Builds a display from config metrics, rejecting unusable values.
    pub fn from_config(config: &DisplayConfig) -> Result<Self, GeometryError> {
        config.validate()?;
        Ok(Self::new(config.width_pt, config.height_pt, config.pixel_scale))
    }
}

impl Default for StaticDisplay {
    fn default() -> Self {
        let config = DisplayConfig::default();
        Self::new(config.width_pt, config.height_pt, config.pixel_scale)
    }
}

impl DisplayHost for StaticDisplay {
    fn screen_size(&self) -> ScreenSize {
        self.size
    }

    fn current_pixel_scale(&self) -> f64 {
        self.pixel_scale
    }
}
