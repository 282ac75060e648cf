// src/geometry/rounding.rs

//! Snapping lengths to the physical pixel grid.

use log::trace;

/// The finest length step a display can render, derived from its pixel scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelGrid {
    /// 1 point (scale 1).
    Whole,
    /// 0.5 point (scale 2, and any scale that is not 1 or 3).
    Halves,
    /// About a third of a point (scale 3), approximated as .33 and .67.
    Thirds,
}

// Bucket edges for the thirds grid: midpoints between 0, 1/3, 2/3 and 1.
const THIRDS_LOW: f64 = 1.0 / 6.0;
const THIRDS_MID: f64 = 0.5;
const THIRDS_HIGH: f64 = 5.0 / 6.0;

impl PixelGrid {
    pub fn from_pixel_scale(pixel_scale: f64) -> Self {
        if pixel_scale == 3.0 {
            PixelGrid::Thirds
        } else if pixel_scale == 1.0 {
            PixelGrid::Whole
        } else {
            if pixel_scale != 2.0 {
                trace!("Unusual pixel scale {}, rounding to half points", pixel_scale);
            }
            PixelGrid::Halves
        }
    }

    /// Snaps `length` to this grid.
    ///
    /// Non-finite lengths are returned unchanged.
    pub fn snap(self, length: f64) -> f64 {
        if !length.is_finite() {
            return length;
        }
        match self {
            PixelGrid::Thirds => {
                let whole = length.floor();
                let frac = length % 1.0;
                if (0.0..THIRDS_LOW).contains(&frac) {
                    whole
                } else if (THIRDS_LOW..THIRDS_MID).contains(&frac) {
                    whole + 0.33
                } else if (THIRDS_MID..THIRDS_HIGH).contains(&frac) {
                    whole + 0.67
                } else {
                    whole + 1.0
                }
            }
            PixelGrid::Whole => snap_half_up(length, 1.0),
            PixelGrid::Halves => snap_half_up(length, 0.5),
        }
    }
}

fn snap_half_up(length: f64, unit: f64) -> f64 {
    let multiple = (length / unit).floor();
    if length % unit >= unit / 2.0 {
        unit * multiple + unit
    } else {
        unit * multiple
    }
}

/// Snaps `length` to the pixel grid of a display with `pixel_scale`.
pub fn pixel_round(length: f64, pixel_scale: f64) -> f64 {
    PixelGrid::from_pixel_scale(pixel_scale).snap(length)
}
