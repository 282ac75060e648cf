// src/geometry/device.rs

//! Device width classes and their design-scaling ratios.

use serde::{Deserialize, Serialize};

use crate::display::ScreenSize;

/// Width the layout constants are authored against.
pub const REFERENCE_WIDTH_PT: f64 = 414.0;

const SMALL_WIDTH_PT: f64 = 320.0;
const MEDIUM_WIDTH_PT: f64 = 375.0;
const LEGACY_IPAD_HEIGHT_PT: f64 = 480.0;

/// 320/414
const SMALL_RATIO: f64 = 0.7729468599;
/// 375/414
const MEDIUM_RATIO: f64 = 0.9057971014;

/// Coarse classification of the device by logical screen width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceWidthClass {
    /// 320x480: an iPad running a phone app in compatibility mode.
    LegacyIpad,
    /// 320 points wide, any other height.
    SmallPhone,
    /// 375 points wide.
    MediumPhone,
    /// 414 points wide, and every width not listed above.
    LargePhone,
}

impl DeviceWidthClass {
    /// Classifies a screen by its logical size.
    ///
    /// Widths other than 320 and 375 (including 414) fall back to
    /// `LargePhone`, so unknown devices get the unscaled reference layout.
    pub fn classify(size: ScreenSize) -> Self {
        if size.width == SMALL_WIDTH_PT {
            if size.height == LEGACY_IPAD_HEIGHT_PT {
                DeviceWidthClass::LegacyIpad
            } else {
                DeviceWidthClass::SmallPhone
            }
        } else if size.width == MEDIUM_WIDTH_PT {
            DeviceWidthClass::MediumPhone
        } else {
            DeviceWidthClass::LargePhone
        }
    }

    /// Factor applied to a design-reference length on this class of device.
    pub fn scale_ratio(self) -> f64 {
        match self {
            DeviceWidthClass::LegacyIpad | DeviceWidthClass::SmallPhone => SMALL_RATIO,
            DeviceWidthClass::MediumPhone => MEDIUM_RATIO,
            DeviceWidthClass::LargePhone => 1.0,
        }
    }
}

/// Scales a design-reference length for `class`.
///
/// Non-finite lengths stay non-finite: the ratios are finite and positive.
pub fn scale_for_device_class(length: f64, class: DeviceWidthClass) -> f64 {
    length * class.scale_ratio()
}
