// src/geometry/ext.rs

//! Extension methods piping numeric layout constants through the
//! process-wide adapter, e.g. `62.normalized()`.

use crate::geometry::adapter::global;
use crate::geometry::rounding::pixel_round;

pub trait ScreenLength {
    /// Scales for the current device class, without pixel rounding.
    fn adjust_to_screen_size(self) -> f64;

    /// Snaps to the current display's pixel grid, without scaling.
    fn pixel_round(self) -> f64;

    /// Scales, then snaps. The value every layout constant goes through.
    fn normalized(self) -> f64;
}

impl ScreenLength for f64 {
    fn adjust_to_screen_size(self) -> f64 {
        global().adjust_to_screen_size(self)
    }

    fn pixel_round(self) -> f64 {
        pixel_round(self, global().current_pixel_scale())
    }

    fn normalized(self) -> f64 {
        global().normalize(self)
    }
}

macro_rules! impl_screen_length_via_f64 {
    ($($t:ty),*) => {
        $(
            impl ScreenLength for $t {
                fn adjust_to_screen_size(self) -> f64 {
                    f64::from(self).adjust_to_screen_size()
                }

                fn pixel_round(self) -> f64 {
                    f64::from(self).pixel_round()
                }

                fn normalized(self) -> f64 {
                    f64::from(self).normalized()
                }
            }
        )*
    };
}

impl_screen_length_via_f64!(f32, i32, u32);
