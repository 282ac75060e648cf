// src/display/host.rs
//! DisplayHost trait - the two queries the geometry adapter makes of the host.
//!
//! ## Query Frequency
//! - `screen_size()` is asked once per adapter; the device class derived from
//!   it is memoized for the adapter's lifetime.
//! - `current_pixel_scale()` is asked on every `normalize` call, so a host
//!   moving between displays of different density is followed.

use serde::{Deserialize, Serialize};

/// Logical screen size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Display queries the adapter needs from the host environment.
///
/// Implementations must be callable from any thread, since the process-wide
/// adapter is shared.
pub trait DisplayHost: Send + Sync {
    /// Logical size of the main screen, in points.
    fn screen_size(&self) -> ScreenSize;

    /// Physical pixels per logical point of the main screen.
    fn current_pixel_scale(&self) -> f64;
}

impl<T: DisplayHost + ?Sized> DisplayHost for Box<T> {
    fn screen_size(&self) -> ScreenSize {
        (**self).screen_size()
    }

    fn current_pixel_scale(&self) -> f64 {
        (**self).current_pixel_scale()
    }
}

impl<T: DisplayHost + ?Sized> DisplayHost for &T {
    fn screen_size(&self) -> ScreenSize {
        (**self).screen_size()
    }

    fn current_pixel_scale(&self) -> f64 {
        (**self).current_pixel_scale()
    }
}

impl<T: DisplayHost + ?Sized> DisplayHost for std::sync::Arc<T> {
    fn screen_size(&self) -> ScreenSize {
        (**self).screen_size()
    }

    fn current_pixel_scale(&self) -> f64 {
        (**self).current_pixel_scale()
    }
}
