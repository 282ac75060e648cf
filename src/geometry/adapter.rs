// src/geometry/adapter.rs
//! ScreenGeometryAdapter - turns design-reference lengths into device lengths.
//!
//! ## Lifecycle
//! 1. `new(host)` - no host queries yet
//! 2. first `classify_device()` (or `normalize`) - asks the host for its
//!    screen size once and memoizes the device class
//! 3. every later call reuses the memoized class, even if the host screen
//!    changes; only the pixel scale is re-read per call
//!
//! A process-wide adapter backs the free [`normalize`] function and the
//! [`ScreenLength`](super::ScreenLength) extensions. It is created on first use
//! from `CONFIG.display` unless a host was installed beforehand.

use log::{debug, info, warn};
use once_cell::sync::OnceCell;

use crate::config::CONFIG;
use crate::display::{DisplayHost, StaticDisplay};
use crate::error::GeometryError;
use crate::geometry::device::{scale_for_device_class, DeviceWidthClass};
use crate::geometry::rounding::pixel_round;
use crate::geometry::{Insets, Size};

/// Host type of the process-wide adapter.
pub type SharedHost = Box<dyn DisplayHost>;

static GLOBAL: OnceCell<ScreenGeometryAdapter<SharedHost>> = OnceCell::new();

/// Scales and pixel-rounds lengths for the display described by `H`.
pub struct ScreenGeometryAdapter<H> {
    host: H,
    device_class: OnceCell<DeviceWidthClass>,
}

impl<H: DisplayHost> ScreenGeometryAdapter<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            device_class: OnceCell::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Device class of the host screen, computed on first call.
    ///
    /// Concurrent first calls are serialized; the host is queried exactly once.
    pub fn classify_device(&self) -> DeviceWidthClass {
        *self.device_class.get_or_init(|| {
            let size = self.host.screen_size();
            let class = DeviceWidthClass::classify(size);
            info!(
                "Screen {}x{} pt classified as {:?} (scale ratio {})",
                size.width,
                size.height,
                class,
                class.scale_ratio()
            );
            class
        })
    }

    /// Pixel scale of the host screen, read fresh on each call.
    pub fn current_pixel_scale(&self) -> f64 {
        self.host.current_pixel_scale()
    }

    /// Scales `length` for the device class without pixel rounding.
    pub fn adjust_to_screen_size(&self, length: f64) -> f64 {
        scale_for_device_class(length, self.classify_device())
    }

    /// Scales `length` for the device class, then snaps it to the pixel grid.
    ///
    /// Infinite and NaN lengths are returned unchanged, so `f64::INFINITY`
    /// keeps working as a "fill the remaining space" inset.
    pub fn normalize(&self, length: f64) -> f64 {
        if !length.is_finite() {
            return length;
        }
        pixel_round(self.adjust_to_screen_size(length), self.current_pixel_scale())
    }

    pub fn normalize_size(&self, size: Size) -> Size {
        Size::new(self.normalize(size.width), self.normalize(size.height))
    }

    pub fn normalize_insets(&self, insets: Insets) -> Insets {
        Insets {
            top: self.normalize(insets.top),
            left: self.normalize(insets.left),
            bottom: self.normalize(insets.bottom),
            right: self.normalize(insets.right),
        }
    }

    /// Forgets the memoized device class so the next call re-queries the host.
    #[cfg(any(test, feature = "test-hooks"))]
    pub fn reset_device_class(&mut self) {
        self.device_class.take();
    }
}

/// Installs `host` as the display of the process-wide adapter.
///
/// Must happen before the first [`normalize`] call; afterwards the adapter
/// already exists and `GeometryError::AlreadyInstalled` is returned.
pub fn install<H: DisplayHost + 'static>(host: H) -> Result<(), GeometryError> {
    let adapter = ScreenGeometryAdapter::new(Box::new(host) as SharedHost);
    GLOBAL
        .set(adapter)
        .map_err(|_| GeometryError::AlreadyInstalled)?;
    debug!("Installed display host for the process-wide geometry adapter");
    Ok(())
}

/// The process-wide adapter, created from `CONFIG.display` if nothing was
/// installed.
pub fn global() -> &'static ScreenGeometryAdapter<SharedHost> {
    GLOBAL.get_or_init(|| {
        let host = StaticDisplay::from_config(&CONFIG.display).unwrap_or_else(|e| {
            warn!("{}. Using the reference display instead.", e);
            StaticDisplay::default()
        });
        debug!("No display host installed, using {:?}", host);
        ScreenGeometryAdapter::new(Box::new(host) as SharedHost)
    })
}

/// Normalizes `length` with the process-wide adapter.
pub fn normalize(length: f64) -> f64 {
    global().normalize(length)
}
