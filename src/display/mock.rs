// src/display/mock.rs

use crate::display::host::{DisplayHost, ScreenSize};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Test double for [`DisplayHost`].
///
/// Size and pixel scale can be changed after construction, and every
/// `screen_size()` query is counted.
pub struct MockDisplay {
    size: Mutex<ScreenSize>,
    // f64 bits, so the scale can change through a shared reference.
    pixel_scale_bits: AtomicU64,
    size_queries: AtomicUsize,
}

impl MockDisplay {
    pub fn new(width: f64, height: f64, pixel_scale: f64) -> Self {
        Self {
            size: Mutex::new(ScreenSize::new(width, height)),
            pixel_scale_bits: AtomicU64::new(pixel_scale.to_bits()),
            size_queries: AtomicUsize::new(0),
        }
    }

    pub fn set_screen_size(&self, width: f64, height: f64) {
        *self.size.lock().unwrap_or_else(|e| e.into_inner()) = ScreenSize::new(width, height);
    }

    pub fn set_pixel_scale(&self, pixel_scale: f64) {
        self.pixel_scale_bits
            .store(pixel_scale.to_bits(), Ordering::SeqCst);
    }

    /// Number of times `screen_size()` has been called.
    pub fn size_queries(&self) -> usize {
        self.size_queries.load(Ordering::SeqCst)
    }
}

impl DisplayHost for MockDisplay {
    fn screen_size(&self) -> ScreenSize {
        self.size_queries.fetch_add(1, Ordering::SeqCst);
        *self.size.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn current_pixel_scale(&self) -> f64 {
        f64::from_bits(self.pixel_scale_bits.load(Ordering::SeqCst))
    }
}
