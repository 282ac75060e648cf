// src/layout.rs

//! Device lengths for the full-screen video screen.
//!
//! The screen centers a video frame, pins a "Go Full Screen" button near the
//! bottom edge, and floats a close button in the top-right corner. Only the
//! lengths live here; building views from them is up to the UI layer.

use serde::Serialize;

use crate::display::DisplayHost;
use crate::geometry::{Insets, ScreenGeometryAdapter, Size};

// --- Design-reference constants (414-point-wide screen) ---

const VIDEO_SIZE: Size = Size {
    width: 415.0,
    height: 234.0,
};
const FULL_SCREEN_BUTTON_SIZE: Size = Size {
    width: 150.0,
    height: 35.0,
};
const FULL_SCREEN_BUTTON_CORNER_RADIUS: f64 = 4.0;
const FULL_SCREEN_BUTTON_FONT_SIZE: f64 = 12.0;
const FULL_SCREEN_BUTTON_BOTTOM_SPACING: f64 = 62.0;
const CLOSE_BUTTON_TOP_INSET: f64 = 43.0;
const CLOSE_BUTTON_RIGHT_INSET: f64 = 19.0;
const CLOSE_BUTTON_HIT_OUTSET: f64 = 25.0;

/// Normalized lengths of the full-screen video screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VideoScreenMetrics {
    /// Preferred size of the video frame.
    pub video_size: Size,
    pub full_screen_button_size: Size,
    pub full_screen_button_corner_radius: f64,
    pub full_screen_button_font_size: f64,
    /// Gap between the full-screen button and the bottom of the screen.
    pub full_screen_button_bottom_spacing: f64,
    /// Pins the close button to the top-right corner; left and bottom are
    /// infinite so the button keeps its minimum size.
    pub close_button_insets: Insets,
    /// Negative on every edge: enlarges the close button's tap area.
    pub close_button_hit_slop: Insets,
}

impl VideoScreenMetrics {
    pub fn compute<H: DisplayHost>(adapter: &ScreenGeometryAdapter<H>) -> Self {
        let hit_outset = adapter.normalize(CLOSE_BUTTON_HIT_OUTSET);
        VideoScreenMetrics {
            video_size: adapter.normalize_size(VIDEO_SIZE),
            full_screen_button_size: adapter.normalize_size(FULL_SCREEN_BUTTON_SIZE),
            full_screen_button_corner_radius: adapter.normalize(FULL_SCREEN_BUTTON_CORNER_RADIUS),
            full_screen_button_font_size: adapter.normalize(FULL_SCREEN_BUTTON_FONT_SIZE),
            full_screen_button_bottom_spacing: adapter
                .normalize(FULL_SCREEN_BUTTON_BOTTOM_SPACING),
            close_button_insets: adapter.normalize_insets(Insets::new(
                CLOSE_BUTTON_TOP_INSET,
                f64::INFINITY,
                f64::INFINITY,
                CLOSE_BUTTON_RIGHT_INSET,
            )),
            close_button_hit_slop: Insets::uniform(-hit_outset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::StaticDisplay;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn reference_device_keeps_design_lengths() {
        let adapter = ScreenGeometryAdapter::new(StaticDisplay::new(414.0, 736.0, 3.0));
        let metrics = VideoScreenMetrics::compute(&adapter);

        assert_eq!(metrics.video_size, Size::new(415.0, 234.0));
        assert_eq!(metrics.full_screen_button_size, Size::new(150.0, 35.0));
        assert_eq!(metrics.full_screen_button_corner_radius, 4.0);
        assert_eq!(metrics.full_screen_button_font_size, 12.0);
        assert_eq!(metrics.full_screen_button_bottom_spacing, 62.0);
        assert_eq!(
            metrics.close_button_insets,
            Insets::new(43.0, f64::INFINITY, f64::INFINITY, 19.0)
        );
        assert_eq!(metrics.close_button_hit_slop, Insets::uniform(-25.0));
    }

    #[test]
    fn small_phone_shrinks_and_keeps_infinite_insets() {
        let adapter = ScreenGeometryAdapter::new(StaticDisplay::new(320.0, 568.0, 2.0));
        let metrics = VideoScreenMetrics::compute(&adapter);

        // 415 * 0.7729... = 320.77 -> 321.0; 234 * 0.7729... = 180.87 -> 181.0
        assert_close(metrics.video_size.width, 321.0);
        assert_close(metrics.video_size.height, 181.0);
        // 62 * 0.7729... = 47.92 -> 48.0
        assert_close(metrics.full_screen_button_bottom_spacing, 48.0);
        // 19 * 0.7729... = 14.69 -> 14.5
        assert_close(metrics.close_button_insets.right, 14.5);
        assert_eq!(metrics.close_button_insets.left, f64::INFINITY);
        assert_eq!(metrics.close_button_insets.bottom, f64::INFINITY);
        // 25 * 0.7729... = 19.32 -> 19.5
        assert_close(metrics.close_button_hit_slop.top, -19.5);
    }
}
