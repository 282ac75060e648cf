//! End-to-end tests for the process-wide adapter.
//!
//! The global adapter can be installed once per process, so everything that
//! goes through it lives in a single test and mutates one shared display.

use once_cell::sync::Lazy;
use screen_geometry::display::MockDisplay;
use screen_geometry::geometry::{global, install};
use screen_geometry::{
    normalize, DeviceWidthClass, GeometryError, Insets, ScreenLength, Size, StaticDisplay,
};

static DISPLAY: Lazy<MockDisplay> = Lazy::new(|| MockDisplay::new(320.0, 667.0, 2.0));

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test_log::test]
fn process_wide_adapter_scales_rounds_and_memoizes() {
    install(&*DISPLAY).expect("first install succeeds");
    assert_eq!(
        install(StaticDisplay::default()),
        Err(GeometryError::AlreadyInstalled)
    );

    // Small phone at scale 2.
    assert_eq!(global().classify_device(), DeviceWidthClass::SmallPhone);
    assert_close(normalize(19.0), 14.5);
    assert_close(19i32.normalized(), 14.5);
    assert_close(19u32.normalized(), 14.5);
    assert_close(19.0f32.normalized(), 14.5);
    assert_close(19.0f64.adjust_to_screen_size(), 19.0 * 0.7729468599);
    assert_close(4.3f64.pixel_round(), 4.5);
    assert_eq!(normalize(f64::INFINITY), f64::INFINITY);

    let size = Size::square(19.0).normalized();
    assert_close(size.width, 14.5);
    assert_close(size.height, 14.5);

    let insets = Insets::new(19.0, f64::INFINITY, f64::INFINITY, 19.0).normalized();
    assert_close(insets.top, 14.5);
    assert_eq!(insets.left, f64::INFINITY);

    // A new pixel density is picked up; a new screen size is not.
    DISPLAY.set_pixel_scale(3.0);
    DISPLAY.set_screen_size(414.0, 736.0);
    assert_eq!(global().classify_device(), DeviceWidthClass::SmallPhone);
    // 19 * 0.7729... = 14.686, fraction in [1/2, 5/6)
    assert_close(normalize(19.0), 14.67);
    assert_eq!(DISPLAY.size_queries(), 1);
}
