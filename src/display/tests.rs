// src/display/tests.rs

use super::{DisplayHost, MockDisplay, ScreenSize, StaticDisplay};
use crate::config::DisplayConfig;
use crate::error::GeometryError;

#[test]
fn it_should_report_fixed_metrics_from_a_static_display() {
    let display = StaticDisplay::new(375.0, 667.0, 2.0);
    assert_eq!(display.screen_size(), ScreenSize::new(375.0, 667.0));
    assert_eq!(display.current_pixel_scale(), 2.0);
}

#[test]
fn it_should_default_to_the_reference_device() {
    let display = StaticDisplay::default();
    assert_eq!(display.screen_size(), ScreenSize::new(414.0, 736.0));
    assert_eq!(display.current_pixel_scale(), 3.0);
}

#[test]
fn it_should_reject_invalid_config_metrics() {
    let config = DisplayConfig {
        width_pt: f64::INFINITY,
        ..DisplayConfig::default()
    };
    assert_eq!(
        StaticDisplay::from_config(&config),
        Err(GeometryError::InvalidDisplayMetric {
            field: "width_pt",
            value: f64::INFINITY
        })
    );
}

#[test]
fn it_should_follow_pixel_scale_changes_on_the_mock() {
    let display = MockDisplay::new(320.0, 568.0, 1.0);
    assert_eq!(display.current_pixel_scale(), 1.0);
    display.set_pixel_scale(3.0);
    assert_eq!(display.current_pixel_scale(), 3.0);
}

#[test]
fn it_should_count_size_queries_on_the_mock() {
    let display = MockDisplay::new(320.0, 568.0, 2.0);
    assert_eq!(display.size_queries(), 0);
    display.screen_size();
    display.set_screen_size(414.0, 896.0);
    assert_eq!(display.screen_size(), ScreenSize::new(414.0, 896.0));
    assert_eq!(display.size_queries(), 2);
}

#[test]
fn it_should_forward_through_boxed_hosts() {
    let boxed: Box<dyn DisplayHost> = Box::new(StaticDisplay::new(320.0, 480.0, 1.0));
    assert_eq!(boxed.screen_size(), ScreenSize::new(320.0, 480.0));
    assert_eq!(boxed.current_pixel_scale(), 1.0);
}
