//! End-to-end tests for window size classification.

use huekit::models::{
    transform_fraction, ScreenOrientation, WindowFormFactor, WindowSize, WindowState,
    MAX_COMPACT_WIDTH, MAX_HORIZONTAL_PADDING, MAX_MEDIUM_WIDTH, MIN_HORIZONTAL_PADDING,
};

#[test]
fn test_breakpoint_edges() {
    assert_eq!(WindowSize::classify(0.0), WindowSize::Compact);
    assert_eq!(WindowSize::classify(MAX_COMPACT_WIDTH - 0.5), WindowSize::Compact);
    assert_eq!(WindowSize::classify(MAX_COMPACT_WIDTH), WindowSize::Medium);
    assert_eq!(WindowSize::classify(MAX_MEDIUM_WIDTH - 0.5), WindowSize::Medium);
    assert_eq!(WindowSize::classify(MAX_MEDIUM_WIDTH), WindowSize::Large);
    assert_eq!(WindowSize::classify(4000.0), WindowSize::Large);
}

#[test]
fn test_orientation_follows_aspect() {
    assert!(WindowState::new(400.0, 800.0)
        .screen_orientation()
        .is_portrait());
    assert_eq!(
        WindowState::new(800.0, 400.0).screen_orientation(),
        ScreenOrientation::Landscape
    );
    assert!(WindowState::new(600.0, 600.0)
        .screen_orientation()
        .is_portrait());
}

#[test]
fn test_form_factor_table() {
    let cases = [
        ((360.0, 780.0), WindowFormFactor::PhoneInPortrait),
        ((780.0, 360.0), WindowFormFactor::PhoneInLandscape),
        ((700.0, 850.0), WindowFormFactor::FoldableTabletPortrait),
        ((850.0, 700.0), WindowFormFactor::FoldableTabletLandscape),
        ((1000.0, 700.0), WindowFormFactor::FoldableTabletLandscape),
        ((950.0, 1400.0), WindowFormFactor::DesktopPortrait),
        ((1920.0, 1080.0), WindowFormFactor::DesktopLandscape),
    ];

    for ((width, height), expected) in cases {
        let window = WindowState::new(width, height);
        assert_eq!(
            window.form_factor(),
            expected,
            "form factor for {width}x{height}"
        );
    }
}

#[test]
fn test_classes_cached_on_construction() {
    let window = WindowState::new(700.0, 1000.0);
    assert_eq!(window.available_width_size, WindowSize::Medium);
    assert_eq!(window.available_height_size, WindowSize::Large);
    assert!(window.is_medium_width());
    assert!(window.is_large_height());
    assert!(!window.is_compact_width());
}

#[test]
fn test_horizontal_padding_is_monotone_and_clamped() {
    let mut previous = f32::MIN;
    for width in (200..2400).step_by(40) {
        let padding = WindowState::new(width as f32, 800.0).horizontal_padding();
        assert!(padding >= MIN_HORIZONTAL_PADDING);
        assert!(padding <= MAX_HORIZONTAL_PADDING);
        assert!(padding >= previous, "padding shrank at width {width}");
        previous = padding;
    }

    // Extremes pin to the clamp bounds.
    assert!(
        (WindowState::new(100.0, 800.0).horizontal_padding() - MIN_HORIZONTAL_PADDING).abs()
            < f32::EPSILON
    );
    assert!(
        (WindowState::new(3000.0, 800.0).horizontal_padding() - MAX_HORIZONTAL_PADDING).abs()
            < f32::EPSILON
    );
}

#[test]
fn test_transform_fraction_remaps_linearly() {
    assert!((transform_fraction(0.5, 0.0, 1.0, 0.0, 100.0) - 50.0).abs() < 1e-4);
    assert!((transform_fraction(480.0, 480.0, 1280.0, 16.0, 48.0) - 16.0).abs() < 1e-4);
    assert!((transform_fraction(1280.0, 480.0, 1280.0, 16.0, 48.0) - 48.0).abs() < 1e-4);
    assert!((transform_fraction(880.0, 480.0, 1280.0, 16.0, 48.0) - 32.0).abs() < 1e-4);
}
