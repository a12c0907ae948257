//! Regression test for the blackish-pixel counting reduction
//!
//! Pins the counting contract: strict thresholds, exclusive upper bounds,
//! silent zero on degenerate regions, and sequential/parallel agreement.

use surfcheck_core::Rect;
use surfcheck_test::{RegParams, fixtures};

#[test]
fn test_count_reg() {
    let mut rp = RegParams::new("count");

    // 4x4 capture, dark 2x2 interior block: the canonical overlay scenario.
    // Only the 4 interior pixels fall below threshold 100.
    let s = fixtures::with_inner_block(
        4,
        4,
        (200, 200, 200, 255),
        (50, 50, 50, 255),
        &Rect::new(1, 1, 3, 3),
    );
    rp.compare_counts(4, s.count_blackish(100, &Rect::new(1, 1, 3, 3)));
    rp.compare_counts(4, s.count_blackish(100, &Rect::of_surface(&s)));
    rp.compare_counts(4, s.count_blackish_parallel(100, &Rect::new(1, 1, 3, 3)));

    // Threshold 0 matches nothing: no channel is strictly below 0
    let black = fixtures::uniform(6, 5, (0, 0, 0, 255));
    rp.compare_counts(0, black.count_blackish(0, &Rect::of_surface(&black)));

    // Threshold 255 over an all-black capture counts every pixel
    rp.compare_counts(30, black.count_blackish(255, &Rect::of_surface(&black)));
    rp.compare_counts(30, black.count_blackish_parallel(255, &Rect::of_surface(&black)));

    // Degenerate bounds count zero, silently
    rp.compare_counts(0, black.count_blackish(255, &Rect::new(2, 0, 2, 5)));
    rp.compare_counts(0, black.count_blackish(255, &Rect::new(0, 3, 6, 3)));

    // Inverted bounds behave the same as empty ones
    rp.compare_counts(0, black.count_blackish(255, &Rect::new(5, 4, 1, 1)));

    // Bounds past the surface clip; out-of-range coordinates never match
    rp.compare_counts(30, black.count_blackish(255, &Rect::new(-10, -10, 100, 100)));
    rp.compare_counts(0, black.count_blackish(255, &Rect::new(6, 0, 20, 5)));

    assert!(rp.cleanup());
}

#[test]
fn test_threshold_is_strict() {
    // Channels exactly at the threshold do not count
    let s = fixtures::uniform(3, 3, (100, 100, 100, 255));
    assert_eq!(s.count_blackish(100, &Rect::of_surface(&s)), 0);
    assert_eq!(s.count_blackish(101, &Rect::of_surface(&s)), 9);
}

#[test]
fn test_all_channels_must_match() {
    // One channel at or above the threshold disqualifies the pixel
    let mut s = fixtures::uniform(2, 2, (10, 10, 10, 255));
    s.set_rgba(1, 1, 10, 99, 10, 255).unwrap();
    assert_eq!(s.count_blackish(99, &Rect::of_surface(&s)), 3);
}

#[test]
fn test_alpha_is_ignored() {
    let opaque = fixtures::uniform(4, 4, (5, 5, 5, 255));
    let transparent = fixtures::uniform(4, 4, (5, 5, 5, 0));
    let full = Rect::new(0, 0, 4, 4);
    assert_eq!(opaque.count_blackish(10, &full), 16);
    assert_eq!(transparent.count_blackish(10, &full), 16);
}

#[test]
fn test_count_is_pure() {
    // Same inputs, same result, and the surface is untouched
    let s = fixtures::random_surface(16, 16, 7);
    let before = s.as_raw().to_vec();
    let bounds = Rect::new(2, 3, 14, 13);
    let first = s.count_blackish(128, &bounds);
    let second = s.count_blackish(128, &bounds);
    assert_eq!(first, second);
    assert_eq!(s.as_raw(), &before[..]);
}

#[test]
fn test_single_pixel_region() {
    let mut s = fixtures::uniform(5, 5, (200, 200, 200, 255));
    s.set_rgba(3, 2, 1, 2, 3, 255).unwrap();
    assert_eq!(s.count_blackish(100, &Rect::new(3, 2, 4, 3)), 1);
    assert_eq!(s.count_blackish(100, &Rect::new(2, 3, 3, 4)), 0);
}
