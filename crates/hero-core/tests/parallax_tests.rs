// Host-side tests for the parallax math.

use hero_core::{scroll_progress, translate_y_vh, ParallaxTranslator};

const EPS: f64 = 1e-9;

#[test]
fn progress_follows_example_sequence() {
    let h = 500.0;
    let got: Vec<f64> = [0.0, 100.0, 250.0, 500.0, 900.0]
        .iter()
        .map(|s| scroll_progress(*s, h))
        .collect();
    let want = [0.0, 0.2, 0.5, 1.0, 1.0];
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() < EPS, "got {g}, want {w}");
    }
}

#[test]
fn offsets_scale_progress_by_k() {
    let k = 10.0;
    let t = ParallaxTranslator::new(k);
    let offsets: Vec<f64> = [0.0, 100.0, 250.0, 500.0, 900.0]
        .iter()
        .map(|s| t.offset_vh(*s, Some(500.0)))
        .collect();
    let want = [0.0, 0.2 * k, 0.5 * k, k, k];
    for (g, w) in offsets.iter().zip(want) {
        assert!((g - w).abs() < EPS, "got {g}, want {w}");
    }
}

#[test]
fn progress_is_clamped_and_monotonic() {
    let h = 731.0;
    let mut prev = 0.0;
    for step in 0..400 {
        let s = step as f64 * 3.7;
        let p = scroll_progress(s, h);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev, "progress fell at s={s}");
        prev = p;
    }
}

#[test]
fn zero_or_unmeasured_container_gives_zero() {
    assert_eq!(scroll_progress(120.0, 0.0), 0.0);
    assert_eq!(scroll_progress(120.0, -4.0), 0.0);
    assert_eq!(scroll_progress(120.0, f64::NAN), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 500.0), 0.0);
    let t = ParallaxTranslator::new(10.0);
    assert_eq!(t.offset_vh(300.0, None), 0.0);
    assert_eq!(t.offset_vh(300.0, Some(0.0)), 0.0);
}

#[test]
fn infinite_readings_clamp_to_the_ends() {
    assert_eq!(scroll_progress(f64::INFINITY, 500.0), 1.0);
    assert_eq!(scroll_progress(f64::NEG_INFINITY, 500.0), 0.0);
    let t = ParallaxTranslator::new(10.0);
    assert_eq!(t.offset_vh(f64::INFINITY, Some(500.0)), 10.0);
}

#[test]
fn offset_bounds() {
    let t = ParallaxTranslator::new(10.0);
    assert_eq!(t.offset_vh(0.0, Some(500.0)), 0.0);
    assert_eq!(t.offset_vh(500.0, Some(500.0)), 10.0);
    assert_eq!(t.offset_vh(50_000.0, Some(500.0)), 10.0);
    assert_eq!(t.offset_vh(-30.0, Some(500.0)), 0.0);
}

#[test]
fn translator_rejects_negative_or_nan_k() {
    assert_eq!(ParallaxTranslator::new(-5.0).max_offset_vh(), 0.0);
    assert_eq!(ParallaxTranslator::new(f64::NAN).max_offset_vh(), 0.0);
}

#[test]
fn css_transform_format() {
    assert_eq!(translate_y_vh(0.0), "translateY(0vh)");
    assert_eq!(translate_y_vh(2.5), "translateY(2.5vh)");
    assert_eq!(translate_y_vh(10.0), "translateY(10vh)");
}
