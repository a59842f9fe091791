// Host-side tests for the orientation model and easing helpers.

use gallery_core::{ease_out_cubic, lerp, Orientation};

#[test]
fn ease_out_hits_both_endpoints_exactly() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
}

#[test]
fn ease_out_clamps_progress() {
    assert_eq!(ease_out_cubic(-0.5), 0.0);
    assert_eq!(ease_out_cubic(3.0), 1.0);
}

#[test]
fn ease_out_is_monotonic_and_front_loaded() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let p = i as f32 / 100.0;
        let e = ease_out_cubic(p);
        assert!(e >= prev, "ease dropped at p={}", p);
        // ease-out runs ahead of linear progress
        assert!(e >= p);
        prev = e;
    }
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
}

#[test]
fn lerp_lands_on_endpoints() {
    // 0.1 + (0.7 - 0.1) * 1.0 is not exactly 0.7 in floating point
    assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
    assert_eq!(lerp(0.1, 0.7, 0.0), 0.1);
    assert!((lerp(10.0, 20.0, 0.25) - 12.5).abs() < 1e-6);
}

#[test]
fn orientation_interpolates_per_axis() {
    let start = Orientation::new(0.0, 0.0);
    let target = start.offset(90.0, -30.0);
    assert_eq!(target, Orientation::new(-30.0, 90.0));

    let mid = start.lerp(&target, 0.5);
    assert!((mid.yaw - 45.0).abs() < 1e-6);
    assert!((mid.pitch + 15.0).abs() < 1e-6);
    assert_eq!(start.lerp(&target, 1.0), target);
}

#[test]
fn css_transform_formats_degrees() {
    assert_eq!(
        Orientation::default().css_transform(),
        "rotateX(-25deg) rotateY(45deg)"
    );
    assert_eq!(
        Orientation::new(12.5, -370.25).css_transform(),
        "rotateX(12.5deg) rotateY(-370.25deg)"
    );
}
