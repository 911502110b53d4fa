#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn camera(scale: f64, offset_x: f64, offset_y: f64) -> Camera {
    Camera { scale, offset_x, offset_y, ..Camera::new(800.0, 600.0) }
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn point_midpoint() {
    let m = Point::new(0.0, 10.0).midpoint(Point::new(20.0, 30.0));
    assert!(point_approx_eq(m, Point::new(10.0, 20.0)));
}

// --- ScaleLimits ---

#[test]
fn limits_default_matches_consts() {
    let l = ScaleLimits::default();
    assert_eq!(l.min, SCALE_MIN);
    assert_eq!(l.max, SCALE_MAX);
}

#[test]
fn limits_clamp() {
    let l = ScaleLimits { min: 0.5, max: 20.0 };
    assert_eq!(l.clamp(0.1), 0.5);
    assert_eq!(l.clamp(30.0), 20.0);
    assert_eq!(l.clamp(3.0), 3.0);
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.scale, 1.0);
    assert_eq!(cam.offset_x, 0.0);
    assert_eq!(cam.offset_y, 0.0);
    assert!(cam.is_identity());
}

#[test]
fn camera_with_limits_clamps_scale() {
    let cam = Camera::new(100.0, 100.0).with_limits(ScaleLimits { min: 2.0, max: 4.0 });
    assert_eq!(cam.scale, 2.0);
}

#[test]
fn limits_validity() {
    assert!(ScaleLimits::default().is_valid());
    assert!(ScaleLimits { min: 3.0, max: 3.0 }.is_valid());
    assert!(!ScaleLimits { min: 5.0, max: 1.0 }.is_valid());
    assert!(!ScaleLimits { min: 0.0, max: 1.0 }.is_valid());
    assert!(!ScaleLimits { min: -1.0, max: 1.0 }.is_valid());
    assert!(!ScaleLimits { min: 0.5, max: f64::INFINITY }.is_valid());
    assert!(!ScaleLimits { min: f64::NAN, max: 1.0 }.is_valid());
}

#[test]
fn limits_clamp_with_inverted_bounds_does_not_panic() {
    let l = ScaleLimits { min: 5.0, max: 1.0 };
    assert_eq!(l.clamp(3.0), 1.0);
}

#[test]
fn camera_with_limits_ignores_invalid_limits() {
    let inverted = Camera::new(100.0, 100.0).with_limits(ScaleLimits { min: 5.0, max: 1.0 });
    assert_eq!(inverted.limits, ScaleLimits::default());
    assert_eq!(inverted.scale, 1.0);

    let zero = Camera::new(100.0, 100.0).with_limits(ScaleLimits { min: 0.0, max: 4.0 });
    assert_eq!(zero.limits, ScaleLimits::default());
}

#[test]
fn zoom_never_collapses_scale_to_zero() {
    // Limits written directly, bypassing with_limits.
    let mut cam = Camera { limits: ScaleLimits { min: 0.0, max: 4.0 }, ..camera(1.0, 0.0, 0.0) };
    assert!(!cam.zoom_to(Point::new(100.0, 100.0), 0.0));
    assert!(!cam.zoom_to(Point::new(100.0, 100.0), -3.0));
    assert_eq!(cam.scale, 1.0);
    assert!(cam.zoom_at(Point::new(100.0, 100.0), 2.0));
    assert_eq!(cam.scale, 2.0);
}

// --- project / unproject ---

#[test]
fn project_origin_is_viewport_center() {
    let cam = Camera::new(800.0, 600.0);
    assert!(point_approx_eq(cam.project(Point::new(0.0, 0.0)), Point::new(400.0, 300.0)));
}

#[test]
fn project_applies_scale_then_offset() {
    let cam = camera(2.0, 10.0, -5.0);
    let s = cam.project(Point::new(10.0, 20.0));
    // 400 + 10*2 + 10 = 430, 300 + 20*2 - 5 = 335
    assert!(point_approx_eq(s, Point::new(430.0, 335.0)));
}

#[test]
fn unproject_inverts_project() {
    let cam = camera(3.5, -42.0, 17.0);
    let base = Point::new(-12.5, 99.0);
    assert!(point_approx_eq(cam.unproject(cam.project(base)), base));
}

// --- zoom_at ---

#[test]
fn zoom_at_keeps_anchor_fixed() {
    let mut cam = camera(1.0, 0.0, 0.0);
    let anchor = Point::new(620.0, 110.0);
    let before = cam.unproject(anchor);

    assert!(cam.zoom_at(anchor, 2.5));

    assert!(approx_eq(cam.scale, 2.5));
    assert!(point_approx_eq(cam.project(before), anchor));
}

#[test]
fn zoom_at_keeps_anchor_fixed_with_existing_offset() {
    let mut cam = camera(4.0, 120.0, -80.0);
    let anchor = Point::new(37.0, 512.0);
    let before = cam.unproject(anchor);

    assert!(cam.zoom_at(anchor, 0.6));

    assert!(point_approx_eq(cam.project(before), anchor));
}

#[test]
fn zoom_at_anchor_invariant_across_factor_range() {
    for factor in [0.5, 0.75, 1.3, 2.0, 10.0, 20.0] {
        let mut cam = camera(1.0, 25.0, 40.0);
        let anchor = Point::new(100.0, 450.0);
        let before = cam.unproject(anchor);
        cam.zoom_at(anchor, factor);
        assert!(point_approx_eq(cam.project(before), anchor), "factor {factor}");
    }
}

#[test]
fn zoom_at_viewport_center_keeps_offset_zero() {
    let mut cam = camera(1.0, 0.0, 0.0);
    cam.zoom_at(Point::new(400.0, 300.0), 3.0);
    assert!(approx_eq(cam.offset_x, 0.0));
    assert!(approx_eq(cam.offset_y, 0.0));
}

#[test]
fn zoom_at_clamps_to_max() {
    let mut cam = camera(15.0, 0.0, 0.0);
    let anchor = Point::new(10.0, 10.0);
    let before = cam.unproject(anchor);
    assert!(cam.zoom_at(anchor, 10.0));
    assert_eq!(cam.scale, SCALE_MAX);
    assert!(point_approx_eq(cam.project(before), anchor));
}

#[test]
fn zoom_at_clamps_to_min() {
    let mut cam = camera(0.6, 0.0, 0.0);
    cam.zoom_at(Point::new(10.0, 10.0), 0.01);
    assert_eq!(cam.scale, SCALE_MIN);
}

#[test]
fn zoom_at_limit_is_noop() {
    let mut cam = camera(SCALE_MAX, 5.0, 6.0);
    assert!(!cam.zoom_at(Point::new(10.0, 10.0), 2.0));
    assert_eq!(cam.scale, SCALE_MAX);
    assert_eq!(cam.offset_x, 5.0);
    assert_eq!(cam.offset_y, 6.0);
}

#[test]
fn zoom_at_rejects_bad_factor() {
    let mut cam = camera(1.0, 0.0, 0.0);
    assert!(!cam.zoom_at(Point::new(0.0, 0.0), 0.0));
    assert!(!cam.zoom_at(Point::new(0.0, 0.0), -2.0));
    assert!(!cam.zoom_at(Point::new(0.0, 0.0), f64::NAN));
    assert!(!cam.zoom_at(Point::new(0.0, 0.0), f64::INFINITY));
    assert_eq!(cam.scale, 1.0);
}

#[test]
fn zoom_at_identical_inputs_give_identical_state() {
    let mut a = camera(1.0, 3.0, 4.0);
    let mut b = a.clone();
    a.zoom_at(Point::new(50.0, 60.0), 1.5);
    b.zoom_at(Point::new(50.0, 60.0), 1.5);
    assert_eq!(a.scale, b.scale);
    assert_eq!(a.offset_x, b.offset_x);
    assert_eq!(a.offset_y, b.offset_y);
}

// --- zoom_to ---

#[test]
fn zoom_to_sets_absolute_scale() {
    let mut cam = camera(2.0, 0.0, 0.0);
    let anchor = Point::new(200.0, 200.0);
    let before = cam.unproject(anchor);
    assert!(cam.zoom_to(anchor, 5.0));
    assert!(approx_eq(cam.scale, 5.0));
    assert!(point_approx_eq(cam.project(before), anchor));
}

#[test]
fn zoom_to_same_scale_is_noop() {
    let mut cam = camera(2.0, 1.0, 1.0);
    assert!(!cam.zoom_to(Point::new(0.0, 0.0), 2.0));
}

// --- pan_by ---

#[test]
fn pan_by_accumulates() {
    let mut cam = camera(1.0, 0.0, 0.0);
    cam.pan_by(5.0, -3.0);
    cam.pan_by(2.0, 10.0);
    assert_eq!(cam.offset_x, 7.0);
    assert_eq!(cam.offset_y, 7.0);
}

#[test]
fn pan_shifts_projection_by_screen_pixels() {
    let mut cam = camera(3.0, 0.0, 0.0);
    let base = Point::new(10.0, 10.0);
    let before = cam.project(base);
    cam.pan_by(12.0, -4.0);
    let after = cam.project(base);
    assert!(approx_eq(after.x - before.x, 12.0));
    assert!(approx_eq(after.y - before.y, -4.0));
}

// --- map_screen ---

#[test]
fn map_screen_with_unit_factor_is_pan() {
    let mut cam = camera(2.0, 5.0, 6.0);
    cam.map_screen(1.0, 7.0, -3.0);
    assert_eq!(cam.scale, 2.0);
    assert_eq!(cam.offset_x, 12.0);
    assert_eq!(cam.offset_y, 3.0);
}

#[test]
fn map_screen_about_anchor_matches_zoom_at() {
    let anchor = Point::new(130.0, 410.0);
    let f = 1.75;
    let mut mapped = camera(1.5, -20.0, 8.0);
    let mut zoomed = mapped.clone();
    mapped.map_screen(f, anchor.x * (1.0 - f), anchor.y * (1.0 - f));
    zoomed.zoom_at(anchor, f);
    assert!(approx_eq(mapped.scale, zoomed.scale));
    assert!(approx_eq(mapped.offset_x, zoomed.offset_x));
    assert!(approx_eq(mapped.offset_y, zoomed.offset_y));
}

#[test]
fn map_screen_rejects_bad_factor() {
    let mut cam = camera(2.0, 1.0, 1.0);
    cam.map_screen(0.0, 5.0, 5.0);
    cam.map_screen(f64::NAN, 5.0, 5.0);
    assert_eq!(cam.scale, 2.0);
    assert_eq!(cam.offset_x, 1.0);
}

// --- reset ---

#[test]
fn reset_restores_identity() {
    let mut cam = camera(7.0, 30.0, -20.0);
    cam.reset();
    assert!(cam.is_identity());
}

#[test]
fn reset_then_project_matches_unit_projection() {
    let mut cam = camera(7.0, 30.0, -20.0);
    cam.reset();
    let fresh = Camera::new(800.0, 600.0);
    let base = Point::new(-33.0, 21.0);
    assert!(point_approx_eq(cam.project(base), fresh.project(base)));
}

#[test]
fn reset_offset_keeps_scale() {
    let mut cam = camera(4.0, 30.0, -20.0);
    cam.reset_offset();
    assert_eq!(cam.scale, 4.0);
    assert_eq!(cam.offset_x, 0.0);
    assert_eq!(cam.offset_y, 0.0);
    assert!(!cam.is_identity());
}
