use super::*;

// =============================================================
// PointerKind
// =============================================================

#[test]
fn pointer_kind_default_is_mouse() {
    assert_eq!(PointerKind::default(), PointerKind::Mouse);
}

#[test]
fn touch_radius_exceeds_mouse_radius() {
    assert!(PointerKind::Touch.default_hit_radius() > PointerKind::Mouse.default_hit_radius());
}

#[test]
fn pointer_kind_radii_match_consts() {
    assert!((PointerKind::Mouse.default_hit_radius() - HIT_RADIUS_MOUSE_PX).abs() < f64::EPSILON);
    assert!((PointerKind::Touch.default_hit_radius() - HIT_RADIUS_TOUCH_PX).abs() < f64::EPSILON);
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn modifiers_individual_flags() {
    let m = Modifiers { shift: true, ctrl: false, alt: true, meta: false };
    assert!(m.shift);
    assert!(!m.ctrl);
    assert!(m.alt);
    assert!(!m.meta);
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_equality() {
    assert_eq!(Button::Primary, Button::Primary);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}

#[test]
fn button_debug_format() {
    assert_eq!(format!("{:?}", Button::Primary), "Primary");
}

// =============================================================
// WheelDelta
// =============================================================

#[test]
fn wheel_delta_fields() {
    let d = WheelDelta { dx: 1.5, dy: -3.0 };
    assert!((d.dx - 1.5).abs() < f64::EPSILON);
    assert!((d.dy + 3.0).abs() < f64::EPSILON);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
}

#[test]
fn panning_is_not_idle() {
    let s = InputState::Panning { last_screen: Point::new(1.0, 2.0) };
    assert!(!s.is_idle());
}

#[test]
fn pinching_carries_gesture_start() {
    let s = InputState::Pinching { start_distance: 80.0, start_scale: 2.0, last_centroid: Point::new(5.0, 5.0) };
    match s {
        InputState::Pinching { start_distance, start_scale, .. } => {
            assert!((start_distance - 80.0).abs() < f64::EPSILON);
            assert!((start_scale - 2.0).abs() < f64::EPSILON);
        }
        other => panic!("expected Pinching, got {other:?}"),
    }
}

// =============================================================
// pinch_geometry
// =============================================================

#[test]
fn pinch_geometry_centroid_and_spread() {
    let (centroid, spread) = pinch_geometry(Point::new(0.0, 0.0), Point::new(6.0, 8.0));
    assert!((centroid.x - 3.0).abs() < f64::EPSILON);
    assert!((centroid.y - 4.0).abs() < f64::EPSILON);
    assert!((spread - 10.0).abs() < f64::EPSILON);
}

#[test]
fn pinch_geometry_is_symmetric() {
    let a = Point::new(12.0, -4.0);
    let b = Point::new(-3.0, 9.0);
    let (c1, d1) = pinch_geometry(a, b);
    let (c2, d2) = pinch_geometry(b, a);
    assert_eq!(c1, c2);
    assert!((d1 - d2).abs() < f64::EPSILON);
}
