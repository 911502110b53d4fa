//! Shared numeric constants for the canvas crate.

// ── Projection ──────────────────────────────────────────────────

/// Vertical field of view in degrees; the viewport height spans this much Dec.
pub const VERTICAL_FOV_DEG: f64 = 180.0;

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed camera scale.
pub const SCALE_MIN: f64 = 0.5;

/// Largest allowed camera scale.
pub const SCALE_MAX: f64 = 20.0;

/// Scale multiplier per wheel notch.
pub const WHEEL_ZOOM_FACTOR: f64 = 1.1;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hover radius for mouse pointers, in screen pixels.
pub const HIT_RADIUS_MOUSE_PX: f64 = 5.0;

/// Tap radius for touch input, in screen pixels.
pub const HIT_RADIUS_TOUCH_PX: f64 = 10.0;

// ── Markers ─────────────────────────────────────────────────────

/// Marker radius for stars without a known magnitude, in screen pixels.
pub const STAR_MARKER_RADIUS_PX: f64 = 2.0;

/// Floor on the magnitude-derived marker radius, in screen pixels.
pub const STAR_MARKER_MIN_RADIUS_PX: f64 = 0.5;
