#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{SCALE_MAX, SCALE_MIN};

/// A point in either screen space or base (unit-scale) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point { x: (self.x + other.x) * 0.5, y: (self.y + other.y) * 0.5 }
    }
}

/// Inclusive bounds on the camera scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: SCALE_MIN, max: SCALE_MAX }
    }
}

impl ScaleLimits {
    /// Both bounds finite, `min` positive, `min <= max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min > 0.0 && self.min <= self.max && self.max.is_finite()
    }

    /// Clamp `scale` into the bounds. Never panics, even on inverted bounds.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

/// Viewport transform layered over the sky projection.
///
/// Base points have their origin at the viewport center and are measured in
/// CSS pixels at unit scale. `offset_x` / `offset_y` are in CSS pixels.
/// `scale` always stays within `limits`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
    pub limits: ScaleLimits,
}

impl Default for Camera {
    fn default() -> Self {
        Self { scale: 1.0, offset_x: 0.0, offset_y: 0.0, width: 0.0, height: 0.0, limits: ScaleLimits::default() }
    }
}

impl Camera {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Replace the scale limits and clamp the current scale into them.
    /// Invalid limits (see [`ScaleLimits::is_valid`]) are ignored.
    #[must_use]
    pub fn with_limits(mut self, limits: ScaleLimits) -> Self {
        if !limits.is_valid() {
            return self;
        }
        self.limits = limits;
        self.scale = limits.clamp(self.scale);
        self
    }

    /// Convert a base point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn project(&self, base: Point) -> Point {
        Point {
            x: self.width * 0.5 + base.x * self.scale + self.offset_x,
            y: self.height * 0.5 + base.y * self.scale + self.offset_y,
        }
    }

    /// Convert a screen point back to base coordinates.
    #[must_use]
    pub fn unproject(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.width * 0.5 - self.offset_x) / self.scale,
            y: (screen.y - self.height * 0.5 - self.offset_y) / self.scale,
        }
    }

    /// Multiply the scale by `factor`, keeping the base point under `anchor` fixed.
    ///
    /// Returns whether the camera changed. A factor that clamps to the
    /// current scale is a no-op.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        self.zoom_to(anchor, self.scale * factor)
    }

    /// Set the scale to `target` (clamped), keeping the base point under `anchor` fixed.
    pub fn zoom_to(&mut self, anchor: Point, target: f64) -> bool {
        if !target.is_finite() {
            return false;
        }
        let new_scale = self.limits.clamp(target);
        if new_scale <= 0.0 || (new_scale - self.scale).abs() <= f64::EPSILON * self.scale {
            return false;
        }
        let base = self.unproject(anchor);
        self.scale = new_scale;
        self.offset_x = anchor.x - self.width * 0.5 - base.x * new_scale;
        self.offset_y = anchor.y - self.height * 0.5 - base.y * new_scale;
        true
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Follow the current transform with the screen-space map
    /// `p -> factor * p + (dx, dy)`.
    ///
    /// A zoom by `f` about anchor `a` is the map with `factor = f` and
    /// `(dx, dy) = a * (1 - f)`; a pan is `factor = 1`. The resulting scale
    /// is clamped.
    pub fn map_screen(&mut self, factor: f64, dx: f64, dy: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let scale = self.limits.clamp(self.scale * factor);
        if scale <= 0.0 {
            return;
        }
        self.scale = scale;
        self.offset_x = factor * self.offset_x + (factor - 1.0) * self.width * 0.5 + dx;
        self.offset_y = factor * self.offset_y + (factor - 1.0) * self.height * 0.5 + dy;
    }

    /// Unit scale, zero offset.
    pub fn reset(&mut self) {
        self.scale = self.limits.clamp(1.0);
        self.reset_offset();
    }

    /// Zero offset, scale untouched.
    pub fn reset_offset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Whether scale and offset are at their reset values.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.scale == self.limits.clamp(1.0) && self.offset_x == 0.0 && self.offset_y == 0.0
    }
}
