//! Redraw coalescing.
//!
//! Input arrives faster than the display refreshes. Drag deltas and zoom
//! steps are composed here into one screen-space transform and applied to the
//! camera once per animation frame, and any number of input events between
//! two frames collapse into a single frame request.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::camera::{Camera, Point};

/// Screen-space map `p -> factor * p + (dx, dy)` accumulated since the last frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransform {
    pub factor: f64,
    pub dx: f64,
    pub dy: f64,
    /// Camera scale once applied. `None` while no zoom is queued.
    pub scale: Option<f64>,
}

impl Default for PendingTransform {
    fn default() -> Self {
        Self { factor: 1.0, dx: 0.0, dy: 0.0, scale: None }
    }
}

impl PendingTransform {
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.scale.is_none() && self.dx == 0.0 && self.dy == 0.0
    }

    fn then_pan(&mut self, dx: f64, dy: f64) {
        self.dx += dx;
        self.dy += dy;
    }

    fn then_zoom(&mut self, anchor: Point, factor: f64, scale: f64) {
        self.factor *= factor;
        self.dx = anchor.x + factor * (self.dx - anchor.x);
        self.dy = anchor.y + factor * (self.dy - anchor.y);
        self.scale = Some(scale);
    }
}

/// Pending work for the next animation frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameScheduler {
    pending: PendingTransform,
    dirty: bool,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the view dirty. Returns `true` only on the clean-to-dirty
    /// transition, i.e. when the host must request an animation frame.
    pub fn invalidate(&mut self) -> bool {
        let was_clean = !self.dirty;
        self.dirty = true;
        was_clean
    }

    /// Queue a drag delta for the next frame.
    pub fn queue_pan(&mut self, dx: f64, dy: f64) -> bool {
        self.pending.then_pan(dx, dy);
        self.invalidate()
    }

    /// Queue a zoom by `factor` about `anchor`, relative to the scale the
    /// camera will have once everything already queued is applied.
    ///
    /// Returns `true` when a frame must be requested. A step that clamps to
    /// the pending scale queues nothing.
    pub fn queue_zoom(&mut self, camera: &Camera, anchor: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        self.queue_zoom_to(camera, anchor, self.pending_scale(camera) * factor)
    }

    /// Queue a zoom to absolute scale `target` (clamped) about `anchor`.
    pub fn queue_zoom_to(&mut self, camera: &Camera, anchor: Point, target: f64) -> bool {
        if !target.is_finite() {
            return false;
        }
        let from = self.pending_scale(camera);
        let to = camera.limits.clamp(target);
        if to <= 0.0 || from <= 0.0 || (to - from).abs() <= f64::EPSILON * from {
            return false;
        }
        self.pending.then_zoom(anchor, to / from, to);
        self.invalidate()
    }

    /// Scale the camera will have after the queued transform.
    #[must_use]
    pub fn pending_scale(&self, camera: &Camera) -> f64 {
        self.pending.scale.unwrap_or(camera.scale)
    }

    /// Apply the queued transform to `camera` now.
    pub fn flush(&mut self, camera: &mut Camera) {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_identity() {
            return;
        }
        camera.map_screen(pending.factor, pending.dx, pending.dy);
        if let Some(scale) = pending.scale {
            camera.scale = camera.limits.clamp(scale);
        }
    }

    /// Consume the frame: flush the queued transform, clear the dirty flag.
    ///
    /// Returns whether a redraw is needed.
    pub fn take_frame(&mut self, camera: &mut Camera) -> bool {
        self.flush(camera);
        std::mem::take(&mut self.dirty)
    }

    /// Drop the queued transform without applying it.
    pub fn discard_pending(&mut self) {
        self.pending = PendingTransform::default();
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Queued transform not yet applied.
    #[must_use]
    pub fn pending(&self) -> PendingTransform {
        self.pending
    }
}
