//! Input model: pointer kinds, modifier keys, buttons, and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer/touch down and
//! up. It carries the context needed to turn raw positions into camera
//! deltas: the last drag position for panning, or the finger spread and
//! scale recorded at the start of a pinch.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::{HIT_RADIUS_MOUSE_PX, HIT_RADIUS_TOUCH_PX};

/// What produced a pointer event. Touch gets a larger hit radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

impl PointerKind {
    /// Default hit radius for this kind of pointer, in screen pixels.
    #[must_use]
    pub fn default_hit_radius(self) -> f64 {
        match self {
            Self::Mouse => HIT_RADIUS_MOUSE_PX,
            Self::Touch => HIT_RADIUS_TOUCH_PX,
        }
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the view with one pointer.
    Panning {
        /// Screen position at the previous move, used to compute the delta.
        last_screen: Point,
    },
    /// Two-finger pinch.
    Pinching {
        /// Finger spread when the gesture started, in screen pixels.
        start_distance: f64,
        /// Camera scale when the gesture started.
        start_scale: f64,
        /// Touch-pair centroid at the previous move.
        last_centroid: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Centroid and spread of a two-finger touch.
#[must_use]
pub fn pinch_geometry(a: Point, b: Point) -> (Point, f64) {
    (a.midpoint(b), a.distance(b))
}
