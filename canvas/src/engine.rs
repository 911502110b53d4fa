use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, ScaleLimits};
use crate::center::{CenterError, ProjectionCenter, resolve_center};
use crate::consts::{HIT_RADIUS_MOUSE_PX, HIT_RADIUS_TOUCH_PX, SCALE_MAX, SCALE_MIN, WHEEL_ZOOM_FACTOR};
use crate::frame::FrameScheduler;
use crate::hit::{HitResult, hit_test};
use crate::input::{Button, InputState, Modifiers, PointerKind, WheelDelta, pinch_geometry};
use crate::projection::{ProjectedPoints, Projector};
use crate::render;
use crate::segments::{FigurePath, build_figure_path};
use crate::sky::{Catalog, FigureSet, LineFigure, Sky, StarId};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Pinches whose initial finger spread is below this are ignored.
const MIN_PINCH_DISTANCE_PX: f64 = 1.0;

/// What happens to the camera when a different figure is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResetPolicy {
    /// Unit scale and zero offset.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Zero offset, scale kept.
    #[serde(rename = "offset")]
    OffsetOnly,
    /// Camera untouched.
    #[serde(rename = "none")]
    None,
}

impl ResetPolicy {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(Self::All),
            "offset" => Some(Self::OffsetOnly),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::OffsetOnly => "offset",
            Self::None => "none",
        }
    }

    fn apply(self, camera: &mut Camera) {
        match self {
            Self::All => camera.reset(),
            Self::OffsetOnly => camera.reset_offset(),
            Self::None => {}
        }
    }
}

/// Tunables for a session. Deserializes from the service's `/api/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub reset_policy: ResetPolicy,
    pub scale_min: f64,
    pub scale_max: f64,
    pub hit_radius_mouse_px: f64,
    pub hit_radius_touch_px: f64,
    pub wheel_zoom_factor: f64,
    /// Figure selected right after load, when present in the figure set.
    pub default_figure: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reset_policy: ResetPolicy::default(),
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            hit_radius_mouse_px: HIT_RADIUS_MOUSE_PX,
            hit_radius_touch_px: HIT_RADIUS_TOUCH_PX,
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            default_figure: Some("Orion".to_owned()),
        }
    }
}

impl EngineConfig {
    /// Parse from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`EngineConfigError::Json`] for malformed input, otherwise whatever
    /// [`EngineConfig::validate`] rejects.
    pub fn from_json(raw: &str) -> Result<Self, EngineConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric tunables.
    ///
    /// # Errors
    ///
    /// Scale limits must be finite with `0 < scale_min <= scale_max`, hit
    /// radii finite and non-negative, the wheel factor finite and above 1.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if !self.scale_limits().is_valid() {
            return Err(EngineConfigError::ScaleLimits { min: self.scale_min, max: self.scale_max });
        }
        for radius in [self.hit_radius_mouse_px, self.hit_radius_touch_px] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(EngineConfigError::HitRadius(radius));
            }
        }
        if !self.wheel_zoom_factor.is_finite() || self.wheel_zoom_factor <= 1.0 {
            return Err(EngineConfigError::WheelZoomFactor(self.wheel_zoom_factor));
        }
        Ok(())
    }

    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        ScaleLimits { min: self.scale_min, max: self.scale_max }
    }

    #[must_use]
    pub fn hit_radius(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Mouse => self.hit_radius_mouse_px,
            PointerKind::Touch => self.hit_radius_touch_px,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineConfigError {
    #[error("invalid engine config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scale limits must satisfy 0 < min <= max < inf, got min={min} max={max}")]
    ScaleLimits { min: f64, max: f64 },
    #[error("hit radius must be finite and non-negative, got {0}")]
    HitRadius(f64),
    #[error("wheel zoom factor must be finite and above 1, got {0}")]
    WheelZoomFactor(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown figure: {0}")]
    UnknownFigure(String),
    #[error(transparent)]
    Center(#[from] CenterError),
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Schedule an animation frame; emitted once per dirty period.
    RequestFrame,
    ShowTooltip(HitResult),
    HideTooltip,
    SetCursor(String),
}

/// Core session state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub sky: Sky,
    pub camera: Camera,
    pub input: InputState,
    pub frames: FrameScheduler,
    pub config: EngineConfig,
    pub active_figure: Option<String>,
    pub center: Option<ProjectionCenter>,
    /// Active figure projected under `camera`; refreshed on every camera change.
    pub projected: ProjectedPoints,
    pub hovered: Option<StarId>,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from `config`. Scale limits that fail
    /// [`EngineConfig::validate`] fall back to the defaults.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            sky: Sky::default(),
            camera: Camera::default().with_limits(config.scale_limits()),
            input: InputState::default(),
            frames: FrameScheduler::new(),
            config,
            active_figure: None,
            center: None,
            projected: ProjectedPoints::new(),
            hovered: None,
            dpr: 1.0,
        }
    }

    // --- Data inputs ---

    /// Replace catalog and figures together, then select the default figure.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineCore::select_figure`] errors for the default figure.
    pub fn load(&mut self, catalog: Catalog, figures: FigureSet) -> Result<Vec<Action>, EngineError> {
        self.sky = Sky::new(catalog, figures);
        self.active_figure = None;
        self.center = None;
        self.projected = ProjectedPoints::new();
        self.hovered = None;

        let default = self
            .config
            .default_figure
            .clone()
            .filter(|name| self.sky.figures.contains(name));
        match default {
            Some(name) => self.select_figure(&name),
            None => Ok(self.request_frame()),
        }
    }

    /// Make `name` the displayed figure.
    ///
    /// Resolves the projection center, applies the reset policy, and
    /// reprojects before the next frame.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownFigure`] leaves the session untouched.
    /// [`EngineError::Center`] still switches to the figure, with an empty
    /// projection and a frame pending, so the host draws an empty viewport.
    pub fn select_figure(&mut self, name: &str) -> Result<Vec<Action>, EngineError> {
        let figure = self
            .sky
            .figure(name)
            .ok_or_else(|| EngineError::UnknownFigure(name.to_owned()))?;
        let center = resolve_center(figure, &self.sky.catalog);

        self.active_figure = Some(name.to_owned());
        self.input = InputState::Idle;
        self.frames.discard_pending();
        self.config.reset_policy.apply(&mut self.camera);

        let mut actions = self.request_frame();
        if self.hovered.take().is_some() {
            actions.push(Action::HideTooltip);
        }

        match center {
            Ok(c) => {
                self.center = Some(c);
                self.refresh_projection();
                Ok(actions)
            }
            Err(e) => {
                self.center = None;
                self.projected = ProjectedPoints::new();
                Err(e.into())
            }
        }
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) -> Vec<Action> {
        self.camera.width = width;
        self.camera.height = height;
        self.dpr = dpr;
        self.refresh_projection();
        self.request_frame()
    }

    /// Back to unit scale and zero offset.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.frames.discard_pending();
        self.camera.reset();
        self.refresh_projection();
        self.request_frame()
    }

    // --- Frame ---

    /// Run one animation frame: apply the coalesced transform and reproject.
    ///
    /// Returns the path to draw, or `None` if nothing changed since the last frame.
    pub fn on_animation_frame(&mut self) -> Option<FigurePath> {
        if !self.frames.take_frame(&mut self.camera) {
            return None;
        }
        self.refresh_projection();
        Some(self.figure_path())
    }

    /// Strokes and markers for the current projection.
    #[must_use]
    pub fn figure_path(&self) -> FigurePath {
        match self.active_line_figure() {
            Some(figure) => build_figure_path(figure, &self.projected, self.camera.width),
            None => FigurePath::default(),
        }
    }

    fn active_line_figure(&self) -> Option<&LineFigure> {
        self.active_figure.as_deref().and_then(|name| self.sky.figure(name))
    }

    fn refresh_projection(&mut self) {
        self.projected = match (self.active_line_figure(), self.center) {
            (Some(figure), Some(center)) => {
                Projector::new(center, self.camera.height).project_figure(figure, &self.sky.catalog, &self.camera)
            }
            _ => ProjectedPoints::new(),
        };
    }

    fn request_frame(&mut self) -> Vec<Action> {
        if self.frames.invalidate() {
            vec![Action::RequestFrame]
        } else {
            Vec::new()
        }
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::Panning { last_screen: screen_pt };
        let mut actions = vec![Action::SetCursor("grabbing".into())];
        if self.hovered.take().is_some() {
            actions.push(Action::HideTooltip);
        }
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, kind: PointerKind) -> Vec<Action> {
        match self.input {
            InputState::Panning { last_screen } => {
                self.input = InputState::Panning { last_screen: screen_pt };
                self.queue_pan(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y)
            }
            InputState::Idle => self.update_hover(screen_pt, kind),
            InputState::Pinching { .. } => Vec::new(),
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary || !matches!(self.input, InputState::Panning { .. }) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("grab".into())]
    }

    /// Wheel zooms around the cursor; with Shift held it pans instead.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.shift {
            return self.queue_pan(-delta.dx, -delta.dy);
        }
        let factor = match delta.dy.partial_cmp(&0.0) {
            Some(Ordering::Less) => self.config.wheel_zoom_factor,
            Some(Ordering::Greater) => 1.0 / self.config.wheel_zoom_factor,
            _ => return Vec::new(),
        };
        self.zoom_at(screen_pt, factor)
    }

    /// Zoom by `factor` keeping `anchor` fixed on screen. Applied at the next frame.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> Vec<Action> {
        if self.frames.queue_zoom(&self.camera, anchor, factor) {
            vec![Action::RequestFrame]
        } else {
            Vec::new()
        }
    }

    #[allow(clippy::float_cmp)]
    fn queue_pan(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        if dx == 0.0 && dy == 0.0 {
            return Vec::new();
        }
        if self.frames.queue_pan(dx, dy) {
            vec![Action::RequestFrame]
        } else {
            Vec::new()
        }
    }

    // --- Touch input ---

    /// Touches currently down, after a new one landed.
    ///
    /// One finger starts a drag and taps the star under it; two start a pinch.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        match touches {
            [single] => {
                self.input = InputState::Panning { last_screen: *single };
                self.update_hover(*single, PointerKind::Touch)
            }
            [a, b, ..] => {
                self.begin_pinch(*a, *b);
                Vec::new()
            }
            [] => {
                self.input = InputState::Idle;
                Vec::new()
            }
        }
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        match (self.input.clone(), touches) {
            (InputState::Panning { .. }, [single]) => self.on_pointer_move(*single, PointerKind::Touch),
            (InputState::Pinching { start_distance, start_scale, last_centroid }, [a, b, ..]) => {
                let (centroid, distance) = pinch_geometry(*a, *b);
                self.input = InputState::Pinching { start_distance, start_scale, last_centroid: centroid };

                let mut actions = self.queue_pan(centroid.x - last_centroid.x, centroid.y - last_centroid.y);
                let target = start_scale * (distance / start_distance);
                if self.frames.queue_zoom_to(&self.camera, centroid, target) {
                    actions.push(Action::RequestFrame);
                }
                actions
            }
            _ => Vec::new(),
        }
    }

    /// Touches still down after one or more lifted.
    pub fn on_touch_end(&mut self, remaining: &[Point]) -> Vec<Action> {
        match remaining {
            [] => self.input = InputState::Idle,
            [single] => self.input = InputState::Panning { last_screen: *single },
            [a, b, ..] => self.begin_pinch(*a, *b),
        }
        Vec::new()
    }

    fn begin_pinch(&mut self, a: Point, b: Point) {
        let (centroid, distance) = pinch_geometry(a, b);
        self.input = if distance < MIN_PINCH_DISTANCE_PX {
            InputState::Idle
        } else {
            InputState::Pinching {
                start_distance: distance,
                start_scale: self.frames.pending_scale(&self.camera),
                last_centroid: centroid,
            }
        };
    }

    // --- Hover / tap ---

    /// The star under `screen_pt`, using the hit radius for `kind`.
    ///
    /// Tests against the camera as last drawn or reset; input still queued
    /// for the next frame has not moved anything yet.
    #[must_use]
    pub fn hover(&self, screen_pt: Point, kind: PointerKind) -> Option<HitResult> {
        hit_test(screen_pt, &self.projected, self.config.hit_radius(kind))
    }

    fn update_hover(&mut self, screen_pt: Point, kind: PointerKind) -> Vec<Action> {
        match self.hover(screen_pt, kind) {
            Some(hit) => {
                if self.hovered.as_deref() == Some(hit.star_id.as_str()) {
                    return Vec::new();
                }
                self.hovered = Some(hit.star_id.clone());
                vec![Action::ShowTooltip(hit)]
            }
            None => {
                if self.hovered.take().is_some() {
                    vec![Action::HideTooltip]
                } else {
                    Vec::new()
                }
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn active_figure(&self) -> Option<&str> {
        self.active_figure.as_deref()
    }

    #[must_use]
    pub fn center(&self) -> Option<ProjectionCenter> {
        self.center
    }

    #[must_use]
    pub fn projected(&self) -> &ProjectedPoints {
        &self.projected
    }

    /// Figure names, sorted, for the host's picker.
    #[must_use]
    pub fn figure_names(&self) -> Vec<String> {
        self.sky.figures.names().map(str::to_owned).collect()
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas.
pub struct Engine {
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine drawing into `canvas`.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate or the canvas has no 2D context.
    pub fn new(canvas: &HtmlCanvasElement, config: EngineConfig) -> Result<Self, JsValue> {
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { ctx, core: EngineCore::with_config(config) })
    }

    /// Load data. A default figure without resolvable stars is drawn empty.
    ///
    /// # Errors
    ///
    /// Returns the engine error message for an unknown default figure.
    pub fn load(&mut self, catalog: Catalog, figures: FigureSet) -> Result<Vec<Action>, JsValue> {
        self.core
            .load(catalog, figures)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Select a figure. On `NoResolvableStars` the empty viewport is drawn
    /// right away and the error is still returned for the host to report.
    ///
    /// # Errors
    ///
    /// Returns the engine error message.
    pub fn select_figure(&mut self, name: &str) -> Result<Vec<Action>, JsValue> {
        match self.core.select_figure(name) {
            Ok(actions) => Ok(actions),
            Err(e @ EngineError::Center(_)) => {
                self.frame()?;
                Err(JsValue::from_str(&e.to_string()))
            }
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.core.set_viewport(width_css, height_css, dpr)
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.core.reset_view()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, kind: PointerKind) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, kind)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        self.core.on_touch_start(touches)
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        self.core.on_touch_move(touches)
    }

    pub fn on_touch_end(&mut self, remaining: &[Point]) -> Vec<Action> {
        self.core.on_touch_end(remaining)
    }

    // --- Render ---

    /// Animation-frame callback. Draws only if something changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<bool, JsValue> {
        let Some(path) = self.core.on_animation_frame() else {
            return Ok(false);
        };
        render::draw(&self.ctx, &path, self.core.camera.width, self.core.camera.height, self.core.dpr)?;
        Ok(true)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn hover(&self, screen_pt: Point, kind: PointerKind) -> Option<HitResult> {
        self.core.hover(screen_pt, kind)
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn figure_names(&self) -> Vec<String> {
        self.core.figure_names()
    }
}
