//! Rendering: draws one figure path to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Everything it draws is already in screen space; the camera and projection
//! were applied when the [`FigurePath`] was built.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::segments::{FigurePath, PathCommand, StarMarker};

const BACKGROUND: &str = "#0b1020";
const LINE_COLOR: &str = "#44f";
const LINE_WIDTH_PX: f64 = 1.5;
const STAR_COLOR: &str = "#fff";

/// Clear the viewport and draw `path`: strokes first, markers on top.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    path: &FigurePath,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    draw_lines(ctx, &path.commands);
    for marker in &path.markers {
        draw_marker(ctx, marker)?;
    }
    Ok(())
}

fn draw_lines(ctx: &CanvasRenderingContext2d, commands: &[PathCommand]) {
    if commands.is_empty() {
        return;
    }
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(LINE_WIDTH_PX);
    ctx.set_line_join("round");

    // One path for the whole figure; a MoveTo lifts the pen, so seam breaks
    // and segment boundaries cost nothing extra.
    ctx.begin_path();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathCommand::LineTo(p) => ctx.line_to(p.x, p.y),
        }
    }
    ctx.stroke();
}

fn draw_marker(ctx: &CanvasRenderingContext2d, marker: &StarMarker) -> Result<(), JsValue> {
    ctx.set_fill_style_str(STAR_COLOR);
    ctx.begin_path();
    ctx.arc(marker.center.x, marker.center.y, marker.radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}
