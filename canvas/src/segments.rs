//! Figure strokes and star markers in screen space.
//!
//! `build_figure_path` turns a figure plus its projected positions into a
//! flat list of move/line commands and one marker per star. The renderer
//! replays the commands onto a canvas context; keeping the geometry here lets
//! seam handling be tested without a browser.
//!
//! A jump wider than half the viewport between consecutive points is treated
//! as a wrap-seam artifact: the stroke is broken with a move instead of drawn
//! across the screen.

#[cfg(test)]
#[path = "segments_test.rs"]
mod segments_test;

use crate::camera::Point;
use crate::consts::{STAR_MARKER_MIN_RADIUS_PX, STAR_MARKER_RADIUS_PX};
use crate::projection::ProjectedPoints;
use crate::sky::{LineFigure, StarId};

/// One path command in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path.
    MoveTo(Point),
    /// Extend the current sub-path.
    LineTo(Point),
}

/// A dot drawn at a star position.
#[derive(Debug, Clone, PartialEq)]
pub struct StarMarker {
    pub id: StarId,
    pub center: Point,
    pub radius: f64,
}

/// Everything the renderer needs to draw one figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigurePath {
    pub commands: Vec<PathCommand>,
    pub markers: Vec<StarMarker>,
}

impl FigurePath {
    /// Number of `LineTo` commands, i.e. edges actually stroked.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.markers.is_empty()
    }
}

/// Build strokes and markers for `figure`.
///
/// Ids missing from `projected` are skipped without breaking or extending the
/// current run. Each segment starts a new sub-path.
#[must_use]
pub fn build_figure_path(figure: &LineFigure, projected: &ProjectedPoints, viewport_width: f64) -> FigurePath {
    let seam_threshold = viewport_width * 0.5;
    let mut commands = Vec::new();

    for segment in &figure.segments {
        let mut prev: Option<Point> = None;
        for id in segment {
            let Some(pt) = projected.screen(id) else {
                continue;
            };
            let cmd = match prev {
                Some(p) if (pt.x - p.x).abs() <= seam_threshold => PathCommand::LineTo(pt),
                _ => PathCommand::MoveTo(pt),
            };
            commands.push(cmd);
            prev = Some(pt);
        }
    }

    let markers = projected
        .iter()
        .map(|p| StarMarker { id: p.id.clone(), center: p.screen, radius: marker_radius(p.star.magnitude) })
        .collect();

    FigurePath { commands, markers }
}

/// Marker radius in screen pixels; brighter (smaller magnitude) is larger.
#[must_use]
pub fn marker_radius(magnitude: Option<f64>) -> f64 {
    match magnitude {
        Some(m) if m.is_finite() => {
            let r = (4.0 - 0.6 * m) * (STAR_MARKER_RADIUS_PX / 2.0);
            r.max(STAR_MARKER_MIN_RADIUS_PX)
        }
        _ => STAR_MARKER_RADIUS_PX,
    }
}
