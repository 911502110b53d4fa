#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::Serialize;

use crate::camera::Point;
use crate::projection::ProjectedPoints;
use crate::sky::StarId;

/// A star under the pointer, with what the tooltip shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitResult {
    pub star_id: StarId,
    pub ra: f64,
    pub dec: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_index: Option<f64>,
    pub screen_pos: Point,
}

impl HitResult {
    /// Tooltip lines: id, coordinates, then whatever photometry is known.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("ID: {}", self.star_id),
            format!("RA: {:.3}°, Dec: {:.3}°", self.ra, self.dec),
        ];
        if let Some(m) = self.magnitude {
            lines.push(format!("Vmag: {m}"));
        }
        if let Some(ci) = self.color_index {
            lines.push(format!("B−V: {ci}"));
        }
        lines
    }
}

/// First projected star within `radius_px` of `query`, in figure order.
///
/// A linear scan; figures hold tens of stars, not thousands.
#[must_use]
pub fn hit_test(query: Point, projected: &ProjectedPoints, radius_px: f64) -> Option<HitResult> {
    projected
        .iter()
        .find(|p| p.screen.distance(query) <= radius_px)
        .map(|p| HitResult {
            star_id: p.id.clone(),
            ra: p.star.ra,
            dec: p.star.dec,
            magnitude: p.star.magnitude,
            color_index: p.star.color_index,
            screen_pos: p.screen,
        })
}
