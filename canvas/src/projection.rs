//! Sky-to-viewport projection.
//!
//! A small-angle equirectangular approximation: RA and Dec offsets from the
//! figure center map linearly onto base coordinates, with the viewport height
//! spanning [`VERTICAL_FOV_DEG`] degrees. It is accurate enough at
//! single-constellation fields of view (tens of degrees) and distorts toward
//! the poles and over very wide fields; it is not a true spherical projection.
//!
//! The RA offset is wrapped to the shortest signed distance before scaling,
//! so a figure straddling RA 0°/360° lays out contiguously around its center.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use std::collections::HashMap;

use crate::angle::wrap_delta;
use crate::camera::{Camera, Point};
use crate::center::ProjectionCenter;
use crate::consts::VERTICAL_FOV_DEG;
use crate::sky::{Catalog, LineFigure, StarId, StarRecord};

/// Projects catalog stars to base coordinates around a fixed center.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub center: ProjectionCenter,
    /// Viewport height in CSS pixels.
    pub viewport_height: f64,
}

impl Projector {
    #[must_use]
    pub fn new(center: ProjectionCenter, viewport_height: f64) -> Self {
        Self { center, viewport_height }
    }

    /// Base pixels per degree at unit scale.
    #[must_use]
    pub fn units_per_degree(&self) -> f64 {
        self.viewport_height / VERTICAL_FOV_DEG
    }

    /// Base coordinates of `star`: origin at the viewport center, y down.
    #[must_use]
    pub fn project(&self, star: &StarRecord) -> Point {
        let dx = wrap_delta(star.ra, self.center.center_ra);
        let dy = star.dec - self.center.center_dec;
        let k = self.units_per_degree();
        Point { x: dx * k, y: -dy * k }
    }

    /// Project every resolvable star of `figure` through `camera`.
    ///
    /// Entries are unique per id and ordered by first appearance in the
    /// figure's segments.
    #[must_use]
    pub fn project_figure(&self, figure: &LineFigure, catalog: &Catalog, camera: &Camera) -> ProjectedPoints {
        let mut out = ProjectedPoints::default();
        for id in figure.star_ids() {
            if out.contains(id) {
                continue;
            }
            let Some(star) = catalog.resolve(id) else {
                continue;
            };
            let base = self.project(star);
            out.push(ProjectedStar { id: id.clone(), star: *star, base, screen: camera.project(base) });
        }
        out
    }
}

/// One projected star.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedStar {
    pub id: StarId,
    pub star: StarRecord,
    /// Position before zoom/pan.
    pub base: Point,
    /// Position in viewport CSS pixels.
    pub screen: Point,
}

/// Projected positions for the active figure, rebuilt on every redraw.
#[derive(Debug, Clone, Default)]
pub struct ProjectedPoints {
    stars: Vec<ProjectedStar>,
    index: HashMap<StarId, usize>,
}

impl ProjectedPoints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, star: ProjectedStar) {
        self.index.insert(star.id.clone(), self.stars.len());
        self.stars.push(star);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectedStar> {
        self.index.get(id).and_then(|&i| self.stars.get(i))
    }

    /// Screen position of `id`, if it was projected.
    #[must_use]
    pub fn screen(&self, id: &str) -> Option<Point> {
        self.get(id).map(|p| p.screen)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Stars in figure encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectedStar> {
        self.stars.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
