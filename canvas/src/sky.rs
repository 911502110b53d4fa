//! Sky model: catalog stars, line figures, and the in-memory store.
//!
//! This module defines what the engine draws from: the star catalog
//! (`StarRecord` keyed by `StarId`), constellation stick figures
//! (`LineFigure`, a list of `Segment`s of star ids), and the `Sky` store that
//! owns both maps for the lifetime of a session.
//!
//! Data flows into this layer once, from the host (JSON fetched from the
//! service). Nothing here is mutated after load; the projection and hit-test
//! layers read through `Catalog::resolve`, which hides entries whose
//! coordinates cannot be projected.

#[cfg(test)]
#[path = "sky_test.rs"]
mod sky_test;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Opaque catalog identifier (e.g. a Hipparcos number as text).
pub type StarId = String;

/// One catalog star. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    /// Right ascension, `[0, 360)`.
    pub ra: f64,
    /// Declination, `[-90, 90]`.
    pub dec: f64,
    /// Apparent visual magnitude, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    /// B−V color index, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_index: Option<f64>,
}

impl StarRecord {
    #[must_use]
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec, magnitude: None, color_index: None }
    }

    /// Whether both coordinates are finite and can be projected.
    #[must_use]
    pub fn is_projectable(&self) -> bool {
        self.ra.is_finite() && self.dec.is_finite()
    }
}

/// An open polyline through catalog stars, in drawing order.
pub type Segment = Vec<StarId>;

/// A named stick figure: an ordered list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineFigure {
    pub segments: Vec<Segment>,
}

impl LineFigure {
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Every star id referenced by the figure, in segment order, repeats included.
    pub fn star_ids(&self) -> impl Iterator<Item = &StarId> {
        self.segments.iter().flatten()
    }
}

/// Star catalog keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    stars: HashMap<StarId, StarRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<StarId>, star: StarRecord) {
        self.stars.insert(id.into(), star);
    }

    /// Raw lookup, degenerate entries included.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StarRecord> {
        self.stars.get(id)
    }

    /// Lookup for drawing: `None` for unknown ids and for entries with
    /// non-finite coordinates.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&StarRecord> {
        self.stars.get(id).filter(|star| star.is_projectable())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StarId, &StarRecord)> {
        self.stars.iter()
    }
}

impl FromIterator<(StarId, StarRecord)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (StarId, StarRecord)>>(iter: I) -> Self {
        Self { stars: iter.into_iter().collect() }
    }
}

/// Figures keyed by name. Iteration is name-sorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FigureSet {
    figures: BTreeMap<String, LineFigure>,
}

impl FigureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, figure: LineFigure) {
        self.figures.insert(name.into(), figure);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineFigure> {
        self.figures.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.figures.contains_key(name)
    }

    /// Figure names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.figures.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LineFigure)> {
        self.figures.iter().map(|(name, figure)| (name.as_str(), figure))
    }
}

impl FromIterator<(String, LineFigure)> for FigureSet {
    fn from_iter<I: IntoIterator<Item = (String, LineFigure)>>(iter: I) -> Self {
        Self { figures: iter.into_iter().collect() }
    }
}

/// Catalog and figures, loaded together and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Sky {
    pub catalog: Catalog,
    pub figures: FigureSet,
}

impl Sky {
    #[must_use]
    pub fn new(catalog: Catalog, figures: FigureSet) -> Self {
        Self { catalog, figures }
    }

    #[must_use]
    pub fn figure(&self, name: &str) -> Option<&LineFigure> {
        self.figures.get(name)
    }
}
