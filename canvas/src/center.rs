//! Per-figure projection center.
//!
//! The center is derived once per figure selection from the figure's
//! resolvable member stars: RA by circular mean (it wraps at 0°/360°), Dec by
//! plain arithmetic mean (it does not).

#[cfg(test)]
#[path = "center_test.rs"]
mod center_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::angle::circular_mean;
use crate::sky::{Catalog, LineFigure, StarRecord};

/// Projection center in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionCenter {
    #[serde(rename = "centerRA")]
    pub center_ra: f64,
    #[serde(rename = "centerDec")]
    pub center_dec: f64,
}

impl ProjectionCenter {
    #[must_use]
    pub fn new(center_ra: f64, center_dec: f64) -> Self {
        Self { center_ra, center_dec }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CenterError {
    /// None of the figure's star ids resolve to a projectable catalog entry.
    #[error("figure references no resolvable stars")]
    NoResolvableStars,
}

/// The figure's distinct resolvable stars, in first-encounter order.
#[must_use]
pub fn member_stars<'a>(figure: &'a LineFigure, catalog: &'a Catalog) -> Vec<&'a StarRecord> {
    let mut seen = HashSet::new();
    figure
        .star_ids()
        .filter(|id| seen.insert(*id))
        .filter_map(|id| catalog.resolve(id))
        .collect()
}

/// Resolve the projection center for `figure`.
///
/// # Errors
///
/// Returns [`CenterError::NoResolvableStars`] when no referenced id resolves.
pub fn resolve_center(figure: &LineFigure, catalog: &Catalog) -> Result<ProjectionCenter, CenterError> {
    let members = member_stars(figure, catalog);
    let center_ra = circular_mean(members.iter().map(|s| s.ra)).ok_or(CenterError::NoResolvableStars)?;

    #[allow(clippy::cast_precision_loss)]
    let center_dec = members.iter().map(|s| s.dec).sum::<f64>() / members.len() as f64;

    Ok(ProjectionCenter { center_ra, center_dec })
}
