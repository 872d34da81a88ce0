//! Randomized organisation boundary checks.
//!
//! The location mock answers "is this point inside the organisation's
//! boundary?" with a weighted coin flip. The random source is injected so a
//! seeded generator yields reproducible answers.

use rand::Rng;
use serde::Serialize;

/// Probability that a point is reported inside the boundary.
pub const WITHIN_PROBABILITY: f64 = 0.8;

/// Lower bound (inclusive) of the reported distance for outside points.
pub const MIN_DISTANCE_KM: f64 = 0.1;

/// Upper bound (exclusive) of the reported distance for outside points.
pub const MAX_DISTANCE_KM: f64 = 25.0;

/// Outcome of a single boundary check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryCheck {
    pub organisation_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub within_boundary: bool,
    /// Distance to the nearest boundary edge; `0.0` when inside.
    pub distance_km: f64,
}

/// Draw a boundary check for the given point.
pub fn check_boundary<R: Rng>(
    rng: &mut R,
    organisation_id: &str,
    latitude: f64,
    longitude: f64,
) -> BoundaryCheck {
    let within_boundary = rng.random_bool(WITHIN_PROBABILITY);
    let distance_km = if within_boundary {
        0.0
    } else {
        rng.random_range(MIN_DISTANCE_KM..MAX_DISTANCE_KM)
    };

    BoundaryCheck {
        organisation_id: organisation_id.to_string(),
        latitude,
        longitude,
        within_boundary,
        distance_km,
    }
}
