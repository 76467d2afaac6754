//! Data types produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The strongest earthquake in a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaximumResult {
    pub magnitude: f64,
    /// `(longitude, latitude)`.
    pub location: (f64, f64),
    /// Position of the source record in the collection.
    pub index: usize,
    pub time: DateTime<Utc>,
    pub place: Option<String>,
    pub id: Option<String>,
}

/// Count and mean magnitude for one UTC calendar year.
///
/// Only records with a magnitude contribute, so `count` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub count: usize,
    pub average_magnitude: f64,
}
