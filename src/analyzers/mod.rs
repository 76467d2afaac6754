//! Earthquake aggregation.
//!
//! Pure functions over an in-memory collection: the strongest event and a
//! per-year table of counts and mean magnitudes. Nothing here does I/O.

pub mod aggregate;
pub mod maximum;
pub mod types;

pub use aggregate::aggregate_by_year;
pub use maximum::find_maximum;
pub use types::{MaximumResult, YearSummary};
