//! Typed earthquake records and the accessors the aggregators use.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// A single validated earthquake from the feed.
///
/// Built by [`crate::parser::parse_collection`], which is the only place
/// structural checks happen. The accessors here cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub id: Option<String>,
    pub place: Option<String>,
    pub magnitude: Option<f64>,
    pub longitude: f64,
    pub latitude: f64,
    pub time: DateTime<Utc>,
}

/// Records in feed order.
pub type EventCollection = Vec<EventRecord>;

impl EventRecord {
    /// The event magnitude. `None` means the feed reported `null`, which is
    /// not the same as zero.
    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }

    /// `(longitude, latitude)`. Elevation is dropped at parse time.
    pub fn location(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    /// UTC calendar year of the event.
    pub fn year(&self) -> i32 {
        self.time.year()
    }
}
