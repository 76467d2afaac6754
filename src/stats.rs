use serde::Serialize;

use crate::analyzers::{MaximumResult, YearSummary, aggregate_by_year, find_maximum};
use crate::record::EventRecord;

/// Everything the report and charts need from one collection.
#[derive(Debug, Default, Serialize)]
pub struct EventSummary {
    pub total_events: usize,
    pub without_magnitude: usize,

    /// `None` when the collection is empty or has no magnitudes at all.
    pub maximum: Option<MaximumResult>,
    pub years: Vec<YearSummary>,
}

impl EventSummary {
    pub fn from_events(events: &[EventRecord]) -> Self {
        EventSummary {
            total_events: events.len(),
            without_magnitude: events.iter().filter(|e| e.magnitude().is_none()).count(),
            maximum: find_maximum(events).ok(),
            years: aggregate_by_year(events),
        }
    }

    /// Years in ascending order, ready to use as a chart x-axis.
    pub fn year_axis(&self) -> Vec<i32> {
        self.years.iter().map(|y| y.year).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.years.iter().map(|y| y.count).collect()
    }

    pub fn average_magnitudes(&self) -> Vec<f64> {
        self.years.iter().map(|y| y.average_magnitude).collect()
    }
}
