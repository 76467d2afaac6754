//! FDSN event-service query parameters.

use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Url;

/// USGS FDSN event endpoint returning GeoJSON.
pub const USGS_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query.geojson";

// Default window: Great Britain and surrounding waters, 2000-01-01 to
// 2018-10-11, magnitude 1 and above.
pub const DEFAULT_START_TIME: NaiveDate = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
pub const DEFAULT_END_TIME: NaiveDate = NaiveDate::from_ymd_opt(2018, 10, 11).expect("valid date");
pub const DEFAULT_MIN_LATITUDE: f64 = 50.008;
pub const DEFAULT_MAX_LATITUDE: f64 = 58.723;
pub const DEFAULT_MIN_LONGITUDE: f64 = -9.756;
pub const DEFAULT_MAX_LONGITUDE: f64 = 1.67;
pub const DEFAULT_MIN_MAGNITUDE: f64 = 1.0;

/// A bounding-box, magnitude and time-window query. Results are always
/// requested in ascending time order.
#[derive(Debug, Clone, PartialEq)]
pub struct EventQuery {
    pub start_time: NaiveDate,
    pub end_time: NaiveDate,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_magnitude: f64,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            start_time: DEFAULT_START_TIME,
            end_time: DEFAULT_END_TIME,
            min_latitude: DEFAULT_MIN_LATITUDE,
            max_latitude: DEFAULT_MAX_LATITUDE,
            min_longitude: DEFAULT_MIN_LONGITUDE,
            max_longitude: DEFAULT_MAX_LONGITUDE,
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
        }
    }
}

impl EventQuery {
    /// Builds the request URL against `base`.
    pub fn to_url(&self, base: &str) -> Result<Url> {
        let params = [
            ("starttime", self.start_time.format("%Y-%m-%d").to_string()),
            ("endtime", self.end_time.format("%Y-%m-%d").to_string()),
            ("minlatitude", self.min_latitude.to_string()),
            ("maxlatitude", self.max_latitude.to_string()),
            ("minlongitude", self.min_longitude.to_string()),
            ("maxlongitude", self.max_longitude.to_string()),
            ("minmagnitude", self.min_magnitude.to_string()),
            ("orderby", "time-asc".to_string()),
        ];

        Ok(Url::parse_with_params(base, &params)?)
    }
}
