//! GeoJSON parser for USGS earthquake snapshots.

use chrono::DateTime;
use serde_json::Value;

use crate::error::QuakeError;
use crate::record::{EventCollection, EventRecord};

/// Decodes a GeoJSON `FeatureCollection` into typed [`EventRecord`]s,
/// preserving feed order.
///
/// # Errors
///
/// Returns [`QuakeError::InvalidDocument`] if the bytes are not JSON,
/// [`QuakeError::MissingFeatures`] if there is no `features` array, and
/// [`QuakeError::MalformedRecord`] for the first feature that lacks a usable
/// `properties.time` or `geometry.coordinates`.
pub fn parse_collection(bytes: &[u8]) -> Result<EventCollection, QuakeError> {
    let document: Value = serde_json::from_slice(bytes)?;

    let features = document["features"]
        .as_array()
        .ok_or(QuakeError::MissingFeatures)?;

    features
        .iter()
        .enumerate()
        .map(|(index, feature)| parse_feature(index, feature))
        .collect()
}

fn parse_feature(index: usize, feature: &Value) -> Result<EventRecord, QuakeError> {
    let malformed = |field, reason| QuakeError::MalformedRecord {
        index,
        field,
        reason,
    };

    let properties = &feature["properties"];

    let time = match &properties["time"] {
        Value::Null => return Err(malformed("properties.time", "is missing")),
        Value::Number(n) => match n.as_i64() {
            Some(millis) => millis,
            None if n.is_u64() => return Err(malformed("properties.time", "is out of range")),
            None => return Err(malformed("properties.time", "is not an integer")),
        },
        _ => return Err(malformed("properties.time", "is not a number")),
    };
    if time < 0 {
        return Err(malformed("properties.time", "is negative"));
    }
    let time = DateTime::from_timestamp_millis(time)
        .ok_or_else(|| malformed("properties.time", "is out of range"))?;

    let magnitude = match &properties["mag"] {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        _ => return Err(malformed("properties.mag", "is not a number")),
    };

    let coordinates = feature["geometry"]["coordinates"]
        .as_array()
        .ok_or_else(|| malformed("geometry.coordinates", "is missing"))?;
    let (longitude, latitude) = match coordinates.as_slice() {
        [lon, lat, ..] => match (lon.as_f64(), lat.as_f64()) {
            (Some(lon), Some(lat)) => (lon, lat),
            _ => return Err(malformed("geometry.coordinates", "is not numeric")),
        },
        _ => {
            return Err(malformed(
                "geometry.coordinates",
                "has fewer than two components",
            ));
        }
    };

    Ok(EventRecord {
        id: feature["id"].as_str().map(str::to_string),
        place: properties["place"].as_str().map(str::to_string),
        magnitude,
        longitude,
        latitude,
        time,
    })
}
