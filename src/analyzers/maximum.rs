use crate::analyzers::types::MaximumResult;
use crate::error::QuakeError;
use crate::record::EventRecord;

/// Finds the record with the largest magnitude.
///
/// Scans in collection order and only replaces the current best on a strictly
/// greater magnitude, so the earliest record wins a tie. Records with a null
/// magnitude never qualify.
///
/// # Errors
///
/// [`QuakeError::EmptyCollection`] for an empty slice, and
/// [`QuakeError::NoMagnitude`] when every record has a null magnitude.
pub fn find_maximum(events: &[EventRecord]) -> Result<MaximumResult, QuakeError> {
    if events.is_empty() {
        return Err(QuakeError::EmptyCollection);
    }

    let mut best: Option<(usize, &EventRecord, f64)> = None;

    for (index, event) in events.iter().enumerate() {
        let Some(magnitude) = event.magnitude() else {
            continue;
        };

        match best {
            Some((_, _, current)) if magnitude <= current => {}
            _ => best = Some((index, event, magnitude)),
        }
    }

    let (index, event, magnitude) = best.ok_or(QuakeError::NoMagnitude)?;

    Ok(MaximumResult {
        magnitude,
        location: event.location(),
        index,
        time: event.time,
        place: event.place.clone(),
        id: event.id.clone(),
    })
}
