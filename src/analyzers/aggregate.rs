use crate::analyzers::types::YearSummary;
use crate::record::EventRecord;
use std::collections::BTreeMap;

/// Buckets events by UTC calendar year into a [`YearSummary`] per year.
///
/// Records with a null magnitude are left out of both the count and the
/// average, so a year made up only of such records does not appear. The
/// result is ordered by ascending year; an empty input yields an empty table.
pub fn aggregate_by_year(events: &[EventRecord]) -> Vec<YearSummary> {
    let mut buckets: BTreeMap<i32, (usize, f64)> = BTreeMap::new();

    for event in events {
        let Some(magnitude) = event.magnitude() else {
            continue;
        };

        let (count, magnitude_sum) = buckets.entry(event.year()).or_default();
        *count += 1;
        *magnitude_sum += magnitude;
    }

    buckets
        .into_iter()
        .map(|(year, (count, magnitude_sum))| YearSummary {
            year,
            count,
            average_magnitude: magnitude_sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::record_at;

    // 2001-01-01T00:00:00Z, 2002-01-01T00:00:00Z
    const YEAR_2001: i64 = 978_307_200_000;
    const YEAR_2002: i64 = 1_009_843_200_000;

    fn sample() -> Vec<EventRecord> {
        vec![
            record_at(YEAR_2001, Some(3.0), (0.0, 0.0)),
            record_at(YEAR_2001 + 1_000, Some(5.0), (1.0, 1.0)),
            record_at(YEAR_2002, None, (2.0, 2.0)),
            record_at(YEAR_2002 + 1_000, Some(4.0), (3.0, 3.0)),
        ]
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_by_year(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_skips_null_magnitudes() {
        let years = aggregate_by_year(&sample());

        assert_eq!(
            years,
            vec![
                YearSummary { year: 2001, count: 2, average_magnitude: 4.0 },
                YearSummary { year: 2002, count: 1, average_magnitude: 4.0 },
            ]
        );
    }

    #[test]
    fn test_year_with_only_null_magnitudes_is_absent() {
        let events = vec![
            record_at(YEAR_2001, None, (0.0, 0.0)),
            record_at(YEAR_2002, Some(2.0), (0.0, 0.0)),
        ];

        let years = aggregate_by_year(&events);

        assert_eq!(years.len(), 1);
        assert_eq!(years[0].year, 2002);
    }

    #[test]
    fn test_years_sorted_regardless_of_input_order() {
        let events = vec![
            record_at(YEAR_2002, Some(1.0), (0.0, 0.0)),
            record_at(0, Some(1.0), (0.0, 0.0)),
            record_at(YEAR_2001, Some(1.0), (0.0, 0.0)),
            record_at(YEAR_2002 + 5, Some(1.0), (0.0, 0.0)),
        ];

        let years: Vec<i32> = aggregate_by_year(&events).iter().map(|y| y.year).collect();

        assert_eq!(years, vec![1970, 2001, 2002]);
    }

    #[test]
    fn test_counts_sum_to_records_with_magnitude() {
        let events = sample();
        let total: usize = aggregate_by_year(&events).iter().map(|y| y.count).sum();
        let with_magnitude = events.iter().filter(|e| e.magnitude().is_some()).count();

        assert_eq!(total, with_magnitude);
    }

    #[test]
    fn test_boundary_millisecond_splits_years() {
        let events = vec![
            record_at(946_684_799_999, Some(2.0), (0.0, 0.0)),
            record_at(946_684_800_000, Some(3.0), (0.0, 0.0)),
        ];

        let years = aggregate_by_year(&events);

        assert_eq!(years[0].year, 1999);
        assert_eq!(years[0].count, 1);
        assert_eq!(years[1].year, 2000);
        assert_eq!(years[1].count, 1);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let events = sample();
        assert_eq!(aggregate_by_year(&events), aggregate_by_year(&events));
    }
}
