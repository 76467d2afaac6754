//! Output formatting and persistence for earthquake summaries.
//!
//! Supports a console report, JSON logging, and CSV export of the year table.

use anyhow::Result;
use std::fmt::Write as _;
use tracing::{debug, info};

use crate::analyzers::YearSummary;
use crate::stats::EventSummary;
use csv::WriterBuilder;

/// Logs the summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &EventSummary) {
    debug!("{:#?}", summary);
}

/// Logs the summary as pretty-printed JSON.
pub fn print_json(summary: &EventSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Human-readable report: event count, strongest event and the year table.
pub fn format_report(summary: &EventSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Loaded {} earthquakes", summary.total_events);
    if summary.without_magnitude > 0 {
        let _ = writeln!(
            out,
            "{} earthquakes have no magnitude and are left out of the statistics",
            summary.without_magnitude
        );
    }

    match &summary.maximum {
        Some(max) => {
            let (lon, lat) = max.location;
            let _ = write!(
                out,
                "The strongest earthquake was at ({lon}, {lat}) with magnitude {}",
                max.magnitude
            );
            if let Some(place) = &max.place {
                let _ = write!(out, " ({place})");
            }
            let _ = writeln!(out, " on {}", max.time.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        None => {
            let _ = writeln!(out, "No earthquake with a magnitude was found");
        }
    }

    if !summary.years.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:>6}  {:>6}  {:>13}", "Year", "Count", "Avg magnitude");
        for y in &summary.years {
            let _ = writeln!(
                out,
                "{:>6}  {:>6}  {:>13.2}",
                y.year, y.count, y.average_magnitude
            );
        }
    }

    out
}

/// Writes the year table to a CSV file, replacing any existing file.
///
/// Columns: `year,count,average_magnitude`.
pub fn write_year_table(path: &str, years: &[YearSummary]) -> Result<()> {
    debug!(path, rows = years.len(), "Writing year table");

    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;

    for y in years {
        writer.serialize(y)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::record_at;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_summary() -> EventSummary {
        EventSummary::from_events(&[
            record_at(978_307_200_000, Some(3.0), (-1.5, 52.25)),
            record_at(978_307_300_000, Some(5.0), (-2.5, 53.75)),
            record_at(1_009_843_200_000, None, (0.0, 0.0)),
            record_at(1_009_843_300_000, Some(4.0), (0.5, 51.5)),
        ])
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&EventSummary::default());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_summary()).unwrap();
    }

    #[test]
    fn test_format_report() {
        let report = format_report(&sample_summary());

        assert!(report.starts_with("Loaded 4 earthquakes\n"));
        assert!(report.contains("1 earthquakes have no magnitude"));
        assert!(report.contains("The strongest earthquake was at (-2.5, 53.75) with magnitude 5"));
        assert!(report.contains("  2001       2           4.00"));
        assert!(report.contains("  2002       1           4.00"));
    }

    #[test]
    fn test_format_report_empty() {
        let report = format_report(&EventSummary::default());

        assert!(report.contains("Loaded 0 earthquakes"));
        assert!(report.contains("No earthquake with a magnitude was found"));
        assert!(!report.contains("Year"));
    }

    #[test]
    fn test_write_year_table() {
        let path = temp_path("quake_stats_test_years.csv");
        let _ = fs::remove_file(&path);

        write_year_table(&path, &sample_summary().years).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["year,count,average_magnitude", "2001,2,4.0", "2002,1,4.0"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_year_table_replaces_file() {
        let path = temp_path("quake_stats_test_replace.csv");
        let years = sample_summary().years;

        write_year_table(&path, &years).unwrap();
        write_year_table(&path, &years).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }
}
