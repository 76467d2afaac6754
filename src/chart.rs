//! Text charts of the year table for terminal output.
//!
//! Both charts take plain per-year series, already in ascending year order,
//! and never reorder them. `years[i]` pairs with the value at index `i`.

use std::fmt::Write as _;

const BAR: char = '█';
const POINT: char = 'o';
/// Width of one year column in the magnitude chart: four digits and a gap.
const COLUMN: usize = 5;

/// Horizontal bar chart of the number of earthquakes per year.
///
/// The longest bar is `width` characters; every non-empty year gets at least
/// one character so small counts stay visible.
pub fn render_count_chart(years: &[i32], counts: &[usize], width: usize) -> String {
    let mut out = String::from("Number of Earthquakes per Year\n");
    if years.is_empty() || counts.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let width = width.max(1);
    let max_count = counts.iter().copied().max().unwrap_or(1).max(1);

    for (year, &count) in years.iter().zip(counts) {
        let len = ((count as f64 / max_count as f64) * width as f64).round() as usize;
        let bar: String = std::iter::repeat_n(BAR, len.max(1)).collect();
        let _ = writeln!(out, "{year:>6} | {bar} {count}");
    }

    out
}

/// Line chart of the average magnitude per year, `height` rows tall.
///
/// Years run left to right along the x-axis. Consecutive points are joined
/// by a single `-`, `/` or `\` halfway between them.
pub fn render_magnitude_chart(years: &[i32], averages: &[f64], height: usize) -> String {
    let mut out = String::from("Average Earthquake Magnitude per Year\n");
    let points = years.len().min(averages.len());
    if points == 0 {
        out.push_str("(no data)\n");
        return out;
    }
    let (years, averages) = (&years[..points], &averages[..points]);

    let height = height.max(2);
    let (lo, hi) = averages
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;

    let row_of = |value: f64| -> usize {
        if span == 0.0 {
            0
        } else {
            (((hi - value) / span) * (height - 1) as f64).round() as usize
        }
    };

    let mut grid = vec![vec![' '; years.len() * COLUMN]; height];
    let rows: Vec<usize> = averages.iter().map(|&v| row_of(v)).collect();

    for (i, &row) in rows.iter().enumerate() {
        grid[row][i * COLUMN + 1] = POINT;

        if let Some(&next) = rows.get(i + 1) {
            let link = match next.cmp(&row) {
                std::cmp::Ordering::Less => '/',
                std::cmp::Ordering::Equal => '-',
                std::cmp::Ordering::Greater => '\\',
            };
            grid[(row + next) / 2][i * COLUMN + 3] = link;
        }
    }

    for (r, cells) in grid.iter().enumerate() {
        let value = hi - span * r as f64 / (height - 1) as f64;
        let line: String = cells.iter().collect();
        let _ = writeln!(out, "{value:>6.2} | {}", line.trim_end());
    }

    let _ = writeln!(out, "{:>6} +{}", "", "-".repeat(years.len() * COLUMN));
    let labels: String = years
        .iter()
        .map(|year| format!("{:<width$}", year, width = COLUMN))
        .collect();
    let _ = writeln!(out, "{:>6}  {}", "", labels.trim_end());

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_len(line: &str) -> usize {
        line.chars().filter(|&c| c == BAR).count()
    }

    #[test]
    fn test_count_chart_empty() {
        let chart = render_count_chart(&[], &[], 40);
        assert!(chart.contains("(no data)"));
    }

    #[test]
    fn test_count_chart_scales_to_width() {
        let chart = render_count_chart(&[2001, 2002, 2003], &[10, 5, 1], 20);
        let lines: Vec<&str> = chart.lines().skip(1).collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  2001 | "));
        assert!(lines[0].ends_with(" 10"));
        assert_eq!(bar_len(lines[0]), 20);
        assert_eq!(bar_len(lines[1]), 10);
        assert_eq!(bar_len(lines[2]), 2);
    }

    #[test]
    fn test_count_chart_small_count_still_visible() {
        let chart = render_count_chart(&[2001, 2002], &[1000, 1], 10);
        let lines: Vec<&str> = chart.lines().skip(1).collect();

        assert_eq!(bar_len(lines[1]), 1);
    }

    #[test]
    fn test_magnitude_chart_empty() {
        assert!(render_magnitude_chart(&[], &[], 10).contains("(no data)"));
    }

    #[test]
    fn test_magnitude_chart_extremes() {
        let chart = render_magnitude_chart(&[2001, 2002, 2003], &[1.0, 3.0, 2.0], 5);
        let lines: Vec<&str> = chart.lines().collect();

        // title, five value rows, axis, labels
        assert_eq!(lines.len(), 8);
        assert!(lines[1].starts_with("  3.00 | "));
        assert!(lines[5].starts_with("  1.00 | "));
        assert_eq!(chart.matches(POINT).count(), 3);

        // 2002 sits on the top row, 2001 on the bottom row
        assert_eq!(lines[1].find(POINT), Some(9 + COLUMN + 1));
        assert_eq!(lines[5].find(POINT), Some(9 + 1));
        assert!(lines[7].trim_start().starts_with("2001 2002 2003"));
    }

    #[test]
    fn test_magnitude_chart_flat_series() {
        let chart = render_magnitude_chart(&[2001, 2002], &[2.5, 2.5], 4);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[1].matches(POINT).count(), 2);
        assert!(lines[1].contains('-'));
    }
}
