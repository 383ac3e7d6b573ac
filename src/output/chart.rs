// Sentiment-over-time chart rendered as plain text.
//
// One column pair per comment, one row per step of the score axis. The top
// row is +1.0, the bottom row is -1.0, and the zero line is drawn with dashes
// so points above and below it are easy to tell apart.

use std::fmt::Write as _;

/// Title line of the chart.
pub const CHART_TITLE: &str = "Sentiment Over Time";
/// Most recent points kept on screen.
pub const MAX_POINTS: usize = 60;
/// Default number of rows in the plot area.
pub const DEFAULT_HEIGHT: usize = 9;

const MARKER: char = 'o';

/// Row index for a score: 0 is +1.0, `height - 1` is -1.0.
fn value_row(score: f64, height: usize) -> usize {
    let score = if score.is_finite() {
        score.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let span = (height - 1) as f64;
    ((1.0 - score) / 2.0 * span).round() as usize
}

/// Render `series` (compound scores in submission order) as a text plot.
pub fn render_chart(series: &[f64], height: usize) -> String {
    let mut out = format!("{CHART_TITLE}\n");
    if series.is_empty() {
        out.push_str("  (no comments yet)\n");
        return out;
    }

    let height = height.max(3);
    let start = series.len().saturating_sub(MAX_POINTS);
    let points = &series[start..];
    let width = points.len() * 2 - 1;

    let mut grid = vec![vec![' '; width]; height];
    let zero_row = value_row(0.0, height);
    grid[zero_row].iter_mut().for_each(|cell| *cell = '-');
    for (i, &score) in points.iter().enumerate() {
        grid[value_row(score, height)][i * 2] = MARKER;
    }

    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 {
            " 1.00"
        } else if r == height - 1 {
            "-1.00"
        } else if r == zero_row {
            " 0.00"
        } else {
            "     "
        };
        let line: String = row.iter().collect();
        let _ = writeln!(out, "{label} |{}", line.trim_end());
    }

    let _ = writeln!(out, "      +{}", "-".repeat(width));
    let _ = writeln!(
        out,
        "       Comment Count: {}..{}  |  Sentiment Score: -1.00..1.00",
        start,
        series.len() - 1
    );
    out
}
