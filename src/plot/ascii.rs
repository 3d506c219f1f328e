//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - risk points: `.` (Stable), `o` (Moderate), `#` (Critical)
//! - threshold cut lines: `-`
//!
//! The y axis is always the full [0,1] risk range so plots from different
//! runs are visually comparable.

use crate::domain::{RiskAssessment, RiskLevel, Thresholds};

const Y_LABEL_WIDTH: usize = 6;

/// Render the risk curve of a scored run.
pub fn render_risk_plot(
    assessments: &[RiskAssessment],
    thresholds: &Thresholds,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut grid = vec![vec![' '; width]; height];

    // Threshold cut lines first so data points draw over them.
    for level in [thresholds.low, thresholds.high] {
        let row = score_to_row(level, height);
        for cell in grid[row].iter_mut() {
            *cell = '-';
        }
    }

    let n = assessments.len();
    for (i, a) in assessments.iter().enumerate() {
        let col = if n <= 1 {
            0
        } else {
            ((i as f64 / (n - 1) as f64) * (width - 1) as f64).round() as usize
        };
        let row = score_to_row(a.risk_score, height);
        grid[row][col] = match a.level {
            RiskLevel::Stable => '.',
            RiskLevel::Moderate => 'o',
            RiskLevel::Critical => '#',
        };
    }

    let mut out = String::new();
    for (row_idx, row) in grid.iter().enumerate() {
        out.push_str(&row_label(row_idx, height, thresholds));
        out.push('|');
        out.extend(row.iter());
        out.push('\n');
    }

    // x axis.
    out.push_str(&" ".repeat(Y_LABEL_WIDTH));
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&" ".repeat(Y_LABEL_WIDTH + 1));
    out.push_str(&format!(
        "hour 0..{}   [. stable  o moderate  # critical]\n",
        n.saturating_sub(1)
    ));

    out
}

/// Map a risk score (clamped to [0,1]) to a grid row, top row = 1.0.
fn score_to_row(score: f64, height: usize) -> usize {
    let clamped = score.clamp(0.0, 1.0);
    let row = ((1.0 - clamped) * (height - 1) as f64).round() as usize;
    row.min(height - 1)
}

/// Label the top, bottom, and threshold rows with their risk values.
fn row_label(row_idx: usize, height: usize, thresholds: &Thresholds) -> String {
    let labeled = if row_idx == 0 {
        Some(1.0)
    } else if row_idx == height - 1 {
        Some(0.0)
    } else if row_idx == score_to_row(thresholds.high, height) {
        Some(thresholds.high)
    } else if row_idx == score_to_row(thresholds.low, height) {
        Some(thresholds.low)
    } else {
        None
    };

    match labeled {
        Some(v) => format!("{v:>width$.2}", width = Y_LABEL_WIDTH),
        None => " ".repeat(Y_LABEL_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessments(scores: &[f64]) -> Vec<RiskAssessment> {
        let thr = Thresholds::default();
        scores
            .iter()
            .map(|&risk_score| RiskAssessment {
                risk_score,
                level: thr.classify(risk_score),
            })
            .collect()
    }

    #[test]
    fn plot_is_deterministic_and_sized() {
        let data = assessments(&[0.0, 0.2, 0.5, 0.8, 1.0]);
        let thr = Thresholds::default();

        let a = render_risk_plot(&data, &thr, 40, 12);
        let b = render_risk_plot(&data, &thr, 40, 12);
        assert_eq!(a, b);

        // height grid rows + axis + legend.
        assert_eq!(a.lines().count(), 14);
        for line in a.lines().take(12) {
            assert!(line.len() <= Y_LABEL_WIDTH + 1 + 40);
        }
    }

    #[test]
    fn extreme_scores_land_on_edge_rows() {
        let data = assessments(&[1.0, 0.0]);
        let plot = render_risk_plot(&data, &Thresholds::default(), 20, 10);
        let lines: Vec<&str> = plot.lines().collect();
        assert!(lines[0].contains('#'), "top row should hold the 1.0 point");
        assert!(lines[9].contains('.'), "bottom row should hold the 0.0 point");
    }

    #[test]
    fn threshold_lines_are_drawn() {
        let plot = render_risk_plot(&assessments(&[0.5]), &Thresholds::default(), 30, 15);
        let dashed = plot.lines().filter(|l| l.contains("---")).count();
        // Two cut lines plus the x axis.
        assert!(dashed >= 3, "expected threshold lines in:\n{plot}");
    }
}
