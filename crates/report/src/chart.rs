//! SoH chart.
//!
//! [`ChartModel`] describes the chart independently of any renderer:
//! the SoH curve against years, horizontal reference lines at the 80% and
//! 60% thresholds, and one annotation per crossing. [`render_text`] draws it
//! as a character grid for the terminal.

use battery_soh_domain::value_objects::simulation_result::SimulationResult;
use battery_soh_simulation::threshold::{EOL_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT};
use std::fmt::Write as _;

/// Horizontal line at a fixed SoH.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    /// SoH value.
    pub soh_pct: f64,
    /// Legend label.
    pub label: String,
    /// Glyph used by the text renderer.
    pub glyph: char,
}

/// Marker at a threshold crossing.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Crossing year.
    pub year: f64,
    /// Threshold crossed.
    pub soh_pct: f64,
    /// Text such as `80% @ 1.2 yr`.
    pub text: String,
}

/// Renderer independent chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Visible SoH range.
    pub y_range: (f64, f64),
    /// `(year, soh)` points of the curve.
    pub points: Vec<(f64, f64)>,
    pub reference_lines: Vec<ReferenceLine>,
    pub annotations: Vec<Annotation>,
}

impl ChartModel {
    /// Builds the chart of a run.
    #[must_use]
    pub fn from_result(result: &SimulationResult) -> Self {
        let points = result
            .years()
            .into_iter()
            .zip(result.soh_pct.iter().copied())
            .collect();

        let annotations = result
            .threshold_crossings
            .iter()
            .map(|c| Annotation {
                year: c.year,
                soh_pct: c.threshold_pct,
                text: format!("{}% @ {:.1} yr", c.threshold_pct, c.year),
            })
            .collect();

        Self {
            title: "Simulated Battery Degradation Over Time".to_string(),
            x_label: "Time (Years)".to_string(),
            y_label: "State of Health (%)".to_string(),
            y_range: (0.0, 105.0),
            points,
            reference_lines: vec![
                ReferenceLine {
                    soh_pct: EOL_THRESHOLD_PCT,
                    label: "80% SoH (Typical EOL)".to_string(),
                    glyph: '-',
                },
                ReferenceLine {
                    soh_pct: SEVERE_THRESHOLD_PCT,
                    label: "60% SoH (Severely Degraded)".to_string(),
                    glyph: '=',
                },
            ],
            annotations,
        }
    }

    /// Largest year on the x axis.
    #[must_use]
    pub fn max_year(&self) -> f64 {
        self.points.last().map_or(0.0, |(year, _)| *year)
    }
}

const CURVE: char = '*';
const CROSSING: char = ':';

/// Draws the chart as text, `width` by `height` plot cells plus axes.
///
/// Both dimensions are clamped to at least 2.
#[must_use]
pub fn render_text(chart: &ChartModel, width: usize, height: usize) -> String {
    let width = width.max(2);
    let height = height.max(2);
    let (y_min, y_max) = chart.y_range;
    let x_max = chart.max_year();

    let row_of = |soh: f64| -> usize {
        let clamped = soh.clamp(y_min, y_max);
        let fraction = (y_max - clamped) / (y_max - y_min);
        (fraction * (height - 1) as f64).round() as usize
    };
    let col_of = |year: f64| -> usize {
        if x_max <= 0.0 {
            return 0;
        }
        ((year / x_max) * (width - 1) as f64).round() as usize
    };

    let mut grid = vec![vec![' '; width]; height];

    for line in &chart.reference_lines {
        let row = row_of(line.soh_pct);
        grid[row].iter_mut().for_each(|cell| *cell = line.glyph);
    }

    for annotation in &chart.annotations {
        let col = col_of(annotation.year).min(width - 1);
        for row in grid.iter_mut() {
            if row[col] == ' ' {
                row[col] = CROSSING;
            }
        }
    }

    if !chart.points.is_empty() {
        let last = chart.points.len() - 1;
        for col in 0..width {
            let index = ((col as f64 / (width - 1) as f64) * last as f64).round() as usize;
            let (year, soh) = chart.points[index.min(last)];
            grid[row_of(soh)][col_of(year).min(width - 1)] = CURVE;
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);
    let _ = writeln!(out, "{}", chart.y_label);
    for (i, row) in grid.iter().enumerate() {
        let value = y_max - (y_max - y_min) * i as f64 / (height - 1) as f64;
        let line: String = row.iter().collect();
        let _ = writeln!(out, "{value:>6.1} |{line}");
    }
    let _ = writeln!(out, "{:>6} +{}", "", "-".repeat(width));
    let _ = writeln!(
        out,
        "{:>6}  0{:>pad$.1}  {}",
        "",
        x_max,
        chart.x_label,
        pad = width - 1
    );

    let _ = writeln!(out, "  {CURVE} State of Health (SoH) %");
    for line in &chart.reference_lines {
        let _ = writeln!(out, "  {} {}", line.glyph, line.label);
    }
    for annotation in &chart.annotations {
        let _ = writeln!(out, "  {CROSSING} {}", annotation.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use battery_soh_domain::enums::ChargingHabit;
    use battery_soh_domain::value_objects::parameters::SimulationParameters;
    use battery_soh_simulation::simulate;

    fn harsh_result() -> SimulationResult {
        simulate(
            &SimulationParameters::default()
                .with_charge_cycles_per_week(21.0)
                .with_temperature(60.0)
                .with_charging_habit(ChargingHabit::Fast)
                .with_depth_of_discharge(100.0)
                .with_years(2),
        )
    }

    #[test]
    fn test_model_from_result() {
        let result = harsh_result();
        let chart = ChartModel::from_result(&result);

        assert_eq!(chart.points.len(), result.len());
        assert_eq!(chart.points[0], (0.0, 100.0));
        assert_eq!(chart.y_range, (0.0, 105.0));
        assert_eq!(chart.reference_lines.len(), 2);
        assert_eq!(chart.annotations.len(), 2);
        assert!(chart.annotations[0].text.starts_with("80% @ "));
        assert!(chart.annotations[0].text.ends_with(" yr"));
    }

    #[test]
    fn test_model_without_crossings() {
        let result = simulate(&SimulationParameters::default());
        let chart = ChartModel::from_result(&result);
        assert!(chart.annotations.is_empty());
        assert!((chart.max_year() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_text_layout() {
        let chart = ChartModel::from_result(&harsh_result());
        let text = render_text(&chart, 40, 12);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], chart.title);
        // title, y label, 12 plot rows, axis, x labels, curve legend, 2 lines, 2 annotations
        assert_eq!(lines.len(), 2 + 12 + 2 + 1 + 2 + 2);
        assert!(lines[2].starts_with(" 105.0 |"));
        assert!(lines[3].starts_with("  95.5 |*"));
        assert!(text.contains("80% SoH (Typical EOL)"));
        assert!(text.contains("60% SoH (Severely Degraded)"));
        assert!(text.contains(": 60% @ "));
    }

    #[test]
    fn test_render_handles_tiny_sizes() {
        let chart = ChartModel::from_result(&simulate(
            &SimulationParameters::default().with_horizon_days(1),
        ));
        let text = render_text(&chart, 0, 0);
        assert!(text.contains('*'));
    }
}
