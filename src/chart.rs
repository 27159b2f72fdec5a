//! Uptime chart rendering: maps a series to normalized plot coordinates
//! and assigns point and line colors.

use crate::model::{ServiceStatus, UptimeSeries};

/// Width of the normalized plot space
pub const PLOT_WIDTH: f64 = 200.0;

/// Height of the normalized plot space
pub const PLOT_HEIGHT: f64 = 80.0;

/// Vertical span actually used for values, leaving a margin at each end
pub const PLOT_DRAW_HEIGHT: f64 = 70.0;

/// Margin above value 100 and below value 0
pub const PLOT_Y_MARGIN: f64 = 5.0;

pub const COLOR_SUCCESS: &str = "#22c55e";
pub const COLOR_DEGRADED: &str = "#eab308";
pub const COLOR_FAILURE: &str = "#ef4444";

/// A sample mapped into the 200×80 plot space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// One plotted sample with its own color assignment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub point: PlotPoint,
    pub color: &'static str,
    /// The most recent sample; drawn larger with a ringed halo
    pub latest: bool,
}

/// The fully derived chart for one service
#[derive(Clone, Debug)]
pub struct RenderedChart {
    pub status: ServiceStatus,
    pub points: Vec<ChartPoint>,
    pub line_color: &'static str,
}

impl RenderedChart {
    /// The SVG polyline `points` attribute connecting all samples.
    ///
    /// Empty for a single-sample series, which has nothing to connect.
    pub fn polyline_points(&self) -> String {
        if self.points.len() < 2 {
            return String::new();
        }

        self.points
            .iter()
            .map(|p| format!("{},{}", p.point.x, p.point.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Color for one sample, independent of the rest of the series.
///
/// This deliberately differs from the connecting-line color, which follows
/// the series-level classification: a mixed history shows per-sample colors
/// along a line colored by the latest sample alone.
pub fn point_color(value: f64) -> &'static str {
    if value == 100.0 {
        COLOR_SUCCESS
    } else if value == 0.0 {
        COLOR_FAILURE
    } else {
        COLOR_DEGRADED
    }
}

/// Map a sample value to its vertical plot coordinate.
///
/// 100 lands at y = 5 (near the top), 0 at y = 75 (near the bottom).
pub fn y_coordinate(value: f64) -> f64 {
    PLOT_HEIGHT - (value / 100.0) * PLOT_DRAW_HEIGHT - PLOT_Y_MARGIN
}

/// Map a sample index to its horizontal plot coordinate.
///
/// Indices spread evenly across the full width. A single-sample series
/// centers its point instead of dividing by zero.
pub fn x_coordinate(index: usize, len: usize) -> f64 {
    if len < 2 {
        PLOT_WIDTH / 2.0
    } else {
        (index as f64 / (len - 1) as f64) * PLOT_WIDTH
    }
}

/// Derive the chart for a series: classification, plot points, and colors
pub fn render(series: &UptimeSeries) -> RenderedChart {
    let status = series.status();
    let len = series.len();

    let points = series
        .samples()
        .iter()
        .enumerate()
        .map(|(index, &value)| ChartPoint {
            point: PlotPoint {
                x: x_coordinate(index, len),
                y: y_coordinate(value),
            },
            color: point_color(value),
            latest: index == len - 1,
        })
        .collect();

    RenderedChart {
        status,
        points,
        line_color: status.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(samples: &[f64]) -> UptimeSeries {
        UptimeSeries::new(samples.to_vec()).unwrap()
    }

    #[test]
    fn test_x_spans_full_width() {
        let chart = render(&series(&[100.0, 100.0, 100.0, 100.0, 100.0]));
        assert_eq!(chart.points.first().unwrap().point.x, 0.0);
        assert_eq!(chart.points.last().unwrap().point.x, PLOT_WIDTH);
    }

    #[test]
    fn test_y_stays_within_margins() {
        for v in [0.0, 12.5, 50.0, 99.9, 100.0] {
            let y = y_coordinate(v);
            assert!(y >= PLOT_Y_MARGIN, "y {} below margin for value {}", y, v);
            assert!(
                y <= PLOT_HEIGHT - PLOT_Y_MARGIN,
                "y {} above margin for value {}",
                y,
                v
            );
        }
    }

    #[test]
    fn test_mixed_history_scenario() {
        let chart = render(&series(&[100.0, 100.0, 50.0, 0.0]));

        assert_eq!(chart.status, ServiceStatus::Down);
        assert_eq!(chart.points.len(), 4);

        let xs: Vec<f64> = chart.points.iter().map(|p| p.point.x).collect();
        assert_eq!(xs[0], 0.0);
        assert!((xs[1] - 200.0 / 3.0).abs() < 1e-9);
        assert!((xs[2] - 400.0 / 3.0).abs() < 1e-9);
        assert_eq!(xs[3], 200.0);

        let ys: Vec<f64> = chart.points.iter().map(|p| p.point.y).collect();
        assert_eq!(ys, vec![5.0, 5.0, 40.0, 75.0]);
    }

    #[test]
    fn test_point_color_is_per_sample() {
        let chart = render(&series(&[100.0, 0.0, 100.0]));
        let colors: Vec<&str> = chart.points.iter().map(|p| p.color).collect();
        assert_eq!(colors, vec![COLOR_SUCCESS, COLOR_FAILURE, COLOR_SUCCESS]);
    }

    #[test]
    fn test_line_color_follows_latest_sample_only() {
        // An earlier outage does not change the line color
        let chart = render(&series(&[0.0, 100.0]));
        assert_eq!(chart.line_color, COLOR_SUCCESS);

        let chart = render(&series(&[100.0, 30.0]));
        assert_eq!(chart.line_color, COLOR_DEGRADED);
    }

    #[test]
    fn test_single_sample_is_centered() {
        let chart = render(&series(&[100.0]));

        assert_eq!(chart.points.len(), 1);
        let point = chart.points[0];
        assert_eq!(point.point.x, PLOT_WIDTH / 2.0);
        assert!(point.point.x.is_finite());
        assert!(point.latest);
        assert!(chart.polyline_points().is_empty());
    }

    #[test]
    fn test_only_last_point_flagged_latest() {
        let chart = render(&series(&[100.0, 50.0, 0.0]));
        let flags: Vec<bool> = chart.points.iter().map(|p| p.latest).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_polyline_connects_all_points() {
        let chart = render(&series(&[100.0, 0.0]));
        assert_eq!(chart.polyline_points(), "0,5 200,75");
    }
}
