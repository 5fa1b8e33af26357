//! Scatter-with-trend and dual-axis line charts.

use super::bars::AxisTick;
use super::geometry::{axis_ticks, polyline_points, tick_label, Frame, LinearScale};
use super::{ACTUAL_COLOR, PREDICTED_COLOR, TREND_COLOR};
use crate::core::format::format_number;
use crate::stats::daily::DayTrend;
use crate::stats::trend::MilestoneForecast;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    /// `points` attribute for the connecting polyline.
    pub points: String,
    pub markers: Vec<Marker>,
}

/// Evenly spaced categories with half a band of padding at each end.
fn category_scale(count: usize, frame: &Frame) -> LinearScale {
    LinearScale::new(
        (-0.5, count.max(1) as f64 - 0.5),
        (frame.left, frame.plot_right()),
    )
}

fn y_ticks(scale: &LinearScale, values: &[f64]) -> Vec<AxisTick> {
    values
        .iter()
        .map(|v| AxisTick {
            position: scale.map(*v),
            label: tick_label(*v),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionChart {
    pub frame: Frame,
    pub actual: Series,
    /// Dashed fitted line across every milestone.
    pub trend: Series,
    pub predicted: Series,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub r_squared: String,
}

/// Observed averages, the fitted line, and estimates for milestones nobody
/// has reached. Values below zero are drawn on the axis.
pub fn prediction_chart(forecast: &MilestoneForecast, frame: Frame) -> PredictionChart {
    let x = category_scale(forecast.fitted.len(), &frame);
    let max = forecast
        .actual
        .iter()
        .map(|p| p.mean_min)
        .chain(forecast.fitted.iter().map(|p| p.minutes))
        .fold(0.0, f64::max);
    let (top, tick_values) = axis_ticks(max, 5);
    let y = LinearScale::new((0.0, top), (frame.plot_bottom(), frame.top));
    let place = |index: usize, minutes: f64| (x.map(index as f64), y.map(minutes.max(0.0)));

    let actual_markers: Vec<Marker> = forecast
        .actual
        .iter()
        .zip(&forecast.positions)
        .map(|(p, position)| {
            let (mx, my) = place(*position, p.mean_min);
            Marker {
                x: mx,
                y: my,
                hover: t!(
                    "hover-average",
                    name = p.name.as_str(),
                    minutes = format_number(p.mean_min, 1)
                ),
            }
        })
        .collect();

    let predicted_markers: Vec<Marker> = forecast
        .predicted
        .iter()
        .map(|p| {
            let (mx, my) = place(p.index, p.minutes);
            Marker {
                x: mx,
                y: my,
                hover: t!(
                    "hover-predicted",
                    name = p.name.as_str(),
                    minutes = format_number(p.minutes, 1)
                ),
            }
        })
        .collect();

    let trend_points: Vec<(f64, f64)> = forecast
        .fitted
        .iter()
        .map(|p| place(p.index, p.minutes))
        .collect();

    PredictionChart {
        frame,
        actual: Series {
            name: t!("series-actual"),
            color: ACTUAL_COLOR,
            points: String::new(),
            markers: actual_markers,
        },
        trend: Series {
            name: t!("series-trend"),
            color: TREND_COLOR,
            points: polyline_points(&trend_points),
            markers: Vec::new(),
        },
        predicted: Series {
            name: t!("series-predicted"),
            color: PREDICTED_COLOR,
            points: String::new(),
            markers: predicted_markers,
        },
        x_ticks: forecast
            .fitted
            .iter()
            .map(|p| AxisTick {
                position: x.map(p.index as f64),
                label: p.name.clone(),
            })
            .collect(),
        y_ticks: y_ticks(&y, &tick_values),
        r_squared: format_number(forecast.fit.r_squared, 3),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DualAxisChart {
    pub frame: Frame,
    pub left: Series,
    pub right: Series,
    pub x_ticks: Vec<AxisTick>,
    pub left_ticks: Vec<AxisTick>,
    pub right_ticks: Vec<AxisTick>,
}

fn dual_axis(
    trends: &[DayTrend],
    frame: Frame,
    left: (String, fn(&DayTrend) -> f64),
    right: (String, fn(&DayTrend) -> f64),
) -> DualAxisChart {
    let x = category_scale(trends.len(), &frame);

    let series = |name: String, color: &'static str, value: fn(&DayTrend) -> f64| {
        let max = trends.iter().map(value).fold(0.0, f64::max);
        let (top, tick_values) = axis_ticks(max, 5);
        let y = LinearScale::new((0.0, top), (frame.plot_bottom(), frame.top));
        let points: Vec<(f64, f64)> = trends
            .iter()
            .enumerate()
            .map(|(idx, day)| (x.map(idx as f64), y.map(value(day))))
            .collect();
        let markers = trends
            .iter()
            .zip(&points)
            .map(|(day, (px, py))| Marker {
                x: *px,
                y: *py,
                hover: t!(
                    "hover-daily",
                    series = name.as_str(),
                    day = day.day.to_string(),
                    value = format_number(value(day), 1)
                ),
            })
            .collect();
        let ticks = y_ticks(&y, &tick_values);
        (
            Series {
                name,
                color,
                points: polyline_points(&points),
                markers,
            },
            ticks,
        )
    };

    let (left, left_ticks) = series(left.0, ACTUAL_COLOR, left.1);
    let (right, right_ticks) = series(right.0, PREDICTED_COLOR, right.1);

    DualAxisChart {
        frame,
        left,
        right,
        x_ticks: trends
            .iter()
            .enumerate()
            .map(|(idx, day)| AxisTick {
                position: x.map(idx as f64),
                label: t!("timeline-day", day = day.day.to_string()),
            })
            .collect(),
        left_ticks,
        right_ticks,
    }
}

/// Longest run (left) and furthest milestone (right) per day.
pub fn peak_chart(trends: &[DayTrend], frame: Frame) -> DualAxisChart {
    dual_axis(
        trends,
        frame,
        (t!("series-max-duration"), |d: &DayTrend| d.max_min),
        (t!("series-furthest-milestone"), |d: &DayTrend| d.furthest_milestone as f64),
    )
}

/// Mean run length (left) and mean milestones per run (right) per day.
pub fn average_chart(trends: &[DayTrend], frame: Frame) -> DualAxisChart {
    dual_axis(
        trends,
        frame,
        (t!("series-mean-duration"), |d: &DayTrend| d.mean_min),
        (t!("series-mean-achievements"), |d: &DayTrend| d.mean_achievements),
    )
}
