//! Stacked bar series (deaths, time lost, run timeline) and their layout.

use super::geometry::{axis_ticks, tick_label, Frame, LinearScale};
use super::{palette_color, CAUSE_PALETTE, RUN_PALETTE};
use crate::core::format::{format_duration_label, format_number};
use crate::stats::deaths::DeathBreakdown;
use crate::stats::time_lost::PlayerTimeLost;
use crate::stats::timeline::TimelineColumn;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub value: f64,
    pub color: &'static str,
    /// Lines drawn inside the segment; empty when it is too small for text.
    pub text: Vec<String>,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub segments: Vec<Segment>,
}

impl Bar {
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackedBars {
    /// First bar sits next to the axis origin.
    pub bars: Vec<Bar>,
    pub legend: Vec<LegendEntry>,
}

impl StackedBars {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_total(&self) -> f64 {
        self.bars.iter().map(Bar::total).fold(0.0, f64::max)
    }
}

/// Palette slot of `cause` within the first-appearance list.
pub fn cause_color(causes: &[String], cause: &str) -> &'static str {
    let idx = causes.iter().position(|c| c == cause).unwrap_or(0);
    palette_color(CAUSE_PALETTE, idx)
}

pub fn death_bars(breakdown: &DeathBreakdown) -> StackedBars {
    let bars = breakdown
        .players
        .iter()
        .map(|player| Bar {
            label: player.player.clone(),
            segments: player
                .causes
                .iter()
                .map(|cause| Segment {
                    value: cause.deaths as f64,
                    color: cause_color(&breakdown.causes, &cause.cause),
                    text: vec![cause.cause.clone()],
                    hover: t!(
                        "hover-death",
                        player = player.player.as_str(),
                        cause = cause.cause.as_str(),
                        deaths = cause.deaths.to_string()
                    ),
                })
                .collect(),
        })
        .collect();

    let legend = breakdown
        .causes
        .iter()
        .map(|cause| LegendEntry {
            label: cause.clone(),
            color: cause_color(&breakdown.causes, cause),
        })
        .collect();

    StackedBars { bars, legend }
}

/// Every segment names its run; the duration is added once the segment is
/// at least `threshold` minutes.
pub fn time_lost_bars(players: &[PlayerTimeLost], threshold: f64) -> StackedBars {
    let bars = players
        .iter()
        .map(|player| Bar {
            label: player.player.clone(),
            segments: player
                .runs
                .iter()
                .enumerate()
                .map(|(idx, segment)| {
                    let mut text = vec![t!("segment-run", run = segment.run.to_string())];
                    if segment.minutes >= threshold {
                        text.push(format_duration_label(segment.minutes));
                    }
                    Segment {
                        value: segment.minutes,
                        color: palette_color(RUN_PALETTE, idx),
                        text,
                        hover: t!(
                            "hover-time-lost",
                            player = player.player.as_str(),
                            run = segment.run.to_string(),
                            minutes = format_number(segment.minutes, 0)
                        ),
                    }
                })
                .collect(),
        })
        .collect();

    StackedBars {
        bars,
        legend: Vec::new(),
    }
}

/// Segments below `threshold` minutes stay unlabelled.
pub fn timeline_bars(columns: &[TimelineColumn], threshold: f64) -> StackedBars {
    let bars = columns
        .iter()
        .map(|column| Bar {
            label: match column.day {
                Some(day) => t!("timeline-day", day = day.to_string()),
                None => t!("timeline-all-runs"),
            },
            segments: column
                .runs
                .iter()
                .enumerate()
                .map(|(idx, run)| Segment {
                    value: run.minutes,
                    color: palette_color(RUN_PALETTE, idx),
                    text: if run.minutes >= threshold {
                        vec![t!("segment-run", run = run.run.to_string())]
                    } else {
                        Vec::new()
                    },
                    hover: match column.day {
                        Some(day) => t!(
                            "hover-timeline-day",
                            run = run.run.to_string(),
                            day = day.to_string(),
                            player = run.player.as_str(),
                            minutes = format_number(run.minutes, 0)
                        ),
                        None => t!(
                            "hover-timeline",
                            run = run.run.to_string(),
                            player = run.player.as_str(),
                            minutes = format_number(run.minutes, 0)
                        ),
                    },
                })
                .collect(),
        })
        .collect();

    StackedBars {
        bars,
        legend: Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSegment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub text: Vec<String>,
    pub hover: String,
}

impl PlacedSegment {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBar {
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub segments: Vec<PlacedSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the value axis.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub frame: Frame,
    pub bars: Vec<PlacedBar>,
    pub ticks: Vec<AxisTick>,
}

const BAR_FILL: f64 = 0.7;

fn value_ticks(scale: &LinearScale, values: &[f64]) -> Vec<AxisTick> {
    values
        .iter()
        .map(|v| AxisTick {
            position: scale.map(*v),
            label: tick_label(*v),
        })
        .collect()
}

/// One row per bar, values along x. The first bar is drawn at the bottom.
pub fn layout_horizontal(chart: &StackedBars, frame: Frame) -> BarLayout {
    let (top, tick_values) = axis_ticks(chart.max_total(), 5);
    let scale = LinearScale::new((0.0, top), (frame.left, frame.plot_right()));
    let band = frame.plot_height() / chart.bars.len().max(1) as f64;
    let thickness = band * BAR_FILL;

    let bars = chart
        .bars
        .iter()
        .enumerate()
        .map(|(row, bar)| {
            let band_top = frame.plot_bottom() - (row + 1) as f64 * band;
            let y = band_top + (band - thickness) / 2.0;
            let mut offset = 0.0;
            let segments = bar
                .segments
                .iter()
                .map(|segment| {
                    let x = scale.map(offset);
                    offset += segment.value;
                    PlacedSegment {
                        x,
                        y,
                        width: scale.map(offset) - x,
                        height: thickness,
                        color: segment.color,
                        text: segment.text.clone(),
                        hover: segment.hover.clone(),
                    }
                })
                .collect();
            PlacedBar {
                label: bar.label.clone(),
                label_x: frame.left - 8.0,
                label_y: band_top + band / 2.0,
                segments,
            }
        })
        .collect();

    BarLayout {
        frame,
        bars,
        ticks: value_ticks(&scale, &tick_values),
    }
}

/// One column per bar, values growing downward from the top edge so the
/// first run of a day sits at the top of its column.
pub fn layout_vertical(chart: &StackedBars, frame: Frame) -> BarLayout {
    let (top, tick_values) = axis_ticks(chart.max_total(), 5);
    let scale = LinearScale::new((0.0, top), (frame.top, frame.plot_bottom()));
    let band = frame.plot_width() / chart.bars.len().max(1) as f64;
    let thickness = band * BAR_FILL;

    let bars = chart
        .bars
        .iter()
        .enumerate()
        .map(|(col, bar)| {
            let band_left = frame.left + col as f64 * band;
            let x = band_left + (band - thickness) / 2.0;
            let mut offset = 0.0;
            let segments = bar
                .segments
                .iter()
                .map(|segment| {
                    let y = scale.map(offset);
                    offset += segment.value;
                    PlacedSegment {
                        x,
                        y,
                        width: thickness,
                        height: scale.map(offset) - y,
                        color: segment.color,
                        text: segment.text.clone(),
                        hover: segment.hover.clone(),
                    }
                })
                .collect();
            PlacedBar {
                label: bar.label.clone(),
                label_x: band_left + band / 2.0,
                label_y: frame.top - 6.0,
                segments,
            }
        })
        .collect();

    BarLayout {
        frame,
        bars,
        ticks: value_ticks(&scale, &tick_values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{apply, DayFilter};
    use crate::core::record::fixtures::record;
    use crate::core::record::RunRecord;
    use crate::stats::deaths::{death_breakdown, PlayerOrder};
    use crate::stats::time_lost::time_lost;
    use crate::stats::timeline::timeline;

    fn records() -> Vec<RunRecord> {
        vec![
            record(1, 1, 45.0, "Alex", "Creeper"),
            record(2, 1, 10.0, "Sam", "Lava"),
            record(3, 2, 31.0, "Alex", "Lava"),
            record(4, 2, 5.0, "Alex", "Fall"),
        ]
    }

    #[test]
    fn cause_colors_follow_first_appearance() {
        crate::i18n::init();
        let breakdown = death_breakdown(&records(), PlayerOrder::Ascending);
        let chart = death_bars(&breakdown);

        assert_eq!(chart.legend.len(), 3);
        assert_eq!(chart.legend[0].label, "Creeper");
        assert_eq!(chart.legend[0].color, CAUSE_PALETTE[0]);
        assert_eq!(chart.legend[1].color, CAUSE_PALETTE[1]);

        // same cause, same color, whichever player it appears under
        let lava: Vec<_> = chart
            .bars
            .iter()
            .flat_map(|b| &b.segments)
            .filter(|s| s.text == ["Lava"])
            .map(|s| s.color)
            .collect();
        assert_eq!(lava, vec![CAUSE_PALETTE[1], CAUSE_PALETTE[1]]);
        assert_eq!(chart.max_total(), 3.0);
    }

    #[test]
    fn time_lost_labels_respect_the_threshold() {
        crate::i18n::init();
        let chart = time_lost_bars(&time_lost(&records()), 30.0);
        let alex = chart.bars.iter().find(|b| b.label == "Alex").unwrap();

        // longest first; 45 and 31 get a duration line, 5 does not
        let lines: Vec<usize> = alex.segments.iter().map(|s| s.text.len()).collect();
        assert_eq!(lines, vec![2, 2, 1]);
        assert_eq!(alex.segments[0].text[1], "45 min");
        assert_eq!(alex.segments[0].color, RUN_PALETTE[0]);
        assert_eq!(alex.segments[2].color, RUN_PALETTE[2]);
    }

    #[test]
    fn timeline_hides_small_segments() {
        crate::i18n::init();
        let chart = timeline_bars(&timeline(&records(), DayFilter::All), 30.0);
        assert_eq!(chart.bars.len(), 2);
        let texts: Vec<bool> = chart.bars[0]
            .segments
            .iter()
            .map(|s| s.text.is_empty())
            .collect();
        assert_eq!(texts, vec![false, true]);

        let day_two = apply(&records(), DayFilter::Day(2));
        let single = timeline_bars(&timeline(&day_two, DayFilter::Day(2)), 30.0);
        assert_eq!(single.bars.len(), 1);
        assert_eq!(single.bars[0].segments.len(), 2);
    }

    #[test]
    fn horizontal_layout_stacks_segments_end_to_end() {
        crate::i18n::init();
        let chart = time_lost_bars(&time_lost(&records()), 30.0);
        let frame = Frame::new(600.0, 300.0);
        let layout = layout_horizontal(&chart, frame);

        assert_eq!(layout.bars.len(), 2);
        // first bar sits lowest
        assert!(layout.bars[0].label_y > layout.bars[1].label_y);

        let alex = layout.bars.iter().find(|b| b.label == "Alex").unwrap();
        for pair in alex.segments.windows(2) {
            assert!((pair[0].x + pair[0].width - pair[1].x).abs() < 1e-9);
        }
        assert_eq!(alex.segments[0].x, frame.left);
        let end = alex.segments.last().map(|s| s.x + s.width).unwrap();
        assert!(end <= frame.plot_right() + 1e-9);
        assert_eq!(layout.ticks.first().map(|t| t.position), Some(frame.left));
    }

    #[test]
    fn vertical_layout_grows_downward() {
        crate::i18n::init();
        let chart = timeline_bars(&timeline(&records(), DayFilter::All), 30.0);
        let frame = Frame::new(400.0, 300.0);
        let layout = layout_vertical(&chart, frame);

        let day_one = &layout.bars[0];
        assert_eq!(day_one.segments[0].y, frame.top);
        assert!(day_one.segments[1].y > day_one.segments[0].y);
        assert!(layout.bars[1].label_x > day_one.label_x);
    }

    #[test]
    fn empty_chart_lays_out_nothing() {
        let layout = layout_horizontal(&StackedBars::default(), Frame::new(100.0, 100.0));
        assert!(layout.bars.is_empty());
        assert_eq!(layout.ticks.len(), 2);
    }
}
