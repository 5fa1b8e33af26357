use dioxus::prelude::*;

use crate::chart::bars::{layout_horizontal, layout_vertical, PlacedSegment, StackedBars};
use crate::chart::geometry::Frame;
use crate::t;

const ROW_HEIGHT: f64 = 46.0;
const MIN_TEXT_WIDTH: f64 = 26.0;
const MIN_TEXT_HEIGHT: f64 = 13.0;

/// Stacked bar chart card. Horizontal charts put one row per bar with the
/// first bar at the bottom; vertical charts stack downward from the top.
#[component]
pub fn StackedBarCard(
    title: String,
    axis_label: String,
    chart: StackedBars,
    vertical: bool,
) -> Element {
    if chart.is_empty() {
        return rsx! {
            section { class: "results-card dashboard-chart",
                div { class: "results-card__header", h2 { "{title}" } }
                p { class: "results-card__placeholder", {t!("chart-empty")} }
            }
        };
    }

    let frame = if vertical {
        Frame::new(760.0, 440.0).with_margins(60.0, 16.0, 30.0, 36.0)
    } else {
        let height = 56.0 + ROW_HEIGHT * chart.bars.len() as f64;
        Frame::new(760.0, height).with_margins(110.0, 24.0, 8.0, 48.0)
    };
    let layout = if vertical {
        layout_vertical(&chart, frame)
    } else {
        layout_horizontal(&chart, frame)
    };
    let category_anchor = if vertical { "middle" } else { "end" };

    rsx! {
        section { class: "results-card dashboard-chart",
            div { class: "results-card__header", h2 { "{title}" } }
            svg {
                class: "chart",
                view_box: "{frame.view_box()}",
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",
                "aria-label": "{title}",

                g { class: "chart__grid",
                    for tick in layout.ticks.iter() {
                        if vertical {
                            line {
                                x1: "{frame.left}",
                                x2: "{frame.plot_right()}",
                                y1: "{tick.position}",
                                y2: "{tick.position}",
                            }
                            text {
                                class: "chart__tick",
                                x: "{frame.left - 6.0}",
                                y: "{tick.position}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                "{tick.label}"
                            }
                        } else {
                            line {
                                x1: "{tick.position}",
                                x2: "{tick.position}",
                                y1: "{frame.top}",
                                y2: "{frame.plot_bottom()}",
                            }
                            text {
                                class: "chart__tick",
                                x: "{tick.position}",
                                y: "{frame.plot_bottom() + 16.0}",
                                text_anchor: "middle",
                                "{tick.label}"
                            }
                        }
                    }
                }

                for bar in layout.bars.iter() {
                    g { class: "chart__bar",
                        text {
                            class: "chart__category",
                            x: "{bar.label_x}",
                            y: "{bar.label_y}",
                            text_anchor: "{category_anchor}",
                            dominant_baseline: "middle",
                            "{bar.label}"
                        }
                        for segment in bar.segments.iter() {
                            g { class: "chart__segment",
                                rect {
                                    x: "{segment.x}",
                                    y: "{segment.y}",
                                    width: "{segment.width}",
                                    height: "{segment.height}",
                                    fill: "{segment.color}",
                                }
                                title { "{segment.hover}" }
                                {segment_text(segment)}
                            }
                        }
                    }
                }

                if !vertical {
                    text {
                        class: "chart__axis-title",
                        x: "{frame.left + frame.plot_width() / 2.0}",
                        y: "{frame.height - 6.0}",
                        text_anchor: "middle",
                        "{axis_label}"
                    }
                }
            }

            if vertical {
                p { class: "chart__caption", "{axis_label}" }
            }

            if !chart.legend.is_empty() {
                ul { class: "chart-legend",
                    for entry in chart.legend.iter() {
                        li { class: "chart-legend__item",
                            span {
                                class: "chart-legend__swatch",
                                style: "background: {entry.color}",
                            }
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Centered multi-line label, dropped when the segment is too small to hold it.
fn segment_text(segment: &PlacedSegment) -> Element {
    if segment.text.is_empty()
        || segment.width < MIN_TEXT_WIDTH
        || segment.height < MIN_TEXT_HEIGHT
    {
        return rsx! {};
    }

    let (cx, cy) = segment.center();
    let first_dy = -0.6 * (segment.text.len() as f64 - 1.0);
    let lines: Vec<(String, String)> = segment
        .text
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let dy = if idx == 0 {
                format!("{first_dy}em")
            } else {
                "1.2em".to_string()
            };
            (dy, line.clone())
        })
        .collect();

    rsx! {
        text {
            class: "chart__segment-text",
            x: "{cx}",
            y: "{cy}",
            text_anchor: "middle",
            dominant_baseline: "middle",
            for (dy, line) in lines.into_iter() {
                tspan { x: "{cx}", dy: "{dy}", "{line}" }
            }
        }
    }
}
