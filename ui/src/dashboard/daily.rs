use dioxus::prelude::*;

use crate::chart::geometry::Frame;
use crate::chart::lines::{average_chart, peak_chart, DualAxisChart};
use crate::stats::daily::DayTrend;
use crate::t;

#[component]
pub fn DailyTrendsCard(daily: Option<Vec<DayTrend>>) -> Element {
    let body = match daily {
        None => rsx! {
            p { class: "results-card__placeholder", {t!("daily-select-all")} }
        },
        Some(trends) if trends.is_empty() => rsx! {
            p { class: "results-card__placeholder", {t!("chart-empty")} }
        },
        Some(trends) => {
            let frame = Frame::new(560.0, 320.0).with_margins(52.0, 52.0, 16.0, 40.0);
            let peak = peak_chart(&trends, frame);
            let average = average_chart(&trends, frame);
            rsx! {
                div { class: "dashboard-daily__charts",
                    {dual_axis(t!("daily-peak-title"), peak)}
                    {dual_axis(t!("daily-average-title"), average)}
                }
            }
        }
    };

    rsx! {
        section { class: "results-card dashboard-chart dashboard-daily",
            div { class: "results-card__header",
                h2 { {t!("daily-title")} }
            }
            {body}
        }
    }
}

fn dual_axis(heading: String, chart: DualAxisChart) -> Element {
    let frame = chart.frame;

    rsx! {
        figure { class: "dashboard-daily__chart",
            figcaption { "{heading}" }
            svg {
                class: "chart chart--dual",
                view_box: "{frame.view_box()}",
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",
                "aria-label": "{heading}",

                g { class: "chart__grid",
                    for tick in chart.left_ticks.iter() {
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
                            fill: "{chart.left.color}",
                            "{tick.label}"
                        }
                    }
                }

                for tick in chart.right_ticks.iter() {
                    text {
                        class: "chart__tick",
                        x: "{frame.plot_right() + 6.0}",
                        y: "{tick.position}",
                        text_anchor: "start",
                        dominant_baseline: "middle",
                        fill: "{chart.right.color}",
                        "{tick.label}"
                    }
                }

                for tick in chart.x_ticks.iter() {
                    text {
                        class: "chart__tick",
                        x: "{tick.position}",
                        y: "{frame.plot_bottom() + 18.0}",
                        text_anchor: "middle",
                        "{tick.label}"
                    }
                }

                for series in [&chart.left, &chart.right] {
                    g { class: "chart__series",
                        polyline {
                            points: "{series.points}",
                            fill: "none",
                            stroke: "{series.color}",
                            stroke_width: "3",
                        }
                        for marker in series.markers.iter() {
                            g { class: "chart__marker",
                                circle {
                                    cx: "{marker.x}",
                                    cy: "{marker.y}",
                                    r: "5",
                                    fill: "{series.color}",
                                }
                                title { "{marker.hover}" }
                            }
                        }
                    }
                }
            }

            ul { class: "chart-legend",
                li { class: "chart-legend__item",
                    span { class: "chart-legend__swatch", style: "background: {chart.left.color}" }
                    "{chart.left.name}"
                }
                li { class: "chart-legend__item",
                    span { class: "chart-legend__swatch", style: "background: {chart.right.color}" }
                    "{chart.right.name}"
                }
            }
        }
    }
}
