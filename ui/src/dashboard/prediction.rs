use dioxus::prelude::*;

use super::model::Prediction;
use crate::chart::geometry::Frame;
use crate::chart::lines::{prediction_chart, Marker};
use crate::stats::trend::{TrendError, MIN_POINTS};
use crate::t;

const MARKER_RADIUS: f64 = 6.0;

#[component]
pub fn PredictionCard(prediction: Prediction) -> Element {
    let heading = t!("prediction-title");
    let body = match prediction {
        Prediction::NoMilestones => placeholder(t!("prediction-no-milestones")),
        Prediction::Unavailable(TrendError::InsufficientData(points)) => placeholder(t!(
            "prediction-insufficient",
            points = points.to_string(),
            required = MIN_POINTS.to_string()
        )),
        Prediction::Unavailable(TrendError::Degenerate) => placeholder(t!("prediction-degenerate")),
        Prediction::Ready(forecast) => {
            let frame = Frame::new(760.0, 380.0).with_margins(60.0, 24.0, 16.0, 96.0);
            let chart = prediction_chart(&forecast, frame);
            let has_predicted = !chart.predicted.markers.is_empty();

            rsx! {
                svg {
                    class: "chart chart--prediction",
                    view_box: "{frame.view_box()}",
                    preserve_aspect_ratio: "xMidYMid meet",
                    role: "img",
                    "aria-label": "{heading}",

                    g { class: "chart__grid",
                        for tick in chart.y_ticks.iter() {
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
                        }
                    }

                    for tick in chart.x_ticks.iter() {
                        text {
                            class: "chart__tick chart__tick--slanted",
                            x: "{tick.position}",
                            y: "{frame.plot_bottom() + 14.0}",
                            text_anchor: "end",
                            transform: "rotate(-30 {tick.position} {frame.plot_bottom() + 14.0})",
                            "{tick.label}"
                        }
                    }

                    polyline {
                        class: "chart__trend",
                        points: "{chart.trend.points}",
                        fill: "none",
                        stroke: "{chart.trend.color}",
                        stroke_width: "2",
                        stroke_dasharray: "6 4",
                    }

                    for marker in chart.actual.markers.iter() {
                        g { class: "chart__marker",
                            circle {
                                cx: "{marker.x}",
                                cy: "{marker.y}",
                                r: "{MARKER_RADIUS}",
                                fill: "{chart.actual.color}",
                            }
                            title { "{marker.hover}" }
                        }
                    }

                    for marker in chart.predicted.markers.iter() {
                        g { class: "chart__marker chart__marker--predicted",
                            polygon {
                                points: "{diamond(marker)}",
                                fill: "{chart.predicted.color}",
                            }
                            title { "{marker.hover}" }
                        }
                    }
                }

                ul { class: "chart-legend",
                    li { class: "chart-legend__item",
                        span { class: "chart-legend__swatch", style: "background: {chart.actual.color}" }
                        "{chart.actual.name}"
                    }
                    li { class: "chart-legend__item",
                        span { class: "chart-legend__swatch", style: "background: {chart.trend.color}" }
                        "{chart.trend.name}"
                    }
                    if has_predicted {
                        li { class: "chart-legend__item",
                            span { class: "chart-legend__swatch", style: "background: {chart.predicted.color}" }
                            "{chart.predicted.name}"
                        }
                    }
                }

                p { class: "chart__caption",
                    {t!("prediction-r-squared", value = chart.r_squared.clone())}
                }
                p { class: "chart__caption chart__caption--muted", {t!("prediction-caveat")} }
            }
        }
    };

    rsx! {
        section { class: "results-card dashboard-chart dashboard-prediction",
            div { class: "results-card__header",
                h2 { "{heading}" }
            }
            {body}
        }
    }
}

fn placeholder(message: String) -> Element {
    rsx! {
        p { class: "results-card__placeholder", "{message}" }
    }
}

fn diamond(marker: &Marker) -> String {
    let r = MARKER_RADIUS + 1.0;
    format!(
        "{x},{top} {right},{y} {x},{bottom} {left},{y}",
        x = marker.x,
        y = marker.y,
        top = marker.y - r,
        bottom = marker.y + r,
        left = marker.x - r,
        right = marker.x + r
    )
}
