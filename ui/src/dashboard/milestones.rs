use dioxus::prelude::*;

use super::model::MilestoneSummary;
use crate::chart::pie::{has_unreached, layout_pie};
use crate::core::format;
use crate::t;

const SIZE: f64 = 320.0;

#[component]
pub fn MilestonePieCard(summary: Option<MilestoneSummary>) -> Element {
    let Some(milestones) = summary else {
        return rsx! {
            section { class: "results-card dashboard-chart dashboard-milestones",
                div { class: "results-card__header", h2 { {t!("milestones-title")} } }
                p { class: "results-card__placeholder", {t!("milestones-none")} }
            }
        };
    };

    let center = SIZE / 2.0;
    let wedges = layout_pie(&milestones.slices, center, center, center - 10.0);
    let starred = has_unreached(&milestones.slices);
    let runs = milestones.rates.runs;

    rsx! {
        section { class: "results-card dashboard-chart dashboard-milestones",
            div { class: "results-card__header",
                h2 { {t!("milestones-title")} }
                span { class: "results-card__meta",
                    {t!("milestones-meta", runs = runs.to_string())}
                }
            }

            if runs == 0 {
                p { class: "results-card__placeholder", {t!("chart-empty")} }
            } else {
                div { class: "dashboard-milestones__body",
                    svg {
                        class: "chart chart--pie",
                        view_box: "0 0 {SIZE} {SIZE}",
                        role: "img",
                        for wedge in wedges.iter() {
                            g { class: "chart__slice",
                                path { d: "{wedge.path}", fill: "{wedge.color}" }
                                title { "{wedge.hover}" }
                                if let Some((x, y, label)) = wedge.text.as_ref() {
                                    text {
                                        class: "chart__slice-text",
                                        x: "{x}",
                                        y: "{y}",
                                        text_anchor: "middle",
                                        dominant_baseline: "middle",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }

                    ul { class: "chart-legend chart-legend--column",
                        for slice in milestones.slices.iter() {
                            li { class: "chart-legend__item",
                                span {
                                    class: "chart-legend__swatch",
                                    style: "background: {slice.color}",
                                }
                                span { class: "chart-legend__label", "{slice.label}" }
                                span { class: "chart-legend__value", "{slice.count}" }
                            }
                        }
                    }
                }

                if starred {
                    p { class: "chart__caption chart__caption--muted", {t!("milestones-unreached-note")} }
                }

                details { class: "dashboard-milestones__rates",
                    summary { {t!("milestones-rates-title")} }
                    ul {
                        for rate in milestones.rates.rates.iter() {
                            li {
                                span { "{rate.name}" }
                                span { class: "dashboard-milestones__rate",
                                    "{format::format_percent(rate.rate)} ({rate.count})"
                                }
                            }
                        }
                        li {
                            span { {t!("pie-none-reached")} }
                            span { class: "dashboard-milestones__rate",
                                "{milestones.rates.none_reached}"
                            }
                        }
                    }
                }
            }
        }
    }
}
