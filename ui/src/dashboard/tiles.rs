use dioxus::prelude::*;

use crate::core::format;
use crate::stats::completion::{Completion, CompletionGap};
use crate::stats::totals::Totals;
use crate::stats::trend::{TrendError, MIN_POINTS};
use crate::t;

#[component]
pub fn SummaryTiles(
    totals: Totals,
    completion: Completion,
    most_common_death: Option<(String, usize)>,
) -> Element {
    let total_value = format::format_minutes(totals.total_min);
    let total_meta = t!(
        "tile-total-meta",
        hours = format::format_hours(totals.total_min),
        runs = totals.runs.to_string()
    );

    let (average_value, average_meta) = match (totals.mean_min, totals.longest_min) {
        (Some(mean), Some(longest)) => (
            format::format_duration_label(mean),
            t!("tile-average-meta", longest = format::format_duration_label(longest)),
        ),
        _ => ("—".to_string(), t!("tile-no-runs")),
    };

    let (completion_value, completion_meta) = completion_tile(&completion);

    let (death_value, death_meta) = match most_common_death {
        Some((cause, deaths)) => (cause, t!("tile-death-meta", deaths = deaths.to_string())),
        None => ("—".to_string(), t!("tile-death-none")),
    };

    rsx! {
        section { class: "results-card dashboard-tiles",
            div { class: "results-highlights",
                div { class: "results-highlight",
                    span { class: "results-highlight__icon", aria_hidden: "true", "⏱️" }
                    span { class: "results-highlight__label", {t!("tile-total-label")} }
                    strong { class: "results-highlight__value", "{total_value}" }
                    span { class: "results-highlight__meta", "{total_meta}" }
                }
                div { class: "results-highlight",
                    span { class: "results-highlight__icon", aria_hidden: "true", "📊" }
                    span { class: "results-highlight__label", {t!("tile-average-label")} }
                    strong { class: "results-highlight__value", "{average_value}" }
                    span { class: "results-highlight__meta", "{average_meta}" }
                }
                div { class: "results-highlight",
                    span { class: "results-highlight__icon", aria_hidden: "true", "🚀" }
                    span { class: "results-highlight__label", {t!("tile-completion-label")} }
                    strong { class: "results-highlight__value", "{completion_value}" }
                    span { class: "results-highlight__meta", "{completion_meta}" }
                }
                div { class: "results-highlight",
                    span { class: "results-highlight__icon", aria_hidden: "true", "💀" }
                    span { class: "results-highlight__label", {t!("tile-death-label")} }
                    strong { class: "results-highlight__value", "{death_value}" }
                    span { class: "results-highlight__meta", "{death_meta}" }
                }
            }
        }
    }
}

fn completion_tile(completion: &Completion) -> (String, String) {
    match completion {
        Completion::Actual {
            run,
            minutes,
            victory: true,
        } => (
            format::format_duration_label(*minutes),
            t!("tile-completion-victory", run = run.to_string()),
        ),
        Completion::Actual { run, minutes, .. } => (
            format::format_duration_label(*minutes),
            t!("tile-completion-last", run = run.to_string()),
        ),
        Completion::Predicted { milestone, minutes } => (
            format!("≈ {}", format::format_duration_label(minutes.max(0.0))),
            t!("tile-completion-predicted", milestone = milestone.as_str()),
        ),
        Completion::Unavailable(gap) => {
            let reason = match gap {
                CompletionGap::NoRuns => t!("tile-no-runs"),
                CompletionGap::NoMilestones => t!("tile-completion-no-milestones"),
                CompletionGap::Trend(TrendError::InsufficientData(points)) => t!(
                    "tile-completion-insufficient",
                    points = points.to_string(),
                    required = MIN_POINTS.to_string()
                ),
                CompletionGap::Trend(TrendError::Degenerate) => t!("prediction-degenerate"),
            };
            ("—".to_string(), reason)
        }
    }
}
