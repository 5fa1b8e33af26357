use dioxus::prelude::*;

use crate::core::config::{CompletionMetric, SourceConfig};
use crate::dashboard::DashboardContext;
use crate::t;

#[component]
pub fn About() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let context = try_use_context::<DashboardContext>().unwrap_or_default();
    let config = &context.config;
    let source = match &config.source {
        SourceConfig::File { path } => {
            t!("about-source-file", path = path.display().to_string())
        }
        SourceConfig::Embedded => t!("about-source-embedded"),
    };
    let completion = match config.completion {
        CompletionMetric::Actual => t!("about-completion-actual"),
        CompletionMetric::Predicted => t!("about-completion-predicted"),
    };

    rsx! {
        section { class: "page page-about",
            h1 { {t!("about-title")} }
            p { {t!("about-intro")} }

            h2 { {t!("about-data-heading")} }
            ul { class: "page-about__facts",
                li { "{source}" }
                li { "{completion}" }
                if let Some(rule) = config.victory.as_ref() {
                    li { {t!("about-victory", player = rule.player.as_str())} }
                }
                li {
                    {t!("about-threshold", minutes = config.label_threshold_minutes.to_string())}
                }
            }

            h2 { {t!("about-prediction-heading")} }
            p { {t!("about-prediction")} }
            p { class: "page-about__caveat", {t!("prediction-caveat")} }
        }
    }
}
