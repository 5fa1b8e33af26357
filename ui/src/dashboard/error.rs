use dioxus::prelude::*;

use crate::t;

/// Shown in place of every chart when the data couldn't be loaded.
#[component]
pub fn LoadErrorCard(message: String) -> Element {
    rsx! {
        section { class: "results-card dashboard-error", role: "alert",
            div { class: "results-card__header",
                h2 { {t!("error-title")} }
            }
            p { class: "dashboard-error__message", "{message}" }
            p { class: "results-card__placeholder", {t!("error-hint")} }
        }
    }
}
