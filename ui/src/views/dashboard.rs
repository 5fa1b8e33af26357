use dioxus::prelude::*;

use crate::core::filter::DayFilter;
use crate::dashboard::{
    DailyTrendsCard, DashboardContext, DashboardModel, DashboardState, DaySelector,
    LoadErrorCard, MilestonePieCard, PredictionCard, RunTableCard, StackedBarCard, SummaryTiles,
};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let context = try_use_context::<DashboardContext>().unwrap_or_default();
    // Language code signal provided by the launcher; read inside the memo so
    // localized chart text is rebuilt on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let state = use_hook({
        let context = context.clone();
        move || DashboardState::load(&context)
    });
    let selected = use_signal(DayFilter::default);

    let model = use_memo({
        let state = state.clone();
        let config = context.config.clone();
        move || {
            if let Some(code) = lang_code {
                code();
            }
            let day = selected();
            state
                .dataset()
                .map(|dataset| DashboardModel::build(dataset, &config, day))
        }
    });

    let title = context.config.title.clone();

    let content = match (&state, model()) {
        (DashboardState::Failed(message), _) => rsx! {
            LoadErrorCard { message: message.clone() }
        },
        (DashboardState::Ready(dataset), Some(model)) => {
            let options = DayFilter::options(dataset);
            rsx! {
                div { class: "dashboard__toolbar",
                    DaySelector { options, selected }
                    span { class: "dashboard__source",
                        {t!("dashboard-source", origin = dataset.origin.to_string())}
                    }
                }

                SummaryTiles {
                    totals: model.totals.clone(),
                    completion: model.completion.clone(),
                    most_common_death: model.most_common_death.clone(),
                }

                div { class: "dashboard__grid",
                    StackedBarCard {
                        title: t!("chart-deaths-title"),
                        axis_label: t!("chart-deaths-axis"),
                        chart: model.deaths.clone(),
                        vertical: false,
                    }
                    StackedBarCard {
                        title: t!("chart-time-lost-title"),
                        axis_label: t!("chart-time-lost-axis"),
                        chart: model.time_lost.clone(),
                        vertical: false,
                    }
                }

                StackedBarCard {
                    title: t!("chart-timeline-title"),
                    axis_label: t!("chart-timeline-axis"),
                    chart: model.timeline.clone(),
                    vertical: true,
                }

                div { class: "dashboard__grid",
                    PredictionCard { prediction: model.prediction.clone() }
                    MilestonePieCard { summary: model.milestones.clone() }
                }

                DailyTrendsCard { daily: model.daily.clone() }
                RunTableCard { table: model.table.clone() }
            }
        }
        (DashboardState::Ready(_), None) => rsx! {},
    };

    rsx! {
        section { class: "page page-dashboard",
            h1 { "{title}" }
            {content}
        }
    }
}
