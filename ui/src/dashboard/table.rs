use dioxus::prelude::*;

use crate::core::format;
use crate::stats::table::RunTable;
use crate::t;

#[component]
pub fn RunTableCard(table: RunTable) -> Element {
    let caption = t!(
        "table-caption",
        runs = table.total_runs.to_string(),
        players = table.distinct_players.to_string()
    );

    rsx! {
        section { class: "results-card dashboard-table",
            div { class: "results-card__header",
                h2 { {t!("table-title")} }
                span { class: "results-card__meta", "{caption}" }
            }

            if table.rows.is_empty() {
                p { class: "results-card__placeholder", {t!("chart-empty")} }
            } else {
                div { class: "dashboard-table__scroll",
                    table { class: "run-table",
                        thead {
                            tr {
                                th { {t!("table-run")} }
                                th { {t!("table-day")} }
                                th { {t!("table-duration")} }
                                th { {t!("table-player")} }
                                th { {t!("table-cause")} }
                                for name in table.achievements.iter() {
                                    th { class: "run-table__achievement", title: "{name}", "{name}" }
                                }
                                th { {t!("table-notes")} }
                            }
                        }
                        tbody {
                            for row in table.rows.iter() {
                                tr {
                                    key: "{row.run}-{row.day}",
                                    class: format!(
                                        "run-table__row {}",
                                        if row.victory { "run-table__row--victory" } else { "" }
                                    ),
                                    td { "{row.run}" }
                                    td { "{row.day}" }
                                    td { class: "run-table__number", "{format::format_duration_label(row.duration_min)}" }
                                    td { "{row.player}" }
                                    td { "{row.cause}" }
                                    for reached in row.achievements.iter() {
                                        td { class: "run-table__flag",
                                            if *reached { "✓" } else { "" }
                                        }
                                    }
                                    td { class: "run-table__notes", "{row.notes}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
