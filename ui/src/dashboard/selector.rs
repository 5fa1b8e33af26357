use dioxus::prelude::*;

use crate::core::filter::DayFilter;
use crate::t;

pub(crate) fn filter_label(filter: &DayFilter) -> String {
    match filter {
        DayFilter::All => t!("filter-all-days"),
        DayFilter::Day(day) => t!("timeline-day", day = day.to_string()),
    }
}

#[component]
pub fn DaySelector(options: Vec<DayFilter>, selected: Signal<DayFilter>) -> Element {
    let current = selected();

    let on_change = move |evt: FormEvent| {
        let Some(filter) = DayFilter::from_key(&evt.value()) else {
            tracing::warn!(value = %evt.value(), "ignoring unknown day selection");
            return;
        };
        tracing::debug!(%filter, "day filter changed");
        let mut selected = selected;
        selected.set(filter);
    };

    rsx! {
        div { class: "day-selector",
            label { class: "day-selector__label", r#for: "day-select", {t!("filter-label")} }
            select {
                id: "day-select",
                class: "day-selector__select",
                value: "{current.key()}",
                onchange: on_change,
                for choice in options.iter() {
                    option {
                        key: "{choice.key()}",
                        value: "{choice.key()}",
                        selected: *choice == current,
                        "{filter_label(choice)}"
                    }
                }
            }
        }
    }
}
