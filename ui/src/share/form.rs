//! Filter form: date range, chart-type select, and the sub-type checkbox
//! list regenerated from the catalog whenever the chart type changes.

use dioxus::prelude::*;

use crate::core::config::{ChartType, SubtypeOption};
use crate::share::controller::PreviewController;

#[component]
pub fn FilterPanel(controller: PreviewController) -> Element {
    let filter = (controller.filter)();
    let chart_value = filter.chart_type.map(ChartType::as_str).unwrap_or("");

    rsx! {
        div { class: "share-filter",
            div { class: "share-filter__dates",
                label { class: "share-filter__field",
                    span { "From" }
                    input {
                        r#type: "date",
                        value: "{filter.start_date}",
                        onchange: move |evt: FormEvent| controller.set_start_date(evt.value()),
                    }
                }
                label { class: "share-filter__field",
                    span { "To" }
                    input {
                        r#type: "date",
                        value: "{filter.end_date}",
                        onchange: move |evt: FormEvent| controller.set_end_date(evt.value()),
                    }
                }
            }

            label { class: "share-filter__field",
                span { "Data type" }
                select {
                    value: "{chart_value}",
                    onchange: move |evt: FormEvent| controller.set_chart_type(&evt.value()),
                    option { value: "", "Choose a data type" }
                    for chart in ChartType::ALL {
                        option {
                            value: chart.as_str(),
                            selected: filter.chart_type == Some(chart),
                            "{chart.label()}"
                        }
                    }
                }
            }

            SubTypeCheckboxes { controller }
        }
    }
}

#[component]
pub fn SubTypeCheckboxes(controller: PreviewController) -> Element {
    let filter = (controller.filter)();

    let Some(chart) = filter.chart_type else {
        return rsx! {
            div { class: "share-filter__subtypes" }
        };
    };

    let options = controller.catalog.options_for(chart);

    rsx! {
        div { class: "share-filter__subtypes",
            for option in options.iter() {
                {render_checkbox(controller, chart, option)}
            }
        }
    }
}

fn render_checkbox(
    controller: PreviewController,
    chart: ChartType,
    option: &SubtypeOption,
) -> Element {
    let key = option.key;
    let id = format!("{}_{}", chart.as_str(), key.to_lowercase());
    let text = match option.unit {
        Some(unit) => format!("{} ({unit})", option.label),
        None => option.label.to_string(),
    };
    let checked = controller.filter.read().is_checked(chart, key);

    rsx! {
        div { class: "share-filter__check",
            input {
                r#type: "checkbox",
                id: "{id}",
                name: chart.input_name(),
                value: "{key}",
                checked: checked,
                onchange: move |evt: FormEvent| {
                    controller.toggle_subtype(chart, key, evt.checked())
                },
            }
            label { r#for: "{id}", "{text}" }
        }
    }
}
