//! Column derivation for the preview table.
//!
//! Header and row rendering both consume the list produced here; deriving
//! it in one place is what keeps them from drifting apart.

use crate::core::config::{exercise_metrics, ChartType, SubtypeCatalog};
use crate::core::filter::FilterState;

/// Ordered column names for the current selection. Always starts with
/// `created_at, type`. Exercises extend it with the union of metric names
/// across the checked sub-types, first-seen order, no duplicates; the
/// other categories contribute one fixed value column.
pub fn columns_for(filter: &FilterState, catalog: &SubtypeCatalog) -> Vec<String> {
    let mut columns = vec!["created_at".to_string(), "type".to_string()];

    match filter.chart_type {
        Some(ChartType::Exercises) => {
            // Walk the catalog, not the checked list, so column order follows
            // the form's option order regardless of click order.
            for option in catalog.options_for(ChartType::Exercises) {
                if !filter.is_checked(ChartType::Exercises, option.key) {
                    continue;
                }
                for metric in exercise_metrics(option.key) {
                    if !columns.iter().any(|column| column == metric) {
                        columns.push((*metric).to_string());
                    }
                }
            }
        }
        Some(ChartType::BodyMeasurements) => columns.push("value".to_string()),
        Some(ChartType::Achievements) => columns.push("milestone".to_string()),
        None => {}
    }

    columns
}
