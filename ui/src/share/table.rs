//! Preview table: pure row/header model plus the component that paints it.

use dioxus::prelude::*;
use serde_json::Value;
use time::UtcOffset;

use crate::core::format;
use crate::share::fetch::PreviewRecord;

/// What the table renders. Header labels and row cells are both derived
/// from `columns`, so they cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewTableModel {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PreviewTableModel {
    /// Header only; the body shows the empty placeholder.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn build(columns: Vec<String>, records: &[PreviewRecord]) -> Self {
        Self::build_with_offset(columns, records, format::local_offset())
    }

    pub fn build_with_offset(
        columns: Vec<String>,
        records: &[PreviewRecord],
        offset: UtcOffset,
    ) -> Self {
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| cell_text(record, column, offset))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    pub fn header_labels(&self) -> Vec<String> {
        self.columns.iter().map(|c| format::format_name(c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell_text(record: &PreviewRecord, column: &str, offset: UtcOffset) -> String {
    match column {
        "created_at" if !record.created_at.is_empty() => {
            format::localize_timestamp_with_offset(&record.created_at, offset)
        }
        "type" if !record.kind.is_empty() => record.kind.clone(),
        _ => record
            .field(column)
            .and_then(display_value)
            .unwrap_or_else(|| "-".to_string()),
    }
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[component]
pub fn PreviewTable(model: PreviewTableModel, error: Option<String>) -> Element {
    let labels = model.header_labels();

    rsx! {
        div { class: "share-preview",
            table { class: "share-preview__table",
                thead {
                    tr {
                        for label in labels.iter() {
                            th { scope: "col", "{label}" }
                        }
                    }
                }
                tbody {
                    for row in model.rows.iter() {
                        tr {
                            for cell in row.iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }

            if let Some(message) = error.as_ref() {
                p { class: "share-preview__placeholder share-preview__placeholder--error",
                    "Couldn't load the preview: {message}"
                }
            } else if model.is_empty() {
                p { class: "share-preview__placeholder",
                    "No records match the current filters."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn running_record() -> PreviewRecord {
        serde_json::from_value(json!({
            "type": "RUNNING",
            "created_at": "2024-01-01T00:00:00Z",
            "metrics": {"distance": 5, "duration": 30},
        }))
        .unwrap()
    }

    #[test]
    fn renders_an_exercise_row_in_column_order() {
        let columns = vec![
            "created_at".to_string(),
            "type".to_string(),
            "distance".to_string(),
            "duration".to_string(),
        ];
        let model = PreviewTableModel::build_with_offset(
            columns,
            &[running_record()],
            UtcOffset::UTC,
        );

        assert_eq!(
            model.rows,
            vec![vec![
                "2024-01-01 00:00:00".to_string(),
                "RUNNING".to_string(),
                "5".to_string(),
                "30".to_string(),
            ]]
        );
    }

    #[test]
    fn header_labels_match_the_row_columns() {
        let columns = vec![
            "created_at".to_string(),
            "type".to_string(),
            "value".to_string(),
        ];
        let model = PreviewTableModel::empty(columns);
        assert_eq!(model.header_labels(), vec!["Created At", "Type", "Value"]);
        assert_eq!(model.header_labels().len(), model.columns.len());
    }

    #[test]
    fn missing_values_render_as_a_dash() {
        let columns = vec![
            "created_at".to_string(),
            "type".to_string(),
            "distance".to_string(),
            "duration".to_string(),
            "weight".to_string(),
        ];
        let model = PreviewTableModel::build_with_offset(
            columns,
            &[running_record()],
            UtcOffset::UTC,
        );
        assert_eq!(model.rows[0][4], "-");
    }

    #[test]
    fn zero_valued_metrics_still_render() {
        let record: PreviewRecord = serde_json::from_value(json!({
            "type": "YOGA",
            "created_at": "2024-01-01T00:00:00Z",
            "metrics": {"duration": 0},
        }))
        .unwrap();
        let columns = vec!["type".to_string(), "duration".to_string()];
        let model =
            PreviewTableModel::build_with_offset(columns, &[record], UtcOffset::UTC);
        assert_eq!(model.rows[0], vec!["YOGA".to_string(), "0".to_string()]);
    }

    #[test]
    fn no_records_is_an_empty_model() {
        let model = PreviewTableModel::build_with_offset(
            vec!["created_at".to_string(), "type".to_string()],
            &[],
            UtcOffset::UTC,
        );
        assert!(model.is_empty());
    }
}
