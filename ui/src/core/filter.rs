//! The share form's filter selection as a plain value object.
//!
//! The UI reads and writes a [`FilterState`] through signals; everything
//! downstream (scope payloads, column derivation, persistence) works on the
//! value, never on the rendered controls.

use serde::{Deserialize, Serialize};

use super::config::{chart_type_repr, ChartType};

/// Everything the share form can select. Serialized wholesale to session
/// storage under one key; the field names are the blob's wire format and
/// must not drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(rename = "chartType", with = "chart_type_repr", default)]
    pub chart_type: Option<ChartType>,
    #[serde(rename = "exerciseTypes", default)]
    pub exercise_types: Vec<String>,
    #[serde(rename = "measurementTypes", default)]
    pub measurement_types: Vec<String>,
    #[serde(rename = "achievementTypes", default)]
    pub achievement_types: Vec<String>,
}

impl FilterState {
    pub fn checked_for(&self, chart: ChartType) -> &[String] {
        match chart {
            ChartType::Exercises => &self.exercise_types,
            ChartType::BodyMeasurements => &self.measurement_types,
            ChartType::Achievements => &self.achievement_types,
        }
    }

    pub fn is_checked(&self, chart: ChartType, key: &str) -> bool {
        self.checked_for(chart).iter().any(|k| k == key)
    }

    /// Switching category rebuilds the sub-type form from scratch, so any
    /// previous sub-type selection is dropped.
    pub fn set_chart_type(&mut self, chart: Option<ChartType>) {
        self.chart_type = chart;
        self.exercise_types.clear();
        self.measurement_types.clear();
        self.achievement_types.clear();
    }

    pub fn set_checked(&mut self, chart: ChartType, keys: Vec<String>) {
        *self.checked_mut(chart) = keys;
    }

    pub fn toggle(&mut self, chart: ChartType, key: &str, on: bool) {
        let checked = self.checked_mut(chart);
        match (on, checked.iter().position(|k| k == key)) {
            (true, None) => checked.push(key.to_string()),
            (false, Some(index)) => {
                checked.remove(index);
            }
            _ => {}
        }
    }

    /// The scope payload sent to the preview endpoint. Only the active
    /// category can hold selections, but all three lists always travel.
    pub fn scope(&self) -> ScopeSelection {
        ScopeSelection {
            exercise_types: self.exercise_types.clone(),
            body_measurement_types: self.measurement_types.clone(),
            achievements: self.achievement_types.clone(),
        }
    }

    fn checked_mut(&mut self, chart: ChartType) -> &mut Vec<String> {
        match chart {
            ChartType::Exercises => &mut self.exercise_types,
            ChartType::BodyMeasurements => &mut self.measurement_types,
            ChartType::Achievements => &mut self.achievement_types,
        }
    }
}

/// Sub-type filters as the backend expects them in share payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeSelection {
    pub exercise_types: Vec<String>,
    pub body_measurement_types: Vec<String>,
    pub achievements: Vec<String>,
}

impl ScopeSelection {
    pub fn is_empty(&self) -> bool {
        self.exercise_types.is_empty()
            && self.body_measurement_types.is_empty()
            && self.achievements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_the_session_blob_field_names() {
        let mut state = FilterState {
            start_date: "2024-01-01".into(),
            end_date: "2024-02-01".into(),
            ..FilterState::default()
        };
        state.set_chart_type(Some(ChartType::Exercises));
        state.toggle(ChartType::Exercises, "RUNNING", true);

        let blob = serde_json::to_value(&state).unwrap();
        assert_eq!(
            blob,
            json!({
                "start_date": "2024-01-01",
                "end_date": "2024-02-01",
                "chartType": "exercises",
                "exerciseTypes": ["RUNNING"],
                "measurementTypes": [],
                "achievementTypes": [],
            })
        );
    }

    #[test]
    fn deserializes_blobs_with_missing_fields() {
        let state: FilterState =
            serde_json::from_value(json!({ "chartType": "" })).unwrap();
        assert_eq!(state.chart_type, None);
        assert!(state.start_date.is_empty());
        assert!(state.exercise_types.is_empty());
    }

    #[test]
    fn unknown_chart_type_restores_as_nothing_selected() {
        let state: FilterState =
            serde_json::from_value(json!({ "chartType": "calories" })).unwrap();
        assert_eq!(state.chart_type, None);
    }

    #[test]
    fn round_trips_through_json() {
        let mut state = FilterState::default();
        state.set_chart_type(Some(ChartType::BodyMeasurements));
        state.toggle(ChartType::BodyMeasurements, "WEIGHT", true);
        state.toggle(ChartType::BodyMeasurements, "BODY_FAT", true);

        let blob = serde_json::to_string(&state).unwrap();
        let restored: FilterState = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn switching_chart_type_drops_previous_selections() {
        let mut state = FilterState::default();
        state.set_chart_type(Some(ChartType::Exercises));
        state.toggle(ChartType::Exercises, "RUNNING", true);
        state.toggle(ChartType::Exercises, "CYCLING", true);

        state.set_chart_type(Some(ChartType::BodyMeasurements));
        assert!(state.exercise_types.is_empty());
        assert!(state.checked_for(ChartType::BodyMeasurements).is_empty());
    }

    #[test]
    fn toggle_is_idempotent_per_direction() {
        let mut state = FilterState::default();
        state.toggle(ChartType::Exercises, "YOGA", true);
        state.toggle(ChartType::Exercises, "YOGA", true);
        assert_eq!(state.exercise_types, vec!["YOGA".to_string()]);

        state.toggle(ChartType::Exercises, "YOGA", false);
        state.toggle(ChartType::Exercises, "YOGA", false);
        assert!(state.exercise_types.is_empty());
    }

    #[test]
    fn scope_carries_all_three_lists() {
        let mut state = FilterState::default();
        state.set_chart_type(Some(ChartType::Achievements));
        state.toggle(ChartType::Achievements, "RUNNING", true);

        let scope = state.scope();
        assert!(scope.exercise_types.is_empty());
        assert!(scope.body_measurement_types.is_empty());
        assert_eq!(scope.achievements, vec!["RUNNING".to_string()]);
        assert!(!scope.is_empty());
    }
}
