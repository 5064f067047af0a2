//! HTTP client for the share endpoints, plus the envelope/record types
//! they speak.
//!
//! Every endpoint wraps its payload in `{code, message, data}`; `code == 1`
//! is success and anything else is a soft failure that must never take the
//! page down. Transport and decode problems are a separate, surfaced error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::core::config::ChartType;
use crate::core::filter::ScopeSelection;

pub const SUCCESS_CODE: i64 = 1;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("network requests need a browser context")]
    Unsupported,
}

/// The `{code, message, data}` wrapper every backend endpoint returns.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Success unwrap with soft-failure semantics: a non-success code is
/// logged and yields `None`, leaving the caller on the empty-state path.
pub fn unwrap_envelope<T: Default>(envelope: Envelope<T>, context: &str) -> Option<T> {
    if envelope.code == SUCCESS_CODE {
        Some(envelope.data.unwrap_or_default())
    } else {
        warn!(
            code = envelope.code,
            message = envelope.message.as_deref().unwrap_or(""),
            "{context} returned a failure code"
        );
        None
    }
}

/// Body of `POST /share/preview`.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewRequest {
    pub scope: ScopeSelection,
    pub timezone: String,
    pub start_date: String,
    pub end_date: String,
}

/// Preview payload: one record list per category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreviewData {
    #[serde(default)]
    pub exercises: Vec<PreviewRecord>,
    #[serde(default)]
    pub body_measurements: Vec<PreviewRecord>,
    #[serde(default)]
    pub achievements: Vec<PreviewRecord>,
}

impl PreviewData {
    pub fn records_for(&self, chart: ChartType) -> &[PreviewRecord] {
        match chart {
            ChartType::Exercises => &self.exercises,
            ChartType::BodyMeasurements => &self.body_measurements,
            ChartType::Achievements => &self.achievements,
        }
    }
}

/// One server record. Exercises nest their metric values under `metrics`;
/// body measurements carry `value` and achievements `milestone`, which land
/// in `fields` via the flatten.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreviewRecord {
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub metrics: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PreviewRecord {
    /// Column lookup after flattening `metrics` onto the record; metric
    /// values shadow same-named top-level fields.
    pub fn field(&self, column: &str) -> Option<&Value> {
        self.metrics
            .as_ref()
            .and_then(|metrics| metrics.get(column))
            .or_else(|| self.fields.get(column))
    }
}

/// One hit from the friend search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FriendHit {
    pub id: i64,
    #[serde(default)]
    pub nickname: String,
    pub username: String,
}

impl FriendHit {
    pub fn display(&self) -> String {
        if self.nickname.is_empty() {
            self.username.clone()
        } else {
            format!("{} (@{})", self.nickname, self.username)
        }
    }
}

/// `POST /share/preview`. `Ok(None)` is the soft-failure path.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_preview(request: &PreviewRequest) -> Result<Option<PreviewData>, FetchError> {
    let response = gloo_net::http::Request::post("/share/preview")
        .json(request)
        .map_err(|err| FetchError::Request(err.to_string()))?
        .send()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Request(format!(
            "preview request returned HTTP {}",
            response.status()
        )));
    }
    let envelope: Envelope<PreviewData> = response
        .json()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(unwrap_envelope(envelope, "preview fetch"))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_preview(_request: &PreviewRequest) -> Result<Option<PreviewData>, FetchError> {
    Err(FetchError::Unsupported)
}

/// `DELETE /share/{id}`.
#[cfg(target_arch = "wasm32")]
pub async fn delete_share(id: &str) -> Result<(), FetchError> {
    let response = gloo_net::http::Request::delete(&format!("/share/{id}"))
        .send()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Request(format!(
            "delete returned HTTP {}",
            response.status()
        )));
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn delete_share(_id: &str) -> Result<(), FetchError> {
    Err(FetchError::Unsupported)
}

/// `GET /user/{username}`. An empty result list is a normal outcome.
#[cfg(target_arch = "wasm32")]
pub async fn search_friends(username: &str) -> Result<Vec<FriendHit>, FetchError> {
    let encoded: String = js_sys::encode_uri_component(username).into();
    let response = gloo_net::http::Request::get(&format!("/user/{encoded}"))
        .send()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Request(format!(
            "friend search returned HTTP {}",
            response.status()
        )));
    }
    let envelope: Envelope<Vec<FriendHit>> = response
        .json()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(unwrap_envelope(envelope, "friend search").unwrap_or_default())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn search_friends(_username: &str) -> Result<Vec<FriendHit>, FetchError> {
    Err(FetchError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preview_request_serializes_the_wire_fields() {
        let request = PreviewRequest {
            scope: ScopeSelection {
                exercise_types: vec!["RUNNING".into()],
                body_measurement_types: vec![],
                achievements: vec![],
            },
            timezone: "Europe/Stockholm".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "scope": {
                    "exercise_types": ["RUNNING"],
                    "body_measurement_types": [],
                    "achievements": [],
                },
                "timezone": "Europe/Stockholm",
                "start_date": "2024-01-01",
                "end_date": "2024-01-31",
            })
        );
    }

    #[test]
    fn success_envelope_unwraps_its_data() {
        let envelope: Envelope<PreviewData> = serde_json::from_value(json!({
            "code": 1,
            "message": "success",
            "data": {
                "exercises": [
                    {
                        "type": "RUNNING",
                        "created_at": "2024-01-01T00:00:00Z",
                        "metrics": {"distance": 5, "duration": 30},
                    }
                ],
            },
        }))
        .unwrap();

        let data = unwrap_envelope(envelope, "test").unwrap();
        assert_eq!(data.exercises.len(), 1);
        assert!(data.body_measurements.is_empty());
        let record = &data.exercises[0];
        assert_eq!(record.kind, "RUNNING");
        assert_eq!(record.field("distance"), Some(&json!(5)));
    }

    #[test]
    fn failure_envelope_unwraps_to_none() {
        let envelope: Envelope<PreviewData> = serde_json::from_value(json!({
            "code": 0,
            "message": "error",
            "data": null,
        }))
        .unwrap();
        assert_eq!(unwrap_envelope(envelope, "test"), None);
    }

    #[test]
    fn success_with_null_data_defaults_to_empty_lists() {
        let envelope: Envelope<PreviewData> =
            serde_json::from_value(json!({ "code": 1 })).unwrap();
        let data = unwrap_envelope(envelope, "test").unwrap();
        assert!(data.exercises.is_empty());
    }

    #[test]
    fn metrics_shadow_flattened_fields() {
        let record: PreviewRecord = serde_json::from_value(json!({
            "type": "RUNNING",
            "created_at": "2024-01-01T00:00:00Z",
            "duration": 99,
            "metrics": {"duration": 30},
        }))
        .unwrap();
        assert_eq!(record.field("duration"), Some(&json!(30)));
        assert_eq!(record.field("distance"), None);
    }

    #[test]
    fn measurement_records_expose_their_value_field() {
        let record: PreviewRecord = serde_json::from_value(json!({
            "type": "WEIGHT",
            "created_at": "2024-01-02T10:00:00Z",
            "value": 70.5,
        }))
        .unwrap();
        assert_eq!(record.field("value"), Some(&json!(70.5)));
    }

    #[test]
    fn friend_hits_render_nickname_and_handle() {
        let hit: FriendHit = serde_json::from_value(json!({
            "id": 7,
            "nickname": "Maya",
            "username": "maya_l",
        }))
        .unwrap();
        assert_eq!(hit.display(), "Maya (@maya_l)");

        let bare: FriendHit =
            serde_json::from_value(json!({ "id": 8, "username": "jo" })).unwrap();
        assert_eq!(bare.display(), "jo");
    }
}
