//! HTTP route handlers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use admissions::core::types::Course;
use admissions::core::verdict::evaluate;
use admissions::validate::{RawStudent, validate_student};

use crate::state::AppState;

pub async fn health() -> &'static str {
    "ok"
}

/// Response body for `POST /check-eligibility`.
#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    /// Opaque per-request id.
    pub student_id: String,
    pub eligible: bool,
    /// Mean of all submitted marks, 2 decimals.
    pub percentage: f64,
    /// Only present when `eligible` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_courses: Option<Vec<Course>>,
}

/// Any request failure, surfaced uniformly as `400 {"detail": ...}`.
///
/// Covers body rejections, field validation, and audit I/O errors alike;
/// no partial results are ever returned.
pub struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(json!({ "detail": self.0 }))).into_response()
    }
}

/// POST /check-eligibility - validate, evaluate, audit, respond.
pub async fn check_eligibility(
    State(state): State<AppState>,
    payload: Result<Json<RawStudent>, JsonRejection>,
) -> Result<Json<EligibilityResponse>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| ApiError(rejection.body_text()))?;

    let student = validate_student(&raw).map_err(|err| ApiError(err.to_string()))?;

    // Input is audited only once it passed validation, so the log holds
    // exactly the records that were evaluated.
    state
        .audit
        .append_input(&raw)
        .map_err(|err| ApiError(format!("{err:#}")))?;

    let verdict = evaluate(&student);
    let response = EligibilityResponse {
        student_id: Uuid::new_v4().to_string(),
        eligible: verdict.eligible,
        percentage: verdict.percentage,
        recommended_courses: verdict.recommended,
    };

    state
        .audit
        .append_output(&response)
        .map_err(|err| ApiError(format!("{err:#}")))?;

    info!(
        student_id = %response.student_id,
        eligible = response.eligible,
        "eligibility checked"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(qualified: bool) -> serde_json::Value {
        json!({
            "name": "Ananya Sharma",
            "age": 18,
            "gender": "Female",
            "marks": {"Physics": 80, "Chemistry": 80, "Mathematics": 80},
            "qualification": {"exam": "JEE", "qualified": qualified},
            "desired_course": "CSE"
        })
    }

    async fn call(state: &AppState, body: serde_json::Value) -> Result<EligibilityResponse, ApiError> {
        let raw: RawStudent = serde_json::from_value(body).expect("request body");
        check_eligibility(State(state.clone()), Ok(Json(raw)))
            .await
            .map(|Json(response)| response)
    }

    #[tokio::test]
    async fn eligible_response_omits_recommended_courses() {
        let temp = tempfile::tempdir().expect("tempdir");
        let state = AppState::new(temp.path());

        let response = call(&state, body(true)).await.unwrap_or_else(|err| {
            panic!("expected success, got {}", err.0);
        });
        assert!(response.eligible);
        assert_eq!(response.percentage, 80.0);

        let serialized = serde_json::to_value(&response).expect("serialize");
        assert!(serialized.get("recommended_courses").is_none());
        assert!(serialized["student_id"].is_string());
    }

    #[tokio::test]
    async fn ineligible_response_carries_the_list_and_both_logs_are_written() {
        let temp = tempfile::tempdir().expect("tempdir");
        let state = AppState::new(temp.path());

        let response = call(&state, body(false)).await.unwrap_or_else(|err| {
            panic!("expected success, got {}", err.0);
        });
        assert!(!response.eligible);

        let serialized = serde_json::to_value(&response).expect("serialize");
        assert_eq!(serialized["recommended_courses"], json!([]));

        assert!(temp.path().join("input.log").exists());
        assert!(temp.path().join("output.log").exists());
    }

    #[tokio::test]
    async fn invalid_field_is_rejected_without_touching_the_logs() {
        let temp = tempfile::tempdir().expect("tempdir");
        let state = AppState::new(temp.path());

        let mut invalid = body(true);
        invalid["age"] = json!(16);
        let err = match call(&state, invalid).await {
            Err(err) => err,
            Ok(_) => panic!("expected validation failure"),
        };
        assert!(err.0.contains("age"), "detail names the field: {}", err.0);

        assert!(!temp.path().join("input.log").exists());
    }
}
