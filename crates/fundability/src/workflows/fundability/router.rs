use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use super::domain::ProfileKind;
use super::service::FundabilityService;
use super::source::JsonProfileSource;

const REPORT_DATE_KEY: &str = "report_date";

/// Router builder exposing HTTP endpoints for report assembly and scoring.
pub fn fundability_router(service: Arc<FundabilityService>) -> Router {
    Router::new()
        .route("/api/v1/fundability/report", post(report_handler))
        .route("/api/v1/fundability/score", post(score_handler))
        .with_state(service)
}

/// Body for the score endpoint. `profile` accepts the same shapes as the report endpoint.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub kind: String,
    #[serde(default)]
    pub profile: Value,
}

pub(crate) async fn report_handler(
    State(service): State<Arc<FundabilityService>>,
    axum::Json(mut document): axum::Json<Value>,
) -> Response {
    // The evaluation date defaults to the date the catalog ages were derived against.
    let report_date = match document
        .as_object_mut()
        .and_then(|fields| fields.remove(REPORT_DATE_KEY))
    {
        None | Some(Value::Null) => service.catalog().as_of(),
        Some(value) => match parse_report_date(&value) {
            Some(date) => date,
            None => {
                return bad_request(format!(
                    "{REPORT_DATE_KEY} must be a YYYY-MM-DD date, got {value}"
                ))
            }
        },
    };

    let source = JsonProfileSource::from_value(document);
    match service.evaluate(&source, report_date) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => bad_request(error.to_string()),
    }
}

pub(crate) async fn score_handler(
    State(service): State<Arc<FundabilityService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let Some(kind) = ProfileKind::parse(&request.kind) else {
        return bad_request(format!(
            "kind must be consumer or business, got '{}'",
            request.kind
        ));
    };

    let profile = match request.profile {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };

    match service.score(&JsonProfileSource::from_value(profile), kind) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => bad_request(error.to_string()),
    }
}

fn parse_report_date(value: &Value) -> Option<NaiveDate> {
    value
        .as_str()
        .and_then(|text| NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok())
}

fn bad_request(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
