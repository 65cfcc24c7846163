use crate::infra::{parse_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use maturity_advisor::assessment::{
    assessment_router, AnswerSheetImporter, AssessmentReport, AssessmentService,
};
use maturity_advisor::error::AppError;
use serde::{Deserialize, Deserializer};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerSheetRequest {
    pub(crate) answers_csv: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) assessed_on: Option<NaiveDate>,
}

pub(crate) fn with_assessment_routes(service: Arc<AssessmentService>) -> axum::Router {
    assessment_router(service.clone())
        .route(
            "/api/v1/assessments/sheet",
            axum::routing::post(answer_sheet_endpoint),
        )
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn answer_sheet_endpoint(
    Extension(service): Extension<Arc<AssessmentService>>,
    Json(payload): Json<AnswerSheetRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    let AnswerSheetRequest {
        answers_csv,
        assessed_on,
    } = payload;

    let submission = AnswerSheetImporter::from_reader(Cursor::new(answers_csv.into_bytes()))?;
    let assessed_on = assessed_on.unwrap_or_else(|| Local::now().date_naive());
    let report = service.assess(submission, assessed_on)?;

    Ok(Json(report))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
