use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Serialize;
use serde_json::json;

use super::domain::{AnswerSet, Category, Question};
use super::intake::{AssessmentSubmission, SubmissionError};
use super::service::AssessmentService;

/// Questionnaire entry exposed to form builders.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub key: &'static str,
    pub category: Category,
    pub prompt: &'static str,
}

/// Router builder exposing the assessment endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(submit_handler))
        .route("/api/v1/assessments/evaluate", post(evaluate_handler))
        .route("/api/v1/assessments/questions", get(questions_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(submission): Json<AssessmentSubmission>,
) -> Response {
    let today = Local::now().date_naive();
    match service.assess(submission, today) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => {
            let mut payload = json!({
                "error": err.to_string(),
            });
            if let SubmissionError::Incomplete {
                missing_profile,
                unanswered,
            } = &err
            {
                payload["missing_profile"] = json!(missing_profile);
                payload["unanswered"] = json!(unanswered);
            }
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(answers): Json<AnswerSet>,
) -> Response {
    let result = service.evaluate(&answers);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn questions_handler() -> Json<Vec<QuestionView>> {
    Json(
        Question::ALL
            .into_iter()
            .map(|question| QuestionView {
                key: question.key(),
                category: question.category(),
                prompt: question.prompt(),
            })
            .collect(),
    )
}
