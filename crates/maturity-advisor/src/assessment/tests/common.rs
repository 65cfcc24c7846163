use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{AnswerSet, Question};
use crate::assessment::intake::{AssessmentSubmission, RawProfile};
use crate::assessment::service::AssessmentService;

pub(super) fn profile() -> RawProfile {
    RawProfile {
        company_size: Some("Small (10–49 staff)".to_string()),
        industry: Some("Retail / E-Commerce".to_string()),
        budget: Some("£5,000 – £20,000".to_string()),
        years_operating: Some("6–15 years".to_string()),
    }
}

/// Complete submission answering "Yes" to exactly the listed questions.
pub(super) fn submission_with_yes(yes: &[Question]) -> AssessmentSubmission {
    let answers = Question::ALL
        .into_iter()
        .map(|question| {
            let value = if yes.contains(&question) { "Yes" } else { "No" };
            (question.key().to_string(), Some(value.to_string()))
        })
        .collect();

    AssessmentSubmission {
        profile: profile(),
        answers,
    }
}

pub(super) fn answers_with_yes(yes: &[Question]) -> AnswerSet {
    Question::ALL
        .into_iter()
        .map(|question| (question, yes.contains(&question)))
        .collect()
}

/// Digitally established retailer still missing strategy and AI capabilities.
pub(super) fn developing_business() -> Vec<Question> {
    vec![
        Question::Cloud,
        Question::Security,
        Question::Backup,
        Question::MobileAccess,
        Question::Analytics,
        Question::Crm,
        Question::CustomerPlatform,
        Question::DigitalMarketing,
        Question::Collaboration,
        Question::RemoteWork,
    ]
}

pub(super) fn service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::new())
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) fn json_request(uri: &str, body: &Value) -> axum::http::Request<Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serializable")))
        .expect("request builds")
}
