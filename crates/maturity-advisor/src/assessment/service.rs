use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{AnswerSet, BusinessProfile};
use super::evaluation::{EvaluationEngine, EvaluationResult};
use super::intake::{AssessmentSubmission, SubmissionError, SubmissionGuard};
use super::summary::AssessmentSummary;

/// Evaluated submission returned to presentation collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub assessed_on: NaiveDate,
    pub profile: BusinessProfile,
    pub result: EvaluationResult,
    pub summary: AssessmentSummary,
}

/// Service composing the submission guard and the rule engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentService {
    guard: SubmissionGuard,
    engine: EvaluationEngine,
}

impl AssessmentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a questionnaire submission and evaluate it.
    pub fn assess(
        &self,
        submission: AssessmentSubmission,
        assessed_on: NaiveDate,
    ) -> Result<AssessmentReport, SubmissionError> {
        let accepted = match self.guard.accept(submission) {
            Ok(accepted) => accepted,
            Err(err) => {
                warn!(error = %err, "assessment submission refused");
                return Err(err);
            }
        };

        let result = self.engine.evaluate(&accepted.answers);
        let summary = AssessmentSummary::from_result(&result, &accepted.answers);

        info!(
            score = result.score,
            tier = result.tier,
            risk = result.risk_level.label(),
            "assessment completed"
        );

        Ok(AssessmentReport {
            assessed_on,
            profile: accepted.profile,
            result,
            summary,
        })
    }

    /// Evaluate an answer set directly, without completeness checks.
    pub fn evaluate(&self, answers: &AnswerSet) -> EvaluationResult {
        self.engine.evaluate(answers)
    }
}
