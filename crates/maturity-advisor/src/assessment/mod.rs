//! Digital maturity assessment: questionnaire intake, the 25-rule expert engine and the views
//! built from its result.
//!
//! The engine is total over any answer mapping (missing questions read as "no"). Callers that
//! collect answers from people go through [`SubmissionGuard`] first so incomplete questionnaires
//! are refused with the list of missing fields instead of being scored.

pub mod domain;
pub mod evaluation;
pub mod import;
pub mod intake;
pub mod router;
pub mod service;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerSet, BusinessProfile, Category, CompanySize, DigitalBudget, Industry, ProfileOption,
    Question, YearsOperating,
};
pub use evaluation::{
    evaluate, CategoryScores, EvaluationEngine, EvaluationResult, MaturityTier, Priority,
    Recommendation, RiskLevel, RuleTraceEntry,
};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use intake::{
    AcceptedSubmission, AssessmentSubmission, RawProfile, SubmissionError, SubmissionGuard,
};
pub use router::{assessment_router, QuestionView};
pub use service::{AssessmentReport, AssessmentService};
pub use summary::{AssessmentSummary, CategoryBreakdown, PriorityCounts};
