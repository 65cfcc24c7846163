mod policy;
mod rules;

pub use policy::{MaturityTier, RiskLevel};

use super::domain::{AnswerSet, Category};
use policy::{rank_recommendations, score_percentage};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

/// Urgency attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    Important,
    Optional,
}

impl Priority {
    pub const fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::Important => 1,
            Priority::Optional => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::Important => "Important",
            Priority::Optional => "Optional",
        }
    }
}

/// Advisory action raised when a rule's condition is unmet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: Category,
    pub text: String,
}

/// Record of a rule branch that fired, kept in evaluation order for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTraceEntry {
    pub id: u8,
    pub description: String,
    pub points: u32,
    pub category: Category,
}

/// Per-category subtotals in the order categories first received points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryScores(Vec<(Category, u32)>);

impl CategoryScores {
    pub fn get(&self, category: Category) -> u32 {
        self.0
            .iter()
            .find(|(entry, _)| *entry == category)
            .map(|(_, score)| *score)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().copied()
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|(_, score)| score).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, score) in &self.0 {
            map.serialize_entry(category.label(), score)?;
        }
        map.end()
    }
}

/// Everything the engine derives from one answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub score: u32,
    pub score_pct: u32,
    pub level: String,
    pub level_color: String,
    pub tier: u8,
    pub risk_level: RiskLevel,
    pub risk_description: String,
    pub risk_flags: Vec<String>,
    pub critical_gaps: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub rules_triggered: Vec<RuleTraceEntry>,
    pub category_scores: CategoryScores,
}

impl EvaluationResult {
    pub fn maturity_tier(&self) -> MaturityTier {
        MaturityTier::from_score(self.score)
    }

    pub fn recommendations_with(&self, priority: Priority) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |recommendation| recommendation.priority == priority)
    }
}

/// Stateless evaluator applying the expert rule table to an answer set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationEngine;

impl EvaluationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> EvaluationResult {
        let ledger = rules::apply_rules(answers);

        let tier = MaturityTier::from_score(ledger.score);
        let risk_level = RiskLevel::from_critical_count(ledger.critical_count());

        debug!(
            score = ledger.score,
            tier = tier.ordinal(),
            risk = risk_level.label(),
            rules_triggered = ledger.trace.len(),
            "assessment evaluated"
        );

        EvaluationResult {
            score: ledger.score,
            score_pct: score_percentage(ledger.score),
            level: tier.label().to_string(),
            level_color: tier.color().to_string(),
            tier: tier.ordinal(),
            risk_level,
            risk_description: risk_level.description().to_string(),
            risk_flags: ledger.risk_flags,
            critical_gaps: ledger.critical_gaps,
            recommendations: rank_recommendations(ledger.recommendations),
            rules_triggered: ledger.trace,
            category_scores: CategoryScores(ledger.category_scores),
        }
    }
}

/// Evaluate an answer set with a throwaway engine.
pub fn evaluate(answers: &AnswerSet) -> EvaluationResult {
    EvaluationEngine::new().evaluate(answers)
}
