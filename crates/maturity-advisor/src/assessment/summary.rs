use serde::Serialize;

use super::domain::{AnswerSet, Category, Question};
use super::evaluation::{EvaluationResult, Priority};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub label: &'static str,
    pub score: u32,
    pub max_points: u32,
    /// Share of the category ceiling reached, capped at 100.
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub critical: usize,
    pub important: usize,
    pub optional: usize,
}

/// Presentation-neutral digest of an evaluation, used by the CLI report and the HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub categories: Vec<CategoryBreakdown>,
    pub adopted: usize,
    pub not_adopted: usize,
    pub priority_counts: PriorityCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest_category: Option<Category>,
}

impl AssessmentSummary {
    pub fn from_result(result: &EvaluationResult, answers: &AnswerSet) -> Self {
        let categories: Vec<CategoryBreakdown> = Category::ALL
            .into_iter()
            .map(|category| {
                let score = result.category_scores.get(category);
                CategoryBreakdown {
                    category,
                    label: category.label(),
                    score,
                    max_points: category.max_points(),
                    percentage: capped_percentage(score, category.max_points()),
                }
            })
            .collect();

        let weakest_category = categories
            .iter()
            .min_by_key(|entry| entry.percentage)
            .map(|entry| entry.category);

        let adopted = Question::ALL
            .into_iter()
            .filter(|question| answers.is_yes(*question))
            .count();

        let mut priority_counts = PriorityCounts::default();
        for recommendation in &result.recommendations {
            match recommendation.priority {
                Priority::Critical => priority_counts.critical += 1,
                Priority::Important => priority_counts.important += 1,
                Priority::Optional => priority_counts.optional += 1,
            }
        }

        Self {
            categories,
            adopted,
            not_adopted: Question::ALL.len() - adopted,
            priority_counts,
            weakest_category,
        }
    }

    /// Percentage of questions answered "yes".
    pub fn adoption_rate(&self) -> f32 {
        let total = self.adopted + self.not_adopted;
        if total == 0 {
            0.0
        } else {
            self.adopted as f32 / total as f32 * 100.0
        }
    }
}

fn capped_percentage(score: u32, max_points: u32) -> u32 {
    if max_points == 0 {
        return 0;
    }

    let pct = (f64::from(score) / f64::from(max_points) * 100.0).round();
    (pct as u32).min(100)
}
