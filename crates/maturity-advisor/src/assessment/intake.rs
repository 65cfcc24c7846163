use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{
    AnswerSet, BusinessProfile, CompanySize, DigitalBudget, Industry, ProfileOption, Question,
    YearsOperating,
};

/// Profile fields exactly as the questionnaire captured them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub years_operating: Option<String>,
}

/// Questionnaire submission before validation. Answers are `"Yes"`, `"No"` or unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub profile: RawProfile,
    #[serde(default)]
    pub answers: BTreeMap<String, Option<String>>,
}

impl AssessmentSubmission {
    pub fn answer(mut self, question: Question, value: &str) -> Self {
        self.answers
            .insert(question.key().to_string(), Some(value.to_string()));
        self
    }
}

/// Validated submission ready for the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedSubmission {
    pub profile: BusinessProfile,
    pub answers: AnswerSet,
}

/// Reasons a submission is refused before evaluation.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission incomplete: {}", describe_missing(.missing_profile, .unanswered))]
    Incomplete {
        missing_profile: Vec<&'static str>,
        unanswered: Vec<Question>,
    },
    #[error("answer '{value}' to question '{question}' must be Yes or No")]
    InvalidAnswer { question: Question, value: String },
    #[error("'{value}' is not a recognised {field}")]
    InvalidProfile { field: &'static str, value: String },
    #[error("question '{question}' is answered more than once (keys {})", .keys.join(", "))]
    DuplicateAnswer {
        question: Question,
        keys: Vec<String>,
    },
}

fn describe_missing(missing_profile: &[&'static str], unanswered: &[Question]) -> String {
    let mut parts = Vec::new();
    if !missing_profile.is_empty() {
        parts.push(format!(
            "complete the business profile ({})",
            missing_profile.join(", ")
        ));
    }
    if !unanswered.is_empty() {
        parts.push(format!(
            "answer the {} remaining question(s)",
            unanswered.len()
        ));
    }
    parts.join("; ")
}

/// Questionnaire placeholder that counts as unanswered.
const PLACEHOLDER_PREFIX: char = '—';

/// Guard turning questionnaire submissions into answer sets. The engine itself accepts partial
/// input, so completeness is enforced here.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionGuard;

impl SubmissionGuard {
    pub fn new() -> Self {
        Self
    }

    pub fn accept(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AcceptedSubmission, SubmissionError> {
        let AssessmentSubmission { profile, answers } = submission;
        let mut missing_profile = Vec::new();

        let company_size = profile_field::<CompanySize>(profile.company_size, &mut missing_profile)?;
        let industry = profile_field::<Industry>(profile.industry, &mut missing_profile)?;
        let budget = profile_field::<DigitalBudget>(profile.budget, &mut missing_profile)?;
        let years_operating =
            profile_field::<YearsOperating>(profile.years_operating, &mut missing_profile)?;

        let answers = normalize_keys(answers)?;
        let mut answer_set = AnswerSet::new();
        let mut unanswered = Vec::new();

        for question in Question::ALL {
            match answers.get(question.key()).and_then(|raw| present(raw.as_deref())) {
                Some(raw) => answer_set.set(question, parse_answer(question, raw)?),
                None => unanswered.push(question),
            }
        }

        match (company_size, industry, budget, years_operating) {
            (Some(company_size), Some(industry), Some(budget), Some(years_operating))
                if unanswered.is_empty() =>
            {
                Ok(AcceptedSubmission {
                    profile: BusinessProfile {
                        company_size,
                        industry,
                        budget,
                        years_operating,
                    },
                    answers: answer_set,
                })
            }
            _ => Err(SubmissionError::Incomplete {
                missing_profile,
                unanswered,
            }),
        }
    }

    /// Convenience wrapper when only the answers are needed.
    pub fn answers_from_submission(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AnswerSet, SubmissionError> {
        self.accept(submission).map(|accepted| accepted.answers)
    }
}

fn profile_field<T: ProfileOption>(
    raw: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Result<Option<T>, SubmissionError> {
    match present(raw.as_deref()) {
        None => {
            missing.push(T::FIELD);
            Ok(None)
        }
        Some(value) => T::parse(value)
            .map(Some)
            .ok_or_else(|| SubmissionError::InvalidProfile {
                field: T::FIELD,
                value: value.to_string(),
            }),
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && !value.starts_with(PLACEHOLDER_PREFIX))
}

/// Lower-cases and trims answer keys. Two spellings of the same question are refused.
fn normalize_keys(
    answers: BTreeMap<String, Option<String>>,
) -> Result<BTreeMap<String, Option<String>>, SubmissionError> {
    let mut normalized: BTreeMap<String, (String, Option<String>)> = BTreeMap::new();

    for (raw_key, value) in answers {
        let key = raw_key.trim().to_ascii_lowercase();
        if let Some((first_key, _)) = normalized.get(&key) {
            if let Some(question) = Question::from_key(&key) {
                debug!(%question, first = %first_key, second = %raw_key, "conflicting answer keys");
                return Err(SubmissionError::DuplicateAnswer {
                    question,
                    keys: vec![first_key.clone(), raw_key],
                });
            }
            debug!(key = %raw_key, "duplicate unknown answer key ignored");
            continue;
        }
        normalized.insert(key, (raw_key, value));
    }

    Ok(normalized
        .into_iter()
        .map(|(key, (_, value))| (key, value))
        .collect())
}

fn parse_answer(question: Question, raw: &str) -> Result<bool, SubmissionError> {
    match raw.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" => Ok(false),
        _ => Err(SubmissionError::InvalidAnswer {
            question,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_treats_placeholder_as_unanswered() {
        assert_eq!(present(Some("— Select —")), None);
        assert_eq!(present(Some("   ")), None);
        assert_eq!(present(None), None);
        assert_eq!(present(Some(" Yes ")), Some("Yes"));
    }

    #[test]
    fn parse_answer_accepts_common_spellings() {
        assert!(parse_answer(Question::Cloud, "YES").expect("yes parses"));
        assert!(!parse_answer(Question::Cloud, "no").expect("no parses"));
        assert!(matches!(
            parse_answer(Question::Cloud, "maybe"),
            Err(SubmissionError::InvalidAnswer {
                question: Question::Cloud,
                ..
            })
        ));
    }

    #[test]
    fn normalize_keys_refuses_two_spellings_of_one_question() {
        let answers: BTreeMap<String, Option<String>> = [
            ("crm".to_string(), Some("No".to_string())),
            ("CRM".to_string(), Some("Yes".to_string())),
        ]
        .into_iter()
        .collect();

        match normalize_keys(answers) {
            Err(SubmissionError::DuplicateAnswer { question, keys }) => {
                assert_eq!(question, Question::Crm);
                assert_eq!(keys, vec!["CRM".to_string(), "crm".to_string()]);
            }
            other => panic!("expected duplicate answer, got {other:?}"),
        }
    }

    #[test]
    fn normalize_keys_trims_and_lowercases_single_spellings() {
        let answers: BTreeMap<String, Option<String>> = [
            (" Cloud ".to_string(), Some("Yes".to_string())),
            ("Blockchain".to_string(), None),
            ("blockchain".to_string(), None),
        ]
        .into_iter()
        .collect();

        let normalized = normalize_keys(answers).expect("no conflicting questions");
        assert_eq!(normalized.get("cloud"), Some(&Some("Yes".to_string())));
        assert_eq!(normalized.len(), 2);
    }

    #[test]
    fn incomplete_message_lists_profile_fields_and_counts_questions() {
        let message = describe_missing(&["Company Size", "Industry Sector"], &[Question::Crm]);
        assert_eq!(
            message,
            "complete the business profile (Company Size, Industry Sector); answer the 1 remaining question(s)"
        );
    }
}
