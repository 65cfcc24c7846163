mod parser;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::intake::{AssessmentSubmission, RawProfile};

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer sheet CSV data: {}", err),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads a two-column `question,answer` CSV into a questionnaire submission. Profile fields may
/// be supplied as rows keyed `company_size`, `industry`, `budget` and `years_operating`.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AssessmentSubmission, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AssessmentSubmission, AnswerImportError> {
        let mut submission = AssessmentSubmission::default();

        for row in parser::parse_rows(reader)? {
            if let Some(slot) = profile_slot(&mut submission.profile, &row.key) {
                if slot.is_none() {
                    *slot = row.answer;
                }
                continue;
            }

            if submission.answers.contains_key(&row.key) {
                debug!(question = %row.key, "duplicate answer sheet row ignored");
                continue;
            }
            submission.answers.insert(row.key, row.answer);
        }

        Ok(submission)
    }
}

fn profile_slot<'a>(profile: &'a mut RawProfile, key: &str) -> Option<&'a mut Option<String>> {
    match key {
        "company_size" => Some(&mut profile.company_size),
        "industry" => Some(&mut profile.industry),
        "budget" => Some(&mut profile.budget),
        "years_operating" => Some(&mut profile.years_operating),
        _ => None,
    }
}
