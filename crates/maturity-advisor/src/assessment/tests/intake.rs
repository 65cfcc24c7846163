use super::common::*;
use crate::assessment::domain::{CompanySize, DigitalBudget, Industry, Question, YearsOperating};
use crate::assessment::intake::{SubmissionError, SubmissionGuard};
use crate::assessment::service::AssessmentService;
use chrono::NaiveDate;

#[test]
fn guard_maps_yes_and_no_to_booleans() {
    let accepted = SubmissionGuard::new()
        .accept(submission_with_yes(&[Question::Crm, Question::Agile]))
        .expect("complete submission accepted");

    assert!(accepted.answers.is_yes(Question::Crm));
    assert!(accepted.answers.is_yes(Question::Agile));
    assert!(!accepted.answers.is_yes(Question::Cloud));
    assert_eq!(accepted.answers.adopted_count(), 2);
    assert_eq!(accepted.profile.company_size, CompanySize::Small);
    assert_eq!(accepted.profile.industry, Industry::RetailEcommerce);
    assert_eq!(accepted.profile.budget, DigitalBudget::From5kTo20k);
    assert_eq!(accepted.profile.years_operating, YearsOperating::SixToFifteen);
}

#[test]
fn guard_lists_missing_profile_fields_and_unanswered_questions() {
    let mut submission = submission_with_yes(&[]);
    submission.profile.industry = None;
    submission.profile.years_operating = Some("— Select —".to_string());
    submission.answers.remove("security");
    submission
        .answers
        .insert("remote_work".to_string(), Some("— Select —".to_string()));
    submission.answers.insert("backup".to_string(), None);

    match SubmissionGuard::new().accept(submission) {
        Err(SubmissionError::Incomplete {
            missing_profile,
            unanswered,
        }) => {
            assert_eq!(missing_profile, vec!["Industry Sector", "Years in Operation"]);
            assert_eq!(
                unanswered,
                vec![Question::Security, Question::Backup, Question::RemoteWork]
            );
        }
        other => panic!("expected incomplete submission, got {other:?}"),
    }
}

#[test]
fn guard_refuses_empty_submission() {
    let err = SubmissionGuard::new()
        .accept(Default::default())
        .expect_err("empty submission refused");

    match err {
        SubmissionError::Incomplete {
            missing_profile,
            unanswered,
        } => {
            assert_eq!(missing_profile.len(), 4);
            assert_eq!(unanswered, Question::ALL.to_vec());
        }
        other => panic!("expected incomplete submission, got {other:?}"),
    }
}

#[test]
fn guard_rejects_unrecognised_answers() {
    let mut submission = submission_with_yes(&[]);
    submission
        .answers
        .insert("cloud".to_string(), Some("Sometimes".to_string()));

    let err = SubmissionGuard::new()
        .accept(submission)
        .expect_err("invalid answer refused");
    assert!(matches!(
        err,
        SubmissionError::InvalidAnswer {
            question: Question::Cloud,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "answer 'Sometimes' to question 'cloud' must be Yes or No"
    );
}

#[test]
fn guard_rejects_unknown_profile_options() {
    let mut submission = submission_with_yes(&[]);
    submission.profile.company_size = Some("Enterprise".to_string());

    let err = SubmissionGuard::new()
        .accept(submission)
        .expect_err("unknown size refused");
    assert!(matches!(
        err,
        SubmissionError::InvalidProfile {
            field: "Company Size",
            ..
        }
    ));
}

#[test]
fn guard_ignores_unknown_question_keys_and_key_case() {
    let mut submission = submission_with_yes(&[]);
    let crm = submission.answers.remove("crm").expect("crm present");
    submission.answers.insert("CRM".to_string(), crm);
    submission
        .answers
        .insert("blockchain".to_string(), Some("Yes".to_string()));

    let answers = SubmissionGuard::new()
        .answers_from_submission(submission)
        .expect("extra keys ignored");
    assert_eq!(answers.adopted_count(), 0);
}

#[test]
fn guard_refuses_conflicting_spellings_of_a_question() {
    let mut submission = submission_with_yes(&[]);
    submission
        .answers
        .insert(" Crm".to_string(), Some("Yes".to_string()));

    let err = SubmissionGuard::new()
        .accept(submission)
        .expect_err("conflicting keys refused");
    assert!(matches!(
        err,
        SubmissionError::DuplicateAnswer {
            question: Question::Crm,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "question 'crm' is answered more than once (keys  Crm, crm)"
    );
}

#[test]
fn service_reports_profile_result_and_summary() {
    let assessed_on = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
    let report = AssessmentService::new()
        .assess(submission_with_yes(&developing_business()), assessed_on)
        .expect("assessment succeeds");

    assert_eq!(report.assessed_on, assessed_on);
    assert_eq!(report.profile.company_size, CompanySize::Small);
    assert_eq!(report.result.score, 50);
    assert_eq!(report.summary.adopted, 10);
    assert_eq!(report.summary.not_adopted, 9);
    assert_eq!(report.summary.priority_counts.critical, 2);
}

#[test]
fn service_refuses_incomplete_submission() {
    let assessed_on = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
    let mut submission = submission_with_yes(&[]);
    submission.profile.budget = None;

    let err = AssessmentService::new()
        .assess(submission, assessed_on)
        .expect_err("incomplete refused");
    assert!(matches!(err, SubmissionError::Incomplete { .. }));
}
