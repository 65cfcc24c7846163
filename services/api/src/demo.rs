use chrono::{Local, NaiveDate};
use clap::Args;
use maturity_advisor::assessment::{
    AnswerSheetImporter, AssessmentReport, AssessmentService, AssessmentSubmission, Category,
    Priority, ProfileOption, Question, RawProfile,
};
use maturity_advisor::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Answer sheet CSV with `question,answer` rows (profile rows optional)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Assessment date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Assessment date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Only print the headline of each sample organisation
    #[arg(long)]
    pub(crate) brief: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        json,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let submission = AnswerSheetImporter::from_path(&answers)?;
    let report = AssessmentService::new().assess(submission, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report, false);
    }

    Ok(())
}

pub(crate) fn run_questions() {
    println!("Digital maturity questionnaire");
    for category in Category::ALL {
        println!(
            "\n{} (up to {} points)",
            category.label(),
            category.max_points()
        );
        for question in Question::ALL
            .into_iter()
            .filter(|question| question.category() == category)
        {
            println!("- [{}] {}", question.key(), question.prompt());
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, brief } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = AssessmentService::new();

    println!("Digital maturity demo ({today})");
    for sample in sample_organisations() {
        println!("\n=== {} ===", sample.name);
        match service.assess(sample.submission, today) {
            Ok(report) => render_report(&report, brief),
            Err(err) => println!("  Submission rejected: {}", err),
        }
    }

    Ok(())
}

pub(crate) fn render_report(report: &AssessmentReport, brief: bool) {
    let result = &report.result;
    let summary = &report.summary;

    println!(
        "{}: {}/100 (raw {}) | tier {} | {} risk",
        result.level, result.score_pct, result.score, result.tier, result.risk_level.label()
    );
    if brief {
        return;
    }

    println!("Assessed on {}", report.assessed_on);
    println!(
        "Profile: {} | {} | budget {} | operating {}",
        report.profile.company_size.label(),
        report.profile.industry.label(),
        report.profile.budget.label(),
        report.profile.years_operating.label()
    );
    println!("{}", result.risk_description);
    println!(
        "Adoption: {}/{} practices ({:.0}%)",
        summary.adopted,
        summary.adopted + summary.not_adopted,
        summary.adoption_rate()
    );

    println!("\nCategory breakdown");
    for entry in &summary.categories {
        println!(
            "- {}: {}/{} ({}%)",
            entry.label, entry.score, entry.max_points, entry.percentage
        );
    }
    if let Some(weakest) = summary.weakest_category {
        println!("Weakest area: {}", weakest);
    }

    if result.critical_gaps.is_empty() {
        println!("\nCritical gaps: none");
    } else {
        println!("\nCritical gaps: {}", result.critical_gaps.join(", "));
    }

    if !result.risk_flags.is_empty() {
        println!("\nRisk flags");
        for flag in &result.risk_flags {
            println!("- {}", flag);
        }
    }

    if result.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!(
            "\nRecommendations ({} critical, {} important, {} optional)",
            summary.priority_counts.critical,
            summary.priority_counts.important,
            summary.priority_counts.optional
        );
        for priority in [Priority::Critical, Priority::Important, Priority::Optional] {
            for recommendation in result.recommendations_with(priority) {
                println!(
                    "- [{}] {}: {}",
                    priority.label(),
                    recommendation.category.short_label(),
                    recommendation.text
                );
            }
        }
    }

    println!("\nRules triggered");
    for entry in &result.rules_triggered {
        println!(
            "- #{:02} +{} {}",
            entry.id, entry.points, entry.description
        );
    }
}

struct SampleOrganisation {
    name: &'static str,
    submission: AssessmentSubmission,
}

fn sample_organisations() -> Vec<SampleOrganisation> {
    vec![
        SampleOrganisation {
            name: "Harbour Street Bakery",
            submission: sample_submission(
                ["micro", "hospitality_tourism", "under5k", "over_fifteen"],
                &[
                    Question::MobileAccess,
                    Question::DigitalMarketing,
                    Question::Collaboration,
                ],
            ),
        },
        SampleOrganisation {
            name: "Northgate Outdoor Supply",
            submission: sample_submission(
                ["small", "retail_ecommerce", "from5k_to20k", "six_to_fifteen"],
                &[
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
                ],
            ),
        },
        SampleOrganisation {
            name: "Meridian Precision Engineering",
            submission: sample_submission(
                ["medium", "manufacturing", "over100k", "over_fifteen"],
                &Question::ALL
                    .into_iter()
                    .filter(|question| {
                        !matches!(
                            question,
                            Question::AiTools | Question::Agile | Question::Governance
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
        },
    ]
}

fn sample_submission(profile: [&str; 4], yes: &[Question]) -> AssessmentSubmission {
    let [company_size, industry, budget, years_operating] = profile;
    let mut submission = AssessmentSubmission {
        profile: RawProfile {
            company_size: Some(company_size.to_string()),
            industry: Some(industry.to_string()),
            budget: Some(budget.to_string()),
            years_operating: Some(years_operating.to_string()),
        },
        ..AssessmentSubmission::default()
    };

    for question in Question::ALL {
        let answer = if yes.contains(&question) { "Yes" } else { "No" };
        submission = submission.answer(question, answer);
    }
    submission
}
