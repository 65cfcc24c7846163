use super::common::*;
use crate::assessment::domain::{AnswerSet, Category, Question};
use crate::assessment::evaluation::{EvaluationEngine, MaturityTier, Priority, RiskLevel};

const ALWAYS_TRACED: [u8; 16] = [1, 2, 3, 5, 6, 7, 8, 10, 11, 14, 15, 16, 18, 19, 22, 23];

/// Deterministic spread of answer sets covering the 19-bit input space.
fn sample_answer_sets() -> Vec<AnswerSet> {
    let mut state: u32 = 0x2545_f491;
    let mut samples = vec![AnswerSet::uniform(false), AnswerSet::uniform(true)];
    for _ in 0..512 {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let mask = state >> 13;
        samples.push(
            Question::ALL
                .into_iter()
                .enumerate()
                .map(|(bit, question)| (question, mask & (1 << bit) != 0))
                .collect(),
        );
    }
    samples
}

fn trace_ids(answers: &AnswerSet) -> Vec<u8> {
    EvaluationEngine::new()
        .evaluate(answers)
        .rules_triggered
        .iter()
        .map(|entry| entry.id)
        .collect()
}

#[test]
fn engine_scores_all_no_as_early_stage_high_risk() {
    let result = EvaluationEngine::new().evaluate(&AnswerSet::uniform(false));

    assert_eq!(result.score, 0);
    assert_eq!(result.score_pct, 0);
    assert_eq!(result.tier, 1);
    assert_eq!(result.level, "Early Stage Digital Business");
    assert_eq!(result.level_color, "#e74c3c");
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(
        result.critical_gaps,
        vec!["Cloud Infrastructure", "Cybersecurity", "CRM System", "Digital Strategy"]
    );
    assert_eq!(
        result.risk_flags,
        vec![
            "Cybersecurity Gap — HIGH RISK",
            "No Backup System — DATA LOSS RISK",
            "Infrastructure foundations completely absent",
            "No Leadership Buy-In — TRANSFORMATION RISK",
        ]
    );
    assert_eq!(result.recommendations_with(Priority::Critical).count(), 6);
    assert_eq!(result.recommendations.len(), 19);
    assert_eq!(result.category_scores.len(), 6);
    assert!(result.category_scores.iter().all(|(_, score)| score == 0));
}

#[test]
fn engine_scores_all_yes_above_scale_but_caps_percentage() {
    let result = EvaluationEngine::new().evaluate(&AnswerSet::uniform(true));

    assert_eq!(result.score, 104);
    assert_eq!(result.score_pct, 100);
    assert_eq!(result.tier, 3);
    assert_eq!(result.level, "Advanced Digital Business");
    assert_eq!(result.level_color, "#27ae60");
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.critical_gaps.is_empty());
    assert!(result.risk_flags.is_empty());
    assert!(result.recommendations.is_empty());
    assert_eq!(result.rules_triggered.len(), 25);

    let expected = [
        (Category::Infrastructure, 23),
        (Category::DataIntelligence, 16),
        (Category::AutomationAi, 18),
        (Category::CustomerMarket, 16),
        (Category::StrategyGovernance, 16),
        (Category::PeopleCollaboration, 15),
    ];
    assert_eq!(result.category_scores.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn engine_grades_developing_business() {
    let result = EvaluationEngine::new().evaluate(&answers_with_yes(&developing_business()));

    assert_eq!(result.score, 50);
    assert_eq!(result.maturity_tier(), MaturityTier::Developing);
    assert_eq!(result.level_color, "#f39c12");
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.critical_gaps, vec!["Digital Strategy"]);
    assert_eq!(
        result.risk_flags,
        vec!["No Leadership Buy-In — TRANSFORMATION RISK"]
    );
    assert_eq!(result.category_scores.get(Category::Infrastructure), 23);
    assert_eq!(result.category_scores.get(Category::AutomationAi), 0);
    assert_eq!(result.category_scores.get(Category::PeopleCollaboration), 6);
}

#[test]
fn rule_twenty_five_awards_partial_bonus_without_leadership() {
    let answers = answers_with_yes(&[Question::Training, Question::Collaboration]);
    let result = EvaluationEngine::new().evaluate(&answers);

    let people_bonus: Vec<_> = result
        .rules_triggered
        .iter()
        .filter(|entry| entry.id == 25)
        .collect();
    assert_eq!(people_bonus.len(), 1);
    assert_eq!(people_bonus[0].points, 2);
    assert_eq!(people_bonus[0].category, Category::PeopleCollaboration);
    assert_eq!(result.category_scores.get(Category::PeopleCollaboration), 9);

    let with_leadership = EvaluationEngine::new().evaluate(&answers.with(Question::Leadership, true));
    let full_bonus = with_leadership
        .rules_triggered
        .iter()
        .find(|entry| entry.id == 25)
        .expect("full bonus traced");
    assert_eq!(full_bonus.points, 5);
}

#[test]
fn rule_twenty_five_is_silent_without_training_and_collaboration() {
    let answers = answers_with_yes(&[Question::Training, Question::Leadership]);
    assert!(!trace_ids(&answers).contains(&25));
}

#[test]
fn rule_four_ignores_mixed_cloud_and_security() {
    let answers = answers_with_yes(&[Question::Cloud]);
    let result = EvaluationEngine::new().evaluate(&answers);

    assert!(!result.rules_triggered.iter().any(|entry| entry.id == 4));
    assert!(!result
        .risk_flags
        .iter()
        .any(|flag| flag == "Infrastructure foundations completely absent"));
    assert_eq!(result.category_scores.get(Category::Infrastructure), 6);
}

#[test]
fn optional_rules_without_false_trace_still_recommend() {
    let result = EvaluationEngine::new().evaluate(&AnswerSet::uniform(false));
    let ids: Vec<u8> = result.rules_triggered.iter().map(|entry| entry.id).collect();

    for silent in [9, 12, 13, 17, 20, 21, 24, 25] {
        assert!(!ids.contains(&silent), "rule {silent} traced on unmet branch");
    }
    assert_eq!(result.recommendations_with(Priority::Optional).count(), 4);
}

#[test]
fn risk_level_follows_critical_boundaries() {
    // cloud, security, backup, crm, strategy, leadership drive the critical count.
    let critical_sources = [
        Question::Cloud,
        Question::Security,
        Question::Backup,
        Question::Crm,
        Question::Strategy,
        Question::Leadership,
    ];
    let with_missing = |missing: usize| {
        let mut answers = AnswerSet::uniform(true);
        for question in critical_sources.iter().take(missing) {
            answers.set(*question, false);
        }
        EvaluationEngine::new().evaluate(&answers)
    };

    let one = with_missing(1);
    assert_eq!(one.recommendations_with(Priority::Critical).count(), 1);
    assert_eq!(one.risk_level, RiskLevel::Low);

    let three = with_missing(3);
    assert_eq!(three.recommendations_with(Priority::Critical).count(), 3);
    assert_eq!(three.risk_level, RiskLevel::Medium);

    let four = with_missing(4);
    assert_eq!(four.recommendations_with(Priority::Critical).count(), 4);
    assert_eq!(four.risk_level, RiskLevel::High);
    assert_eq!(
        four.risk_description,
        "Multiple critical gaps identified. Immediate action required to avoid operational and competitive risk."
    );
}

#[test]
fn evaluation_is_deterministic() {
    let engine = EvaluationEngine::new();
    for answers in sample_answer_sets() {
        assert_eq!(engine.evaluate(&answers), engine.evaluate(&answers));
    }
}

#[test]
fn flipping_an_answer_to_yes_never_lowers_the_score() {
    let engine = EvaluationEngine::new();
    for answers in sample_answer_sets() {
        let baseline = engine.evaluate(&answers).score;
        for question in Question::ALL {
            if answers.is_yes(question) {
                continue;
            }
            let flipped = engine.evaluate(&answers.clone().with(question, true)).score;
            assert!(
                flipped >= baseline,
                "answering {question} lowered score {baseline} -> {flipped}"
            );
        }
    }
}

#[test]
fn scores_stay_within_bounds_and_match_category_sum() {
    let engine = EvaluationEngine::new();
    for answers in sample_answer_sets() {
        let result = engine.evaluate(&answers);
        assert!(result.score <= 104);
        assert!(result.score_pct <= 100);
        assert_eq!(result.score, result.category_scores.total());
        assert_eq!(
            result.score,
            result
                .rules_triggered
                .iter()
                .map(|entry| entry.points)
                .sum::<u32>()
        );
    }
}

#[test]
fn trace_always_contains_unconditional_rules_in_order() {
    for answers in sample_answer_sets() {
        let ids = trace_ids(&answers);
        for id in ALWAYS_TRACED {
            assert!(ids.contains(&id), "rule {id} missing from trace");
        }
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn recommendations_are_priority_sorted_and_stable() {
    let engine = EvaluationEngine::new();
    let all_no = engine.evaluate(&AnswerSet::uniform(false));
    let rule_order: Vec<&str> = all_no
        .recommendations
        .iter()
        .map(|recommendation| recommendation.text.as_str())
        .collect();
    assert!(rule_order[0].starts_with("Migrate to cloud infrastructure"));
    assert!(rule_order[5].starts_with("Secure executive sponsorship"));
    assert!(rule_order[6].starts_with("Enable mobile access"));
    assert!(rule_order[18].starts_with("Enable remote working"));

    for answers in sample_answer_sets() {
        let result = engine.evaluate(&answers);
        let ranks: Vec<u8> = result
            .recommendations
            .iter()
            .map(|recommendation| recommendation.priority.rank())
            .collect();
        assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn evaluation_result_serializes_output_contract() {
    let result = EvaluationEngine::new().evaluate(&answers_with_yes(&developing_business()));
    let json = serde_json::to_value(&result).expect("serializes");

    assert_eq!(json["score"], 50);
    assert_eq!(json["tier"], 2);
    assert_eq!(json["risk_level"], "MEDIUM");
    assert_eq!(json["recommendations"][0]["priority"], "Critical");
    assert_eq!(json["recommendations"][0]["category"], "Strategy & Governance");
    assert_eq!(json["rules_triggered"][0]["id"], 1);
    assert_eq!(json["category_scores"]["Customer & Market"], 16);

    let keys: Vec<&str> = json["category_scores"]
        .as_object()
        .expect("category map")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 6);
}

#[test]
fn unrecognised_answer_keys_score_nothing() {
    let answers: AnswerSet = serde_json::from_str(r#"{"Cloud": true, " CRM ": true}"#)
        .expect("answer map deserializes");
    let result = EvaluationEngine::new().evaluate(&answers);

    assert_eq!(result.score, 0);
    assert_eq!(result, EvaluationEngine::new().evaluate(&AnswerSet::uniform(false)));
}
