use serde::{Deserialize, Serialize};

use super::Recommendation;

/// Raw scores are normalised against this scale even though the rule table can exceed it.
pub(crate) const SCORE_SCALE: u32 = 100;

const ADVANCED_THRESHOLD: u32 = 72;
const DEVELOPING_THRESHOLD: u32 = 42;

const HIGH_RISK_CRITICAL_COUNT: usize = 4;
const MEDIUM_RISK_CRITICAL_COUNT: usize = 2;

/// Maturity tier derived from the accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityTier {
    EarlyStage,
    Developing,
    Advanced,
}

impl MaturityTier {
    pub fn from_score(score: u32) -> Self {
        if score >= ADVANCED_THRESHOLD {
            Self::Advanced
        } else if score >= DEVELOPING_THRESHOLD {
            Self::Developing
        } else {
            Self::EarlyStage
        }
    }

    pub const fn ordinal(self) -> u8 {
        match self {
            Self::EarlyStage => 1,
            Self::Developing => 2,
            Self::Advanced => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EarlyStage => "Early Stage Digital Business",
            Self::Developing => "Developing Digital Business",
            Self::Advanced => "Advanced Digital Business",
        }
    }

    /// Display colour token: red, amber, green.
    pub const fn color(self) -> &'static str {
        match self {
            Self::EarlyStage => "#e74c3c",
            Self::Developing => "#f39c12",
            Self::Advanced => "#27ae60",
        }
    }
}

/// Overall risk derived from how many critical recommendations were raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn from_critical_count(count: usize) -> Self {
        if count >= HIGH_RISK_CRITICAL_COUNT {
            Self::High
        } else if count >= MEDIUM_RISK_CRITICAL_COUNT {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::High => "Multiple critical gaps identified. Immediate action required to avoid operational and competitive risk.",
            Self::Medium => "Some critical weaknesses present. Address priority items within the next 6 months.",
            Self::Low => "Organisation shows solid digital foundations. Focus on optimisation and innovation.",
        }
    }
}

pub(crate) fn score_percentage(score: u32) -> u32 {
    let normalised = (f64::from(score) / f64::from(SCORE_SCALE) * 100.0).round();
    (normalised as u32).min(100)
}

/// Stable sort: emission order is preserved within a priority.
pub(crate) fn rank_recommendations(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by_key(|recommendation| recommendation.priority.rank());
    recommendations
}
