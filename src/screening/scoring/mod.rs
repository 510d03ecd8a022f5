mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::candidate::CandidateRecord;
use super::criteria::{CriteriaConfig, CriterionKind};

/// Stateless engine applying a criteria configuration to candidate records.
///
/// The present year is injected so scoring stays deterministic; only the host
/// consults a clock.
pub struct ScoringEngine {
    config: CriteriaConfig,
    present_year: i32,
}

impl ScoringEngine {
    pub fn new(config: CriteriaConfig, present_year: i32) -> Self {
        Self {
            config,
            present_year,
        }
    }

    pub fn score(&self, candidate: &CandidateRecord) -> ScoreBreakdown {
        let (components, total) = rules::score_record(candidate, &self.config, self.present_year);
        let (badges, remark) = rules::collect_badges(candidate, &self.config);
        let remark = if remark.is_empty() {
            "Aucune remarque.".to_string()
        } else {
            remark
        };

        info!(total, "candidate scored");

        ScoreBreakdown {
            total,
            components,
            badges,
            target_role: rules::infer_target_role(candidate),
            remark,
        }
    }
}

/// Discrete contribution of one active criterion, kept for transparent
/// audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: CriterionKind,
    pub points: u8,
    pub note: String,
}

/// Non-scoring qualitative annotation attached to the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
}

/// Complete scoring output for one (candidate, criteria) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u8,
    #[serde(rename = "scores")]
    pub components: Vec<CriterionScore>,
    pub badges: Vec<Badge>,
    #[serde(rename = "poste_visé")]
    pub target_role: String,
    #[serde(rename = "remarque")]
    pub remark: String,
}

impl ScoreBreakdown {
    /// Per-criterion points keyed by display label.
    pub fn scores_by_label(&self) -> BTreeMap<&'static str, u8> {
        self.components
            .iter()
            .map(|component| (component.criterion.label(), component.points))
            .collect()
    }
}
