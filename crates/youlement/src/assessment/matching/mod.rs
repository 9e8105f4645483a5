mod matcher;
mod rules;
mod weights;

pub use matcher::KeywordMatcher;
pub use weights::{ScoringWeights, STANDARD_WEIGHTS};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::{ArchetypeCatalog, ArchetypeDefinition};
use super::insights::Insights;
use rules::{round_half_up, score_factors, FactorScores};

/// Stateless scorer bundling the catalog with the weighting and keyword rules.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    catalog: Arc<ArchetypeCatalog>,
    weights: ScoringWeights,
    matcher: KeywordMatcher,
}

impl MatchingEngine {
    pub fn new(catalog: Arc<ArchetypeCatalog>) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
            matcher: KeywordMatcher::default(),
        }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(ArchetypeCatalog::standard()))
    }

    pub fn with_matcher(mut self, matcher: KeywordMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn catalog(&self) -> &ArchetypeCatalog {
        &self.catalog
    }

    pub fn matcher(&self) -> KeywordMatcher {
        self.matcher
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(
        &self,
        archetype: &ArchetypeDefinition,
        insights: &Insights,
        selected_archetype_ids: &[String],
    ) -> MatchResult {
        let factors = score_factors(archetype, insights, selected_archetype_ids, self.matcher);
        assemble_result(archetype, factors, &self.weights)
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Scores one archetype with the standard weights and containment matching.
pub fn score_archetype(
    archetype: &ArchetypeDefinition,
    insights: &Insights,
    selected_archetype_ids: &[String],
) -> MatchResult {
    let factors = score_factors(
        archetype,
        insights,
        selected_archetype_ids,
        KeywordMatcher::Containment,
    );
    assemble_result(archetype, factors, &STANDARD_WEIGHTS)
}

fn assemble_result(
    archetype: &ArchetypeDefinition,
    factors: FactorScores,
    weights: &ScoringWeights,
) -> MatchResult {
    let total = factors.weighted_total(weights);

    MatchResult {
        archetype_id: archetype.id.to_string(),
        score: round_half_up(total),
        breakdown: ScoreBreakdown {
            values: round_half_up(factors.values.score),
            tasks: round_half_up(factors.tasks.score),
            strengths: round_half_up(factors.strengths.score),
            requirements: round_half_up(factors.requirements.score),
            balance: round_half_up(factors.balance),
            self_selected: round_half_up(factors.self_selected),
        },
        matching_factors: MatchingFactors {
            values: factors.values.matched,
            tasks: factors.tasks.matched,
            strengths: factors.strengths.matched,
        },
    }
}

/// Composite score for one archetype plus the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub archetype_id: String,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
    pub matching_factors: MatchingFactors,
}

/// Per-factor sub-scores, each 0..=100 and rounded half up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub values: i32,
    pub tasks: i32,
    pub strengths: i32,
    pub requirements: i32,
    pub balance: i32,
    pub self_selected: i32,
}

impl ScoreBreakdown {
    /// Points each factor contributed to the total, rounded for display.
    pub fn weighted_points(&self, weights: &ScoringWeights) -> [(&'static str, i32); 6] {
        [
            ("values", round_half_up(self.values as f64 * weights.values)),
            ("tasks", round_half_up(self.tasks as f64 * weights.tasks)),
            (
                "strengths",
                round_half_up(self.strengths as f64 * weights.strengths),
            ),
            (
                "requirements",
                round_half_up(self.requirements as f64 * weights.requirements),
            ),
            ("balance", round_half_up(self.balance as f64 * weights.balance)),
            (
                "self_selected",
                round_half_up(self.self_selected as f64 * weights.self_selected),
            ),
        ]
    }
}

/// The literal user strings that matched an archetype's reference keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingFactors {
    pub values: Vec<String>,
    pub tasks: Vec<String>,
    pub strengths: Vec<String>,
}

impl MatchingFactors {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.tasks.is_empty() && self.strengths.is_empty()
    }
}
