use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use super::catalog::ArchetypeDefinition;
use super::insights::extract_insights;
use super::matching::{MatchResult, MatchingEngine};
use super::profile::AssessmentProfile;

/// One catalog entry paired with its score against a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedArchetype<'a> {
    pub archetype: &'a ArchetypeDefinition,
    #[serde(rename = "match")]
    pub matched: MatchResult,
}

impl MatchingEngine {
    /// Scores every archetype against the profile, best match first.
    ///
    /// Equal scores keep catalog order. `limit` truncates the result; `None`
    /// returns the whole catalog.
    pub fn rank(
        &self,
        profile: &AssessmentProfile,
        limit: Option<usize>,
    ) -> Vec<RankedArchetype<'_>> {
        let insights = extract_insights(profile);
        let selected = &profile.dream_job.selected_archetypes;

        let mut ranked: Vec<RankedArchetype<'_>> = self
            .catalog()
            .list_archetypes()
            .iter()
            .map(|archetype| RankedArchetype {
                archetype,
                matched: self.score(archetype, &insights, selected),
            })
            .collect();

        // `sort_by` is stable, which keeps catalog order for ties.
        ranked.sort_by(|left, right| right.matched.score.cmp(&left.matched.score));

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }

        if let Some(top) = ranked.first() {
            debug!(
                matcher = %self.matcher(),
                top_archetype = top.archetype.id,
                top_score = top.matched.score,
                returned = ranked.len(),
                "ranked archetypes"
            );
        }

        ranked
    }
}

/// Ranks the profile against the shared standard catalog.
pub fn rank_archetypes(
    profile: &AssessmentProfile,
    limit: Option<usize>,
) -> Vec<RankedArchetype<'static>> {
    standard_engine().rank(profile, limit)
}

fn standard_engine() -> &'static MatchingEngine {
    static ENGINE: OnceLock<MatchingEngine> = OnceLock::new();
    ENGINE.get_or_init(MatchingEngine::standard)
}
