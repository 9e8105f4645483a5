use super::super::catalog::ArchetypeDefinition;
use super::super::insights::Insights;
use super::matcher::KeywordMatcher;
use super::weights::ScoringWeights;

pub(crate) const FULL_MARKS: f64 = 100.0;
pub(crate) const CAREER_SATISFIED: f64 = 100.0;
pub(crate) const OTHER_AREAS_SATISFIED: f64 = 50.0;
pub(crate) const NOTHING_SATISFIED: f64 = 25.0;

/// Outcome of one keyword factor: the unrounded sub-score and the user items
/// that produced it.
pub(crate) struct KeywordFactor {
    pub score: f64,
    pub matched: Vec<String>,
}

/// Unrounded sub-scores for one archetype, accumulated in weight order.
pub(crate) struct FactorScores {
    pub values: KeywordFactor,
    pub tasks: KeywordFactor,
    pub strengths: KeywordFactor,
    pub requirements: KeywordFactor,
    pub balance: f64,
    pub self_selected: f64,
}

impl FactorScores {
    pub fn weighted_total(&self, weights: &ScoringWeights) -> f64 {
        let mut total = 0.0;
        total += self.values.score * weights.values;
        total += self.tasks.score * weights.tasks;
        total += self.strengths.score * weights.strengths;
        total += self.requirements.score * weights.requirements;
        total += self.balance * weights.balance;
        total += self.self_selected * weights.self_selected;
        total
    }
}

pub(crate) fn score_factors(
    archetype: &ArchetypeDefinition,
    insights: &Insights,
    selected_archetype_ids: &[String],
    matcher: KeywordMatcher,
) -> FactorScores {
    FactorScores {
        values: keyword_factor(&insights.values, &archetype.values, matcher),
        tasks: keyword_factor(
            &insights.high_energy_tasks,
            &archetype.energizing_tasks,
            matcher,
        ),
        strengths: keyword_factor(&insights.strengths, &archetype.strengths, matcher),
        requirements: keyword_factor(
            &insights.top_requirements,
            &archetype.work_requirements,
            matcher,
        ),
        balance: balance_score(insights),
        self_selected: self_selected_score(archetype, selected_archetype_ids),
    }
}

/// Share of the user's items that match any reference keyword, as 0..=100.
///
/// The denominator is the user's list length floored at one, so an empty list
/// scores zero rather than a neutral value.
pub(crate) fn keyword_factor(
    user_items: &[String],
    references: &[&str],
    matcher: KeywordMatcher,
) -> KeywordFactor {
    let matched: Vec<String> = user_items
        .iter()
        .filter(|item| matcher.matches_any(item, references))
        .cloned()
        .collect();

    let denominator = user_items.len().max(1) as f64;
    let ratio = (matched.len() as f64 / denominator).min(1.0);

    KeywordFactor {
        score: ratio * FULL_MARKS,
        matched,
    }
}

pub(crate) fn balance_score(insights: &Insights) -> f64 {
    if insights.career_is_satisfying() {
        CAREER_SATISFIED
    } else if !insights.satisfying_areas.is_empty() {
        OTHER_AREAS_SATISFIED
    } else {
        NOTHING_SATISFIED
    }
}

pub(crate) fn self_selected_score(
    archetype: &ArchetypeDefinition,
    selected_archetype_ids: &[String],
) -> f64 {
    if selected_archetype_ids.iter().any(|id| id == archetype.id) {
        FULL_MARKS
    } else {
        0.0
    }
}

/// Rounds halves toward positive infinity, matching the scores users have
/// already been shown.
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn keyword_factor_uses_user_list_length_as_denominator() {
        let factor = keyword_factor(
            &strings(&["Learning", "Cooking", "Gardening"]),
            &["Innovation", "Learning"],
            KeywordMatcher::Containment,
        );

        assert!((factor.score - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(factor.matched, vec!["Learning"]);
    }

    #[test]
    fn keyword_factor_is_zero_for_empty_user_list() {
        let factor = keyword_factor(&[], &["variety"], KeywordMatcher::Containment);
        assert_eq!(factor.score, 0.0);
        assert!(factor.matched.is_empty());
    }

    #[test]
    fn duplicate_user_items_count_each_time() {
        let factor = keyword_factor(
            &strings(&["analytical", "analytical", "baking"]),
            &["analytical"],
            KeywordMatcher::Containment,
        );
        assert!((factor.score - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(factor.matched.len(), 2);
    }

    #[test]
    fn balance_tiers() {
        let mut insights = Insights::default();
        assert_eq!(balance_score(&insights), 25.0);

        insights.satisfying_areas = strings(&["health"]);
        assert_eq!(balance_score(&insights), 50.0);

        insights.satisfying_areas = strings(&["health", "career"]);
        assert_eq!(balance_score(&insights), 100.0);
    }

    #[test]
    fn round_half_up_matches_expected_ties() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4999), 2);
        assert_eq!(round_half_up(33.333), 33);
        assert_eq!(round_half_up(66.5), 67);
        assert_eq!(round_half_up(-2.5), -2);
    }
}
