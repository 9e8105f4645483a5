use std::collections::HashSet;

use serde::Serialize;

use super::insights::{collect_strengths, TOP_REQUIREMENTS};
use super::profile::{AssessmentProfile, LifeArea};

const SUMMARY_STRENGTHS: usize = 5;
const FULL_REQUIREMENT_MATCH: u8 = 5;
const TOP_PROBLEMS: usize = 3;

/// Read-only overview of an assessment for results pages and exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub top_values: Vec<String>,
    pub top_strengths: Vec<String>,
    pub all_strengths: Vec<String>,
    pub top_requirements: Vec<RequirementGap>,
    pub energy_balance: EnergyBalance,
    pub life_balance_score: f64,
    pub life_areas: Vec<LifeAreaRating>,
    pub top_problems: Vec<ProblemInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_archetype: Option<String>,
}

/// A worked-through problem: only those with both a problem and a root cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemInsight {
    pub problem: String,
    pub root_cause: String,
    pub next_step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementGap {
    pub name: String,
    pub importance: u8,
    pub current_match: u8,
    pub gap: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnergyBalance {
    pub energizing: usize,
    pub draining: usize,
    pub neutral: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeAreaRating {
    pub area: LifeArea,
    pub label: &'static str,
    pub rating: i32,
}

impl ProfileSummary {
    pub fn from_profile(profile: &AssessmentProfile) -> Self {
        let all_strengths = unique_strengths(profile);
        let top_strengths = all_strengths.iter().take(SUMMARY_STRENGTHS).cloned().collect();

        let top_requirements = profile
            .work_requirements
            .iter()
            .take(TOP_REQUIREMENTS)
            .map(|requirement| {
                let current_match = requirement
                    .current_match
                    .unwrap_or(0)
                    .min(FULL_REQUIREMENT_MATCH);
                RequirementGap {
                    name: requirement.name.clone(),
                    importance: requirement.rank.unwrap_or(0),
                    current_match,
                    gap: FULL_REQUIREMENT_MATCH - current_match,
                }
            })
            .collect();

        let energy_balance = profile
            .work_tasks
            .iter()
            .fold(EnergyBalance::default(), |mut balance, task| {
                match task.energy {
                    energy if energy > 0 => balance.energizing += 1,
                    energy if energy < 0 => balance.draining += 1,
                    _ => balance.neutral += 1,
                }
                balance.total += 1;
                balance
            });

        let life_areas = LifeArea::ALL
            .iter()
            .map(|area| LifeAreaRating {
                area: *area,
                label: area.label(),
                rating: profile.life_area_rating(*area),
            })
            .collect();

        let top_problems = profile
            .five_why_problems
            .iter()
            .filter(|entry| !entry.problem.trim().is_empty() && !entry.root_cause.trim().is_empty())
            .take(TOP_PROBLEMS)
            .map(|entry| ProblemInsight {
                problem: entry.problem.clone(),
                root_cause: entry.root_cause.clone(),
                next_step: entry.next_step.clone(),
                category: entry.category.clone(),
            })
            .collect();

        Self {
            top_values: profile.values.top5.clone(),
            top_strengths,
            all_strengths,
            top_requirements,
            energy_balance,
            life_balance_score: life_balance_score(profile),
            life_areas,
            top_problems,
            primary_archetype: profile.dream_job.selected_archetypes.first().cloned(),
        }
    }
}

/// Strengths de-duplicated case-insensitively; the first spelling seen is kept.
pub fn unique_strengths(profile: &AssessmentProfile) -> Vec<String> {
    let mut seen = HashSet::new();
    collect_strengths(profile)
        .map(str::trim)
        .filter(|strength| !strength.is_empty())
        .filter(|strength| seen.insert(strength.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Mean rating over the eight canonical areas, rounded to one decimal.
///
/// Every recorded rating contributes to the sum, while the divisor stays at the
/// eight canonical areas.
pub fn life_balance_score(profile: &AssessmentProfile) -> f64 {
    let total: i32 = profile.wheel_of_life.ratings.values().sum();
    let mean = f64::from(total) / LifeArea::ALL.len() as f64;
    (mean * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::profile::FiveWhyProblem;

    fn problem(text: &str, root_cause: &str) -> FiveWhyProblem {
        FiveWhyProblem {
            problem: text.to_string(),
            whys: vec![String::new(); 5],
            root_cause: root_cause.to_string(),
            next_step: format!("address {text}"),
            category: Some("work".to_string()),
        }
    }

    #[test]
    fn strengths_are_deduplicated_case_insensitively() {
        let profile = AssessmentProfile::builder()
            .work_strengths(None, ["Analytical", "writing"])
            .test_strength("analytical")
            .friend_strengths(Some("Lee"), ["Writing ", "empathy"])
            .build();

        let summary = ProfileSummary::from_profile(&profile);

        assert_eq!(summary.all_strengths, vec!["Analytical", "writing", "empathy"]);
    }

    #[test]
    fn top_strengths_are_capped_at_five() {
        let profile = AssessmentProfile::builder()
            .work_strengths(None, ["a", "b", "c", "d", "e", "f"])
            .build();

        let summary = ProfileSummary::from_profile(&profile);

        assert_eq!(summary.top_strengths.len(), 5);
        assert_eq!(summary.all_strengths.len(), 6);
    }

    #[test]
    fn requirement_gap_is_measured_against_full_match() {
        let profile = AssessmentProfile::builder()
            .ranked_requirement("autonomy", 1, 2)
            .requirement("variety")
            .build();

        let summary = ProfileSummary::from_profile(&profile);

        assert_eq!(
            summary.top_requirements,
            vec![
                RequirementGap {
                    name: "autonomy".to_string(),
                    importance: 1,
                    current_match: 2,
                    gap: 3,
                },
                RequirementGap {
                    name: "variety".to_string(),
                    importance: 0,
                    current_match: 0,
                    gap: 5,
                },
            ]
        );
    }

    #[test]
    fn energy_balance_counts_each_task_once() {
        let profile = AssessmentProfile::builder()
            .work_task("designing", 3)
            .work_task("meetings", -2)
            .work_task("email", 0)
            .work_task("mentoring", 1)
            .build();

        let balance = ProfileSummary::from_profile(&profile).energy_balance;

        assert_eq!(
            balance,
            EnergyBalance {
                energizing: 2,
                draining: 1,
                neutral: 1,
                total: 4,
            }
        );
    }

    #[test]
    fn life_balance_score_averages_over_eight_areas() {
        let profile = AssessmentProfile::builder()
            .life_area(LifeArea::Career, 3)
            .life_area(LifeArea::Health, 2)
            .life_area(LifeArea::Finances, -1)
            .build();

        // 4 / 8 = 0.5
        assert_eq!(life_balance_score(&profile), 0.5);
        assert_eq!(life_balance_score(&AssessmentProfile::default()), 0.0);
    }

    #[test]
    fn top_problems_keep_the_first_three_with_a_root_cause() {
        let profile = AssessmentProfile::builder()
            .five_why(problem("meetings", "no agenda"))
            .five_why(problem("unfinished", ""))
            .five_why(problem("", "orphaned cause"))
            .five_why(problem("commute", "office location"))
            .five_why(problem("feedback", "no one-on-ones"))
            .five_why(problem("scope creep", "vague briefs"))
            .build();

        let problems = ProfileSummary::from_profile(&profile).top_problems;

        let names: Vec<_> = problems.iter().map(|entry| entry.problem.as_str()).collect();
        assert_eq!(names, vec!["meetings", "commute", "feedback"]);
        assert_eq!(problems[0].root_cause, "no agenda");
        assert_eq!(problems[0].next_step, "address meetings");
        assert_eq!(problems[0].category.as_deref(), Some("work"));
    }

    #[test]
    fn primary_archetype_is_first_selection() {
        let profile = AssessmentProfile::builder()
            .select_archetype("coach")
            .select_archetype("leader")
            .build();

        assert_eq!(
            ProfileSummary::from_profile(&profile).primary_archetype.as_deref(),
            Some("coach")
        );
    }
}
