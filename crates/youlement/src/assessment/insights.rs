use serde::{Deserialize, Serialize};

use super::profile::{AssessmentProfile, LifeArea};

/// Minimum task energy for a task to count as energizing.
pub const HIGH_ENERGY_THRESHOLD: i32 = 2;
/// Minimum life-area rating for an area to count as satisfying.
pub const SATISFYING_AREA_THRESHOLD: i32 = 2;
/// Only the most important requirements take part in matching.
pub const TOP_REQUIREMENTS: usize = 5;

/// Normalized evidence derived from a profile, recomputed on every scoring call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub strengths: Vec<String>,
    pub values: Vec<String>,
    pub high_energy_tasks: Vec<String>,
    pub top_requirements: Vec<String>,
    pub satisfying_areas: Vec<String>,
}

impl Insights {
    pub fn career_is_satisfying(&self) -> bool {
        self.satisfying_areas
            .iter()
            .any(|area| area == LifeArea::Career.key())
    }
}

pub fn extract_insights(profile: &AssessmentProfile) -> Insights {
    Insights {
        strengths: collect_strengths(profile).map(str::to_string).collect(),
        values: profile.values.top5.clone(),
        high_energy_tasks: profile
            .work_tasks
            .iter()
            .filter(|task| task.energy >= HIGH_ENERGY_THRESHOLD)
            .map(|task| task.name.clone())
            .collect(),
        top_requirements: profile
            .work_requirements
            .iter()
            .take(TOP_REQUIREMENTS)
            .map(|requirement| requirement.name.clone())
            .collect(),
        satisfying_areas: LifeArea::ALL
            .iter()
            .filter(|area| profile.life_area_rating(**area) >= SATISFYING_AREA_THRESHOLD)
            .map(|area| area.key().to_string())
            .collect(),
    }
}

/// Non-empty strengths in source order: work, tests, then friends.
///
/// Duplicates are kept; repeated evidence weighs more during matching.
pub(crate) fn collect_strengths(profile: &AssessmentProfile) -> impl Iterator<Item = &str> {
    let strengths = &profile.strengths;
    let from_work = strengths
        .from_work
        .iter()
        .flat_map(|entry| entry.strengths.iter());
    let from_friends = strengths
        .from_friends
        .iter()
        .flat_map(|entry| entry.strengths.iter());

    from_work
        .chain(strengths.from_tests.iter())
        .chain(from_friends)
        .map(String::as_str)
        .filter(|strength| !strength.is_empty())
}
