use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Lowest rating accepted for task energy and life-area satisfaction.
pub const MIN_RATING: i32 = -3;
/// Highest rating accepted for task energy and life-area satisfaction.
pub const MAX_RATING: i32 = 3;

/// Raw assessment answers gathered across the wizard steps.
///
/// Every field defaults to an empty collection so partially completed
/// assessments deserialize cleanly. A field carrying the wrong JSON type is still
/// a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentProfile {
    pub values: ValuesSelection,
    pub work_tasks: Vec<WorkTask>,
    pub strengths: StrengthsInventory,
    pub work_requirements: Vec<WorkRequirement>,
    pub wheel_of_life: WheelOfLife,
    pub five_why_problems: Vec<FiveWhyProblem>,
    pub dream_job: DreamJob,
}

impl AssessmentProfile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Returns a builder seeded with this profile, leaving `self` untouched.
    pub fn to_builder(&self) -> ProfileBuilder {
        ProfileBuilder {
            profile: self.clone(),
        }
    }

    pub fn life_area_rating(&self, area: LifeArea) -> i32 {
        self.wheel_of_life.rating(area)
    }
}

/// Ranked personal values; insertion order is priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuesSelection {
    pub top5: Vec<String>,
}

/// A reflected work task with its energizing (+) or draining (-) rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkTask {
    pub name: String,
    pub energy: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Strengths collected from work reflection, formal tests, and friends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrengthsInventory {
    pub from_work: Vec<WorkStrengths>,
    pub from_tests: Vec<String>,
    pub from_friends: Vec<FriendFeedback>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkStrengths {
    #[serde(alias = "task", skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FriendFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub strengths: Vec<String>,
}

/// A work requirement; list position is importance (index 0 first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkRequirement {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u8>,
    /// How well the current job meets the requirement, 0..=5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_match: Option<u8>,
}

const JUSTIFICATIONS_KEY: &str = "justifications";

/// Life-area ratings keyed by area, plus an optional note per area.
///
/// On the wire this is one flat object: numeric entries are ratings, and the
/// `justifications` entry holds the notes. Other non-numeric entries are
/// dropped on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WheelOfLife {
    #[serde(flatten)]
    pub ratings: BTreeMap<String, i32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub justifications: BTreeMap<String, String>,
}

impl WheelOfLife {
    /// Rating for a canonical area; unrated areas read as 0.
    pub fn rating(&self, area: LifeArea) -> i32 {
        self.ratings.get(area.key()).copied().unwrap_or(0)
    }

    pub fn justification(&self, area: LifeArea) -> Option<&str> {
        self.justifications.get(area.key()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty() && self.justifications.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WheelEntry {
    Rating(i32),
    Fractional(f64),
    Notes(BTreeMap<String, String>),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for WheelOfLife {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<String, WheelEntry>::deserialize(deserializer)?;
        let mut wheel = WheelOfLife::default();

        for (key, entry) in entries {
            match entry {
                WheelEntry::Rating(rating) => {
                    wheel.ratings.insert(key, rating);
                }
                WheelEntry::Fractional(rating) if rating.is_finite() => {
                    let rounded = (rating + 0.5).floor().clamp(i32::MIN as f64, i32::MAX as f64);
                    wheel.ratings.insert(key, rounded as i32);
                }
                WheelEntry::Notes(notes) if key == JUSTIFICATIONS_KEY => {
                    wheel.justifications = notes;
                }
                WheelEntry::Fractional(_) | WheelEntry::Notes(_) | WheelEntry::Other(_) => {}
            }
        }

        Ok(wheel)
    }
}

/// One root-cause analysis: a problem, up to five successive "why" answers,
/// and what the user concluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FiveWhyProblem {
    pub problem: String,
    pub whys: Vec<String>,
    pub root_cause: String,
    pub next_step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DreamJob {
    pub selected_archetypes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<DreamJobVision>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DreamJobVision {
    pub doing: String,
    pub with_whom: String,
    pub how: String,
    pub why: String,
}

/// The canonical wheel-of-life areas, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeArea {
    Health,
    Career,
    Relationships,
    PersonalGrowth,
    Finances,
    FunRecreation,
    Spirituality,
    Environment,
}

impl LifeArea {
    pub const ALL: [LifeArea; 8] = [
        LifeArea::Health,
        LifeArea::Career,
        LifeArea::Relationships,
        LifeArea::PersonalGrowth,
        LifeArea::Finances,
        LifeArea::FunRecreation,
        LifeArea::Spirituality,
        LifeArea::Environment,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            LifeArea::Health => "health",
            LifeArea::Career => "career",
            LifeArea::Relationships => "relationships",
            LifeArea::PersonalGrowth => "personalGrowth",
            LifeArea::Finances => "finances",
            LifeArea::FunRecreation => "funRecreation",
            LifeArea::Spirituality => "spirituality",
            LifeArea::Environment => "environment",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LifeArea::Health => "Health",
            LifeArea::Career => "Career",
            LifeArea::Relationships => "Relationships",
            LifeArea::PersonalGrowth => "Growth",
            LifeArea::Finances => "Finances",
            LifeArea::FunRecreation => "Fun",
            LifeArea::Spirituality => "Spirituality",
            LifeArea::Environment => "Environment",
        }
    }
}

/// Produces a fresh [`AssessmentProfile`] per edit so callers never mutate a
/// profile that has already been scored.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    profile: AssessmentProfile,
}

impl ProfileBuilder {
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.profile.values.top5.push(value.into());
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile
            .values
            .top5
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn work_task(mut self, name: impl Into<String>, energy: i32) -> Self {
        self.profile.work_tasks.push(WorkTask {
            name: name.into(),
            energy,
            category: None,
        });
        self
    }

    pub fn work_strengths<I, S>(mut self, task_name: Option<&str>, strengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile.strengths.from_work.push(WorkStrengths {
            task_name: task_name.map(str::to_string),
            strengths: strengths.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn test_strength(mut self, strength: impl Into<String>) -> Self {
        self.profile.strengths.from_tests.push(strength.into());
        self
    }

    pub fn friend_strengths<I, S>(mut self, name: Option<&str>, strengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile.strengths.from_friends.push(FriendFeedback {
            name: name.map(str::to_string),
            strengths: strengths.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn requirement(mut self, name: impl Into<String>) -> Self {
        self.profile.work_requirements.push(WorkRequirement {
            name: name.into(),
            rank: None,
            current_match: None,
        });
        self
    }

    pub fn ranked_requirement(
        mut self,
        name: impl Into<String>,
        rank: u8,
        current_match: u8,
    ) -> Self {
        self.profile.work_requirements.push(WorkRequirement {
            name: name.into(),
            rank: Some(rank),
            current_match: Some(current_match),
        });
        self
    }

    pub fn life_area(mut self, area: LifeArea, rating: i32) -> Self {
        self.profile
            .wheel_of_life
            .ratings
            .insert(area.key().to_string(), rating);
        self
    }

    pub fn life_area_justification(mut self, area: LifeArea, note: impl Into<String>) -> Self {
        self.profile
            .wheel_of_life
            .justifications
            .insert(area.key().to_string(), note.into());
        self
    }

    pub fn five_why(mut self, problem: FiveWhyProblem) -> Self {
        self.profile.five_why_problems.push(problem);
        self
    }

    pub fn select_archetype(mut self, archetype_id: impl Into<String>) -> Self {
        let archetype_id = archetype_id.into();
        if !self
            .profile
            .dream_job
            .selected_archetypes
            .contains(&archetype_id)
        {
            self.profile.dream_job.selected_archetypes.push(archetype_id);
        }
        self
    }

    pub fn deselect_archetype(mut self, archetype_id: &str) -> Self {
        self.profile
            .dream_job
            .selected_archetypes
            .retain(|id| id != archetype_id);
        self
    }

    pub fn vision(mut self, vision: DreamJobVision) -> Self {
        self.profile.dream_job.vision = Some(vision);
        self
    }

    pub fn build(self) -> AssessmentProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_to_empty_collections() {
        let profile: AssessmentProfile =
            serde_json::from_str(r#"{"values":{"top5":["Service"]}}"#).expect("profile parses");

        assert_eq!(profile.values.top5, vec!["Service".to_string()]);
        assert!(profile.work_tasks.is_empty());
        assert!(profile.strengths.from_work.is_empty());
        assert!(profile.wheel_of_life.is_empty());
        assert!(profile.five_why_problems.is_empty());
        assert!(profile.dream_job.selected_archetypes.is_empty());
    }

    #[test]
    fn wheel_of_life_keeps_ratings_and_justifications_apart() {
        let profile: AssessmentProfile = serde_json::from_str(
            r#"{
                "values": { "top5": ["Innovation"] },
                "wheelOfLife": {
                    "career": 3,
                    "health": 0,
                    "personalGrowth": 1.5,
                    "justifications": { "career": "Promoted this spring" },
                    "notes": { "mood": "fine" },
                    "finances": null
                }
            }"#,
        )
        .expect("wizard wheel parses");

        let wheel = &profile.wheel_of_life;
        assert_eq!(wheel.rating(LifeArea::Career), 3);
        assert_eq!(wheel.rating(LifeArea::Health), 0);
        assert_eq!(wheel.rating(LifeArea::PersonalGrowth), 2);
        assert_eq!(wheel.ratings.len(), 3);
        assert_eq!(
            wheel.justification(LifeArea::Career),
            Some("Promoted this spring")
        );
        assert_eq!(wheel.justification(LifeArea::Health), None);
    }

    #[test]
    fn wheel_of_life_serializes_as_one_flat_object() {
        let profile = AssessmentProfile::builder()
            .life_area(LifeArea::Career, 2)
            .life_area_justification(LifeArea::Career, "Good team")
            .build();

        let json = serde_json::to_value(&profile).expect("serializes");
        assert_eq!(json["wheelOfLife"]["career"], 2);
        assert_eq!(json["wheelOfLife"]["justifications"]["career"], "Good team");

        let restored: AssessmentProfile = serde_json::from_value(json).expect("deserializes");
        assert_eq!(restored, profile);
    }

    #[test]
    fn wizard_field_names_are_accepted() {
        let profile: AssessmentProfile = serde_json::from_str(
            r#"{
                "strengths": {
                    "fromWork": [{ "taskId": 17, "taskName": "researching", "strengths": ["analytical"] }]
                },
                "fiveWhyProblems": [{
                    "id": 1718000000000,
                    "problem": "Meetings drain my week",
                    "category": "work",
                    "whys": ["Too many", "No agenda", "", "", ""],
                    "rootCause": "No one owns the calendar",
                    "nextStep": "Propose meeting-free mornings"
                }]
            }"#,
        )
        .expect("wizard payload parses");

        assert_eq!(
            profile.strengths.from_work[0].task_name.as_deref(),
            Some("researching")
        );
        let problem = &profile.five_why_problems[0];
        assert_eq!(problem.root_cause, "No one owns the calendar");
        assert_eq!(problem.whys.len(), 5);
        assert_eq!(problem.category.as_deref(), Some("work"));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result =
            serde_json::from_str::<AssessmentProfile>(r#"{"workTasks":"researching"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn builder_edits_do_not_touch_the_original_profile() {
        let original = AssessmentProfile::builder()
            .value("Learning")
            .select_archetype("analyst")
            .build();

        let edited = original
            .to_builder()
            .select_archetype("analyst")
            .select_archetype("creator")
            .deselect_archetype("analyst")
            .build();

        assert_eq!(original.dream_job.selected_archetypes, vec!["analyst"]);
        assert_eq!(edited.dream_job.selected_archetypes, vec!["creator"]);
        assert_eq!(edited.values.top5, original.values.top5);
    }

    #[test]
    fn camel_case_keys_round_trip() {
        let profile = AssessmentProfile::builder()
            .work_task("researching", 3)
            .friend_strengths(Some("Sam"), ["curious"])
            .life_area(LifeArea::PersonalGrowth, 2)
            .select_archetype("explorer")
            .build();

        let json = serde_json::to_value(&profile).expect("serializes");
        assert!(json.get("workTasks").is_some());
        assert_eq!(json["wheelOfLife"]["personalGrowth"], 2);
        assert_eq!(json["dreamJob"]["selectedArchetypes"][0], "explorer");

        let restored: AssessmentProfile = serde_json::from_value(json).expect("deserializes");
        assert_eq!(restored, profile);
    }
}
