use serde::{Deserialize, Serialize};
use tracing::debug;

use super::profile::{AssessmentProfile, MAX_RATING, MIN_RATING};

const DEFAULT_MAX_TEXT_LEN: usize = 1000;
const DEFAULT_MAX_VALUES: usize = 5;
const DEFAULT_MAX_LIST_ITEMS: usize = 50;
const MAX_WHYS: usize = 5;

/// Size limits applied before a profile is stored or scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLimits {
    pub max_text_len: usize,
    pub max_values: usize,
    pub max_list_items: usize,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            max_values: DEFAULT_MAX_VALUES,
            max_list_items: DEFAULT_MAX_LIST_ITEMS,
        }
    }
}

/// A single change the sanitizer made, kept for audit and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SanitizeAdjustment {
    RatingClamped {
        field: String,
        original: i32,
        clamped: i32,
    },
    ListTruncated {
        field: String,
        original_len: usize,
        kept: usize,
    },
    TextCleaned {
        field: String,
    },
    EmptyEntriesDropped {
        field: String,
        dropped: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedProfile {
    pub profile: AssessmentProfile,
    pub adjustments: Vec<SanitizeAdjustment>,
}

/// Upstream validation layer: the matching core assumes its output.
#[derive(Debug, Clone, Default)]
pub struct ProfileSanitizer {
    limits: ProfileLimits,
}

impl ProfileSanitizer {
    pub fn new(limits: ProfileLimits) -> Self {
        let limits = ProfileLimits {
            max_text_len: limits.max_text_len.max(1),
            ..limits
        };
        Self { limits }
    }

    pub fn limits(&self) -> &ProfileLimits {
        &self.limits
    }

    pub fn sanitize(&self, profile: AssessmentProfile) -> SanitizedProfile {
        let mut profile = profile;
        let mut log = Vec::new();
        let limits = self.limits;

        self.clean_list(&mut profile.values.top5, "values.top5", limits.max_values, &mut log);

        truncate(
            &mut profile.work_tasks,
            "workTasks",
            limits.max_list_items,
            &mut log,
        );
        for (index, task) in profile.work_tasks.iter_mut().enumerate() {
            self.clean_text(&mut task.name, &format!("workTasks[{index}].name"), &mut log);
            clamp_rating(
                &mut task.energy,
                &format!("workTasks[{index}].energy"),
                &mut log,
            );
            if let Some(category) = task.category.as_mut() {
                self.clean_text(category, &format!("workTasks[{index}].category"), &mut log);
            }
        }

        truncate(
            &mut profile.strengths.from_work,
            "strengths.fromWork",
            limits.max_list_items,
            &mut log,
        );
        for (index, entry) in profile.strengths.from_work.iter_mut().enumerate() {
            self.clean_list(
                &mut entry.strengths,
                &format!("strengths.fromWork[{index}].strengths"),
                limits.max_list_items,
                &mut log,
            );
        }
        self.clean_list(
            &mut profile.strengths.from_tests,
            "strengths.fromTests",
            limits.max_list_items,
            &mut log,
        );
        truncate(
            &mut profile.strengths.from_friends,
            "strengths.fromFriends",
            limits.max_list_items,
            &mut log,
        );
        for (index, entry) in profile.strengths.from_friends.iter_mut().enumerate() {
            self.clean_list(
                &mut entry.strengths,
                &format!("strengths.fromFriends[{index}].strengths"),
                limits.max_list_items,
                &mut log,
            );
        }

        truncate(
            &mut profile.work_requirements,
            "workRequirements",
            limits.max_list_items,
            &mut log,
        );
        for (index, requirement) in profile.work_requirements.iter_mut().enumerate() {
            self.clean_text(
                &mut requirement.name,
                &format!("workRequirements[{index}].name"),
                &mut log,
            );
            if let Some(current) = requirement.current_match.as_mut() {
                *current = (*current).min(5);
            }
        }

        for (area, rating) in profile.wheel_of_life.ratings.iter_mut() {
            clamp_rating(rating, &format!("wheelOfLife.{area}"), &mut log);
        }
        for (area, note) in profile.wheel_of_life.justifications.iter_mut() {
            self.clean_text(note, &format!("wheelOfLife.justifications.{area}"), &mut log);
        }

        truncate(
            &mut profile.five_why_problems,
            "fiveWhyProblems",
            limits.max_list_items,
            &mut log,
        );
        for (index, problem) in profile.five_why_problems.iter_mut().enumerate() {
            let field = format!("fiveWhyProblems[{index}]");
            self.clean_text(&mut problem.problem, &format!("{field}.problem"), &mut log);
            // Blank answers keep their slot so the numbering of later whys holds.
            truncate(&mut problem.whys, &format!("{field}.whys"), MAX_WHYS, &mut log);
            for (why_index, why) in problem.whys.iter_mut().enumerate() {
                self.clean_text(why, &format!("{field}.whys[{why_index}]"), &mut log);
            }
            self.clean_text(&mut problem.root_cause, &format!("{field}.rootCause"), &mut log);
            self.clean_text(&mut problem.next_step, &format!("{field}.nextStep"), &mut log);
            if let Some(category) = problem.category.as_mut() {
                self.clean_text(category, &format!("{field}.category"), &mut log);
            }
        }

        self.clean_list(
            &mut profile.dream_job.selected_archetypes,
            "dreamJob.selectedArchetypes",
            limits.max_list_items,
            &mut log,
        );
        if let Some(vision) = profile.dream_job.vision.as_mut() {
            self.clean_text(&mut vision.doing, "dreamJob.vision.doing", &mut log);
            self.clean_text(&mut vision.with_whom, "dreamJob.vision.withWhom", &mut log);
            self.clean_text(&mut vision.how, "dreamJob.vision.how", &mut log);
            self.clean_text(&mut vision.why, "dreamJob.vision.why", &mut log);
        }

        for adjustment in &log {
            debug!(?adjustment, "profile sanitized");
        }

        SanitizedProfile {
            profile,
            adjustments: log,
        }
    }

    fn clean_list(
        &self,
        items: &mut Vec<String>,
        field: &str,
        max_items: usize,
        log: &mut Vec<SanitizeAdjustment>,
    ) {
        for (index, item) in items.iter_mut().enumerate() {
            self.clean_text(item, &format!("{field}[{index}]"), log);
        }

        let before = items.len();
        items.retain(|item| !item.is_empty());
        if items.len() < before {
            log.push(SanitizeAdjustment::EmptyEntriesDropped {
                field: field.to_string(),
                dropped: before - items.len(),
            });
        }

        truncate(items, field, max_items, log);
    }

    fn clean_text(&self, text: &mut String, field: &str, log: &mut Vec<SanitizeAdjustment>) {
        let cleaned = sanitize_text(text, self.limits.max_text_len);
        if cleaned != *text {
            *text = cleaned;
            log.push(SanitizeAdjustment::TextCleaned {
                field: field.to_string(),
            });
        }
    }
}

/// Trims, strips angle brackets, `javascript:` and inline `on...=` handlers, and
/// caps the result at `max_len` characters.
pub fn sanitize_text(input: &str, max_len: usize) -> String {
    let without_brackets: String = input.trim().chars().filter(|c| *c != '<' && *c != '>').collect();
    let without_protocol = remove_ignore_ascii_case(&without_brackets, "javascript:");
    let without_handlers = remove_event_handlers(&without_protocol);
    without_handlers.chars().take(max_len).collect()
}

fn remove_ignore_ascii_case(text: &str, needle: &str) -> String {
    let lower = text.to_ascii_lowercase();
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find(needle) {
        let start = cursor + found;
        output.push_str(&text[cursor..start]);
        cursor = start + needle.len();
    }
    output.push_str(&text[cursor..]);
    output
}

/// Drops `on<word>` followed by optional whitespace and `=`, ignoring case.
fn remove_event_handlers(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut output = String::with_capacity(text.len());
    let mut index = 0;
    let mut copied_from = 0;

    while index + 1 < bytes.len() {
        if bytes[index].eq_ignore_ascii_case(&b'o') && bytes[index + 1].eq_ignore_ascii_case(&b'n')
        {
            let mut end = index + 2;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            let word_end = end;
            while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                end += 1;
            }
            if word_end > index + 2 && end < bytes.len() && bytes[end] == b'=' {
                output.push_str(&text[copied_from..index]);
                index = end + 1;
                copied_from = index;
                continue;
            }
        }
        index += 1;
    }

    output.push_str(&text[copied_from..]);
    output
}

fn clamp_rating(rating: &mut i32, field: &str, log: &mut Vec<SanitizeAdjustment>) {
    let clamped = (*rating).clamp(MIN_RATING, MAX_RATING);
    if clamped != *rating {
        log.push(SanitizeAdjustment::RatingClamped {
            field: field.to_string(),
            original: *rating,
            clamped,
        });
        *rating = clamped;
    }
}

fn truncate<T>(items: &mut Vec<T>, field: &str, max_items: usize, log: &mut Vec<SanitizeAdjustment>) {
    if items.len() > max_items {
        log.push(SanitizeAdjustment::ListTruncated {
            field: field.to_string(),
            original_len: items.len(),
            kept: max_items,
        });
        items.truncate(max_items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::profile::{FiveWhyProblem, LifeArea};

    #[test]
    fn strips_markup_and_script_fragments() {
        assert_eq!(
            sanitize_text("  <b>Teaching</b>  ", 1000),
            "bTeaching/b"
        );
        assert_eq!(sanitize_text("JavaScript:alert(1)", 1000), "alert(1)");
        assert_eq!(sanitize_text("img onerror = steal()", 1000), "img  steal()");
        assert_eq!(sanitize_text("online learning", 1000), "online learning");
    }

    #[test]
    fn caps_text_length_by_characters() {
        assert_eq!(sanitize_text("ééééé", 3), "ééé");
    }

    #[test]
    fn clamps_out_of_range_ratings() {
        let profile = AssessmentProfile::builder()
            .work_task("researching", 7)
            .life_area(LifeArea::Career, -9)
            .build();

        let sanitized = ProfileSanitizer::default().sanitize(profile);

        assert_eq!(sanitized.profile.work_tasks[0].energy, 3);
        assert_eq!(sanitized.profile.life_area_rating(LifeArea::Career), -3);
        assert!(sanitized.adjustments.contains(&SanitizeAdjustment::RatingClamped {
            field: "workTasks[0].energy".to_string(),
            original: 7,
            clamped: 3,
        }));
    }

    #[test]
    fn truncates_values_and_drops_blank_entries() {
        let profile = AssessmentProfile::builder()
            .values(["A", "  ", "B", "C", "D", "E", "F"])
            .build();

        let sanitized = ProfileSanitizer::default().sanitize(profile);

        assert_eq!(sanitized.profile.values.top5, vec!["A", "B", "C", "D", "E"]);
        assert!(sanitized
            .adjustments
            .iter()
            .any(|adjustment| matches!(adjustment, SanitizeAdjustment::ListTruncated { kept: 5, .. })));
    }

    #[test]
    fn five_why_texts_are_cleaned_without_dropping_blank_whys() {
        let profile = AssessmentProfile::builder()
            .five_why(FiveWhyProblem {
                problem: " <i>Burnout</i> ".to_string(),
                whys: vec![
                    "Long hours".to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    "sixth".to_string(),
                ],
                root_cause: "No boundaries onclick=x".to_string(),
                next_step: "Block evenings".to_string(),
                category: Some("work".to_string()),
            })
            .life_area(LifeArea::Health, 1)
            .life_area_justification(LifeArea::Health, "<script>Running again")
            .build();

        let sanitized = ProfileSanitizer::default().sanitize(profile);
        let problem = &sanitized.profile.five_why_problems[0];

        assert_eq!(problem.problem, "iBurnout/i");
        assert_eq!(problem.whys, vec!["Long hours", "", "", "", ""]);
        assert_eq!(problem.root_cause, "No boundaries x");
        assert_eq!(
            sanitized.profile.wheel_of_life.justification(LifeArea::Health),
            Some("scriptRunning again")
        );
        assert!(sanitized.adjustments.contains(&SanitizeAdjustment::ListTruncated {
            field: "fiveWhyProblems[0].whys".to_string(),
            original_len: 6,
            kept: 5,
        }));
    }

    #[test]
    fn clean_profile_is_left_untouched() {
        let profile = AssessmentProfile::builder()
            .value("Learning")
            .work_task("researching", 3)
            .requirement("variety")
            .life_area(LifeArea::Career, 2)
            .build();

        let sanitized = ProfileSanitizer::default().sanitize(profile.clone());

        assert_eq!(sanitized.profile, profile);
        assert!(sanitized.adjustments.is_empty());
    }
}
