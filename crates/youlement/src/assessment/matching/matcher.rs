use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Strategy used to decide whether a user phrase matches a reference keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatcher {
    /// Case-insensitive substring containment in either direction. Reference
    /// behavior: "lead" matches "leadership", and "art" matches "party".
    #[default]
    Containment,
    /// Case-insensitive overlap of whole words, so "art" no longer matches
    /// "party" but "critical thinking" still matches "thinking".
    WholeWord,
}

impl KeywordMatcher {
    pub fn matches(self, user_item: &str, reference: &str) -> bool {
        let user_item = user_item.to_lowercase();
        let reference = reference.to_lowercase();

        match self {
            KeywordMatcher::Containment => {
                user_item.contains(&reference) || reference.contains(&user_item)
            }
            KeywordMatcher::WholeWord => {
                let reference_words: Vec<&str> = words(&reference).collect();
                words(&user_item).any(|word| reference_words.contains(&word))
            }
        }
    }

    /// True when `user_item` matches at least one keyword in `references`.
    pub fn matches_any(self, user_item: &str, references: &[&str]) -> bool {
        references
            .iter()
            .any(|reference| self.matches(user_item, reference))
    }

    pub const fn label(self) -> &'static str {
        match self {
            KeywordMatcher::Containment => "containment",
            KeywordMatcher::WholeWord => "whole_word",
        }
    }
}

impl fmt::Display for KeywordMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KeywordMatcher {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "containment" | "substring" => Ok(Self::Containment),
            "whole_word" | "whole-word" | "word" => Ok(Self::WholeWord),
            other => Err(format!(
                "unknown match mode '{other}' (expected containment or whole_word)"
            )),
        }
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_matches_in_both_directions() {
        let matcher = KeywordMatcher::Containment;
        assert!(matcher.matches("leadership", "lead"));
        assert!(matcher.matches("lead", "leadership"));
        assert!(matcher.matches("ANALYTICAL thinking", "analytical"));
        assert!(!matcher.matches("cooking", "researching"));
    }

    #[test]
    fn containment_keeps_substring_false_positives() {
        assert!(KeywordMatcher::Containment.matches("party planning", "art"));
    }

    #[test]
    fn empty_user_item_is_contained_in_everything() {
        assert!(KeywordMatcher::Containment.matches("", "variety"));
        assert!(!KeywordMatcher::WholeWord.matches("", "variety"));
    }

    #[test]
    fn whole_word_requires_a_shared_word() {
        let matcher = KeywordMatcher::WholeWord;
        assert!(!matcher.matches("party planning", "art"));
        assert!(matcher.matches("Critical Thinking", "thinking"));
        assert!(matcher.matches("problem-solving", "problem"));
        assert!(!matcher.matches("leadership", "lead"));
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!(
            "whole-word".parse::<KeywordMatcher>(),
            Ok(KeywordMatcher::WholeWord)
        );
        assert_eq!(
            " Containment ".parse::<KeywordMatcher>(),
            Ok(KeywordMatcher::Containment)
        );
        assert!("fuzzy".parse::<KeywordMatcher>().is_err());
    }
}
