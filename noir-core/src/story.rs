//! Corpus record types and the canonical embedding text scheme.
//!
//! A `StoryExample` is an immutable corpus entry. Its content hash covers
//! topic + difficulty + premise (never the solution), so two records that
//! differ only in solution share one cached embedding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tiers for mysteries. Ordinal: Rookie < Detective < Sherlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Rookie,
    Detective,
    Sherlock,
}

impl Difficulty {
    /// Canonical label used in prompts and formatted output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Rookie => "Rookie",
            Difficulty::Detective => "Detective",
            Difficulty::Sherlock => "Sherlock",
        }
    }

    /// All tiers in ascending order.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Rookie, Difficulty::Detective, Difficulty::Sherlock]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse, accepting the legacy labels older corpus
/// files were generated with (Easy/Medium/Hard).
impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rookie" | "easy" => Ok(Difficulty::Rookie),
            "detective" | "medium" => Ok(Difficulty::Detective),
            "sherlock" | "hard" => Ok(Difficulty::Sherlock),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

/// Error for difficulty labels that map to no known tier.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown difficulty label: {0:?}")]
pub struct UnknownDifficulty(pub String);

/// An immutable corpus entry used for few-shot grounding.
///
/// Every field defaults to the empty string so downstream formatting is
/// total — a partially-filled corpus file never produces nulls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryExample {
    /// Short free-text genre/setting.
    pub topic: String,
    /// Difficulty label as stored. May be a legacy synonym; use
    /// [`StoryExample::difficulty`] for the typed tier.
    pub difficulty: String,
    /// Spoiler-free visible summary of the mystery. Older corpus files
    /// call this `short_story`.
    #[serde(alias = "short_story")]
    pub premise: String,
    /// The hidden truth. Excluded from the content hash and from all
    /// retrieval output. Older corpus files call this `full_story`.
    #[serde(alias = "full_story")]
    pub solution: String,
}

impl StoryExample {
    /// Parse the stored difficulty label, mapping legacy synonyms.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }

    /// The canonical text this record is embedded under.
    pub fn embedding_text(&self) -> String {
        canonical_text(&self.topic, &self.difficulty, &self.premise)
    }

    /// blake3 hex digest of the canonical embedding text.
    ///
    /// Records with identical (topic, difficulty, premise) share a hash
    /// even when their solutions differ.
    pub fn content_hash(&self) -> String {
        blake3::hash(self.embedding_text().as_bytes())
            .to_hex()
            .to_string()
    }
}

/// The single canonical template for embedding text.
///
/// Corpus records and live queries MUST go through this same template —
/// similarity scores between asymmetric texts are meaningless.
pub fn canonical_text(topic: &str, difficulty: &str, premise: &str) -> String {
    format!("Topic: {topic}\nDifficulty: {difficulty}\nPremise: {premise}")
}

/// Canonical text for a live query: the free-text description fills the
/// topic slot, the premise slot stays empty.
pub fn query_text(free_text: &str, difficulty: Difficulty) -> String {
    canonical_text(free_text, difficulty.as_str(), "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(topic: &str, difficulty: &str, premise: &str, solution: &str) -> StoryExample {
        StoryExample {
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
            premise: premise.to_string(),
            solution: solution.to_string(),
        }
    }

    #[test]
    fn difficulty_parses_canonical_labels() {
        assert_eq!("Rookie".parse::<Difficulty>().unwrap(), Difficulty::Rookie);
        assert_eq!(
            "detective".parse::<Difficulty>().unwrap(),
            Difficulty::Detective
        );
        assert_eq!(
            "SHERLOCK".parse::<Difficulty>().unwrap(),
            Difficulty::Sherlock
        );
    }

    #[test]
    fn difficulty_parses_legacy_synonyms() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Rookie);
        assert_eq!(
            "medium".parse::<Difficulty>().unwrap(),
            Difficulty::Detective
        );
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Sherlock);
    }

    #[test]
    fn difficulty_rejects_unknown_labels() {
        assert!("nightmare".parse::<Difficulty>().is_err());
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let ex: StoryExample = serde_json::from_str(r#"{"topic": "Cyberpunk"}"#).unwrap();
        assert_eq!(ex.topic, "Cyberpunk");
        assert_eq!(ex.difficulty, "");
        assert_eq!(ex.premise, "");
        assert_eq!(ex.solution, "");
    }

    #[test]
    fn legacy_field_names_are_accepted() {
        let ex: StoryExample = serde_json::from_str(
            r#"{"topic": "Medieval", "difficulty": "Hard",
                "short_story": "A jester drowns.", "full_story": "The King threw him."}"#,
        )
        .unwrap();
        assert_eq!(ex.premise, "A jester drowns.");
        assert_eq!(ex.solution, "The King threw him.");
    }

    #[test]
    fn hash_ignores_solution() {
        let a = example("Cyberpunk", "Detective", "A databroker dies.", "Uploaded himself.");
        let b = example("Cyberpunk", "Detective", "A databroker dies.", "Totally different.");
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn hash_changes_with_each_hashed_field() {
        let base = example("Cyberpunk", "Detective", "A databroker dies.", "x");
        let topic = example("Medieval", "Detective", "A databroker dies.", "x");
        let difficulty = example("Cyberpunk", "Rookie", "A databroker dies.", "x");
        let premise = example("Cyberpunk", "Detective", "A jester drowns.", "x");
        assert_ne!(base.content_hash(), topic.content_hash());
        assert_ne!(base.content_hash(), difficulty.content_hash());
        assert_ne!(base.content_hash(), premise.content_hash());
    }

    #[test]
    fn query_text_uses_the_record_template() {
        let record = example("Cyberpunk heist", "Detective", "", "");
        let query = query_text("Cyberpunk heist", Difficulty::Detective);
        assert_eq!(record.embedding_text(), query);
    }
}
