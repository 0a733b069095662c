//! Normalizes raw model output into clean corpus records.
//!
//! Models routinely wrap JSON in markdown fences and use legacy difficulty
//! labels; everything here is lenient string surgery before the strict
//! serde parse.

use noir_core::story::{Difficulty, StoryExample};
use tracing::warn;

/// Strip markdown code fences from a model reply so it parses as JSON.
pub fn strip_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse one model reply into a corpus record.
///
/// Legacy difficulty labels are rewritten to the current tier names;
/// an unparseable label is kept verbatim so nothing is silently lost.
pub fn parse_record(raw: &str) -> Option<StoryExample> {
    let cleaned = strip_fences(raw);
    match serde_json::from_str::<StoryExample>(&cleaned) {
        Ok(mut record) => {
            record.difficulty = normalize_difficulty(&record.difficulty);
            Some(record)
        }
        Err(e) => {
            warn!(error = %e, "skipping unparseable record");
            None
        }
    }
}

/// Map any recognized difficulty spelling to its canonical tier name.
pub fn normalize_difficulty(label: &str) -> String {
    match label.parse::<Difficulty>() {
        Ok(d) => d.as_str().to_string(),
        Err(_) => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_json_is_unwrapped() {
        let raw = "```json\n{\"topic\": \"Crime\"}\n```";
        assert_eq!(strip_fences(raw), "{\"topic\": \"Crime\"}");
    }

    #[test]
    fn unfenced_text_passes_through() {
        assert_eq!(strip_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn legacy_difficulty_labels_are_rewritten() {
        assert_eq!(normalize_difficulty("Easy"), "Rookie");
        assert_eq!(normalize_difficulty("Hard"), "Sherlock");
        assert_eq!(normalize_difficulty("Detective"), "Detective");
        assert_eq!(normalize_difficulty("Nightmare"), "Nightmare");
    }

    #[test]
    fn fenced_record_parses_with_legacy_field_names() {
        let raw = "```json\n{\"topic\": \"Crime\", \"difficulty\": \"Easy\", \
                   \"short_story\": \"A body.\", \"full_story\": \"A fall.\"}\n```";
        let record = parse_record(raw).unwrap();
        assert_eq!(record.topic, "Crime");
        assert_eq!(record.difficulty, "Rookie");
        assert_eq!(record.premise, "A body.");
        assert_eq!(record.solution, "A fall.");
    }

    #[test]
    fn garbage_yields_none() {
        assert!(parse_record("not json at all").is_none());
    }
}
