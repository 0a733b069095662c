//! Loading and read-only access to the example corpus.

use std::path::Path;

use noir_core::story::StoryExample;
use tracing::{error, info, warn};

/// An in-memory, read-only collection of corpus records.
///
/// `load` is total: a missing or unparseable corpus file yields an empty
/// store, never an error. Downstream retrieval treats an empty corpus as
/// valid input (it returns no examples).
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    records: Vec<StoryExample>,
}

impl CorpusStore {
    /// Load the corpus from a JSON document (an array of records).
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            warn!(path = %path.display(), "corpus file not found, retrieval will return no examples");
            return Self::default();
        }

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read corpus file");
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<StoryExample>>(&raw) {
            Ok(records) => {
                info!(path = %path.display(), records = records.len(), "corpus loaded");
                Self { records }
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "corpus decode error, treating as empty");
                Self::default()
            }
        }
    }

    /// Build a store from records already in memory (tests, tooling).
    pub fn from_records(records: Vec<StoryExample>) -> Self {
        Self { records }
    }

    /// The records, in file order.
    pub fn records(&self) -> &[StoryExample] {
        &self.records
    }

    /// Record at `idx`, if present.
    pub fn get(&self, idx: usize) -> Option<&StoryExample> {
        self.records.get(idx)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Content hashes of every record, in file order. Used to drive the
    /// embedding-cache sweep.
    pub fn content_hashes(&self) -> Vec<String> {
        self.records.iter().map(|r| r.content_hash()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_empty_store() {
        let store = CorpusStore::load(Path::new("/nonexistent/stories.json"));
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn corrupt_file_yields_empty_store() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let store = CorpusStore::load(file.path());
        assert!(store.is_empty());
    }

    #[test]
    fn valid_file_loads_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"topic": "Cyberpunk", "difficulty": "Detective", "premise": "A databroker dies.", "solution": "Mind upload."}},
                {{"topic": "Medieval", "difficulty": "Rookie", "premise": "A jester drowns.", "solution": "Thrown from the wall."}}
            ]"#
        )
        .unwrap();

        let store = CorpusStore::load(file.path());
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().topic, "Cyberpunk");
        assert_eq!(store.get(1).unwrap().topic, "Medieval");
    }

    #[test]
    fn records_with_missing_fields_load_as_empty_strings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"topic": "Surreal"}}]"#).unwrap();

        let store = CorpusStore::load(file.path());
        assert_eq!(store.len(), 1);
        let record = store.get(0).unwrap();
        assert_eq!(record.topic, "Surreal");
        assert_eq!(record.premise, "");
        assert_eq!(record.solution, "");
    }

    #[test]
    fn content_hashes_follow_file_order() {
        let store = CorpusStore::from_records(vec![
            StoryExample {
                topic: "A".to_string(),
                ..Default::default()
            },
            StoryExample {
                topic: "B".to_string(),
                ..Default::default()
            },
        ]);
        let hashes = store.content_hashes();
        assert_eq!(hashes.len(), 2);
        assert_ne!(hashes[0], hashes[1]);
        assert_eq!(hashes[0], store.get(0).unwrap().content_hash());
    }
}
