//! Fixture loader for noir integration tests.
//!
//! Provides the shared sample corpus and path helpers usable from any
//! crate in the workspace.

use std::path::PathBuf;

use noir_core::story::StoryExample;
use serde::de::DeserializeOwned;

/// Root directory of the test-fixtures folder.
///
/// Works from any crate in the workspace: walks up from
/// `CARGO_MANIFEST_DIR` until the folder is found.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!("could not find test-fixtures directory from CARGO_MANIFEST_DIR={manifest_dir}");
        }
    }
    path.join("test-fixtures")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
}

/// The shared sample corpus (six mysteries across topics and tiers).
pub fn sample_corpus() -> Vec<StoryExample> {
    load_fixture("data/stories.json")
}

/// Path of the shared sample corpus file.
pub fn sample_corpus_path() -> PathBuf {
    fixture_path("data/stories.json")
}
