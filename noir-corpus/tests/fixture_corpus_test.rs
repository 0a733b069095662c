//! Loading the shared sample corpus from disk.

use noir_corpus::CorpusStore;

#[test]
fn sample_corpus_loads_from_disk() {
    let store = CorpusStore::load(&test_fixtures::sample_corpus_path());
    assert_eq!(store.len(), 6);

    let first = store.get(0).unwrap();
    assert_eq!(first.topic, "Modern Crime");
    assert!(first.difficulty().is_some());
    assert!(!first.premise.is_empty());
    assert!(!first.solution.is_empty());
}

#[test]
fn disk_load_matches_in_memory_fixture() {
    let from_disk = CorpusStore::load(&test_fixtures::sample_corpus_path());
    let in_memory = CorpusStore::from_records(test_fixtures::sample_corpus());
    assert_eq!(from_disk.records(), in_memory.records());
    assert_eq!(from_disk.content_hashes(), in_memory.content_hashes());
}
