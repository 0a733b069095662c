//! The pure scoring pass: cosine similarity plus the difficulty nudge.
//!
//! No I/O happens here — embeddings come from the already-populated cache,
//! so ranking stays off the slow path.

use noir_core::story::{Difficulty, StoryExample};
use noir_embeddings::EmbeddingCache;

use crate::similarity::cosine;

/// A corpus record with its combined relevance score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    /// Position in the corpus (also the tie-break key).
    pub index: usize,
    /// Cosine similarity plus difficulty bonus.
    pub score: f32,
    pub record: &'a StoryExample,
}

/// Score every record against the query vector.
///
/// A record without a cached vector contributes similarity 0.0 but stays
/// eligible. Records whose difficulty matches the target get `bonus` added
/// — a soft nudge, not a filter; non-matching records can still outrank
/// matching ones on similarity alone. The result is sorted descending by
/// score, ties broken by corpus order (stable sort).
pub fn score_records<'a>(
    records: &'a [StoryExample],
    cache: &EmbeddingCache,
    query_vec: &[f32],
    target: Difficulty,
    bonus: f32,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let similarity = cache
                .get(&record.content_hash())
                .map(|v| cosine(query_vec, v))
                .unwrap_or(0.0);
            let matched = record.difficulty() == Some(target);
            let score = if matched { similarity + bonus } else { similarity };
            ScoredCandidate {
                index,
                score,
                record,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}
