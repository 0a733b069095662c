/// Retrieval subsystem errors.
///
/// `RetrievalEngine::get_examples` is total over its input domain and never
/// returns these; they cover the inner fallible stages.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query embedding failed: {reason}")]
    QueryEmbedFailed { reason: String },

    #[error("ranking failed: {reason}")]
    RankingFailed { reason: String },
}
