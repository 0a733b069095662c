//! Error types for every noir subsystem.
//!
//! Each subsystem gets its own thiserror enum; `NoirError` aggregates them
//! with `#[from]` conversions so `?` works across crate boundaries.

mod corpus_error;
mod embedding_error;
mod retrieval_error;
mod story_error;

pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use story_error::StoryError;

/// Workspace-wide result alias.
pub type NoirResult<T> = Result<T, NoirError>;

/// Top-level error aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum NoirError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Story(#[from] StoryError),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
