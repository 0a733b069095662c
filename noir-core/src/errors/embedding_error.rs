/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider {provider} unavailable")]
    ProviderUnavailable { provider: String },

    #[error("embedding call failed: {reason}")]
    EmbedFailed { reason: String },

    #[error("embedding cache persistence failed: {reason}")]
    PersistFailed { reason: String },

    #[error("cached embedding for {hash} is malformed: {reason}")]
    MalformedEntry { hash: String, reason: String },
}
