/// Corpus store errors.
///
/// Note: `CorpusStore::load` is total and never surfaces these to callers;
/// they exist for logging and for out-of-band tooling that wants to fail
/// loudly.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus file not found at {path}")]
    NotFound { path: String },

    #[error("corpus file {path} is not valid JSON: {reason}")]
    Decode { path: String, reason: String },
}
