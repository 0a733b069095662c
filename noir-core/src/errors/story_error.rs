/// Story/QA generation errors.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("text generation unavailable: {reason}")]
    GeneratorUnavailable { reason: String },

    #[error("generation request failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("could not parse model response: {reason}")]
    MalformedResponse { reason: String },
}
