//! Error conversion and display tests for noir-core.

use noir_core::errors::{CorpusError, EmbeddingError, NoirError, NoirResult, StoryError};

fn fails_with_embedding() -> NoirResult<()> {
    Err(EmbeddingError::EmbedFailed {
        reason: "connection reset".to_string(),
    })?;
    Ok(())
}

#[test]
fn subsystem_errors_convert_with_question_mark() {
    let err = fails_with_embedding().unwrap_err();
    assert!(matches!(err, NoirError::Embedding(_)));
}

#[test]
fn transparent_display_forwards_subsystem_message() {
    let err: NoirError = CorpusError::Decode {
        path: "data/stories.json".to_string(),
        reason: "expected value at line 1".to_string(),
    }
    .into();
    let msg = err.to_string();
    assert!(msg.contains("data/stories.json"));
    assert!(msg.contains("expected value"));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: NoirError = io.into();
    assert!(err.to_string().contains("gone"));
}

#[test]
fn story_error_messages_are_actionable() {
    let err = StoryError::GeneratorUnavailable {
        reason: "API key not set".to_string(),
    };
    assert!(err.to_string().contains("API key not set"));
}
