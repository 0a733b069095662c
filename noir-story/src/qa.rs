//! Yes/no interrogation and hints.

use noir_core::errors::{NoirResult, StoryError};
use noir_core::traits::{GenerationRequest, TextGenerator};
use std::fmt;
use tracing::{debug, warn};

use crate::prompts;

/// The referee's fixed vocabulary for answering player questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
    Irrelevant,
    CannotAnswer,
    FocusOnEvidence,
}

impl Verdict {
    /// The exact phrase shown to the player.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "Yes",
            Verdict::No => "No",
            Verdict::Irrelevant => "It is irrelevant.",
            Verdict::CannotAnswer => "I cannot answer that.",
            Verdict::FocusOnEvidence => "Focus on the evidence.",
        }
    }

    /// Normalize a raw model reply to a verdict.
    ///
    /// Matching is prefix-based and case-insensitive since models pad the
    /// fixed phrases with punctuation or elaboration. Anything
    /// unrecognizable maps to `CannotAnswer`.
    pub fn parse(raw: &str) -> Verdict {
        let lowered = raw.trim().to_lowercase();
        if lowered.starts_with("yes") {
            Verdict::Yes
        } else if lowered.starts_with("no") {
            Verdict::No
        } else if lowered.contains("irrelevant") {
            Verdict::Irrelevant
        } else if lowered.starts_with("focus") {
            Verdict::FocusOnEvidence
        } else if lowered.contains("cannot answer") {
            Verdict::CannotAnswer
        } else {
            warn!(raw, "unrecognized referee reply");
            Verdict::CannotAnswer
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One question/answer pair from the interrogation transcript.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Answers player questions and produces hints against the hidden solution.
pub struct QaEngine<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> QaEngine<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Referee a single yes/no question against the hidden solution.
    ///
    /// The visible premise rides along as context so the referee can tell
    /// established facts from guesses.
    pub fn answer_question(
        &self,
        premise: &str,
        solution: &str,
        question: &str,
    ) -> NoirResult<Verdict> {
        if !self.generator.is_available() {
            return Err(StoryError::GeneratorUnavailable {
                reason: "text generator not configured".to_string(),
            }
            .into());
        }
        if question.trim().is_empty() {
            return Ok(Verdict::CannotAnswer);
        }

        let prompt = format!(
            "HIDDEN TRUTH (DO NOT REVEAL):\n{solution}\n\nVISIBLE SUMMARY (CONTEXT):\n\
             {premise}\n\nPLAYER'S QUESTION:\n{question}\n\nYour answer (one phrase only):"
        );
        // Low temperature and a tiny token cap: the referee must stay
        // inside the fixed phrase set.
        let request = GenerationRequest::new(prompt)
            .with_system_instruction(prompts::QA_SYSTEM_INSTRUCTION)
            .with_temperature(0.1)
            .with_max_output_tokens(20);

        let raw = self.generator.generate(&request)?;
        debug!(raw = %raw, "referee reply");
        Ok(Verdict::parse(&raw))
    }

    /// Produce a hint for a stuck player from the interrogation so far.
    pub fn generate_hint(
        &self,
        premise: &str,
        solution: &str,
        transcript: &[Exchange],
    ) -> NoirResult<String> {
        if !self.generator.is_available() {
            return Err(StoryError::GeneratorUnavailable {
                reason: "text generator not configured".to_string(),
            }
            .into());
        }

        let log = if transcript.is_empty() {
            "(no questions asked yet)".to_string()
        } else {
            transcript
                .iter()
                .map(|e| format!("Q: {}\nA: {}", e.question, e.answer))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let prompt = format!(
            "HIDDEN TRUTH (DO NOT REVEAL):\n{solution}\n\nVISIBLE SUMMARY:\n{premise}\n\n\
             --- CONVERSATION LOG ---\n{log}\n--- END LOG ---\n\n\
             Generate a helpful but vague hint:"
        );
        let request = GenerationRequest::new(prompt)
            .with_system_instruction(prompts::HINT_SYSTEM_INSTRUCTION)
            .with_temperature(0.3)
            .with_max_output_tokens(50);

        let hint = self.generator.generate(&request)?;
        Ok(hint.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGenerator {
        reply: &'static str,
    }

    impl TextGenerator for EchoGenerator {
        fn generate(&self, _request: &GenerationRequest) -> NoirResult<String> {
            Ok(self.reply.to_string())
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    struct CapturingGenerator {
        reply: &'static str,
        last_prompt: std::sync::Mutex<String>,
    }

    impl TextGenerator for CapturingGenerator {
        fn generate(&self, request: &GenerationRequest) -> NoirResult<String> {
            *self.last_prompt.lock().unwrap() = request.prompt.clone();
            Ok(self.reply.to_string())
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn verdicts_parse_leniently() {
        assert_eq!(Verdict::parse("Yes"), Verdict::Yes);
        assert_eq!(Verdict::parse("Yes."), Verdict::Yes);
        assert_eq!(Verdict::parse("no, not at all"), Verdict::No);
        assert_eq!(Verdict::parse("It is irrelevant."), Verdict::Irrelevant);
        assert_eq!(Verdict::parse("Focus on the evidence."), Verdict::FocusOnEvidence);
        assert_eq!(Verdict::parse("I cannot answer that."), Verdict::CannotAnswer);
        assert_eq!(Verdict::parse("perhaps, who knows"), Verdict::CannotAnswer);
    }

    #[test]
    fn answer_question_normalizes_model_padding() {
        let generator = EchoGenerator { reply: "  Yes.\n" };
        let engine = QaEngine::new(&generator);
        let verdict = engine
            .answer_question("A man lies in a field.", "He fell from a plane.", "Did he fall?")
            .unwrap();
        assert_eq!(verdict, Verdict::Yes);
    }

    #[test]
    fn empty_question_is_rejected_without_a_model_call() {
        let generator = EchoGenerator { reply: "Yes" };
        let engine = QaEngine::new(&generator);
        let verdict = engine.answer_question("a premise", "secret", "   ").unwrap();
        assert_eq!(verdict, Verdict::CannotAnswer);
    }

    #[test]
    fn hint_prompt_includes_the_transcript() {
        let generator = CapturingGenerator {
            reply: "What was above him?",
            last_prompt: std::sync::Mutex::new(String::new()),
        };
        let engine = QaEngine::new(&generator);
        let transcript = vec![
            Exchange {
                question: "Was he murdered?".to_string(),
                answer: "No".to_string(),
            },
            Exchange {
                question: "Did he walk there?".to_string(),
                answer: "No".to_string(),
            },
        ];
        let hint = engine
            .generate_hint("A man lies in a field.", "He fell from a plane.", &transcript)
            .unwrap();
        assert_eq!(hint, "What was above him?");
        let prompt = generator.last_prompt.lock().unwrap();
        assert!(prompt.contains("Q: Was he murdered?"));
        assert!(prompt.contains("A: No"));
    }

    #[test]
    fn hint_works_with_an_empty_transcript() {
        let generator = EchoGenerator {
            reply: "Look up.",
        };
        let engine = QaEngine::new(&generator);
        let hint = engine.generate_hint("A man lies in a field.", "He fell from a plane.", &[]).unwrap();
        assert_eq!(hint, "Look up.");
    }
}
