//! Hypothesis verification: grades a player's full-solution guess.

use noir_core::errors::{NoirResult, StoryError};
use noir_core::traits::{GenerationRequest, TextGenerator};
use std::fmt;
use tracing::debug;

use crate::prompts;

/// How close the player's hypothesis is to the true story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closeness {
    Far,
    Close,
    Correct,
}

impl Closeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Closeness::Far => "FAR",
            Closeness::Close => "CLOSE",
            Closeness::Correct => "CORRECT",
        }
    }

    /// Extract the closeness label from the `Status:` line of the analysis.
    ///
    /// Scans the whole text for the status markers; CORRECT wins over
    /// CLOSE so that "CLOSE to CORRECT" style replies resolve sensibly.
    /// Missing markers grade as `Far`.
    fn from_analysis(text: &str) -> Closeness {
        let status_line = text
            .lines()
            .find(|line| line.contains("Status:"))
            .unwrap_or(text);
        let upper = status_line.to_uppercase();
        if upper.contains("CORRECT") {
            Closeness::Correct
        } else if upper.contains("CLOSE") {
            Closeness::Close
        } else {
            Closeness::Far
        }
    }
}

impl fmt::Display for Closeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verifier's full response: a grade plus the feedback text shown to
/// the player.
#[derive(Debug, Clone)]
pub struct Verification {
    pub closeness: Closeness,
    pub analysis: String,
}

/// Compares player hypotheses against the hidden solution.
pub struct HypothesisVerifier<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> HypothesisVerifier<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Grade a hypothesis against the true story.
    ///
    /// Empty inputs short-circuit to `Far` with a canned message instead
    /// of wasting a model call.
    pub fn verify(&self, solution: &str, hypothesis: &str) -> NoirResult<Verification> {
        if !self.generator.is_available() {
            return Err(StoryError::GeneratorUnavailable {
                reason: "text generator not configured".to_string(),
            }
            .into());
        }
        if hypothesis.trim().is_empty() || solution.trim().is_empty() {
            return Ok(Verification {
                closeness: Closeness::Far,
                analysis: "State a complete theory of what happened before asking for a \
                           verdict."
                    .to_string(),
            });
        }

        let prompt = format!(
            "{examples}\n\nNow analyze this new case:\n\nTRUE STORY: {solution}\n\n\
             PLAYER HYPOTHESIS: \"{hypothesis}\"\n\nANALYSIS:",
            examples = prompts::HYPOTHESIS_EXAMPLES,
        );
        let request = GenerationRequest::new(prompt)
            .with_system_instruction(prompts::HYPOTHESIS_SYSTEM_INSTRUCTION)
            .with_temperature(0.4)
            .with_max_output_tokens(500);

        let analysis = self.generator.generate(&request)?;
        let closeness = Closeness::from_analysis(&analysis);
        debug!(%closeness, "hypothesis graded");
        Ok(Verification {
            closeness,
            analysis: analysis.trim().to_string(),
        })
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

    #[test]
    fn status_line_drives_the_grade() {
        let text = "ANALYSIS:\n**Status: CLOSE**\n\n**What's wrong:**\n- details";
        assert_eq!(Closeness::from_analysis(text), Closeness::Close);
    }

    #[test]
    fn correct_wins_over_close_on_the_same_line() {
        let text = "**Status: CLOSE, almost CORRECT**";
        assert_eq!(Closeness::from_analysis(text), Closeness::Correct);
    }

    #[test]
    fn missing_status_grades_as_far() {
        assert_eq!(Closeness::from_analysis("free-form rambling"), Closeness::Far);
    }

    #[test]
    fn verify_returns_grade_and_feedback() {
        let generator = EchoGenerator {
            reply: "ANALYSIS:\n**Status: FAR**\n\n**Hint:**\nThink higher.",
        };
        let verifier = HypothesisVerifier::new(&generator);
        let verification = verifier
            .verify("He fell from a plane.", "He was pushed off a cliff.")
            .unwrap();
        assert_eq!(verification.closeness, Closeness::Far);
        assert!(verification.analysis.contains("Think higher."));
    }

    #[test]
    fn empty_hypothesis_short_circuits() {
        let generator = EchoGenerator {
            reply: "should never be used",
        };
        let verifier = HypothesisVerifier::new(&generator);
        let verification = verifier.verify("He fell from a plane.", "  ").unwrap();
        assert_eq!(verification.closeness, Closeness::Far);
        assert!(!verification.analysis.contains("should never"));
    }
}
