//! Story generation: prompt assembly, response parsing, canned fallback.

use noir_core::config::GenerationConfig;
use noir_core::errors::{NoirResult, StoryError};
use noir_core::story::Difficulty;
use noir_core::traits::{GenerationRequest, TextGenerator};
use tracing::{error, info, warn};

use crate::prompts;

/// A generated mystery: the visible premise and the hidden solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub premise: String,
    pub solution: String,
}

/// Generates mysteries through an injected text generator.
pub struct StoryEngine<'a> {
    generator: &'a dyn TextGenerator,
    config: GenerationConfig,
}

impl<'a> StoryEngine<'a> {
    pub fn new(generator: &'a dyn TextGenerator, config: GenerationConfig) -> Self {
        Self { generator, config }
    }

    /// Generate a story for a topic and difficulty.
    ///
    /// `few_shot` is the retrieved example block; when empty the built-in
    /// static examples ground the prompt instead. A failed generation call
    /// degrades to a canned fallback story; only a missing generator is an
    /// error.
    pub fn get_story(
        &self,
        topic: &str,
        difficulty: Difficulty,
        few_shot: &str,
    ) -> NoirResult<Story> {
        if !self.generator.is_available() {
            return Err(StoryError::GeneratorUnavailable {
                reason: "text generator not configured".to_string(),
            }
            .into());
        }

        let examples = if few_shot.trim().is_empty() {
            prompts::STATIC_EXAMPLES
        } else {
            few_shot
        };

        let request = GenerationRequest::new(prompts::story_prompt(topic, difficulty, examples))
            .with_system_instruction(prompts::STORY_SYSTEM_INSTRUCTION)
            .with_temperature(self.config.story_temperature)
            .with_max_output_tokens(self.config.story_max_tokens);

        info!(topic, %difficulty, "generating story");
        match self.generator.generate(&request) {
            Ok(text) => Ok(parse_story_response(&text)),
            Err(e) => {
                error!(error = %e, "story generation failed, using fallback story");
                Ok(fallback_story(topic))
            }
        }
    }
}

/// Parse the `SHORT STORY:` / `FULL STORY:` response shape.
///
/// A response missing the markers is split down the middle rather than
/// dropped, so the player still gets something playable.
pub fn parse_story_response(text: &str) -> Story {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split("FULL STORY:").collect();
    if parts.len() == 2 {
        return Story {
            premise: parts[0].replace("SHORT STORY:", "").trim().to_string(),
            solution: parts[1].trim().to_string(),
        };
    }

    warn!("model response missing FULL STORY marker, splitting at midpoint");
    let mid = trimmed.len() / 2;
    // Don't split inside a UTF-8 sequence.
    let mid = (mid..trimmed.len())
        .find(|&i| trimmed.is_char_boundary(i))
        .unwrap_or(trimmed.len());
    Story {
        premise: trimmed[..mid].trim().to_string(),
        solution: trimmed[mid..].trim().to_string(),
    }
}

/// Canned stories served when generation fails.
fn fallback_story(topic: &str) -> Story {
    let canned: &[(&str, &str, &str)] = &[
        (
            "Cyberpunk",
            "A hacker is found dead at their desk. Their last message was 'I found it'. All their data is encrypted.",
            "The hacker discovered a surveillance conspiracy and tried to expose it. The system detected the breach and sent a lethal surge through their neural implant. The encryption was automatic upon death.",
        ),
        (
            "Medieval",
            "A knight is found dead in his armor at the tournament. His lance is unbroken.",
            "The knight wasn't killed in combat. His squire placed a venomous snake inside the armor before the tournament. The knight was bitten and poisoned before he entered the arena.",
        ),
        (
            "Modern Crime",
            "A woman is found dead in her locked apartment. Her phone shows she was on a call when she died.",
            "She was on a call with a scammer who convinced her she was being audited. In panic she took what she thought was her medication, but it had been swapped for a lethal lookalike.",
        ),
        (
            "80s Horror",
            "A movie theater projectionist is found dead in the booth. The film is still playing.",
            "The projectionist previewed a banned film reel. The flickering light patterns triggered a fatal seizure.",
        ),
    ];

    for (t, premise, solution) in canned {
        if t.eq_ignore_ascii_case(topic) {
            info!(topic, "serving canned fallback story");
            return Story {
                premise: premise.to_string(),
                solution: solution.to_string(),
            };
        }
    }
    Story {
        premise: "A mysterious figure is found in an unusual circumstance. The details are unclear."
            .to_string(),
        solution: "Something unexpected happened that led to this outcome. The truth is stranger than it appears."
            .to_string(),
    }
}

/// Parse a difficulty label leniently: unknown labels warn and default to
/// Detective rather than failing the request.
pub fn difficulty_or_default(label: &str) -> Difficulty {
    label.parse().unwrap_or_else(|_| {
        warn!(label, "unknown difficulty, defaulting to Detective");
        Difficulty::Detective
    })
}
