use serde::{Deserialize, Serialize};

use super::defaults;

/// Text generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Generation model identifier.
    pub model: String,
    /// Sampling temperature for story generation.
    pub story_temperature: f32,
    /// Output token cap for story generation.
    pub story_max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: defaults::GENERATION_MODEL.to_string(),
            story_temperature: defaults::STORY_TEMPERATURE,
            story_max_tokens: defaults::STORY_MAX_TOKENS,
        }
    }
}
