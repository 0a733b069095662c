use crate::errors::NoirResult;

/// One text-generation call: prompt plus sampling knobs.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// The user-visible prompt contents.
    pub prompt: String,
    /// Optional system instruction (persona, rules).
    pub system_instruction: Option<String>,
    /// Sampling temperature. Provider default when `None`.
    pub temperature: Option<f32>,
    /// Output token cap. Provider default when `None`.
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

/// Text generation capability.
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given request.
    fn generate(&self, request: &GenerationRequest) -> NoirResult<String>;

    /// Whether this generator is currently available.
    fn is_available(&self) -> bool;
}
