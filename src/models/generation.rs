use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_FORMAT: &str = "jpg";
pub const AUDIO_DURATION_SECONDS: u32 = 5;

fn default_output_format() -> String {
    DEFAULT_OUTPUT_FORMAT.to_string()
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GenError::ValidationError(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            output_format: default_output_format(),
        }
    }

    pub fn with_output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = format.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_text("prompt", &self.prompt)
    }

    /// The provider only knows "jpeg".
    pub fn provider_output_format(&self) -> &str {
        match self.output_format.as_str() {
            "jpg" => "jpeg",
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoGenerationRequest {
    pub prompt: String,
    pub image_url: String,
}

impl VideoGenerationRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("prompt", &self.prompt)?;
        require_text("image_url", &self.image_url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioGenerationRequest {
    pub prompt: String,
}

impl AudioGenerationRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("prompt", &self.prompt)
    }
}
