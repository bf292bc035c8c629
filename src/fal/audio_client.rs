use crate::{
    error::Result,
    fal::queue::{take_field, QueueClient},
    models::{AudioGenerationRequest, MediaFile, AUDIO_DURATION_SECONDS},
};
use serde_json::json;

pub const AUDIO_MODEL: &str = "cassetteai/sound-effects-generator";

#[derive(Clone)]
pub struct AudioClient {
    queue: QueueClient,
}

impl AudioClient {
    pub fn new(queue: QueueClient) -> Self {
        Self { queue }
    }

    pub async fn generate(&self, request: AudioGenerationRequest) -> Result<MediaFile> {
        request.validate()?;

        let output = self
            .queue
            .subscribe(
                AUDIO_MODEL,
                json!({
                    "prompt": request.prompt,
                    "duration": AUDIO_DURATION_SECONDS,
                }),
            )
            .await?;

        take_field(output, "audio_file")
    }
}
