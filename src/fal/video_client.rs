use crate::{
    error::Result,
    fal::queue::{take_field, QueueClient},
    models::{MediaFile, VideoGenerationRequest},
};
use serde_json::json;

pub const VIDEO_MODEL: &str = "fal-ai/minimax/hailuo-02/standard/image-to-video";

#[derive(Clone)]
pub struct VideoClient {
    queue: QueueClient,
}

impl VideoClient {
    pub fn new(queue: QueueClient) -> Self {
        Self { queue }
    }

    pub async fn generate(&self, request: VideoGenerationRequest) -> Result<MediaFile> {
        request.validate()?;

        let output = self
            .queue
            .subscribe(
                VIDEO_MODEL,
                json!({
                    "prompt": request.prompt,
                    "image_url": request.image_url,
                }),
            )
            .await?;

        take_field(output, "video")
    }
}
