use crate::{
    error::{GenError, Result},
    fal::queue::{take_field, QueueClient},
    models::{ImageGenerationRequest, MediaFile},
};
use serde_json::json;

pub const IMAGE_MODEL: &str = "fal-ai/flux/dev";

#[derive(Clone)]
pub struct ImageClient {
    queue: QueueClient,
}

impl ImageClient {
    pub fn new(queue: QueueClient) -> Self {
        Self { queue }
    }

    /// Submits the prompt, waits on the handle and returns the first image.
    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<MediaFile> {
        request.validate()?;

        let arguments = json!({
            "prompt": request.prompt,
            "output_format": request.provider_output_format(),
        });

        let handle = self.queue.submit(IMAGE_MODEL, arguments).await?;
        let output = handle.get().await?;

        let mut images: Vec<MediaFile> = take_field(output, "images")?;
        if images.is_empty() {
            return Err(GenError::ResponseError("No images generated".into()));
        }
        Ok(images.swap_remove(0))
    }
}
