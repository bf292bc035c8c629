pub mod audio_client;
pub mod http_queue;
pub mod image_client;
pub mod queue;
pub mod video_client;

use crate::{
    config::FalConfig,
    models::{MediaKind, ModelInfo},
};
use std::sync::Arc;

pub use audio_client::AudioClient;
pub use http_queue::FalHttpQueue;
pub use image_client::ImageClient;
pub use queue::{ProviderQueue, QueueClient, QueueStatus, QueuedRequest, RequestHandle};
pub use video_client::VideoClient;

#[derive(Clone)]
pub struct FalClient {
    image_client: ImageClient,
    video_client: VideoClient,
    audio_client: AudioClient,
}

impl FalClient {
    /// The API key is taken from `config`, never from the process environment.
    pub fn new(config: FalConfig) -> Self {
        Self::with_queue(Arc::new(FalHttpQueue::new(config)))
    }

    pub fn with_queue(queue: Arc<dyn ProviderQueue>) -> Self {
        let queue = QueueClient::new(queue);
        Self {
            image_client: ImageClient::new(queue.clone()),
            video_client: VideoClient::new(queue.clone()),
            audio_client: AudioClient::new(queue),
        }
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn video(&self) -> &VideoClient {
        &self.video_client
    }

    pub fn audio(&self) -> &AudioClient {
        &self.audio_client
    }

    pub fn supported_models() -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                id: image_client::IMAGE_MODEL.to_string(),
                name: "FLUX.1 [dev]".to_string(),
                provider: "fal.ai".to_string(),
                category: MediaKind::Image,
                description: "Text to image".to_string(),
            },
            ModelInfo {
                id: video_client::VIDEO_MODEL.to_string(),
                name: "MiniMax Hailuo-02 Standard".to_string(),
                provider: "fal.ai".to_string(),
                category: MediaKind::Video,
                description: "Image to video".to_string(),
            },
            ModelInfo {
                id: audio_client::AUDIO_MODEL.to_string(),
                name: "CassetteAI Sound Effects".to_string(),
                provider: "fal.ai".to_string(),
                category: MediaKind::Audio,
                description: "Text to sound effect, 5 seconds".to_string(),
            },
        ]
    }
}
