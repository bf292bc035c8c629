use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Image Server! Use /images/{image_name} to fetch an image.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageListing {
    pub images: Vec<String>,
}
