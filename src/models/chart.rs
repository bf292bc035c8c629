use serde::{Deserialize, Serialize};

/// Parallel `type` / `status` lists, paired by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "type")]
    pub types: Vec<String>,
    #[serde(rename = "status")]
    pub statuses: Vec<String>,
}

impl ChartRequest {
    pub fn new(types: Vec<String>, statuses: Vec<String>) -> Self {
        Self { types, statuses }
    }

    pub fn is_balanced(&self) -> bool {
        self.types.len() == self.statuses.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartArtifact {
    pub name: String,
    pub path: std::path::PathBuf,
}
