use crate::{
    error::{GenError, Result},
    models::ChartArtifact,
    storage::assets::plain_file_name,
};
use std::path::{Path, PathBuf};

/// `chart_<unix-seconds>_<pid>_<token>.png`; the token keeps names unique
/// within one second.
pub fn chart_file_name(unix_seconds: i64, pid: u32, token: &str) -> String {
    format!("chart_{}_{}_{}.png", unix_seconds, pid, token)
}

fn unique_token() -> String {
    let mut token = uuid::Uuid::new_v4().simple().to_string();
    token.truncate(12);
    token
}

#[derive(Debug, Clone)]
pub struct ChartStore {
    dir: PathBuf,
}

impl ChartStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the chart directory if needed and picks the file for a new chart.
    pub fn allocate(&self) -> Result<ChartArtifact> {
        std::fs::create_dir_all(&self.dir)?;

        let name = chart_file_name(
            chrono::Utc::now().timestamp(),
            std::process::id(),
            &unique_token(),
        );
        let path = self.dir.join(&name);
        Ok(ChartArtifact { name, path })
    }

    pub async fn resolve(&self, name: &str) -> Result<PathBuf> {
        let not_found = || GenError::NotFound("Chart image not found".into());
        let file_name = plain_file_name(name).ok_or_else(not_found)?;
        let path = self.dir.join(file_name);

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(not_found()),
        }
    }
}
