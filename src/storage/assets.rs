use crate::error::{GenError, Result};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFolder {
    Asset,
    Background,
}

impl ImageFolder {
    pub const ALL: [ImageFolder; 2] = [ImageFolder::Asset, ImageFolder::Background];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFolder::Asset => "asset",
            ImageFolder::Background => "background",
        }
    }

    fn not_found(&self) -> GenError {
        GenError::NotFound(format!("Image not found in '{}' folder", self.as_str()))
    }
}

impl fmt::Display for ImageFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFolder {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asset" => Ok(ImageFolder::Asset),
            "background" => Ok(ImageFolder::Background),
            other => Err(GenError::NotFound(format!("Unknown image folder '{}'", other))),
        }
    }
}

/// Returns `name` if it is a single, ordinary path component.
pub(crate) fn plain_file_name(name: &str) -> Option<&str> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(name),
        _ => None,
    }
}

/// Read-only view over `<root>/asset` and `<root>/background`.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn folder_path(&self, folder: ImageFolder) -> PathBuf {
        self.root.join(folder.as_str())
    }

    pub async fn image_path(&self, folder: ImageFolder, name: &str) -> Result<PathBuf> {
        let file_name = plain_file_name(name).ok_or_else(|| folder.not_found())?;
        let path = self.folder_path(folder).join(file_name);

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => {
                log::debug!("Missing image {}/{}", folder, name);
                Err(folder.not_found())
            }
        }
    }

    /// Lists `asset/<name>` entries followed by `background/<name>` entries.
    pub async fn list(&self) -> Result<Vec<String>> {
        for folder in ImageFolder::ALL {
            if !is_dir(&self.folder_path(folder)).await {
                log::warn!(
                    "Image folder missing: {}",
                    self.folder_path(folder).display()
                );
                return Err(GenError::NotFound(
                    "One or both image folders not found".into(),
                ));
            }
        }

        let mut images = Vec::new();
        for folder in ImageFolder::ALL {
            let mut names = self.file_names(folder).await?;
            names.sort();
            images.extend(names.into_iter().map(|name| format!("{}/{}", folder, name)));
        }
        Ok(images)
    }

    async fn file_names(&self, folder: ImageFolder) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(self.folder_path(folder)).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            // Follows symlinks, so a linked file is listed like a regular one.
            let is_file = tokio::fs::metadata(entry.path())
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if is_file {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
