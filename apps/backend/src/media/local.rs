use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use super::{ImageStore, ImageUpload};
use crate::errors::domain::DomainError;

/// Writes images into a directory that a web server exposes at `public_base_url`.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    dir: PathBuf,
    public_base_url: String,
}

impl LocalImageStore {
    pub fn new(dir: impl AsRef<Path>, public_base_url: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Lowercased alphanumeric extension of the client filename, if any.
fn safe_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, upload: ImageUpload) -> Result<String, DomainError> {
        let name = match safe_extension(&upload.filename) {
            Some(ext) => format!("{}.{ext}", uuid::Uuid::new_v4()),
            None => uuid::Uuid::new_v4().to_string(),
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::upload(format!("cannot create image directory: {e}")))?;
        let path = self.dir.join(&name);
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| DomainError::upload(format!("cannot write image: {e}")))?;

        info!(path = %path.display(), "image stored locally");
        Ok(format!("{}/{name}", self.public_base_url))
    }
}
