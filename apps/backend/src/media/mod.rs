//! Image storage behind a trait so the authoring workflow never talks to a
//! hosting service directly.

pub mod cloudinary;
pub mod local;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::media::MediaConfig;
use crate::errors::domain::DomainError;

pub use cloudinary::CloudinaryStore;
pub use local::LocalImageStore;

/// Images above this size are rejected before any upload is attempted.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// An image received from a client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Bytes,
    pub filename: String,
    pub content_type: Option<String>,
}

impl ImageUpload {
    /// Clients send an empty file part when no image was chosen.
    pub fn is_present(&self) -> bool {
        !self.filename.trim().is_empty() && !self.bytes.is_empty()
    }
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist the image and return its public URL.
    ///
    /// Failures are reported as `DomainError::Infra(ImageUpload, _)`.
    async fn store(&self, upload: ImageUpload) -> Result<String, DomainError>;
}

/// Build the store selected by configuration.
pub fn from_config(config: &MediaConfig) -> Arc<dyn ImageStore> {
    match config {
        MediaConfig::Cloudinary(c) => Arc::new(CloudinaryStore::new(c.clone())),
        MediaConfig::Local(l) => Arc::new(LocalImageStore::new(&l.dir, &l.public_base_url)),
    }
}
