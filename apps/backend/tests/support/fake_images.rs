use std::sync::Mutex;

use ant_backend::errors::DomainError;
use ant_backend::media::{ImageStore, ImageUpload};
use async_trait::async_trait;

/// Records every upload and hands back a predictable URL.
#[derive(Debug, Default)]
pub struct FakeImageStore {
    uploads: Mutex<Vec<String>>,
}

impl FakeImageStore {
    pub fn uploaded(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn store(&self, upload: ImageUpload) -> Result<String, DomainError> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(upload.filename.clone());
        Ok(format!(
            "https://images.test/{}/{}",
            uploads.len(),
            upload.filename
        ))
    }
}

/// Always fails, like a hosting service that is down.
#[derive(Debug, Default)]
pub struct FailingImageStore;

#[async_trait]
impl ImageStore for FailingImageStore {
    async fn store(&self, _upload: ImageUpload) -> Result<String, DomainError> {
        Err(DomainError::upload("image host returned 503"))
    }
}
