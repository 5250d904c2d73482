use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use super::{ImageStore, ImageUpload};
use crate::config::media::CloudinaryConfig;
use crate::errors::domain::DomainError;

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Signed uploads to Cloudinary's image upload endpoint.
pub struct CloudinaryStore {
    client: Client,
    config: CloudinaryConfig,
    base_url: String,
}

impl CloudinaryStore {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            base_url: API_BASE.to_string(),
        }
    }

    /// Point the store at another API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.base_url, self.config.cloud_name)
    }

    /// Parameters covered by the signature, sorted by name.
    fn signed_params(&self, timestamp: i64) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(folder) = &self.config.folder {
            params.push(("folder", folder.clone()));
        }
        params.push(("timestamp", timestamp.to_string()));
        params.sort_by(|a, b| a.0.cmp(b.0));
        params
    }

    fn sign(&self, params: &[(&'static str, String)]) -> String {
        let to_sign = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.config.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl ImageStore for CloudinaryStore {
    async fn store(&self, upload: ImageUpload) -> Result<String, DomainError> {
        let timestamp = time::OffsetDateTime::now_utc().unix_timestamp();
        let params = self.signed_params(timestamp);
        let signature = self.sign(&params);

        let mut file = Part::bytes(upload.bytes.to_vec()).file_name(upload.filename.clone());
        if let Some(ct) = &upload.content_type {
            file = file
                .mime_str(ct)
                .map_err(|e| DomainError::upload(format!("invalid content type: {e}")))?;
        }

        let mut form = Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (k, v) in params {
            form = form.text(k, v);
        }

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::upload(format!("image upload request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let truncated: String = body.chars().take(300).collect();
            warn!(status = %status, body = %truncated, "image upload rejected");
            return Err(DomainError::upload(format!(
                "image hosting returned {status}"
            )));
        }

        let data: UploadResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upload(format!("unreadable upload response: {e}")))?;

        match data.secure_url {
            Some(url) if !url.is_empty() => {
                info!(filename = %upload.filename, "image uploaded");
                Ok(url)
            }
            _ => Err(DomainError::upload("image hosting returned no URL")),
        }
    }
}
