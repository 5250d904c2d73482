//! Image storage configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::config::db::must_var;
use crate::error::AppError;

/// Credentials for the Cloudinary signed upload API.
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: Option<String>,
}

impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("folder", &self.folder)
            .finish()
    }
}

/// Directory-backed storage served under a public base URL.
#[derive(Debug, Clone)]
pub struct LocalMediaConfig {
    pub dir: PathBuf,
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub enum MediaConfig {
    Cloudinary(CloudinaryConfig),
    Local(LocalMediaConfig),
}

impl MediaConfig {
    /// Reads `MEDIA_BACKEND` (default `cloudinary`) and the variables of the chosen backend.
    pub fn from_env() -> Result<Self, AppError> {
        let backend = env::var("MEDIA_BACKEND").unwrap_or_else(|_| "cloudinary".to_string());
        match backend.trim().to_ascii_lowercase().as_str() {
            "cloudinary" => Ok(MediaConfig::Cloudinary(CloudinaryConfig {
                cloud_name: must_var("CLOUDINARY_CLOUD_NAME")?,
                api_key: must_var("CLOUDINARY_API_KEY")?,
                api_secret: must_var("CLOUDINARY_API_SECRET")?,
                folder: env::var("CLOUDINARY_UPLOAD_FOLDER")
                    .ok()
                    .filter(|f| !f.trim().is_empty()),
            })),
            "local" => Ok(MediaConfig::Local(LocalMediaConfig {
                dir: PathBuf::from(
                    env::var("MEDIA_LOCAL_DIR").unwrap_or_else(|_| "static/images".to_string()),
                ),
                public_base_url: env::var("MEDIA_PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| "/static/images".to_string()),
            })),
            other => Err(AppError::config(format!(
                "MEDIA_BACKEND must be 'cloudinary' or 'local', got '{other}'"
            ))),
        }
    }
}
