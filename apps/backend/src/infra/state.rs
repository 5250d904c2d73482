use std::sync::Arc;

use crate::config::db::{DbOwner, DbProfile};
use crate::config::media::MediaConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::media::{self, ImageStore};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    media: Option<MediaConfig>,
    images: Option<Arc<dyn ImageStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    /// Build the image store from configuration.
    pub fn with_media(mut self, config: MediaConfig) -> Self {
        self.media = Some(config);
        self
    }

    /// Use an already-built image store; wins over `with_media`.
    pub fn with_images(mut self, images: Arc<dyn ImageStore>) -> Self {
        self.images = Some(images);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let db = match self.db_profile {
            // single entrypoint: connect + migrate
            Some(profile) => Some(bootstrap_db(profile, DbOwner::App).await?),
            None => None,
        };
        let images = self
            .images
            .or_else(|| self.media.as_ref().map(media::from_config));
        Ok(AppState::new(db, images))
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
