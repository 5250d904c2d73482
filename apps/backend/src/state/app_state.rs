use std::fmt;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::media::ImageStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Where question images go (optional when no uploads are expected)
    images: Option<Arc<dyn ImageStore>>,
}

impl AppState {
    pub fn new(db: Option<DatabaseConnection>, images: Option<Arc<dyn ImageStore>>) -> Self {
        Self { db, images }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn images(&self) -> Option<&Arc<dyn ImageStore>> {
        self.images.as_ref()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("images", &self.images.is_some())
            .finish()
    }
}
