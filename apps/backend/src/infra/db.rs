use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;
use crate::logging::pii::Redacted;

/// Mask the password part of a connection string for logs.
pub fn sanitize_db_url(url: &str) -> String {
    match url.rsplit_once('@') {
        Some((auth, host)) => match auth.rfind(':') {
            Some(colon) if auth[..colon].contains("://") => {
                format!("{}:***@{}", &auth[..colon], host)
            }
            _ => url.to_string(),
        },
        None => url.to_string(),
    }
}

fn connect_options(profile: DbProfile, url: &str) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    if profile == DbProfile::InMemory {
        // every pooled connection to sqlite::memory: is a separate database
        opt.min_connections(1).max_connections(1);
    } else {
        opt.max_connections(10);
    }
    opt
}

/// Unified database connector that supports different profiles and owners.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;
    info!(
        profile = ?profile,
        url = %Redacted(&sanitize_db_url(&database_url)),
        "connecting to database"
    );

    let conn = Database::connect(connect_options(profile, &database_url)).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;
    Ok(conn)
}
