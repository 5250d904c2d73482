use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
    /// Private SQLite in-memory database, one per pool
    InMemory,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Builds a database URL from environment variables based on profile and owner.
///
/// For `Prod`, a non-empty `DATABASE_URL` takes precedence over the assembled URL.
pub fn db_url(profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    if profile == DbProfile::InMemory {
        return Ok(IN_MEMORY_URL.to_string());
    }
    if profile == DbProfile::Prod {
        if let Ok(url) = env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }
    }

    let host = host();
    let port = port();
    let db_name = db_name(profile)?;
    let (username, password) = credentials(owner)?;

    let url = format!("postgresql://{username}:{password}@{host}:{port}/{db_name}");
    Ok(url)
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

/// Get database name based on profile
fn db_name(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
        DbProfile::InMemory => Ok(String::new()),
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((must_var("OWNER_DB_USER")?, must_var("OWNER_DB_PASSWORD")?)),
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
