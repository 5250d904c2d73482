use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct WelcomeResponse {
    status: &'static str,
    message: &'static str,
}

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(WelcomeResponse {
        status: "success",
        message: "Welcome to the ANT exam simulator API",
    }))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// Outcome of probing the database: status, error text, latest migration.
struct DbCheck {
    status: &'static str,
    error: Option<String>,
    migrations: String,
}

async fn check_db(app_state: &AppState) -> DbCheck {
    let db = match require_db(app_state) {
        Ok(db) => db,
        Err(e) => {
            return DbCheck {
                status: "error",
                error: Some(format!("DB unavailable: {e}")),
                migrations: "unknown".into(),
            }
        }
    };

    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    if let Err(e) = db.query_one(ping).await {
        return DbCheck {
            status: "error",
            error: Some(format!("DB query failed: {e}")),
            migrations: "unknown".into(),
        };
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(name)) => name,
        Ok(None) => "no_migrations".into(),
        Err(_) => "unknown".into(),
    };
    DbCheck {
        status: "ok",
        error: None,
        migrations,
    }
}

/// Liveness plus database reachability. Always 200; the body says what failed.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let check = check_db(&app_state).await;
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".into());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: check.status,
        db_error: check.error,
        migrations: check.migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
