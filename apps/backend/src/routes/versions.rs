use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::repos::versions::ExamVersion;
use crate::services::catalog::CatalogService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub id: i32,
    pub year: i32,
    pub enable: bool,
}

impl From<ExamVersion> for VersionResponse {
    fn from(v: ExamVersion) -> Self {
        Self {
            id: v.id,
            year: v.year,
            enable: v.enable,
        }
    }
}

async fn list_versions(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let versions = CatalogService::new().list_versions(db).await?;
    let body: Vec<VersionResponse> = versions.into_iter().map(VersionResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(list_versions));
}
