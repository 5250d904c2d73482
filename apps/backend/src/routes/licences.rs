use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::versions::VersionResponse;
use crate::db::require_db;
use crate::error::AppError;
use crate::repos::licences::{LicenceCategory, LicenceTypeDetail};
use crate::services::catalog::CatalogService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct LicenceCategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<LicenceCategory> for LicenceCategoryResponse {
    fn from(c: LicenceCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LicenceResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub question_bank: Option<String>,
    pub order: Option<i32>,
    pub enable: bool,
    pub type_id: i32,
    pub version_id: i32,
    pub version: VersionResponse,
    #[serde(rename = "type")]
    pub category: LicenceCategoryResponse,
}

impl From<LicenceTypeDetail> for LicenceResponse {
    fn from(l: LicenceTypeDetail) -> Self {
        Self {
            id: l.id,
            name: l.name,
            description: l.description,
            image: l.image,
            question_bank: l.question_bank,
            order: l.display_order,
            enable: l.enable,
            type_id: l.type_id,
            version_id: l.version_id,
            version: l.version.into(),
            category: l.category.into(),
        }
    }
}

async fn list_by_version(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let version_id = path.into_inner();
    let db = require_db(&app_state)?;
    let licences = CatalogService::new()
        .list_licence_types(db, Some(version_id))
        .await?;
    let body: Vec<LicenceResponse> = licences.into_iter().map(LicenceResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_licence(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let licence_id = path.into_inner();
    let db = require_db(&app_state)?;
    let licence = CatalogService::new().get_licence_type(db, licence_id).await?;
    Ok(HttpResponse::Ok().json(LicenceResponse::from(licence)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/by_version/{version_id}", web::get().to(list_by_version))
        .route("/{licence_id}", web::get().to(get_licence));
}
