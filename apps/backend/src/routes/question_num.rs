use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::questions::QuestionService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionNumRequest {
    #[serde(alias = "id")]
    pub licence_id: i32,
}

#[derive(Debug, Serialize)]
pub struct QuestionNumResponse {
    pub licence_id: i32,
    pub last_num: i32,
    pub next_num: i32,
}

/// Last assigned question number of a licence; 0 when it has no questions.
async fn fetch_question_num(
    body: ValidatedJson<QuestionNumRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let licence_id = body.into_inner().licence_id;
    let db = require_db(&app_state)?;
    let numbers = QuestionService::new()
        .get_last_question_number(db, licence_id)
        .await?;
    Ok(HttpResponse::Ok().json(QuestionNumResponse {
        licence_id,
        last_num: numbers.last_num,
        next_num: numbers.next_num,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::post().to(fetch_question_num));
}
