use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::QuestionForm;
use crate::repos::questions::{Choice, QuestionCategory, QuestionDetail};
use crate::services::catalog::CatalogService;
use crate::services::questions::QuestionService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionTypeResponse {
    pub id: i32,
    pub name: String,
}

impl From<QuestionCategory> for QuestionTypeResponse {
    fn from(c: QuestionCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChoiceResponse {
    pub id: i32,
    pub text: String,
    pub image: Option<String>,
    pub is_correct: bool,
    pub question_id: i32,
}

impl From<Choice> for ChoiceResponse {
    fn from(c: Choice) -> Self {
        Self {
            id: c.id,
            text: c.text,
            image: c.image,
            is_correct: c.is_correct,
            question_id: c.question_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub text: String,
    pub image: Option<String>,
    pub num: i32,
    pub licence_type_id: i32,
    pub question_type_id: i32,
    pub choices: Vec<ChoiceResponse>,
    pub question_type: QuestionTypeResponse,
}

impl From<QuestionDetail> for QuestionResponse {
    fn from(q: QuestionDetail) -> Self {
        Self {
            id: q.id,
            text: q.text,
            image: q.image,
            num: q.num,
            licence_type_id: q.licence_type_id,
            question_type_id: q.question_type_id,
            choices: q.choices.into_iter().map(ChoiceResponse::from).collect(),
            question_type: q.category.into(),
        }
    }
}

async fn list_by_licence(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let licence_id = path.into_inner();
    let db = require_db(&app_state)?;
    let questions = QuestionService::new()
        .list_questions_by_licence(db, licence_id)
        .await?;
    let body: Vec<QuestionResponse> = questions.into_iter().map(QuestionResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn list_types(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let types = CatalogService::new().list_question_types(db).await?;
    let body: Vec<QuestionTypeResponse> = types.into_iter().map(QuestionTypeResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create_question(
    form: QuestionForm,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let created = QuestionService::new()
        .create_question(&app_state, form.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(QuestionResponse::from(created)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::post().to(create_question))
        .route("/types/", web::get().to(list_types))
        .route("/by_licence/{licence_id}", web::get().to(list_by_licence));
}
