//! Question repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::questions_sea::{
    self as questions_adapter, ChoiceCreate, QuestionCreate, QuestionRow,
};
use crate::domain::choices::ValidatedChoices;
use crate::entities::{choices, question_categories};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

/// Topical classification of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCategory {
    pub id: i32,
    pub name: String,
}

impl From<question_categories::Model> for QuestionCategory {
    fn from(model: question_categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// One answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: i32,
    pub text: String,
    pub image: Option<String>,
    pub is_correct: bool,
    pub question_id: i32,
}

impl From<choices::Model> for Choice {
    fn from(model: choices::Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            image: model.image,
            is_correct: model.is_correct,
            question_id: model.question_id,
        }
    }
}

/// A question with its choices and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDetail {
    pub id: i32,
    pub text: String,
    pub image: Option<String>,
    pub num: i32,
    pub licence_type_id: i32,
    pub question_type_id: i32,
    pub choices: Vec<Choice>,
    pub category: QuestionCategory,
}

impl TryFrom<QuestionRow> for QuestionDetail {
    type Error = DomainError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let QuestionRow {
            question,
            category,
            choices,
        } = row;
        let category = category.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Question {} references a missing question type", question.id),
            )
        })?;

        Ok(Self {
            id: question.id,
            text: question.text,
            image: question.image,
            num: question.num,
            licence_type_id: question.licence_type_id,
            question_type_id: question.question_type_id,
            choices: choices.into_iter().map(Choice::from).collect(),
            category: category.into(),
        })
    }
}

/// Values for a question about to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub image: Option<String>,
    pub num: i32,
    pub licence_type_id: i32,
    pub question_type_id: i32,
}

pub async fn list_by_licence<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_type_id: i32,
) -> Result<Vec<QuestionDetail>, DomainError> {
    let rows = questions_adapter::list_by_licence(conn, licence_type_id)
        .await
        .map_err(map_db_err)?;
    rows.into_iter().map(QuestionDetail::try_from).collect()
}

pub async fn find_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i32,
) -> Result<Option<QuestionDetail>, DomainError> {
    let row = questions_adapter::find_with_relations(conn, question_id)
        .await
        .map_err(map_db_err)?;
    row.map(QuestionDetail::try_from).transpose()
}

/// Highest question number of the licence type, 0 when it has none.
pub async fn last_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_type_id: i32,
) -> Result<i32, DomainError> {
    let max = questions_adapter::max_num(conn, licence_type_id)
        .await
        .map_err(map_db_err)?;
    Ok(max.unwrap_or(0))
}

/// Insert the question and its choices; returns the new question id.
///
/// Run inside a transaction: a failing choice insert leaves the question row
/// behind otherwise.
pub async fn insert_with_choices<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question: NewQuestion,
    choices: &ValidatedChoices,
) -> Result<i32, DomainError> {
    let created = questions_adapter::insert_question(
        conn,
        QuestionCreate {
            text: question.text,
            image: question.image,
            num: question.num,
            licence_type_id: question.licence_type_id,
            question_type_id: question.question_type_id,
        },
    )
    .await
    .map_err(map_db_err)?;

    let dtos = choices
        .iter()
        .map(|c| ChoiceCreate {
            text: c.text.clone(),
            image: c.image.clone(),
            is_correct: c.is_correct,
        })
        .collect();
    questions_adapter::insert_choices(conn, created.id, dtos)
        .await
        .map_err(map_db_err)?;

    Ok(created.id)
}

pub async fn list_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<QuestionCategory>, DomainError> {
    let categories = questions_adapter::list_categories(conn)
        .await
        .map_err(map_db_err)?;
    Ok(categories.into_iter().map(QuestionCategory::from).collect())
}

pub async fn find_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_type_id: i32,
) -> Result<Option<QuestionCategory>, DomainError> {
    let category = questions_adapter::find_category(conn, question_type_id)
        .await
        .map_err(map_db_err)?;
    Ok(category.map(QuestionCategory::from))
}
