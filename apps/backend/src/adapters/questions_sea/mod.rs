//! SeaORM adapter for questions, choices and question categories.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::{choices, question_categories, questions};

pub mod dto;

pub use dto::{ChoiceCreate, QuestionCreate, QuestionRow};

// Adapter functions return DbErr; the repos layer maps to DomainError.

/// Attach choices to already-fetched questions with one batched `IN (...)` query.
async fn attach_choices<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: Vec<(questions::Model, Option<question_categories::Model>)>,
) -> Result<Vec<QuestionRow>, sea_orm::DbErr> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let (questions, categories): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
    let choices = questions
        .load_many(
            choices::Entity::find().order_by_asc(choices::Column::Id),
            conn,
        )
        .await?;

    Ok(questions
        .into_iter()
        .zip(categories)
        .zip(choices)
        .map(|((question, category), choices)| QuestionRow {
            question,
            category,
            choices,
        })
        .collect())
}

/// All questions of a licence type ordered by number, with category (JOIN)
/// and choices (batched). Two statements regardless of row count.
pub async fn list_by_licence<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_type_id: i32,
) -> Result<Vec<QuestionRow>, sea_orm::DbErr> {
    let rows = questions::Entity::find()
        .filter(questions::Column::LicenceTypeId.eq(licence_type_id))
        .order_by_asc(questions::Column::Num)
        .order_by_asc(questions::Column::Id)
        .find_also_related(question_categories::Entity)
        .all(conn)
        .await?;

    attach_choices(conn, rows).await
}

pub async fn find_with_relations<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i32,
) -> Result<Option<QuestionRow>, sea_orm::DbErr> {
    let row = questions::Entity::find_by_id(question_id)
        .find_also_related(question_categories::Entity)
        .one(conn)
        .await?;

    Ok(attach_choices(conn, row.into_iter().collect())
        .await?
        .into_iter()
        .next())
}

/// Highest `num` in use for the licence type, `None` when it has no questions.
pub async fn max_num<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_type_id: i32,
) -> Result<Option<i32>, sea_orm::DbErr> {
    let max = questions::Entity::find()
        .select_only()
        .column_as(questions::Column::Num.max(), "max_num")
        .filter(questions::Column::LicenceTypeId.eq(licence_type_id))
        .into_tuple::<Option<i32>>()
        .one(conn)
        .await?;
    Ok(max.flatten())
}

pub async fn insert_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, sea_orm::DbErr> {
    questions::ActiveModel {
        id: NotSet,
        text: Set(dto.text),
        image: Set(dto.image),
        num: Set(dto.num),
        licence_type_id: Set(dto.licence_type_id),
        question_type_id: Set(dto.question_type_id),
    }
    .insert(conn)
    .await
}

pub async fn insert_choices<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i32,
    dtos: Vec<ChoiceCreate>,
) -> Result<(), sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(());
    }
    let models = dtos.into_iter().map(|dto| choices::ActiveModel {
        id: NotSet,
        text: Set(dto.text),
        image: Set(dto.image),
        is_correct: Set(dto.is_correct),
        question_id: Set(question_id),
    });
    choices::Entity::insert_many(models)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

pub async fn list_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<question_categories::Model>, sea_orm::DbErr> {
    question_categories::Entity::find()
        .order_by_asc(question_categories::Column::Id)
        .all(conn)
        .await
}

pub async fn find_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_type_id: i32,
) -> Result<Option<question_categories::Model>, sea_orm::DbErr> {
    question_categories::Entity::find_by_id(question_type_id)
        .one(conn)
        .await
}
