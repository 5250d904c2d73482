use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub text: String,
    pub image: Option<String>,
    /// Sequential number within the licence type, starting at 1.
    pub num: i32,
    #[sea_orm(column_name = "licence_type_id")]
    pub licence_type_id: i32,
    #[sea_orm(column_name = "question_type_id")]
    pub question_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::licence_types::Entity",
        from = "Column::LicenceTypeId",
        to = "super::licence_types::Column::Id"
    )]
    LicenceType,
    #[sea_orm(
        belongs_to = "super::question_categories::Entity",
        from = "Column::QuestionTypeId",
        to = "super::question_categories::Column::Id"
    )]
    QuestionType,
    #[sea_orm(has_many = "super::choices::Entity")]
    Choices,
}

impl Related<super::licence_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LicenceType.def()
    }
}

impl Related<super::question_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionType.def()
    }
}

impl Related<super::choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
