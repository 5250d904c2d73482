use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "licence_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[sea_orm(column_name = "question_bank")]
    pub question_bank: Option<String>,
    #[sea_orm(column_name = "order")]
    pub display_order: Option<i32>,
    pub enable: bool,
    #[sea_orm(column_name = "type_id")]
    pub type_id: i32,
    #[sea_orm(column_name = "version_id")]
    pub version_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exam_versions::Entity",
        from = "Column::VersionId",
        to = "super::exam_versions::Column::Id"
    )]
    Version,
    #[sea_orm(
        belongs_to = "super::licence_categories::Entity",
        from = "Column::TypeId",
        to = "super::licence_categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::questions::Entity")]
    Questions,
}

impl Related<super::exam_versions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Version.def()
    }
}

impl Related<super::licence_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
