use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Professional / non-professional grouping of licence types.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::licence_types::Entity")]
    LicenceTypes,
}

impl Related<super::licence_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LicenceTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
