use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "versions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub year: i32,
    pub enable: bool,
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
