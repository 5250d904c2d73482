//! SeaORM adapter for exam versions.

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::exam_versions;

pub async fn list_versions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<exam_versions::Model>, sea_orm::DbErr> {
    exam_versions::Entity::find()
        .order_by_desc(exam_versions::Column::Year)
        .order_by_asc(exam_versions::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    version_id: i32,
) -> Result<Option<exam_versions::Model>, sea_orm::DbErr> {
    exam_versions::Entity::find_by_id(version_id).one(conn).await
}
