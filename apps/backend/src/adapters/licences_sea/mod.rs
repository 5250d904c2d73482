//! SeaORM adapter for licence types and their categories.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, QueryFilter, QueryOrder};

use crate::entities::{exam_versions, licence_categories, licence_types};

pub mod dto;

pub use dto::LicenceRow;

// Adapter functions return DbErr; the repos layer maps to DomainError.

/// Licence types, optionally restricted to one exam version, with version and
/// category attached. Issues two statements regardless of row count: a JOIN
/// for the version and one batched lookup for the categories.
pub async fn list_with_relations<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    version_id: Option<i32>,
) -> Result<Vec<LicenceRow>, sea_orm::DbErr> {
    let mut query = licence_types::Entity::find();
    if let Some(version_id) = version_id {
        query = query.filter(licence_types::Column::VersionId.eq(version_id));
    }
    let rows = query
        .order_by_asc(licence_types::Column::DisplayOrder)
        .order_by_asc(licence_types::Column::Id)
        .find_also_related(exam_versions::Entity)
        .all(conn)
        .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let (licences, versions): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
    let categories = licences
        .load_one(licence_categories::Entity, conn)
        .await?;

    Ok(licences
        .into_iter()
        .zip(versions)
        .zip(categories)
        .map(|((licence, version), category)| LicenceRow {
            licence,
            version,
            category,
        })
        .collect())
}

pub async fn find_with_relations<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_id: i32,
) -> Result<Option<LicenceRow>, sea_orm::DbErr> {
    let Some((licence, version)) = licence_types::Entity::find_by_id(licence_id)
        .find_also_related(exam_versions::Entity)
        .one(conn)
        .await?
    else {
        return Ok(None);
    };

    let category = licence_categories::Entity::find_by_id(licence.type_id)
        .one(conn)
        .await?;

    Ok(Some(LicenceRow {
        licence,
        version,
        category,
    }))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_id: i32,
) -> Result<Option<licence_types::Model>, sea_orm::DbErr> {
    licence_types::Entity::find_by_id(licence_id).one(conn).await
}
