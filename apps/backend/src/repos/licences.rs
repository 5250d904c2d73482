//! Licence type repository functions.

use sea_orm::ConnectionTrait;

use super::versions::ExamVersion;
use crate::adapters::licences_sea::{self as licences_adapter, LicenceRow};
use crate::entities::licence_categories;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

/// Professional / non-professional grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenceCategory {
    pub id: i32,
    pub name: String,
}

impl From<licence_categories::Model> for LicenceCategory {
    fn from(model: licence_categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// A licence type with its exam version and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenceTypeDetail {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub question_bank: Option<String>,
    pub display_order: Option<i32>,
    pub enable: bool,
    pub type_id: i32,
    pub version_id: i32,
    pub version: ExamVersion,
    pub category: LicenceCategory,
}

impl TryFrom<LicenceRow> for LicenceTypeDetail {
    type Error = DomainError;

    fn try_from(row: LicenceRow) -> Result<Self, Self::Error> {
        let LicenceRow {
            licence,
            version,
            category,
        } = row;
        let version = version.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Licence type {} references a missing version", licence.id),
            )
        })?;
        let category = category.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Licence type {} references a missing category", licence.id),
            )
        })?;

        Ok(Self {
            id: licence.id,
            name: licence.name,
            description: licence.description,
            image: licence.image,
            question_bank: licence.question_bank,
            display_order: licence.display_order,
            enable: licence.enable,
            type_id: licence.type_id,
            version_id: licence.version_id,
            version: version.into(),
            category: category.into(),
        })
    }
}

pub async fn list_licence_types<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    version_id: Option<i32>,
) -> Result<Vec<LicenceTypeDetail>, DomainError> {
    let rows = licences_adapter::list_with_relations(conn, version_id)
        .await
        .map_err(map_db_err)?;
    rows.into_iter().map(LicenceTypeDetail::try_from).collect()
}

pub async fn find_licence_type<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_id: i32,
) -> Result<Option<LicenceTypeDetail>, DomainError> {
    let row = licences_adapter::find_with_relations(conn, licence_id)
        .await
        .map_err(map_db_err)?;
    row.map(LicenceTypeDetail::try_from).transpose()
}

pub async fn licence_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    licence_id: i32,
) -> Result<bool, DomainError> {
    let licence = licences_adapter::find_by_id(conn, licence_id)
        .await
        .map_err(map_db_err)?;
    Ok(licence.is_some())
}
