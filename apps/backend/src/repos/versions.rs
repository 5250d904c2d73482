//! Exam version repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::versions_sea as versions_adapter;
use crate::entities::exam_versions;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// A yearly edition of the question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamVersion {
    pub id: i32,
    pub year: i32,
    pub enable: bool,
}

impl From<exam_versions::Model> for ExamVersion {
    fn from(model: exam_versions::Model) -> Self {
        Self {
            id: model.id,
            year: model.year,
            enable: model.enable,
        }
    }
}

pub async fn list_versions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ExamVersion>, DomainError> {
    let versions = versions_adapter::list_versions(conn)
        .await
        .map_err(map_db_err)?;
    Ok(versions.into_iter().map(ExamVersion::from).collect())
}

pub async fn find_version<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    version_id: i32,
) -> Result<Option<ExamVersion>, DomainError> {
    let version = versions_adapter::find_by_id(conn, version_id)
        .await
        .map_err(map_db_err)?;
    Ok(version.map(ExamVersion::from))
}
