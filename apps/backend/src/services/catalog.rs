//! Read-only catalog queries: exam versions, licence types, question types.

use sea_orm::ConnectionTrait;

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::licences::{self, LicenceTypeDetail};
use crate::repos::questions::{self, QuestionCategory};
use crate::repos::versions::{self, ExamVersion};

/// Catalog query service.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// All exam versions, newest year first.
    pub async fn list_versions<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<ExamVersion>, AppError> {
        Ok(versions::list_versions(conn).await?)
    }

    /// Licence types with version and category embedded.
    ///
    /// With `Some(version_id)` the version must exist, otherwise
    /// `VERSION_NOT_FOUND`; an existing version with no licences yields `[]`.
    pub async fn list_licence_types<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        version_id: Option<i32>,
    ) -> Result<Vec<LicenceTypeDetail>, AppError> {
        if let Some(version_id) = version_id {
            if versions::find_version(conn, version_id).await?.is_none() {
                return Err(DomainError::not_found(
                    NotFoundKind::Version,
                    format!("Version {version_id} not found"),
                )
                .into());
            }
        }
        Ok(licences::list_licence_types(conn, version_id).await?)
    }

    pub async fn get_licence_type<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        licence_id: i32,
    ) -> Result<LicenceTypeDetail, AppError> {
        licences::find_licence_type(conn, licence_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Licence,
                    format!("Licence {licence_id} not found"),
                )
                .into()
            })
    }

    pub async fn list_question_types<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<QuestionCategory>, AppError> {
        Ok(questions::list_categories(conn).await?)
    }
}
