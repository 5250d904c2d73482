//! SeaORM -> DomainError translation helpers.
//!
//! Repos convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers then map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Name of the unique index over `(licence_type_id, num)`.
pub const QUESTION_NUM_INDEX: &str = "ux_questions_licence_num";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract the column list from SQLite "UNIQUE constraint failed: t.a, t.b" messages.
fn extract_sqlite_columns(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    let rest = &error_msg[start..];
    let end = rest.find(['\n', '"', ')']).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Map the failing columns or constraint name to a domain conflict.
fn map_unique_violation(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    let sqlite_hit = extract_sqlite_columns(error_msg)
        .is_some_and(|cols| cols == "questions.licence_type_id, questions.num");
    if sqlite_hit || error_msg.contains(QUESTION_NUM_INDEX) {
        return Some((
            ConflictKind::QuestionNumberTaken,
            "Question number already taken for this licence",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Row decoding failed");
            return DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is malformed");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some((kind, detail)) = map_unique_violation(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
