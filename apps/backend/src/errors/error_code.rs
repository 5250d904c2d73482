//! Error codes for the exam simulator API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the exam simulator API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// `choices_json` is not a JSON array
    InvalidChoicesJson,
    /// An entry of the choice list does not match the choice schema
    InvalidChoice,
    /// The choice list is empty
    EmptyChoices,
    /// No choice is marked as correct
    NoCorrectChoice,
    /// Question text missing or blank
    InvalidQuestionText,
    /// Uploaded image exceeds the size limit
    ImageTooLarge,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Exam version not found
    VersionNotFound,
    /// Licence type not found
    LicenceNotFound,
    /// Question category not found
    QuestionTypeNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Another question already holds the computed sequential number
    QuestionNumberTaken,
    /// Unique constraint violation without a more specific mapping
    UniqueViolation,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // External collaborators
    /// Image upload to the hosting service failed
    UploadFailed,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidChoicesJson => "INVALID_CHOICES_JSON",
            Self::InvalidChoice => "INVALID_CHOICE",
            Self::EmptyChoices => "EMPTY_CHOICES",
            Self::NoCorrectChoice => "NO_CORRECT_CHOICE",
            Self::InvalidQuestionText => "INVALID_QUESTION_TEXT",
            Self::ImageTooLarge => "IMAGE_TOO_LARGE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::VersionNotFound => "VERSION_NOT_FOUND",
            Self::LicenceNotFound => "LICENCE_NOT_FOUND",
            Self::QuestionTypeNotFound => "QUESTION_TYPE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::QuestionNumberTaken => "QUESTION_NUMBER_TAKEN",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::UploadFailed => "UPLOAD_FAILED",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
