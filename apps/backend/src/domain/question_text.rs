use crate::errors::domain::{DomainError, ValidationKind};

/// Question text must contain something other than whitespace.
pub fn validate_question_text(text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidQuestionText,
            "Question text must not be blank",
        ));
    }
    Ok(())
}
