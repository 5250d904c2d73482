//! Parsing and validation of the `choices_json` form field.

use serde::Deserialize;

use crate::errors::domain::{DomainError, ValidationKind};

/// One entry of the client-supplied choice list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChoiceSpec {
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
}

/// A non-empty choice list with at least one correct entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedChoices(Vec<ChoiceSpec>);

impl ValidatedChoices {
    pub fn iter(&self) -> std::slice::Iter<'_, ChoiceSpec> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn correct_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_correct).count()
    }

    pub fn into_inner(self) -> Vec<ChoiceSpec> {
        self.0
    }
}

impl TryFrom<Vec<ChoiceSpec>> for ValidatedChoices {
    type Error = DomainError;

    fn try_from(choices: Vec<ChoiceSpec>) -> Result<Self, Self::Error> {
        if choices.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyChoices,
                "At least one choice is required",
            ));
        }
        if !choices.iter().any(|c| c.is_correct) {
            return Err(DomainError::validation(
                ValidationKind::NoCorrectChoice,
                "At least one choice must be marked as correct",
            ));
        }
        Ok(Self(choices))
    }
}

/// Parse `choices_json` strictly: a JSON array whose every entry matches
/// [`ChoiceSpec`], non-empty, with at least one correct choice.
pub fn parse_choices(raw: &str) -> Result<ValidatedChoices, DomainError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        DomainError::validation(
            ValidationKind::InvalidChoicesJson,
            format!("choices_json is not valid JSON: {e}"),
        )
    })?;

    let serde_json::Value::Array(entries) = value else {
        return Err(DomainError::validation(
            ValidationKind::InvalidChoicesJson,
            "choices_json must be a JSON array",
        ));
    };

    let choices = entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            serde_json::from_value::<ChoiceSpec>(entry).map_err(|e| {
                DomainError::validation(
                    ValidationKind::InvalidChoice,
                    format!("choice {idx} is invalid: {e}"),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ValidatedChoices::try_from(choices)
}
