//! Property tests for choice validation (pure domain, no DB).

use proptest::prelude::*;

use crate::domain::choices::parse_choices;
use crate::errors::domain::{DomainError, ValidationKind};

fn choice_json() -> impl Strategy<Value = (String, bool)> {
    ("[A-Za-z0-9 ?]{1,24}", any::<bool>())
}

fn render(entries: &[(String, bool)]) -> String {
    let list: Vec<_> = entries
        .iter()
        .map(|(text, ok)| serde_json::json!({"text": text, "is_correct": ok}))
        .collect();
    serde_json::Value::Array(list).to_string()
}

proptest! {
    /// Any non-empty list with at least one correct entry is accepted, and
    /// nothing is dropped or reordered.
    #[test]
    fn prop_accepts_lists_with_a_correct_choice(
        mut entries in prop::collection::vec(choice_json(), 1..8),
        correct_at in any::<prop::sample::Index>(),
    ) {
        let idx = correct_at.index(entries.len());
        entries[idx].1 = true;

        let parsed = parse_choices(&render(&entries)).unwrap();
        prop_assert_eq!(parsed.len(), entries.len());
        for (spec, (text, ok)) in parsed.iter().zip(&entries) {
            prop_assert_eq!(&spec.text, text);
            prop_assert_eq!(spec.is_correct, *ok);
        }
    }

    /// Lists where every entry is incorrect are always rejected.
    #[test]
    fn prop_rejects_lists_without_correct_choice(
        texts in prop::collection::vec("[a-z]{1,12}", 1..8),
    ) {
        let entries: Vec<_> = texts.into_iter().map(|t| (t, false)).collect();
        let err = parse_choices(&render(&entries)).unwrap_err();
        prop_assert_eq!(
            err,
            DomainError::validation(
                ValidationKind::NoCorrectChoice,
                "At least one choice must be marked as correct"
            )
        );
    }
}
