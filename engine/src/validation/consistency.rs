//! Cross-field consistency of modifiers and state-like fields.
//!
//! Mutually exclusive pairs are blocking errors; `disabled` combined with an
//! interaction state is only flagged as unusual.

use std::collections::BTreeSet;

use token_namer_vocabulary::FieldId;

use crate::form::FieldKey;
use crate::validation::report::{Issue, IssueKind, ValidationResult};
use crate::validation::Subject;

/// Pairs that may never appear together.
pub const EXCLUSIVE_PAIRS: &[(&str, &str)] = &[("subtle", "strong")];

/// Interaction states that are unusual alongside `disabled`.
pub const INTERACTIVE_STATES: &[&str] = &["hover", "active", "focus"];

/// Modifiers plus the emphasis and state field values, trimmed.
fn combined<'a>(subject: &'a Subject<'_>) -> BTreeSet<&'a str> {
    let mut all: BTreeSet<&str> = subject.state.modifiers.iter().map(|m| m.trim()).collect();
    for field in [FieldId::Emphasis, FieldId::State] {
        if let Some(value) = subject.state.values.get(field) {
            all.insert(value.trim());
        }
    }
    all.remove("");
    all
}

/// Checks the combined modifier set for conflicts and unusual pairs.
pub fn validate(subject: &Subject<'_>) -> ValidationResult {
    let mut result = ValidationResult::new();
    let all = combined(subject);

    for (a, b) in EXCLUSIVE_PAIRS {
        if all.contains(a) && all.contains(b) {
            result.error(
                FieldKey::Modifiers,
                Issue::new(
                    IssueKind::Conflict,
                    format!("'{a}' and '{b}' cannot be combined."),
                ),
            );
        }
    }

    if all.contains("disabled") {
        if let Some(state) = INTERACTIVE_STATES.iter().find(|s| all.contains(*s)) {
            result.warn(
                FieldKey::Modifiers,
                Issue::new(
                    IssueKind::Unusual,
                    format!("'disabled' with '{state}' is an unusual combination."),
                ),
            );
        }
    }

    result
}
