//! Required-ness: every required, visible field must be filled.

use crate::form::FieldKey;
use crate::validation::report::{Issue, IssueKind, ValidationResult};
use crate::validation::Subject;

/// Reports an error for each required, visible field whose trimmed value is empty.
pub fn validate(subject: &Subject<'_>) -> ValidationResult {
    let mut result = ValidationResult::new();
    for def in subject.schema.fields {
        if !def.required || !subject.visible.contains(&def.id) {
            continue;
        }
        if subject.state.values.value(def.id).trim().is_empty() {
            result.error(
                FieldKey::Field(def.id),
                Issue::new(IssueKind::Required, format!("{} is required.", def.label)),
            );
        }
    }
    result
}
