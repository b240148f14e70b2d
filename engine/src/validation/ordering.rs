//! Ordering: a filled field after an empty one is flagged, never blocked.

use crate::form::FieldKey;
use crate::validation::report::{Issue, IssueKind, ValidationResult};
use crate::validation::Subject;

/// Warns on each visible field that is filled while an earlier visible field is empty.
pub fn validate(subject: &Subject<'_>) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut gap = false;
    for (field, value) in subject.visible_values() {
        if value.is_empty() {
            gap = true;
        } else if gap {
            result.warn(
                FieldKey::Field(field),
                Issue::new(IssueKind::Ordering, "Complete previous fields first."),
            );
        }
    }
    result
}
