//! Character set: segments may only contain `a-z`, `0-9` and `-`.
//!
//! The primitive `property` selector is the one field allowed mixed case
//! (`fontFamily`, `letterSpacing`).

use std::sync::OnceLock;

use regex::Regex;
use token_namer_vocabulary::{FieldId, Framework};

use crate::form::FieldKey;
use crate::validation::report::{Issue, IssueKind, ValidationResult};
use crate::validation::Subject;

const LOWER_MESSAGE: &str = "Use only a-z, 0-9, and '-'.";
const MIXED_MESSAGE: &str = "Use only letters, 0-9, and '-'.";

fn lower() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").ok()).as_ref()
}

fn mixed() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9-]+$").ok()).as_ref()
}

/// Returns true if `value` is a well-formed lowercase segment.
#[must_use]
pub fn is_segment(value: &str) -> bool {
    lower().is_some_and(|re| re.is_match(value))
}

fn allows_mixed_case(framework: Framework, field: FieldId) -> bool {
    framework == Framework::Primitive && field == FieldId::Property
}

/// Checks every non-empty field, prefix and modifier value.
pub fn validate(subject: &Subject<'_>) -> ValidationResult {
    let mut result = ValidationResult::new();
    let framework = subject.state.framework();

    for (slot, value) in subject.state.prefixes.added() {
        let value = value.trim();
        if !value.is_empty() && !is_segment(value) {
            result.error(
                FieldKey::Prefix(slot),
                Issue::new(IssueKind::Format, LOWER_MESSAGE),
            );
        }
    }

    for def in subject.schema.fields {
        let value = subject.state.values.value(def.id).trim();
        if value.is_empty() {
            continue;
        }
        let (ok, message) = if allows_mixed_case(framework, def.id) {
            (mixed().is_some_and(|re| re.is_match(value)), MIXED_MESSAGE)
        } else {
            (is_segment(value), LOWER_MESSAGE)
        };
        if !ok {
            result.error(FieldKey::Field(def.id), Issue::new(IssueKind::Format, message));
        }
    }

    if let Some(bad) = subject.state.modifiers.iter().find(|m| !is_segment(m)) {
        result.error(
            FieldKey::Modifiers,
            Issue::new(IssueKind::Format, format!("Modifier '{bad}': {LOWER_MESSAGE}")),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_pattern() {
        assert!(is_segment("background-color"));
        assert!(is_segment("500"));
        assert!(!is_segment("Background"));
        assert!(!is_segment("a_b"));
        assert!(!is_segment("a b"));
        assert!(!is_segment(""));
    }

    #[test]
    fn mixed_case_only_for_primitive_property() {
        assert!(allows_mixed_case(Framework::Primitive, FieldId::Property));
        assert!(!allows_mixed_case(Framework::Component, FieldId::Property));
        assert!(!allows_mixed_case(Framework::Primitive, FieldId::Identifier));
    }
}
