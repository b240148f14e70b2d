//! Validation report types: issue kinds, issues and the per-field result.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::form::FieldKey;

/// Rule class that produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// A required, visible field is empty.
    Required,
    /// A value contains characters outside its allowed set.
    Format,
    /// A value is not in the vocabulary or does not fit its shape.
    Vocabulary,
    /// Mutually exclusive values were combined.
    Conflict,
    /// An uncommon but allowed combination.
    Unusual,
    /// A later field is filled while an earlier one is empty.
    Ordering,
}

/// A single message tagged to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Rule class.
    pub kind: IssueKind,
    /// Human-readable message.
    pub message: String,
}

impl Issue {
    /// Creates an issue.
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Errors and warnings keyed by field.
///
/// Each key holds at most one message per map: the first rule to report on
/// a field wins, so messages follow rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Blocking problems.
    pub errors: BTreeMap<FieldKey, Issue>,
    /// Advisory notes; never block.
    pub warnings: BTreeMap<FieldKey, Issue>,
}

impl ValidationResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error unless `key` already has one.
    pub fn error(&mut self, key: FieldKey, issue: Issue) {
        self.errors.entry(key).or_insert(issue);
    }

    /// Records a warning unless `key` already has one.
    pub fn warn(&mut self, key: FieldKey, issue: Issue) {
        self.warnings.entry(key).or_insert(issue);
    }

    /// Merges another result into this one, keeping existing messages.
    pub fn extend(&mut self, other: ValidationResult) {
        for (key, issue) in other.errors {
            self.error(key, issue);
        }
        for (key, issue) in other.warnings {
            self.warn(key, issue);
        }
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are no errors and the composed name is non-empty.
    #[must_use]
    pub fn copy_ready(&self, name: &str) -> bool {
        self.is_valid() && !name.is_empty()
    }

    /// First error in presentation order.
    ///
    /// `order` lists keys as they appear on screen; errors on keys outside
    /// `order` come last.
    #[must_use]
    pub fn headline(&self, order: &[FieldKey]) -> Option<(FieldKey, &Issue)> {
        first_in_order(&self.errors, order)
    }

    /// First warning in presentation order.
    #[must_use]
    pub fn headline_warning(&self, order: &[FieldKey]) -> Option<(FieldKey, &Issue)> {
        first_in_order(&self.warnings, order)
    }
}

fn first_in_order<'a>(
    issues: &'a BTreeMap<FieldKey, Issue>,
    order: &[FieldKey],
) -> Option<(FieldKey, &'a Issue)> {
    order
        .iter()
        .find_map(|key| issues.get(key).map(|issue| (*key, issue)))
        .or_else(|| issues.iter().next().map(|(key, issue)| (*key, issue)))
}
