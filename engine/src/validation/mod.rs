//! Validator: required-ness, character set, vocabulary membership,
//! cross-field consistency and ordering.
//!
//! Every rule runs on every call; nothing short-circuits, so all problems
//! can be reported together. Each rule module exposes a `validate` function
//! returning a [`ValidationResult`] that [`validate`] merges in rule order.
//!
//! # Entry Point
//!
//! ```
//! use token_namer_engine::form::FormState;
//! use token_namer_engine::schema::schema;
//! use token_namer_engine::validation;
//! use token_namer_vocabulary::{Framework, Vocabulary};
//!
//! let state = FormState::new(Framework::Semantic);
//! let visible = schema(Framework::Semantic).visible_ids(&state.values);
//! let result = validation::validate(&state, &visible, Vocabulary::full());
//! assert_eq!(result.errors.len(), 2);
//! ```

pub mod charset;
pub mod consistency;
pub mod ordering;
pub mod primitive;
pub mod report;
pub mod required;

use token_namer_vocabulary::FieldId;

use crate::form::FormState;
use crate::schema::{schema, Schema, VocabularyProvider};

pub use report::{Issue, IssueKind, ValidationResult};

/// Everything a rule needs to inspect one form.
pub struct Subject<'a> {
    /// Schema of the form's framework.
    pub schema: &'static Schema,
    /// The form being validated.
    pub state: &'a FormState,
    /// Fields currently visible, in declaration order.
    pub visible: &'a [FieldId],
    /// Vocabulary used for membership checks.
    pub provider: &'a dyn VocabularyProvider,
}

impl Subject<'_> {
    /// Visible fields with their trimmed values, in declaration order.
    pub fn visible_values(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        self.schema
            .fields
            .iter()
            .filter(|def| self.visible.contains(&def.id))
            .map(|def| (def.id, self.state.values.value(def.id).trim()))
    }
}

/// Runs every rule against `state`.
///
/// Rules run in this order:
/// 1. Required-ness of visible fields
/// 2. Character set of fields, prefixes and modifiers
/// 3. Vocabulary membership (primitive framework)
/// 4. Cross-field consistency of modifiers and states
/// 5. Ordering of filled fields
pub fn validate(
    state: &FormState,
    visible: &[FieldId],
    provider: &dyn VocabularyProvider,
) -> ValidationResult {
    let subject = Subject {
        schema: schema(state.framework()),
        state,
        visible,
        provider,
    };
    let mut result = ValidationResult::new();

    // 1. Required-ness
    result.extend(required::validate(&subject));

    // 2. Character set
    result.extend(charset::validate(&subject));

    // 3. Vocabulary membership
    result.extend(primitive::validate(&subject));

    // 4. Consistency
    result.extend(consistency::validate(&subject));

    // 5. Ordering
    result.extend(ordering::validate(&subject));

    result
}
