//! Vocabulary membership for the primitive framework.
//!
//! Once `property` is set it must be a supported property; `group` must be
//! legal for that property; `identifier` must fit the shape the property and
//! group select (numeric, signed numeric, color step with alpha, or a closed
//! set of enumerated values).

use token_namer_vocabulary::{FieldId, Framework, IdentifierShape};

use crate::form::FieldKey;
use crate::validation::report::{Issue, IssueKind, ValidationResult};
use crate::validation::Subject;

const MAX_ALPHA: u32 = 100;

fn digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `identifier` satisfies `shape`.
///
/// `Enumerated` cannot be decided from the text alone and always returns
/// false here; membership is checked against the resolved term list.
#[must_use]
pub fn fits_shape(shape: IdentifierShape, identifier: &str) -> bool {
    match shape {
        IdentifierShape::Numeric => digits(identifier),
        IdentifierShape::SignedNumeric => {
            digits(identifier.strip_prefix("neg-").unwrap_or(identifier))
        }
        IdentifierShape::ColorStep => match identifier.split_once("-a") {
            None => digits(identifier),
            Some((step, alpha)) => {
                digits(step)
                    && digits(alpha)
                    && alpha.len() <= 3
                    && alpha.parse::<u32>().is_ok_and(|a| a <= MAX_ALPHA)
            }
        },
        IdentifierShape::Enumerated => false,
    }
}

/// Checks property, group and identifier against the vocabulary.
pub fn validate(subject: &Subject<'_>) -> ValidationResult {
    let mut result = ValidationResult::new();
    if subject.state.framework() != Framework::Primitive {
        return result;
    }
    let values = &subject.state.values;
    let provider = subject.provider;

    let property = values.value(FieldId::Property).trim();
    if property.is_empty() {
        return result;
    }
    let supported = provider
        .get_terms(Framework::Primitive, FieldId::Property, &[])
        .iter()
        .any(|t| t.value == property);
    if !supported {
        result.error(
            FieldKey::Field(FieldId::Property),
            Issue::new(
                IssueKind::Vocabulary,
                format!("'{property}' is not a supported property."),
            ),
        );
        return result;
    }

    let grouped = subject.visible.contains(&FieldId::Group);
    let group = if grouped {
        values.value(FieldId::Group).trim()
    } else {
        ""
    };
    if grouped && !group.is_empty() {
        let legal = provider
            .get_terms(Framework::Primitive, FieldId::Group, &[(FieldId::Property, property)])
            .iter()
            .any(|t| t.value == group);
        if !legal {
            result.error(
                FieldKey::Field(FieldId::Group),
                Issue::new(
                    IssueKind::Vocabulary,
                    format!("'{group}' is not a valid group for {property}."),
                ),
            );
            return result;
        }
    }

    let identifier = values.value(FieldId::Identifier).trim();
    if identifier.is_empty() || !subject.visible.contains(&FieldId::Identifier) {
        return result;
    }
    // The shape of a grouped identifier is unknown until the group is chosen.
    if grouped && group.is_empty() {
        return result;
    }
    let Some(shape) = provider.identifier_shape(property, group) else {
        return result;
    };
    let ok = match shape {
        IdentifierShape::Enumerated => provider
            .get_terms(
                Framework::Primitive,
                FieldId::Identifier,
                &[(FieldId::Property, property), (FieldId::Group, group)],
            )
            .iter()
            .any(|t| t.value == identifier),
        shape => fits_shape(shape, identifier),
    };
    if !ok {
        result.error(
            FieldKey::Field(FieldId::Identifier),
            Issue::new(
                IssueKind::Vocabulary,
                format!("Identifier must be {}.", shape.describe()),
            ),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_steps() {
        assert!(fits_shape(IdentifierShape::ColorStep, "500"));
        assert!(fits_shape(IdentifierShape::ColorStep, "500-a20"));
        assert!(fits_shape(IdentifierShape::ColorStep, "500-a0"));
        assert!(fits_shape(IdentifierShape::ColorStep, "500-a100"));
        assert!(!fits_shape(IdentifierShape::ColorStep, "500-a150"));
        assert!(!fits_shape(IdentifierShape::ColorStep, "500-a1000"));
        assert!(!fits_shape(IdentifierShape::ColorStep, "500-a"));
        assert!(!fits_shape(IdentifierShape::ColorStep, "abc"));
        assert!(!fits_shape(IdentifierShape::ColorStep, "-a20"));
    }

    #[test]
    fn signed_numbers() {
        assert!(fits_shape(IdentifierShape::SignedNumeric, "neg-4"));
        assert!(fits_shape(IdentifierShape::SignedNumeric, "16"));
        assert!(!fits_shape(IdentifierShape::SignedNumeric, "neg-"));
        assert!(!fits_shape(IdentifierShape::SignedNumeric, "-4"));
        assert!(!fits_shape(IdentifierShape::Numeric, "neg-4"));
    }
}
