//! Design-token naming vocabulary encoded as typed Rust data.
//!
//! The `token-namer-vocabulary` crate provides the controlled vocabularies
//! behind the three naming frameworks (primitive, semantic, component) as
//! static Rust data structures: term lists keyed by upstream field values,
//! primitive identifier shape rules, suffix modifiers, prefix suggestions
//! and presets. A JSON serializer is available behind the `serializers`
//! feature.
//!
//! # Entry Point
//!
//! ```
//! use token_namer_vocabulary::{FieldId, Framework, Vocabulary};
//!
//! let vocabulary = Vocabulary::full();
//! let hues = vocabulary.terms(
//!     Framework::Primitive,
//!     FieldId::Group,
//!     &[(FieldId::Property, "color")],
//! );
//! assert!(hues.iter().any(|t| t.value == "gray"));
//! ```
//!
//! # Serialization
//!
//! ```
//! let vocabulary = token_namer_vocabulary::Vocabulary::full();
//! let json = token_namer_vocabulary::serializer::json::to_json(vocabulary);
//! assert_eq!(json["frameworks"].as_array().map(Vec::len), Some(3));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod frameworks;
pub mod model;
pub mod presets;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use model::{
    FieldId, Framework, FrameworkModule, IdentifierShape, PrefixSlot, PrefixTerms, Preset,
    PrimitiveProperty, Term, TermList, Vocabulary,
};

impl Vocabulary {
    /// Returns the complete vocabulary with every framework module.
    ///
    /// Modules are assembled in [`Framework::ALL`] order so that
    /// `frameworks[framework.index()]` is always the matching module.
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary {
            version: "1.0.0",
            frameworks: vec![
                frameworks::primitive::module(),
                frameworks::semantic::module(),
                frameworks::component::module(),
            ],
            modifiers: frameworks::shared::modifiers(),
            prefixes: frameworks::shared::prefixes(),
            presets: presets::presets(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_modules_in_tab_order() {
        let vocabulary = Vocabulary::full();
        for framework in Framework::ALL {
            assert_eq!(vocabulary.frameworks[framework.index()].framework, framework);
        }
    }

    #[test]
    fn prefixes_in_slot_order() {
        let slots: Vec<PrefixSlot> = Vocabulary::full().prefixes.iter().map(|p| p.slot).collect();
        assert_eq!(slots, PrefixSlot::ALL.to_vec());
    }

    #[test]
    fn term_values_unique_per_list() {
        let mut seen = std::collections::HashSet::new();
        for module in &Vocabulary::full().frameworks {
            for list in &module.lists {
                seen.clear();
                for term in &list.terms {
                    assert!(
                        seen.insert(term.value),
                        "Duplicate term {} in {} {} list",
                        term.value,
                        module.framework,
                        list.field
                    );
                }
            }
        }
    }

    #[test]
    fn grouped_properties_are_the_fixed_set() {
        let grouped: Vec<&str> = Vocabulary::full()
            .module(Framework::Primitive)
            .map(|m| {
                m.properties
                    .iter()
                    .filter(|p| p.is_grouped())
                    .map(|p| p.term.value)
                    .collect()
            })
            .unwrap_or_default();
        assert_eq!(grouped, vec!["color", "dimension", "shadow", "fontFamily"]);
    }

    #[test]
    fn group_lists_match_property_groups() {
        let vocabulary = Vocabulary::full();
        let Some(module) = vocabulary.module(Framework::Primitive) else {
            return;
        };
        for property in module.properties.iter().filter(|p| p.is_grouped()) {
            let terms = vocabulary.terms(
                Framework::Primitive,
                FieldId::Group,
                &[(FieldId::Property, property.term.value)],
            );
            assert_eq!(terms, property.groups.to_vec(), "{}", property.term.value);
        }
    }

    #[test]
    fn most_specific_list_wins() {
        let vocabulary = Vocabulary::full();
        let sans = vocabulary.terms(
            Framework::Primitive,
            FieldId::Identifier,
            &[(FieldId::Property, "fontFamily"), (FieldId::Group, "sans")],
        );
        assert!(sans.iter().any(|t| t.value == "inter"));
        assert!(!sans.iter().any(|t| t.value == "georgia"));
    }

    #[test]
    fn unmatched_lookup_is_empty() {
        let vocabulary = Vocabulary::full();
        let none = vocabulary.terms(
            Framework::Semantic,
            FieldId::Element,
            &[(FieldId::Role, "unknown")],
        );
        assert!(none.is_empty());
        let ungrouped = vocabulary.terms(
            Framework::Primitive,
            FieldId::Group,
            &[(FieldId::Property, "opacity")],
        );
        assert!(ungrouped.is_empty());
    }

    #[test]
    fn space_allows_negative_identifiers() {
        let vocabulary = Vocabulary::full();
        let dimension = vocabulary.primitive_property("dimension");
        assert_eq!(
            dimension.map(|p| p.shape_for("space")),
            Some(IdentifierShape::SignedNumeric)
        );
        assert_eq!(
            dimension.map(|p| p.shape_for("size")),
            Some(IdentifierShape::Numeric)
        );
    }

    #[test]
    fn presets_resolve_against_vocabulary() {
        let vocabulary = Vocabulary::full();
        for preset in &vocabulary.presets {
            for (index, (field, value)) in preset.fields.iter().enumerate() {
                let upstream = &preset.fields[..index];
                let terms = vocabulary.terms(preset.framework, *field, upstream);
                assert!(
                    terms.iter().any(|t| t.value == *value),
                    "Preset {} uses unknown {} '{}'",
                    preset.label,
                    field,
                    value
                );
            }
            for modifier in preset.modifiers {
                assert!(vocabulary.is_modifier(modifier), "{}", modifier);
            }
        }
    }

    #[test]
    fn identifiers_round_trip_through_names() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_name(field.as_str()), Some(field));
        }
        for framework in Framework::ALL {
            assert_eq!(Framework::from_name(framework.as_str()), Some(framework));
        }
        assert_eq!(PrefixSlot::from_name("Theme"), Some(PrefixSlot::Theme));
    }
}
