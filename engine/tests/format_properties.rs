//! Property-based tests for name formatting.
//!
//! Formatting is a pure function of segments and style; these check the
//! delimiter rules and modifier order independence for arbitrary input.

use proptest::prelude::*;
use token_namer_engine::form::{FieldValues, FormState, SemanticFields};
use token_namer_engine::{compose_segments, format_name, NameStyle};

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,7}"
}

const MODIFIERS: [&str; 6] = ["hover", "active", "focus", "muted", "selected", "inverse"];

fn text_body(modifiers: &[&str]) -> FormState {
    let mut state = FormState::new(token_namer_vocabulary::Framework::Semantic);
    state.values = FieldValues::Semantic(SemanticFields {
        role: "text".to_owned(),
        element: "body".to_owned(),
        ..SemanticFields::default()
    });
    for modifier in modifiers {
        state.modifiers.insert((*modifier).to_owned());
    }
    state
}

// =============================================================================
// Delimiter Styles
// =============================================================================

proptest! {
    /// Blank segments never contribute to the output.
    #[test]
    fn prop_blank_segments_format_to_empty(blanks in prop::collection::vec(" {0,3}", 0..6)) {
        for style in NameStyle::ALL {
            prop_assert_eq!(format_name(&blanks, style), "");
        }
    }

    /// underscore = slash with '/' replaced by '_' and upper-cased.
    #[test]
    fn prop_underscore_is_upper_slash(segments in prop::collection::vec(segment(), 1..6)) {
        let slash = format_name(&segments, NameStyle::Slash);
        let underscore = format_name(&segments, NameStyle::Underscore);
        prop_assert_eq!(underscore, slash.replace('/', "_").to_uppercase());
    }

    /// Only the underscore style changes case.
    #[test]
    fn prop_dot_keeps_case(segments in prop::collection::vec(segment(), 1..6)) {
        let dot = format_name(&segments, NameStyle::Dot);
        prop_assert_eq!(dot, segments.join("."));
    }

    /// Same input, same output.
    #[test]
    fn prop_formatting_is_deterministic(segments in prop::collection::vec(segment(), 0..6)) {
        for style in NameStyle::ALL {
            prop_assert_eq!(format_name(&segments, style), format_name(&segments, style));
        }
    }
}

// =============================================================================
// Modifier Order
// =============================================================================

proptest! {
    /// Selection order of modifiers never changes the composed name.
    #[test]
    fn prop_modifier_order_is_irrelevant(
        picked in Just(MODIFIERS.to_vec()).prop_shuffle().prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..=len)
        }),
    ) {
        let (shuffled, count) = picked;
        let chosen = &shuffled[..count];
        let mut sorted = chosen.to_vec();
        sorted.sort_unstable();
        let reversed: Vec<&str> = chosen.iter().rev().copied().collect();

        let a = compose_segments(&text_body(chosen));
        let b = compose_segments(&text_body(&reversed));
        let c = compose_segments(&text_body(&sorted));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
        let expected: Vec<String> = sorted.iter().map(|s| (*s).to_owned()).collect();
        prop_assert_eq!(&a[2..], expected.as_slice());
    }
}

#[test]
fn empty_segment_list_is_not_ready() {
    let empty: Vec<String> = Vec::new();
    for style in NameStyle::ALL {
        assert_eq!(format_name(&empty, style), "");
    }
}
