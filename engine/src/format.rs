//! Name formatter: joins ordered segments with a delimiter style.

use std::fmt;

use serde::{Deserialize, Serialize};
use token_namer_vocabulary::PrefixSlot;

use crate::form::FormState;
use crate::schema::schema;

/// Delimiter style of a composed name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// `color/gray/500`
    #[default]
    Slash,
    /// `color.gray.500`
    Dot,
    /// `COLOR_GRAY_500`; the whole result is upper-cased.
    Underscore,
}

impl NameStyle {
    /// All styles, in menu order.
    pub const ALL: [NameStyle; 3] = [NameStyle::Slash, NameStyle::Dot, NameStyle::Underscore];

    /// Segment delimiter.
    #[must_use]
    pub fn separator(self) -> &'static str {
        match self {
            NameStyle::Slash => "/",
            NameStyle::Dot => ".",
            NameStyle::Underscore => "_",
        }
    }

    /// Preference value (`slash`, `dot`, `underscore`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NameStyle::Slash => "slash",
            NameStyle::Dot => "dot",
            NameStyle::Underscore => "underscore",
        }
    }

    /// Parses a preference value, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins the non-empty segments with the style's delimiter.
///
/// Pure and total: an empty or all-blank input yields `""`.
#[must_use]
pub fn format_name<S: AsRef<str>>(segments: &[S], style: NameStyle) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(style.separator());
    match style {
        NameStyle::Underscore => joined.to_uppercase(),
        NameStyle::Slash | NameStyle::Dot => joined,
    }
}

/// Ordered segments of a form: prefixes (`system → theme → domain`), visible
/// fields in declaration order, then the sorted modifier set.
#[must_use]
pub fn compose_segments(state: &FormState) -> Vec<String> {
    let schema = schema(state.framework());
    let prefixes = PrefixSlot::ALL
        .into_iter()
        .filter_map(|slot| state.prefixes.get(slot));
    let fields = schema
        .fields
        .iter()
        .filter(|def| def.is_visible(&state.values))
        .map(|def| state.values.value(def.id));
    let modifiers = state.modifiers.iter().map(String::as_str);

    prefixes
        .chain(fields)
        .chain(modifiers)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
