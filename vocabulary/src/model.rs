//! Core vocabulary model types.
//!
//! These types represent the token-naming vocabulary as typed Rust data. All
//! term text is `'static`; lists are built once as owned `Vec`s and referenced
//! via borrows. The top-level entry point is
//! [`Vocabulary::full()`](crate::Vocabulary::full).

use std::fmt;

/// One of the three token-naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Framework {
    /// Raw design values: `color/gray/500`, `dimension/space/neg-4`.
    Primitive,
    /// Intent-bearing aliases: `text/body/primary`.
    Semantic,
    /// Component-scoped tokens: `button/container/background-color`.
    Component,
}

impl Framework {
    /// All frameworks, in tab order.
    pub const ALL: [Framework; 3] = [
        Framework::Primitive,
        Framework::Semantic,
        Framework::Component,
    ];

    /// Returns the lowercase identifier used in serialized data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Framework::Primitive => "primitive",
            Framework::Semantic => "semantic",
            Framework::Component => "component",
        }
    }

    /// Parses a framework from its identifier (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Position of this framework in [`Framework::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Framework::Primitive => 0,
            Framework::Semantic => 1,
            Framework::Component => 2,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a framework field.
///
/// The same identifier may appear in more than one framework (`property`,
/// `variant`, `state`, `context`); its vocabulary is always resolved per
/// framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldId {
    /// Primitive token type, or the styled property of a component part.
    Property,
    /// Primitive sub-family (hue, dimension kind, font stack).
    Group,
    /// Primitive scale step or enumerated value.
    Identifier,
    /// Semantic role.
    Role,
    /// Semantic element within a role.
    Element,
    /// Intent variant.
    Variant,
    /// Semantic emphasis level.
    Emphasis,
    /// Interaction state.
    State,
    /// Rendering context.
    Context,
    /// Component name.
    Component,
    /// Component part.
    Part,
}

impl FieldId {
    /// Every field identifier.
    pub const ALL: [FieldId; 11] = [
        FieldId::Property,
        FieldId::Group,
        FieldId::Identifier,
        FieldId::Role,
        FieldId::Element,
        FieldId::Variant,
        FieldId::Emphasis,
        FieldId::State,
        FieldId::Context,
        FieldId::Component,
        FieldId::Part,
    ];

    /// Returns the identifier used as the field key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Property => "property",
            FieldId::Group => "group",
            FieldId::Identifier => "identifier",
            FieldId::Role => "role",
            FieldId::Element => "element",
            FieldId::Variant => "variant",
            FieldId::Emphasis => "emphasis",
            FieldId::State => "state",
            FieldId::Context => "context",
            FieldId::Component => "component",
            FieldId::Part => "part",
        }
    }

    /// Parses a field identifier (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional leading segment group, always emitted in `system → theme → domain` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrefixSlot {
    /// Design-system prefix (`ds`, `acme`).
    System,
    /// Theme prefix (`light`, `dark`).
    Theme,
    /// Product-domain prefix (`marketing`, `admin`).
    Domain,
}

impl PrefixSlot {
    /// All prefix slots in emission order.
    pub const ALL: [PrefixSlot; 3] = [PrefixSlot::System, PrefixSlot::Theme, PrefixSlot::Domain];

    /// Returns the slot identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixSlot::System => "system",
            PrefixSlot::Theme => "theme",
            PrefixSlot::Domain => "domain",
        }
    }

    /// Parses a slot identifier (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Position of this slot in [`PrefixSlot::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            PrefixSlot::System => 0,
            PrefixSlot::Theme => 1,
            PrefixSlot::Domain => 2,
        }
    }
}

impl fmt::Display for PrefixSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An allowed vocabulary entry.
///
/// Only `value` ever reaches a formatted token name; `label` and
/// `description` are presentation aids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Term {
    /// Canonical segment text.
    pub value: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Optional longer description.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<&'static str>,
}

impl Term {
    /// A term without a description.
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            description: None,
        }
    }

    /// A term with a description.
    #[must_use]
    pub const fn described(
        value: &'static str,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            value,
            label,
            description: Some(description),
        }
    }
}

/// A term list for one field, applicable when every `when` condition holds.
///
/// An empty `when` makes the list the unconditional default for the field.
#[derive(Debug, Clone)]
pub struct TermList {
    /// The field this list supplies options for.
    pub field: FieldId,
    /// Upstream `(field, value)` conditions.
    pub when: &'static [(FieldId, &'static str)],
    /// Allowed terms, in presentation order.
    pub terms: Vec<Term>,
}

impl TermList {
    /// Returns true if every condition is satisfied by `values`.
    #[must_use]
    pub fn applies(&self, values: &[(FieldId, &str)]) -> bool {
        self.when.iter().all(|(field, expected)| {
            values
                .iter()
                .any(|(f, actual)| f == field && actual == expected)
        })
    }
}

/// Shape rule a primitive identifier must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IdentifierShape {
    /// Digits only: `500`.
    Numeric,
    /// Digits with an optional `neg-` prefix: `neg-4`.
    SignedNumeric,
    /// Color step with an optional alpha suffix in `[0, 100]`: `500-a20`.
    ColorStep,
    /// Closed-set membership in the identifier terms for the property and group.
    Enumerated,
}

impl IdentifierShape {
    /// Human-readable description used in validation messages.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            IdentifierShape::Numeric => "a number (e.g. 400)",
            IdentifierShape::SignedNumeric => "a number, optionally prefixed with 'neg-' (e.g. neg-4)",
            IdentifierShape::ColorStep => "a step with an optional alpha suffix (e.g. 500 or 500-a20)",
            IdentifierShape::Enumerated => "one of the listed values",
        }
    }
}

/// A supported primitive property and its identifier rules.
#[derive(Debug, Clone)]
pub struct PrimitiveProperty {
    /// The property term; its value may be mixed case (`fontFamily`).
    pub term: Term,
    /// Legal groups; empty when the property is ungrouped.
    pub groups: &'static [Term],
    /// Identifier shape when no group override applies.
    pub shape: IdentifierShape,
    /// Per-group identifier shape overrides.
    pub group_shapes: &'static [(&'static str, IdentifierShape)],
}

impl PrimitiveProperty {
    /// Returns true if the property requires a group.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Returns true if `group` is legal for this property.
    #[must_use]
    pub fn allows_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g.value == group)
    }

    /// Identifier shape for the given group.
    #[must_use]
    pub fn shape_for(&self, group: &str) -> IdentifierShape {
        self.group_shapes
            .iter()
            .find(|(g, _)| *g == group)
            .map_or(self.shape, |(_, shape)| *shape)
    }
}

/// The vocabulary of one framework.
#[derive(Debug, Clone)]
pub struct FrameworkModule {
    /// Which framework this module describes.
    pub framework: Framework,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the framework.
    pub comment: &'static str,
    /// All term lists, keyed by field and upstream values.
    pub lists: Vec<TermList>,
    /// Primitive property specs (empty for other frameworks).
    pub properties: Vec<PrimitiveProperty>,
}

/// Suggested terms for one prefix slot.
#[derive(Debug, Clone)]
pub struct PrefixTerms {
    /// The slot these terms belong to.
    pub slot: PrefixSlot,
    /// Suggested values; prefixes also accept free text.
    pub terms: Vec<Term>,
}

/// A named, ready-made composition.
#[derive(Debug, Clone)]
pub struct Preset {
    /// Display label, also used as the lookup key.
    pub label: &'static str,
    /// Framework the preset fills.
    pub framework: Framework,
    /// Field values, in declaration order.
    pub fields: &'static [(FieldId, &'static str)],
    /// Modifier segments.
    pub modifiers: &'static [&'static str],
}

/// The complete token-naming vocabulary.
#[derive(Debug)]
pub struct Vocabulary {
    /// Vocabulary version (e.g., `"1.0.0"`).
    pub version: &'static str,
    /// One module per framework, in [`Framework::ALL`] order.
    pub frameworks: Vec<FrameworkModule>,
    /// Free suffix modifiers shared by all frameworks.
    pub modifiers: Vec<Term>,
    /// Prefix suggestions, in [`PrefixSlot::ALL`] order.
    pub prefixes: Vec<PrefixTerms>,
    /// Ready-made compositions.
    pub presets: Vec<Preset>,
}

impl Vocabulary {
    /// Looks up the module of a framework.
    #[must_use]
    pub fn module(&self, framework: Framework) -> Option<&FrameworkModule> {
        self.frameworks.iter().find(|m| m.framework == framework)
    }

    /// Resolves the allowed terms for `field` given the upstream values.
    ///
    /// When several lists apply, the one with the most conditions wins.
    /// Returns an empty list when nothing applies.
    #[must_use]
    pub fn terms(&self, framework: Framework, field: FieldId, values: &[(FieldId, &str)]) -> Vec<Term> {
        self.module(framework)
            .into_iter()
            .flat_map(|m| m.lists.iter())
            .filter(|list| list.field == field && list.applies(values))
            .max_by_key(|list| list.when.len())
            .map(|list| list.terms.clone())
            .unwrap_or_default()
    }

    /// Looks up a primitive property by its exact value.
    #[must_use]
    pub fn primitive_property(&self, value: &str) -> Option<&PrimitiveProperty> {
        self.module(Framework::Primitive)?
            .properties
            .iter()
            .find(|p| p.term.value == value)
    }

    /// Suggested terms for a prefix slot.
    #[must_use]
    pub fn prefix_terms(&self, slot: PrefixSlot) -> &[Term] {
        self.prefixes
            .iter()
            .find(|p| p.slot == slot)
            .map(|p| p.terms.as_slice())
            .unwrap_or(&[])
    }

    /// Returns true if `value` is a known modifier.
    #[must_use]
    pub fn is_modifier(&self, value: &str) -> bool {
        self.modifiers.iter().any(|m| m.value == value)
    }

    /// Presets for one framework.
    pub fn presets_for(&self, framework: Framework) -> impl Iterator<Item = &Preset> {
        self.presets.iter().filter(move |p| p.framework == framework)
    }

    /// Looks up a preset by framework and label.
    #[must_use]
    pub fn find_preset(&self, framework: Framework, label: &str) -> Option<&Preset> {
        self.presets_for(framework).find(|p| p.label == label)
    }

    /// Total number of terms across every list, modifier and prefix.
    #[must_use]
    pub fn term_count(&self) -> usize {
        let lists: usize = self
            .frameworks
            .iter()
            .flat_map(|m| m.lists.iter())
            .map(|l| l.terms.len())
            .sum();
        let prefixes: usize = self.prefixes.iter().map(|p| p.terms.len()).sum();
        lists + prefixes + self.modifiers.len()
    }
}
