//! Form state: current field values, prefixes, modifiers and interaction flags.
//!
//! Every framework owns an independent [`FormState`]. Field values are held
//! in one struct per framework ([`FieldValues`]) rather than an open map, so
//! a field that does not belong to a framework cannot be stored at all.
//! An empty string means "unset".

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use token_namer_vocabulary::{FieldId, Framework, PrefixSlot};

/// Field values of the primitive framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveFields {
    /// Token type, e.g. `color` or `fontFamily`.
    pub property: String,
    /// Sub-family, only meaningful for grouped properties.
    pub group: String,
    /// Scale step or enumerated value.
    pub identifier: String,
}

/// Field values of the semantic framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticFields {
    /// Semantic role.
    pub role: String,
    /// Element within the role.
    pub element: String,
    /// Intent variant.
    pub variant: String,
    /// Emphasis level.
    pub emphasis: String,
    /// Interaction state.
    pub state: String,
    /// Rendering context.
    pub context: String,
}

/// Field values of the component framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentFields {
    /// Component name.
    pub component: String,
    /// Component part.
    pub part: String,
    /// Styled property.
    pub property: String,
    /// Intent variant.
    pub variant: String,
    /// Interaction state.
    pub state: String,
    /// Rendering context.
    pub context: String,
}

/// Field values of one framework, tagged by framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "framework", rename_all = "lowercase")]
pub enum FieldValues {
    /// Primitive fields.
    Primitive(PrimitiveFields),
    /// Semantic fields.
    Semantic(SemanticFields),
    /// Component fields.
    Component(ComponentFields),
}

impl FieldValues {
    /// All-empty values for a framework.
    #[must_use]
    pub fn empty(framework: Framework) -> Self {
        match framework {
            Framework::Primitive => FieldValues::Primitive(PrimitiveFields::default()),
            Framework::Semantic => FieldValues::Semantic(SemanticFields::default()),
            Framework::Component => FieldValues::Component(ComponentFields::default()),
        }
    }

    /// The framework these values belong to.
    #[must_use]
    pub fn framework(&self) -> Framework {
        match self {
            FieldValues::Primitive(_) => Framework::Primitive,
            FieldValues::Semantic(_) => Framework::Semantic,
            FieldValues::Component(_) => Framework::Component,
        }
    }

    /// Current value of `field`, or `None` if the framework has no such field.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&str> {
        let slot = match (self, field) {
            (FieldValues::Primitive(f), FieldId::Property) => &f.property,
            (FieldValues::Primitive(f), FieldId::Group) => &f.group,
            (FieldValues::Primitive(f), FieldId::Identifier) => &f.identifier,
            (FieldValues::Semantic(f), FieldId::Role) => &f.role,
            (FieldValues::Semantic(f), FieldId::Element) => &f.element,
            (FieldValues::Semantic(f), FieldId::Variant) => &f.variant,
            (FieldValues::Semantic(f), FieldId::Emphasis) => &f.emphasis,
            (FieldValues::Semantic(f), FieldId::State) => &f.state,
            (FieldValues::Semantic(f), FieldId::Context) => &f.context,
            (FieldValues::Component(f), FieldId::Component) => &f.component,
            (FieldValues::Component(f), FieldId::Part) => &f.part,
            (FieldValues::Component(f), FieldId::Property) => &f.property,
            (FieldValues::Component(f), FieldId::Variant) => &f.variant,
            (FieldValues::Component(f), FieldId::State) => &f.state,
            (FieldValues::Component(f), FieldId::Context) => &f.context,
            _ => return None,
        };
        Some(slot.as_str())
    }

    /// Current value of `field`, with unknown fields reading as empty.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.get(field).unwrap_or("")
    }

    pub(crate) fn slot_mut(&mut self, field: FieldId) -> Option<&mut String> {
        let slot = match (self, field) {
            (FieldValues::Primitive(f), FieldId::Property) => &mut f.property,
            (FieldValues::Primitive(f), FieldId::Group) => &mut f.group,
            (FieldValues::Primitive(f), FieldId::Identifier) => &mut f.identifier,
            (FieldValues::Semantic(f), FieldId::Role) => &mut f.role,
            (FieldValues::Semantic(f), FieldId::Element) => &mut f.element,
            (FieldValues::Semantic(f), FieldId::Variant) => &mut f.variant,
            (FieldValues::Semantic(f), FieldId::Emphasis) => &mut f.emphasis,
            (FieldValues::Semantic(f), FieldId::State) => &mut f.state,
            (FieldValues::Semantic(f), FieldId::Context) => &mut f.context,
            (FieldValues::Component(f), FieldId::Component) => &mut f.component,
            (FieldValues::Component(f), FieldId::Part) => &mut f.part,
            (FieldValues::Component(f), FieldId::Property) => &mut f.property,
            (FieldValues::Component(f), FieldId::Variant) => &mut f.variant,
            (FieldValues::Component(f), FieldId::State) => &mut f.state,
            (FieldValues::Component(f), FieldId::Context) => &mut f.context,
            _ => return None,
        };
        Some(slot)
    }

    /// Returns true if every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FieldId::ALL
            .into_iter()
            .filter_map(|f| self.get(f))
            .all(str::is_empty)
    }
}

/// Optional leading segments. `None` means the slot was never added;
/// `Some("")` means it was added but not filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefixes {
    /// System prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Theme prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Domain prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Prefixes {
    /// Value of a slot, if the slot has been added.
    #[must_use]
    pub fn get(&self, slot: PrefixSlot) -> Option<&str> {
        match slot {
            PrefixSlot::System => self.system.as_deref(),
            PrefixSlot::Theme => self.theme.as_deref(),
            PrefixSlot::Domain => self.domain.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: PrefixSlot) -> &mut Option<String> {
        match slot {
            PrefixSlot::System => &mut self.system,
            PrefixSlot::Theme => &mut self.theme,
            PrefixSlot::Domain => &mut self.domain,
        }
    }

    /// Added slots with their values, in `system → theme → domain` order.
    pub fn added(&self) -> impl Iterator<Item = (PrefixSlot, &str)> + '_ {
        PrefixSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|value| (slot, value)))
    }
}

/// Complete in-progress input of one framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// Framework field values.
    pub values: FieldValues,
    /// Optional prefix segments.
    #[serde(default)]
    pub prefixes: Prefixes,
    /// Free suffix modifiers; a set, so always sorted and deduplicated.
    #[serde(default)]
    pub modifiers: BTreeSet<String>,
}

impl FormState {
    /// An empty form for `framework`.
    #[must_use]
    pub fn new(framework: Framework) -> Self {
        Self {
            values: FieldValues::empty(framework),
            prefixes: Prefixes::default(),
            modifiers: BTreeSet::new(),
        }
    }

    /// The framework this form belongs to.
    #[must_use]
    pub fn framework(&self) -> Framework {
        self.values.framework()
    }
}

/// Target of an interaction flag or a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    /// A prefix slot.
    Prefix(PrefixSlot),
    /// A framework field.
    Field(FieldId),
    /// The modifier bag as a whole.
    Modifiers,
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Prefix(slot) => write!(f, "prefix.{slot}"),
            FieldKey::Field(field) => write!(f, "{field}"),
            FieldKey::Modifiers => f.write_str("modifiers"),
        }
    }
}

impl Serialize for FieldKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Interaction tracking for one framework. Governs when messages are shown,
/// never whether the data is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Targets the user has committed (blurred) at least once.
    pub touched: BTreeSet<FieldKey>,
    /// Targets whose value the user has changed.
    pub dirty: BTreeSet<FieldKey>,
    /// Whether a copy was attempted.
    pub submitted: bool,
}

impl InteractionState {
    /// Returns true if a required-field message for `key` may be shown.
    #[must_use]
    pub fn reveals(&self, key: FieldKey) -> bool {
        self.submitted || self.touched.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_outside_the_framework_are_absent() {
        let values = FieldValues::empty(Framework::Primitive);
        assert_eq!(values.get(FieldId::Property), Some(""));
        assert_eq!(values.get(FieldId::Role), None);
        assert_eq!(values.value(FieldId::Role), "");
    }

    #[test]
    fn property_is_distinct_per_framework() {
        let mut component = FieldValues::empty(Framework::Component);
        if let Some(slot) = component.slot_mut(FieldId::Property) {
            *slot = "gap".to_owned();
        }
        assert_eq!(component.value(FieldId::Property), "gap");
        assert!(FieldValues::empty(Framework::Primitive).is_empty());
        assert!(!component.is_empty());
    }

    #[test]
    fn serialized_values_are_tagged() {
        let mut state = FormState::new(Framework::Semantic);
        if let Some(slot) = state.values.slot_mut(FieldId::Role) {
            *slot = "text".to_owned();
        }
        state.modifiers.insert("hover".to_owned());
        let json = serde_json::to_value(&state).unwrap_or_default();
        assert_eq!(json["values"]["framework"], "semantic");
        assert_eq!(json["values"]["role"], "text");
        assert_eq!(json["modifiers"][0], "hover");
        let back: FormState = serde_json::from_value(json).unwrap_or_else(|_| FormState::new(Framework::Primitive));
        assert_eq!(back, state);
    }

    #[test]
    fn prefixes_iterate_in_slot_order() {
        let prefixes = Prefixes {
            domain: Some("admin".to_owned()),
            system: Some("ds".to_owned()),
            theme: None,
        };
        let added: Vec<_> = prefixes.added().collect();
        assert_eq!(
            added,
            vec![(PrefixSlot::System, "ds"), (PrefixSlot::Domain, "admin")]
        );
    }

    #[test]
    fn field_keys_display_as_paths() {
        assert_eq!(FieldKey::Prefix(PrefixSlot::Theme).to_string(), "prefix.theme");
        assert_eq!(FieldKey::Field(FieldId::Part).to_string(), "part");
        assert_eq!(FieldKey::Modifiers.to_string(), "modifiers");
    }
}
