//! Field schema registry.
//!
//! Each framework has one static [`Schema`]: the ordered list of its field
//! definitions. Declaration order is the order fields appear in the composed
//! name, and every `depends_on` entry names a strictly earlier field, so the
//! dependency graph is a DAG and a single forward walk is a topological walk.

use token_namer_vocabulary::{FieldId, Framework, IdentifierShape, Term, Vocabulary};

use crate::error::EngineError;
use crate::form::FieldValues;

/// Primitive properties that take a `group` segment.
pub const GROUPED_PROPERTIES: [&str; 4] = ["color", "dimension", "shadow", "fontFamily"];

/// Read-only source of allowed terms.
///
/// Implementations must be pure: the engine calls this on every keystroke.
pub trait VocabularyProvider {
    /// Terms allowed for `field` given the upstream `(field, value)` pairs.
    fn get_terms(&self, framework: Framework, field: FieldId, upstream: &[(FieldId, &str)]) -> Vec<Term>;

    /// Shape rule of a primitive identifier, or `None` for unknown properties.
    fn identifier_shape(&self, property: &str, group: &str) -> Option<IdentifierShape>;
}

impl VocabularyProvider for Vocabulary {
    fn get_terms(&self, framework: Framework, field: FieldId, upstream: &[(FieldId, &str)]) -> Vec<Term> {
        self.terms(framework, field, upstream)
    }

    fn identifier_shape(&self, property: &str, group: &str) -> Option<IdentifierShape> {
        self.primitive_property(property).map(|p| p.shape_for(group))
    }
}

/// Static definition of one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDefinition {
    /// Field identifier, unique within the schema.
    pub id: FieldId,
    /// Display label.
    pub label: &'static str,
    /// Whether the field must be filled while it is visible.
    pub required: bool,
    /// Visibility predicate over the framework's current values.
    pub visible_when: fn(&FieldValues) -> bool,
    /// Earlier fields whose values select this field's options.
    pub depends_on: &'static [FieldId],
}

impl FieldDefinition {
    /// Returns true if the field is visible for `values`.
    #[must_use]
    pub fn is_visible(&self, values: &FieldValues) -> bool {
        (self.visible_when)(values)
    }

    /// Non-empty values of the fields this one depends on.
    #[must_use]
    pub fn upstream<'a>(&self, values: &'a FieldValues) -> Vec<(FieldId, &'a str)> {
        self.depends_on
            .iter()
            .map(|&id| (id, values.value(id)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Currently allowed terms for this field.
    pub fn options(
        &self,
        framework: Framework,
        values: &FieldValues,
        provider: &dyn VocabularyProvider,
    ) -> Vec<Term> {
        provider.get_terms(framework, self.id, &self.upstream(values))
    }
}

/// Ordered field definitions of one framework.
#[derive(Debug)]
pub struct Schema {
    /// Framework this schema belongs to.
    pub framework: Framework,
    /// Fields in declaration (and name) order.
    pub fields: &'static [FieldDefinition],
}

impl Schema {
    /// Looks up a field definition.
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Looks up a field definition, failing for fields the framework lacks.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] if `id` is not declared.
    pub fn require_field(&self, id: FieldId) -> Result<&FieldDefinition, EngineError> {
        self.field(id).ok_or(EngineError::UnknownField {
            framework: self.framework,
            field: id,
        })
    }

    /// Required field ids, derived from the definitions.
    #[must_use]
    pub fn required_ids(&self) -> Vec<FieldId> {
        self.fields.iter().filter(|f| f.required).map(|f| f.id).collect()
    }

    /// Ids of the fields visible for `values`, in declaration order.
    #[must_use]
    pub fn visible_ids(&self, values: &FieldValues) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|f| f.is_visible(values))
            .map(|f| f.id)
            .collect()
    }

    /// Fields that directly depend on `id`.
    pub fn dependents(&self, id: FieldId) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(move |f| f.depends_on.contains(&id))
    }

    /// Sets `field` to `value` and cascades the change downstream.
    ///
    /// A field that is hidden after the change keeps no value, including
    /// `field` itself. Every field that depends on a changed field is checked against its
    /// recomputed options; a value that is hidden or no longer offered is
    /// cleared, which in turn counts as a change for later fields. Returns
    /// the cleared fields in declaration order; setting an unchanged value is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] if `field` is not declared.
    pub fn set_field(
        &self,
        values: &mut FieldValues,
        field: FieldId,
        value: &str,
        provider: &dyn VocabularyProvider,
    ) -> Result<Vec<FieldId>, EngineError> {
        self.require_field(field)?;
        let Some(slot) = values.slot_mut(field) else {
            return Err(EngineError::UnknownField {
                framework: self.framework,
                field,
            });
        };
        if slot.as_str() == value {
            return Ok(Vec::new());
        }
        value.clone_into(slot);
        let mut cleared = self.cascade(values, field, provider);
        cleared.extend(self.clear_hidden(values));
        Ok(cleared)
    }

    /// Empties every hidden field, in declaration order, and returns the
    /// fields that held a value. Hidden fields are forced-empty.
    pub fn clear_hidden(&self, values: &mut FieldValues) -> Vec<FieldId> {
        let mut cleared = Vec::new();
        for def in self.fields {
            if def.is_visible(values) || values.value(def.id).is_empty() {
                continue;
            }
            tracing::debug!(framework = %self.framework, field = %def.id, "Clearing hidden field");
            if let Some(slot) = values.slot_mut(def.id) {
                slot.clear();
            }
            cleared.push(def.id);
        }
        cleared
    }

    fn cascade(
        &self,
        values: &mut FieldValues,
        origin: FieldId,
        provider: &dyn VocabularyProvider,
    ) -> Vec<FieldId> {
        let mut changed = vec![origin];
        let mut cleared = Vec::new();
        for def in self.fields {
            if !def.depends_on.iter().any(|d| changed.contains(d)) {
                continue;
            }
            let current = values.value(def.id);
            if current.is_empty() {
                continue;
            }
            let keep = def.is_visible(values)
                && def
                    .options(self.framework, values, provider)
                    .iter()
                    .any(|t| t.value == current);
            if keep {
                continue;
            }
            tracing::debug!(
                framework = %self.framework,
                field = %def.id,
                stale = current,
                cause = %origin,
                "Clearing dependent field"
            );
            if let Some(slot) = values.slot_mut(def.id) {
                slot.clear();
            }
            changed.push(def.id);
            cleared.push(def.id);
        }
        cleared
    }
}

fn always(_: &FieldValues) -> bool {
    true
}

fn property_is_grouped(values: &FieldValues) -> bool {
    GROUPED_PROPERTIES.contains(&values.value(FieldId::Property))
}

fn property_is_set(values: &FieldValues) -> bool {
    !values.value(FieldId::Property).is_empty()
}

static PRIMITIVE: Schema = Schema {
    framework: Framework::Primitive,
    fields: &[
        FieldDefinition {
            id: FieldId::Property,
            label: "Property",
            required: true,
            visible_when: always,
            depends_on: &[],
        },
        FieldDefinition {
            id: FieldId::Group,
            label: "Group",
            required: true,
            visible_when: property_is_grouped,
            depends_on: &[FieldId::Property],
        },
        FieldDefinition {
            id: FieldId::Identifier,
            label: "Identifier",
            required: true,
            visible_when: property_is_set,
            depends_on: &[FieldId::Property, FieldId::Group],
        },
    ],
};

static SEMANTIC: Schema = Schema {
    framework: Framework::Semantic,
    fields: &[
        FieldDefinition {
            id: FieldId::Role,
            label: "Role",
            required: true,
            visible_when: always,
            depends_on: &[],
        },
        FieldDefinition {
            id: FieldId::Element,
            label: "Element",
            required: true,
            visible_when: always,
            depends_on: &[FieldId::Role],
        },
        FieldDefinition {
            id: FieldId::Variant,
            label: "Variant",
            required: false,
            visible_when: always,
            depends_on: &[],
        },
        FieldDefinition {
            id: FieldId::Emphasis,
            label: "Emphasis",
            required: false,
            visible_when: always,
            depends_on: &[],
        },
        FieldDefinition {
            id: FieldId::State,
            label: "State",
            required: false,
            visible_when: always,
            depends_on: &[FieldId::Role],
        },
        FieldDefinition {
            id: FieldId::Context,
            label: "Context",
            required: false,
            visible_when: always,
            depends_on: &[],
        },
    ],
};

static COMPONENT: Schema = Schema {
    framework: Framework::Component,
    fields: &[
        FieldDefinition {
            id: FieldId::Component,
            label: "Component",
            required: true,
            visible_when: always,
            depends_on: &[],
        },
        FieldDefinition {
            id: FieldId::Part,
            label: "Part",
            required: true,
            visible_when: always,
            depends_on: &[FieldId::Component],
        },
        FieldDefinition {
            id: FieldId::Property,
            label: "Property",
            required: true,
            visible_when: always,
            depends_on: &[],
        },
        FieldDefinition {
            id: FieldId::Variant,
            label: "Variant",
            required: false,
            visible_when: always,
            depends_on: &[],
        },
        FieldDefinition {
            id: FieldId::State,
            label: "State",
            required: false,
            visible_when: always,
            depends_on: &[],
        },
        FieldDefinition {
            id: FieldId::Context,
            label: "Context",
            required: false,
            visible_when: always,
            depends_on: &[],
        },
    ],
};

/// Returns the schema of a framework.
#[must_use]
pub fn schema(framework: Framework) -> &'static Schema {
    match framework {
        Framework::Primitive => &PRIMITIVE,
        Framework::Semantic => &SEMANTIC,
        Framework::Component => &COMPONENT,
    }
}
