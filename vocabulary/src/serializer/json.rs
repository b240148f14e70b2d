//! JSON serializer for the token-naming vocabulary.
//!
//! Produces one document with a `frameworks` array in tab order. Each term
//! list carries its `when` conditions as an object so consumers can rebuild
//! the dependent option lookup without this crate.

use serde_json::{json, Map, Value};

use crate::model::{FrameworkModule, Preset, PrimitiveProperty, TermList, Vocabulary};

/// Serializes the complete vocabulary to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(vocabulary: &Vocabulary) -> Value {
    let frameworks: Vec<Value> = vocabulary.frameworks.iter().map(module_to_json).collect();
    let prefixes: Map<String, Value> = vocabulary
        .prefixes
        .iter()
        .map(|p| (p.slot.as_str().to_owned(), json!(p.terms)))
        .collect();
    let presets: Vec<Value> = vocabulary.presets.iter().map(preset_to_json).collect();

    json!({
        "version": vocabulary.version,
        "frameworks": frameworks,
        "modifiers": vocabulary.modifiers,
        "prefixes": prefixes,
        "presets": presets
    })
}

fn module_to_json(module: &FrameworkModule) -> Value {
    let lists: Vec<Value> = module.lists.iter().map(list_to_json).collect();
    let mut node = json!({
        "framework": module.framework.as_str(),
        "label": module.label,
        "comment": module.comment,
        "lists": lists
    });
    if !module.properties.is_empty() {
        let properties: Vec<Value> = module.properties.iter().map(property_to_json).collect();
        node["properties"] = Value::Array(properties);
    }
    node
}

fn list_to_json(list: &TermList) -> Value {
    let when: Map<String, Value> = list
        .when
        .iter()
        .map(|(field, value)| (field.as_str().to_owned(), json!(value)))
        .collect();
    json!({
        "field": list.field.as_str(),
        "when": when,
        "terms": list.terms
    })
}

fn property_to_json(property: &PrimitiveProperty) -> Value {
    let overrides: Map<String, Value> = property
        .group_shapes
        .iter()
        .map(|(group, shape)| ((*group).to_owned(), json!(shape)))
        .collect();
    json!({
        "value": property.term.value,
        "grouped": property.is_grouped(),
        "shape": property.shape,
        "groupShapes": overrides
    })
}

fn preset_to_json(preset: &Preset) -> Value {
    let fields: Map<String, Value> = preset
        .fields
        .iter()
        .map(|(field, value)| (field.as_str().to_owned(), json!(value)))
        .collect();
    json!({
        "label": preset.label,
        "framework": preset.framework.as_str(),
        "fields": fields,
        "modifiers": preset.modifiers
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_framework() {
        let doc = to_json(Vocabulary::full());
        let names: Vec<&str> = doc["frameworks"]
            .as_array()
            .map(|a| a.iter().filter_map(|f| f["framework"].as_str()).collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["primitive", "semantic", "component"]);
    }

    #[test]
    fn conditions_are_serialized_as_objects() {
        let doc = to_json(Vocabulary::full());
        let primitive = &doc["frameworks"][0];
        let space = primitive["lists"]
            .as_array()
            .and_then(|lists| {
                lists
                    .iter()
                    .find(|l| l["field"] == "identifier" && l["when"]["group"] == "space")
            })
            .cloned()
            .unwrap_or(Value::Null);
        assert_eq!(space["when"]["property"], "dimension");
        assert_eq!(space["terms"][0]["value"], "neg-8");
    }

    #[test]
    fn primitive_properties_carry_shapes() {
        let doc = to_json(Vocabulary::full());
        let color = &doc["frameworks"][0]["properties"][0];
        assert_eq!(color["value"], "color");
        assert_eq!(color["shape"], "color-step");
        assert_eq!(color["grouped"], true);
    }
}
