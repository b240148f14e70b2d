//! One-time normalization of history items stored in older shapes.
//!
//! Two flat shapes predate the current schemas:
//!
//! | Shape | Keys | Becomes |
//! |-------|------|---------|
//! | primitive | `category`, `set`, `step`, `variant` | `property`, `group`, `identifier`; `variant` joins the modifiers |
//! | semantic | `domain`, `object`, `role` | `role`, `element`; `domain` becomes the domain prefix |
//!
//! Both may carry `modifiers`, `prefixSystem`, `prefixTheme`, `prefixDomain`
//! and a millisecond `ts`. Anything else is dropped with a warning.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use token_namer_vocabulary::{FieldId, Framework, PrefixSlot};
use uuid::Uuid;

use crate::format::NameStyle;
use crate::form::FormState;
use crate::history::HistoryEntry;
use crate::normalize::normalize_segment;
use crate::schema::schema;

/// Namespace for ids derived from a normalized item's identity.
const LEGACY_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_8b3d_4c57_9e21_d0a8_5b7f_3c19);

/// Decodes stored history items, normalizing legacy shapes and dropping
/// items that match no known shape.
#[must_use]
pub fn decode_history(items: Vec<Value>) -> Vec<HistoryEntry> {
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let legacy = match serde_json::from_value::<HistoryEntry>(item.clone()) {
            Ok(entry) => {
                entries.push(entry);
                continue;
            }
            Err(err) => normalize_legacy(&item).ok_or(err),
        };
        match legacy {
            Ok(entry) => {
                tracing::debug!(index, token = %entry.token_name, "Imported legacy history item");
                entries.push(entry);
            }
            Err(err) => tracing::warn!(index, error = %err, "Dropping unrecognized history item"),
        }
    }
    entries
}

/// Converts one legacy item into a current entry, or `None` if the item
/// matches neither legacy shape.
#[must_use]
pub fn normalize_legacy(item: &Value) -> Option<HistoryEntry> {
    let object = item.as_object()?;
    let mut state = if object.contains_key("category") {
        primitive(object)
    } else if object.contains_key("object") {
        semantic(object)
    } else {
        return None;
    };

    if let Some(Value::Array(modifiers)) = object.get("modifiers") {
        state.modifiers.extend(
            modifiers
                .iter()
                .filter_map(Value::as_str)
                .map(normalize_segment)
                .filter(|m| !m.is_empty()),
        );
    }
    for (key, slot) in [
        ("prefixSystem", PrefixSlot::System),
        ("prefixTheme", PrefixSlot::Theme),
        ("prefixDomain", PrefixSlot::Domain),
    ] {
        let value = text(object, key);
        if !value.is_empty() {
            *state.prefixes.slot_mut(slot) = Some(value);
        }
    }

    let timestamp = object
        .get("ts")
        .and_then(Value::as_i64)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or_else(Utc::now);
    schema(state.framework()).clear_hidden(&mut state.values);
    let mut entry = HistoryEntry::recorded_at(&state, NameStyle::Slash, timestamp);
    // Stable across loads until the normalized list is written back.
    entry.id = Uuid::new_v5(&LEGACY_NAMESPACE, entry.identity_key().as_bytes());
    (!entry.token_name.is_empty()).then_some(entry)
}

fn text(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(normalize_segment)
        .unwrap_or_default()
}

fn fill(state: &mut FormState, field: FieldId, value: String) {
    if let Some(slot) = state.values.slot_mut(field) {
        *slot = value;
    }
}

fn primitive(object: &Map<String, Value>) -> FormState {
    let mut state = FormState::new(Framework::Primitive);
    // Properties keep their case (`fontFamily`).
    let property = object
        .get("category")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_owned();
    fill(&mut state, FieldId::Property, property);
    fill(&mut state, FieldId::Group, text(object, "set"));
    fill(&mut state, FieldId::Identifier, text(object, "step"));
    let variant = text(object, "variant");
    if !variant.is_empty() {
        state.modifiers.insert(variant);
    }
    state
}

fn semantic(object: &Map<String, Value>) -> FormState {
    let mut state = FormState::new(Framework::Semantic);
    fill(&mut state, FieldId::Role, text(object, "role"));
    fill(&mut state, FieldId::Element, text(object, "object"));
    let domain = text(object, "domain");
    if !domain.is_empty() {
        state.prefixes.domain = Some(domain);
    }
    state
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn primitive_shape_moves_variant_to_modifiers() {
        let item = json!({
            "category": "color",
            "set": "Gray",
            "step": "500",
            "variant": "subtle",
            "ts": 1_700_000_000_000_i64,
        });
        let entry = normalize_legacy(&item);
        assert_eq!(
            entry.as_ref().map(|e| e.token_name.as_str()),
            Some("color/gray/500/subtle")
        );
        assert_eq!(
            entry.map(|e| e.timestamp.timestamp_millis()),
            Some(1_700_000_000_000)
        );
    }

    #[test]
    fn semantic_shape_moves_domain_to_prefix() {
        let item = json!({ "domain": "marketing", "object": "body", "role": "text" });
        let entry = normalize_legacy(&item);
        assert_eq!(
            entry.map(|e| e.segments),
            Some(vec!["marketing".to_owned(), "text".to_owned(), "body".to_owned()])
        );
    }

    #[test]
    fn ids_are_stable_and_hidden_values_dropped() {
        let item = json!({ "category": "opacity", "set": "gray", "step": "50" });
        let first = normalize_legacy(&item);
        let second = normalize_legacy(&item);
        assert!(first.is_some());
        assert_eq!(first.as_ref().map(|e| e.id), second.map(|e| e.id));
        assert_eq!(first.map(|e| e.token_name), Some("opacity/50".to_owned()));
    }

    #[test]
    fn unknown_items_are_dropped() {
        let entries = decode_history(vec![json!({ "namespace": "x" }), json!(42)]);
        assert!(entries.is_empty());
    }
}
