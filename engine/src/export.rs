//! JSON export payload of a composition.
//!
//! Shape: `{ framework, format, tokenName, segments, fields }`. `fields`
//! mirrors the form snapshot: every declared field (empty strings included),
//! the added prefixes and the sorted modifier list.

use serde_json::{json, Map, Value};

use crate::error::EngineError;
use crate::format::{compose_segments, format_name, NameStyle};
use crate::form::FormState;
use crate::schema::schema;

/// Builds the export payload for `state` formatted with `style`.
#[must_use]
pub fn export_payload(state: &FormState, style: NameStyle) -> Value {
    let segments = compose_segments(state);
    let token_name = format_name(&segments, style);

    let mut fields: Map<String, Value> = schema(state.framework())
        .fields
        .iter()
        .map(|def| (def.id.as_str().to_owned(), json!(state.values.value(def.id))))
        .collect();
    let prefixes: Map<String, Value> = state
        .prefixes
        .added()
        .map(|(slot, value)| (slot.as_str().to_owned(), json!(value)))
        .collect();
    fields.insert("prefixes".to_owned(), Value::Object(prefixes));
    fields.insert("modifiers".to_owned(), json!(state.modifiers));

    json!({
        "framework": state.framework().as_str(),
        "format": style.as_str(),
        "tokenName": token_name,
        "segments": segments,
        "fields": fields
    })
}

/// Pretty-printed export payload.
///
/// # Errors
///
/// Returns [`EngineError::Export`] if serialization fails.
pub fn export_json(state: &FormState, style: NameStyle) -> Result<String, EngineError> {
    Ok(serde_json::to_string_pretty(&export_payload(state, style))?)
}
