//! Serializers for the token-naming vocabulary.
//!
//! One format is supported:
//! - **JSON** ([`json`]): a single document with every framework's term
//!   lists, the primitive property rules, modifiers, prefixes and presets.

pub mod json;
