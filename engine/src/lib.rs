//! Field-dependency, validation and name-formatting engine for design-token
//! naming conventions.
//!
//! The engine turns user input for one of three naming frameworks into a
//! validated, formatted token name. It owns no presentation: a caller drives
//! a [`Session`] with input events and draws the returned [`RenderModel`].
//!
//! | Module | Role |
//! |--------|------|
//! | [`schema`] | Ordered field definitions and the dependent-field cascade |
//! | [`form`] | Per-framework values, prefixes, modifiers and interaction flags |
//! | [`validation`] | Required, character-set, vocabulary, consistency and ordering rules |
//! | [`format`] | Segment assembly and delimiter styles |
//! | [`history`] | Bounded, deduplicated record of copies |
//! | [`store`], [`sinks`] | Storage, clipboard and notification seams |
//!
//! # Entry Point
//!
//! ```
//! use token_namer_engine::store::MemoryStore;
//! use token_namer_engine::{NameStyle, Session};
//! use token_namer_vocabulary::{FieldId, Framework};
//!
//! # fn main() -> Result<(), token_namer_engine::EngineError> {
//! let mut session = Session::open(MemoryStore::default());
//! session.switch_framework(Framework::Component);
//! session.set_field(FieldId::Component, "button")?;
//! session.set_field(FieldId::Part, "container")?;
//! let model = session.set_field(FieldId::Property, "background-color")?;
//! assert_eq!(model.preview, "button/container/background-color");
//! assert!(model.copy_ready);
//!
//! let model = session.set_style(NameStyle::Underscore);
//! assert_eq!(model.preview, "BUTTON_CONTAINER_BACKGROUND-COLOR");
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod export;
pub mod form;
pub mod format;
pub mod history;
pub mod legacy;
pub mod normalize;
pub mod schema;
pub mod session;
pub mod sinks;
pub mod store;
pub mod validation;

pub use error::{ClipboardError, EngineError, StoreError};
pub use form::{FieldKey, FieldValues, FormState, InteractionState, Prefixes};
pub use format::{compose_segments, format_name, NameStyle};
pub use history::{HistoryEntry, HistoryLog, HISTORY_CAPACITY};
pub use schema::{schema, FieldDefinition, Schema, VocabularyProvider};
pub use session::{CopyKind, CopyOutcome, RenderModel, Session, StatusTone};
pub use validation::{Issue, IssueKind, ValidationResult};
