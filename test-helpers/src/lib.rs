//! Test-only fakes for the engine's external seams.
//!
//! Not published. Integration tests use these to observe what a session
//! writes to the clipboard, which notifications it raises, and how it
//! behaves when storage is unavailable.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use token_namer_engine::sinks::{Clipboard, Notifier, NotifyOptions};
use token_namer_engine::store::{MemoryStore, Store};
use token_namer_engine::{ClipboardError, EngineError, HistoryEntry, Session, StoreError};
use token_namer_vocabulary::{FieldId, Framework};

/// Clipboard that records every write.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    /// Texts written, oldest first.
    pub writes: Vec<String>,
}

impl RecordingClipboard {
    /// The most recent write.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_owned());
        Ok(())
    }
}

/// Clipboard that rejects every write and counts attempts.
#[derive(Debug, Default)]
pub struct FailingClipboard {
    /// Number of rejected writes.
    pub attempts: usize,
}

impl Clipboard for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        self.attempts += 1;
        Err(ClipboardError::Rejected("permission denied".to_owned()))
    }
}

/// Notifier that records every message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    /// Messages with their options, oldest first.
    pub messages: Vec<(String, NotifyOptions)>,
}

impl RecordingNotifier {
    /// Message texts only.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|(m, _)| m.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, options: NotifyOptions) {
        self.messages.push((message.to_owned(), options));
    }
}

/// Store whose every operation fails, as if storage were disabled.
#[derive(Debug, Default)]
pub struct FailingStore {
    /// Number of attempted writes.
    pub writes: usize,
}

impl Store for FailingStore {
    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_owned()))
    }

    fn save_history(&mut self, _entries: &[HistoryEntry]) -> Result<(), StoreError> {
        self.writes += 1;
        Err(StoreError::Unavailable("quota exceeded".to_owned()))
    }

    fn load_preference(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_owned()))
    }

    fn save_preference(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        self.writes += 1;
        Err(StoreError::Unavailable("quota exceeded".to_owned()))
    }
}

/// Opens an in-memory session on `framework` with `fields` set in order.
///
/// # Errors
///
/// Returns an [`EngineError`] if a field does not belong to `framework`.
pub fn session_with(
    framework: Framework,
    fields: &[(FieldId, &str)],
) -> Result<Session<MemoryStore>, EngineError> {
    let mut session = Session::open(MemoryStore::default());
    session.switch_framework(framework);
    for (field, value) in fields {
        session.set_field(*field, value)?;
    }
    Ok(session)
}

/// The canonical button composition used across tests.
pub const BUTTON_BACKGROUND: &[(FieldId, &str)] = &[
    (FieldId::Component, "button"),
    (FieldId::Part, "container"),
    (FieldId::Property, "background-color"),
];
