//! History log: a bounded, deduplicated, newest-first record of copies.
//!
//! The in-memory list is authoritative. Every change is written through to
//! the [`Store`]; a failed write is logged and otherwise ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use token_namer_vocabulary::{Framework, PrefixSlot};
use uuid::Uuid;

use crate::format::{compose_segments, format_name, NameStyle};
use crate::form::FormState;
use crate::store::Store;

/// Maximum number of entries kept.
pub const HISTORY_CAPACITY: usize = 10;

/// One successful composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique entry id.
    pub id: Uuid,
    /// Framework the name was composed in.
    pub framework: Framework,
    /// Style the name was formatted with.
    pub format: NameStyle,
    /// Snapshot of the form at copy time.
    pub fields: FormState,
    /// Segments used, in order.
    pub segments: Vec<String>,
    /// Formatted token name.
    pub token_name: String,
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Snapshots `state` formatted with `style`.
    #[must_use]
    pub fn record(state: &FormState, style: NameStyle) -> Self {
        Self::recorded_at(state, style, Utc::now())
    }

    /// Snapshots `state` with an explicit timestamp.
    #[must_use]
    pub fn recorded_at(state: &FormState, style: NameStyle, timestamp: DateTime<Utc>) -> Self {
        let segments = compose_segments(state);
        let token_name = format_name(&segments, style);
        Self {
            id: Uuid::new_v4(),
            framework: state.framework(),
            format: style,
            fields: state.clone(),
            segments,
            token_name,
            timestamp,
        }
    }

    /// Identity used for deduplication: framework, field snapshot and name.
    ///
    /// A prefix slot that was added but left empty counts as absent.
    #[must_use]
    pub fn identity_key(&self) -> String {
        let mut snapshot = self.fields.clone();
        for slot in PrefixSlot::ALL {
            let prefix = snapshot.prefixes.slot_mut(slot);
            if prefix.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *prefix = None;
            }
        }
        let fields = serde_json::to_string(&snapshot).unwrap_or_default();
        format!("{}|{}|{}", self.framework, fields, self.token_name)
    }
}

/// Newest-first history backed by a [`Store`].
#[derive(Debug)]
pub struct HistoryLog<S> {
    store: S,
    entries: Vec<HistoryEntry>,
}

impl<S: Store> HistoryLog<S> {
    /// Opens the log, loading whatever `store` holds.
    pub fn open(store: S) -> Self {
        let mut log = Self {
            store,
            entries: Vec::new(),
        };
        log.load();
        log
    }

    /// Reloads entries from the store.
    ///
    /// Stored lists are re-capped and re-deduplicated. On a read failure the
    /// current in-memory list is kept.
    pub fn load(&mut self) -> &[HistoryEntry] {
        match self.store.load_history() {
            Ok(stored) => {
                let mut entries: Vec<HistoryEntry> = Vec::with_capacity(stored.len());
                for entry in stored {
                    let key = entry.identity_key();
                    if !entries.iter().any(|e| e.identity_key() == key) {
                        entries.push(entry);
                    }
                }
                entries.truncate(HISTORY_CAPACITY);
                self.entries = entries;
            }
            Err(err) => tracing::warn!(error = %err, "Failed to load history, keeping in-memory list"),
        }
        &self.entries
    }

    /// Current entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Adds `entry` at the front, replacing any entry with the same identity
    /// and evicting the oldest beyond capacity.
    pub fn add(&mut self, entry: HistoryEntry) -> &[HistoryEntry] {
        let key = entry.identity_key();
        self.entries.retain(|e| e.identity_key() != key);
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist();
        &self.entries
    }

    /// Removes the entry with `id`, if any.
    pub fn remove(&mut self, id: Uuid) -> &[HistoryEntry] {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.persist();
        }
        &self.entries
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> &[HistoryEntry] {
        self.entries.clear();
        self.persist();
        &self.entries
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The backing store, mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save_history(&self.entries) {
            tracing::warn!(error = %err, entries = self.entries.len(), "Failed to persist history");
        }
    }
}

#[cfg(test)]
mod tests {
    use token_namer_vocabulary::FieldId;

    use super::*;
    use crate::store::MemoryStore;

    fn state(element: &str) -> FormState {
        let mut state = FormState::new(Framework::Semantic);
        for (field, value) in [(FieldId::Role, "text"), (FieldId::Element, element)] {
            if let Some(slot) = state.values.slot_mut(field) {
                *slot = value.to_owned();
            }
        }
        state
    }

    #[test]
    fn duplicates_move_to_front() {
        let mut log = HistoryLog::open(MemoryStore::default());
        log.add(HistoryEntry::record(&state("body"), NameStyle::Slash));
        log.add(HistoryEntry::record(&state("heading"), NameStyle::Slash));
        log.add(HistoryEntry::record(&state("body"), NameStyle::Slash));
        let names: Vec<&str> = log.entries().iter().map(|e| e.token_name.as_str()).collect();
        assert_eq!(names, vec!["text/body", "text/heading"]);
    }

    #[test]
    fn style_is_part_of_identity() {
        let mut log = HistoryLog::open(MemoryStore::default());
        log.add(HistoryEntry::record(&state("body"), NameStyle::Slash));
        log.add(HistoryEntry::record(&state("body"), NameStyle::Underscore));
        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[0].token_name, "TEXT_BODY");
    }

    #[test]
    fn empty_prefix_slot_is_not_a_new_identity() {
        let mut log = HistoryLog::open(MemoryStore::default());
        log.add(HistoryEntry::record(&state("body"), NameStyle::Slash));
        let mut with_empty_slot = state("body");
        with_empty_slot.prefixes.theme = Some(String::new());
        log.add(HistoryEntry::record(&with_empty_slot, NameStyle::Slash));
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].token_name, "text/body");
    }

    #[test]
    fn writes_through_to_store() {
        let mut log = HistoryLog::open(MemoryStore::default());
        log.add(HistoryEntry::record(&state("body"), NameStyle::Dot));
        assert_eq!(log.store().history.len(), 1);
        let id = log.entries()[0].id;
        log.remove(id);
        assert!(log.store().history.is_empty());
    }
}
