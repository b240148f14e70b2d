//! Interactive session: the single owner of form and interaction state.
//!
//! Every mutation runs to completion (value update, dependent cascade,
//! validation, formatting) before it returns a [`RenderModel`], so a caller
//! never observes a half-updated form.

use std::collections::BTreeMap;

use serde::Serialize;
use token_namer_vocabulary::{FieldId, Framework, PrefixSlot, Term, Vocabulary};
use uuid::Uuid;

use crate::error::EngineError;
use crate::export::export_json;
use crate::format::{compose_segments, format_name, NameStyle};
use crate::form::{FieldKey, FormState, InteractionState};
use crate::history::{HistoryEntry, HistoryLog};
use crate::schema::schema;
use crate::sinks::{write_with_fallback, Clipboard, Notifier, NotifyOptions};
use crate::store::{Store, PREF_FORMAT, PREF_FRAMEWORK};
use crate::validation::{self, Issue, IssueKind, ValidationResult};

/// Notification shown when copy is blocked by errors.
pub const NOT_READY_MESSAGE: &str = "Fix validation errors before copying.";
/// Notification shown when both clipboards fail.
pub const COPY_FAILED_MESSAGE: &str = "Copy failed.";
/// Notification shown after a successful copy.
pub const COPIED_MESSAGE: &str = "Copied.";
/// Notification shown after the history is cleared.
pub const HISTORY_CLEARED_MESSAGE: &str = "History cleared.";

/// Form and interaction state of one framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkForm {
    /// Current input.
    pub state: FormState,
    /// Touched, dirty and submitted flags.
    pub interaction: InteractionState,
}

impl FrameworkForm {
    fn new(framework: Framework) -> Self {
        Self {
            state: FormState::new(framework),
            interaction: InteractionState::default(),
        }
    }
}

/// What a copy writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    /// The formatted token name.
    Name,
    /// The pretty-printed JSON export payload.
    Json,
}

/// Result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Blocked by validation; carries the headline message.
    NotReady {
        /// First error in presentation order.
        headline: String,
    },
    /// Both the primary and the fallback clipboard failed.
    ClipboardFailed,
    /// The text was written.
    Copied {
        /// The text that was written.
        text: String,
    },
}

/// Tone of the headline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    /// Nothing to report yet.
    Idle,
    /// Ready to copy.
    Ready,
    /// Ready or not, with an advisory note.
    Warning,
    /// A visible error.
    Error,
}

/// Headline status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Tone.
    pub tone: StatusTone,
    /// Message.
    pub message: String,
}

/// Render view of one framework field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Field id.
    pub id: FieldId,
    /// Display label.
    pub label: &'static str,
    /// Whether the field is required while visible.
    pub required: bool,
    /// Whether the field is currently shown.
    pub visible: bool,
    /// Current value.
    pub value: String,
    /// Currently allowed terms.
    pub options: Vec<Term>,
    /// Message to show under the field, if any.
    pub message: Option<Issue>,
}

/// Render view of one added prefix slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixView {
    /// Slot.
    pub slot: PrefixSlot,
    /// Current value.
    pub value: String,
    /// Suggested terms.
    pub suggestions: Vec<Term>,
    /// Message to show under the prefix, if any.
    pub message: Option<Issue>,
}

/// Everything a presentation layer needs to draw the active form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    /// Active framework.
    pub framework: Framework,
    /// Active name style.
    pub style: NameStyle,
    /// Formatted preview; empty when there is nothing to show.
    pub preview: String,
    /// Segments behind the preview.
    pub segments: Vec<String>,
    /// Added prefix slots, in slot order.
    pub prefixes: Vec<PrefixView>,
    /// Schema fields, in declaration order.
    pub fields: Vec<FieldView>,
    /// Selected modifiers, sorted.
    pub modifiers: Vec<String>,
    /// Message on the modifier group, if any.
    pub modifier_message: Option<Issue>,
    /// Errors currently visible.
    pub errors: BTreeMap<FieldKey, Issue>,
    /// Warnings currently visible.
    pub warnings: BTreeMap<FieldKey, Issue>,
    /// Headline status.
    pub status: Status,
    /// Whether the authoritative check would allow a copy.
    pub copy_ready: bool,
}

/// A naming session over all three frameworks.
#[derive(Debug)]
pub struct Session<S> {
    vocabulary: &'static Vocabulary,
    forms: [FrameworkForm; 3],
    active: Framework,
    style: NameStyle,
    history: HistoryLog<S>,
}

impl<S: Store> Session<S> {
    /// Opens a session, restoring history and the `format` and `framework`
    /// preferences from `store`.
    pub fn open(store: S) -> Self {
        let history = HistoryLog::open(store);
        let style = read_preference(history.store(), PREF_FORMAT)
            .and_then(|s| NameStyle::from_name(&s))
            .unwrap_or_default();
        let active = read_preference(history.store(), PREF_FRAMEWORK)
            .and_then(|s| Framework::from_name(&s))
            .unwrap_or(Framework::Primitive);
        tracing::debug!(%active, %style, entries = history.entries().len(), "Session opened");
        Self {
            vocabulary: Vocabulary::full(),
            forms: Framework::ALL.map(FrameworkForm::new),
            active,
            style,
            history,
        }
    }

    /// Active framework.
    #[must_use]
    pub fn active(&self) -> Framework {
        self.active
    }

    /// Active name style.
    #[must_use]
    pub fn style(&self) -> NameStyle {
        self.style
    }

    /// Form of any framework.
    #[must_use]
    pub fn form(&self, framework: Framework) -> &FrameworkForm {
        &self.forms[framework.index()]
    }

    /// Current input of the active framework.
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.form(self.active).state
    }

    fn active_form_mut(&mut self) -> &mut FrameworkForm {
        &mut self.forms[self.active.index()]
    }

    /// Sets a field of the active framework and cascades the change.
    ///
    /// The value is trimmed; the field is marked dirty.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] if the active framework has no such field.
    pub fn set_field(&mut self, field: FieldId, value: &str) -> Result<RenderModel, EngineError> {
        let vocabulary = self.vocabulary;
        let schema = schema(self.active);
        let form = self.active_form_mut();
        schema.set_field(&mut form.state.values, field, value.trim(), vocabulary)?;
        form.interaction.dirty.insert(FieldKey::Field(field));
        Ok(self.render())
    }

    /// Marks a field, prefix or the modifier group as touched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] if `key` names a field the active
    /// framework lacks.
    pub fn commit_field(&mut self, key: FieldKey) -> Result<RenderModel, EngineError> {
        if let FieldKey::Field(field) = key {
            schema(self.active).require_field(field)?;
        }
        self.active_form_mut().interaction.touched.insert(key);
        Ok(self.render())
    }

    /// Activates another framework; each keeps its own input.
    pub fn switch_framework(&mut self, framework: Framework) -> RenderModel {
        if self.active != framework {
            tracing::debug!(from = %self.active, to = %framework, "Switching framework");
            self.active = framework;
            save_preference(self.history.store_mut(), PREF_FRAMEWORK, framework.as_str());
        }
        self.render()
    }

    /// Adds an empty prefix slot; an existing slot keeps its value.
    pub fn add_prefix(&mut self, slot: PrefixSlot) -> RenderModel {
        self.active_form_mut()
            .state
            .prefixes
            .slot_mut(slot)
            .get_or_insert_with(String::new);
        self.render()
    }

    /// Sets a prefix value, adding the slot if needed.
    pub fn set_prefix(&mut self, slot: PrefixSlot, value: &str) -> RenderModel {
        let form = self.active_form_mut();
        *form.state.prefixes.slot_mut(slot) = Some(value.trim().to_owned());
        form.interaction.dirty.insert(FieldKey::Prefix(slot));
        self.render()
    }

    /// Removes a prefix slot and its interaction flags.
    pub fn remove_prefix(&mut self, slot: PrefixSlot) -> RenderModel {
        let form = self.active_form_mut();
        *form.state.prefixes.slot_mut(slot) = None;
        form.interaction.touched.remove(&FieldKey::Prefix(slot));
        form.interaction.dirty.remove(&FieldKey::Prefix(slot));
        self.render()
    }

    /// Adds `value` to the modifier set, or removes it if present.
    pub fn toggle_modifier(&mut self, value: &str) -> RenderModel {
        let value = value.trim();
        if !value.is_empty() {
            let form = self.active_form_mut();
            if !form.state.modifiers.remove(value) {
                form.state.modifiers.insert(value.to_owned());
            }
            form.interaction.dirty.insert(FieldKey::Modifiers);
        }
        self.render()
    }

    /// Replaces the modifier set. Blank values are ignored; order does not matter.
    pub fn set_modifiers<I, T>(&mut self, values: I) -> RenderModel
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let form = self.active_form_mut();
        form.state.modifiers = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_owned())
            .filter(|v| !v.is_empty())
            .collect();
        form.interaction.dirty.insert(FieldKey::Modifiers);
        self.render()
    }

    /// Changes the name style and stores it as the `format` preference.
    pub fn set_style(&mut self, style: NameStyle) -> RenderModel {
        self.style = style;
        save_preference(self.history.store_mut(), PREF_FORMAT, style.as_str());
        self.render()
    }

    /// Resets every field, prefix, modifier and interaction flag of the
    /// active framework.
    pub fn clear(&mut self) -> RenderModel {
        let framework = self.active;
        *self.active_form_mut() = FrameworkForm::new(framework);
        self.render()
    }

    /// Clears the active form and fills it from the preset named `label`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPreset`] if the active framework has no
    /// preset with that label.
    pub fn apply_preset(&mut self, label: &str) -> Result<RenderModel, EngineError> {
        let vocabulary = self.vocabulary;
        let preset = vocabulary
            .find_preset(self.active, label)
            .ok_or_else(|| EngineError::UnknownPreset {
                framework: self.active,
                label: label.to_owned(),
            })?;
        let schema = schema(self.active);
        let mut form = FrameworkForm::new(self.active);
        for (field, value) in preset.fields {
            schema.set_field(&mut form.state.values, *field, value, vocabulary)?;
        }
        form.state.modifiers = preset.modifiers.iter().map(|m| (*m).to_owned()).collect();
        *self.active_form_mut() = form;
        Ok(self.render())
    }

    /// Authoritative validation of the active form, ignoring interaction state.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        let state = self.state();
        let visible = schema(self.active).visible_ids(&state.values);
        validation::validate(state, &visible, self.vocabulary)
    }

    /// Formatted name of the active form.
    #[must_use]
    pub fn preview(&self) -> String {
        format_name(&compose_segments(self.state()), self.style)
    }

    /// Copies the active composition.
    ///
    /// Marks the form submitted and runs the authoritative check. Only a
    /// copy-ready form is written; a successful write is recorded in the
    /// history. Clipboard failures are reported through `notifier` and the
    /// returned outcome, never as an error.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Export`] if the JSON payload cannot be serialized.
    pub fn copy(
        &mut self,
        kind: CopyKind,
        clipboard: &mut dyn Clipboard,
        fallback: &mut dyn Clipboard,
        notifier: &mut dyn Notifier,
    ) -> Result<CopyOutcome, EngineError> {
        self.active_form_mut().interaction.submitted = true;
        let result = self.validate();
        let name = self.preview();
        if !result.copy_ready(&name) {
            let headline = result
                .headline(&self.presentation_order())
                .map_or_else(|| "Nothing to copy yet.".to_owned(), |(_, issue)| issue.message.clone());
            tracing::debug!(errors = result.errors.len(), %headline, "Copy blocked");
            notifier.notify(NOT_READY_MESSAGE, NotifyOptions::error("Not ready"));
            return Ok(CopyOutcome::NotReady { headline });
        }

        let text = match kind {
            CopyKind::Name => name.clone(),
            CopyKind::Json => export_json(self.state(), self.style)?,
        };
        if !write_with_fallback(clipboard, fallback, &text) {
            notifier.notify(COPY_FAILED_MESSAGE, NotifyOptions::error("Clipboard"));
            return Ok(CopyOutcome::ClipboardFailed);
        }

        tracing::info!(framework = %self.active, token = %name, ?kind, "Copied token");
        notifier.notify(COPIED_MESSAGE, NotifyOptions::success());
        let entry = HistoryEntry::record(self.state(), self.style);
        self.history.add(entry);
        Ok(CopyOutcome::Copied { text })
    }

    /// History entries, newest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Removes one history entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownHistoryEntry`] if no entry has `id`.
    pub fn remove_history(&mut self, id: Uuid) -> Result<&[HistoryEntry], EngineError> {
        if self.history.get(id).is_none() {
            return Err(EngineError::UnknownHistoryEntry(id));
        }
        Ok(self.history.remove(id))
    }

    /// Removes every history entry.
    pub fn clear_history(&mut self, notifier: &mut dyn Notifier) -> &[HistoryEntry] {
        notifier.notify(HISTORY_CLEARED_MESSAGE, NotifyOptions::info());
        self.history.clear()
    }

    /// Restores the framework, style and form of a history entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownHistoryEntry`] if no entry has `id`.
    pub fn fill_from_history(&mut self, id: Uuid) -> Result<RenderModel, EngineError> {
        let entry = self
            .history
            .get(id)
            .cloned()
            .ok_or(EngineError::UnknownHistoryEntry(id))?;
        let framework = entry.fields.framework();
        self.switch_framework(framework);
        if self.style != entry.format {
            self.set_style(entry.format);
        }
        let form = self.active_form_mut();
        form.state = entry.fields;
        form.interaction = InteractionState::default();
        Ok(self.render())
    }

    /// Re-copies the stored token name of a history entry without re-validating.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownHistoryEntry`] if no entry has `id`.
    pub fn copy_history(
        &mut self,
        id: Uuid,
        clipboard: &mut dyn Clipboard,
        fallback: &mut dyn Clipboard,
        notifier: &mut dyn Notifier,
    ) -> Result<CopyOutcome, EngineError> {
        let text = self
            .history
            .get(id)
            .map(|e| e.token_name.clone())
            .ok_or(EngineError::UnknownHistoryEntry(id))?;
        if write_with_fallback(clipboard, fallback, &text) {
            notifier.notify(COPIED_MESSAGE, NotifyOptions::success());
            Ok(CopyOutcome::Copied { text })
        } else {
            notifier.notify(COPY_FAILED_MESSAGE, NotifyOptions::error("Clipboard"));
            Ok(CopyOutcome::ClipboardFailed)
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        self.history.store()
    }

    /// Keys in on-screen order: added prefixes, schema fields, modifiers.
    fn presentation_order(&self) -> Vec<FieldKey> {
        let state = self.state();
        state
            .prefixes
            .added()
            .map(|(slot, _)| FieldKey::Prefix(slot))
            .chain(schema(self.active).fields.iter().map(|f| FieldKey::Field(f.id)))
            .chain(std::iter::once(FieldKey::Modifiers))
            .collect()
    }

    /// Builds the render model of the active form.
    #[must_use]
    pub fn render(&self) -> RenderModel {
        let form = self.form(self.active);
        let state = &form.state;
        let interaction = &form.interaction;
        let schema = schema(self.active);

        let result = self.validate();
        let segments = compose_segments(state);
        let preview = format_name(&segments, self.style);
        let copy_ready = result.copy_ready(&preview);

        let errors: BTreeMap<FieldKey, Issue> = result
            .errors
            .iter()
            .filter(|(key, issue)| issue.kind != IssueKind::Required || interaction.reveals(**key))
            .map(|(key, issue)| (*key, issue.clone()))
            .collect();
        let warnings = if interaction.submitted {
            result.warnings.clone()
        } else {
            BTreeMap::new()
        };
        let message = |key: FieldKey| {
            errors
                .get(&key)
                .or_else(|| warnings.get(&key))
                .cloned()
        };

        let prefixes = state
            .prefixes
            .added()
            .map(|(slot, value)| PrefixView {
                slot,
                value: value.to_owned(),
                suggestions: self.vocabulary.prefix_terms(slot).to_vec(),
                message: message(FieldKey::Prefix(slot)),
            })
            .collect();
        let fields = schema
            .fields
            .iter()
            .map(|def| FieldView {
                id: def.id,
                label: def.label,
                required: def.required,
                visible: def.is_visible(&state.values),
                value: state.values.value(def.id).to_owned(),
                options: def.options(self.active, &state.values, self.vocabulary),
                message: message(FieldKey::Field(def.id)),
            })
            .collect();

        let order = self.presentation_order();
        let headline_error = order.iter().find_map(|key| errors.get(key));
        let headline_warning = order.iter().find_map(|key| warnings.get(key));
        let status = match (headline_error, headline_warning) {
            (Some(issue), _) => Status {
                tone: StatusTone::Error,
                message: issue.message.clone(),
            },
            (None, Some(issue)) => Status {
                tone: StatusTone::Warning,
                message: issue.message.clone(),
            },
            (None, None) if copy_ready => Status {
                tone: StatusTone::Ready,
                message: "Ready to copy.".to_owned(),
            },
            (None, None) => Status {
                tone: StatusTone::Idle,
                message: "Fill in the required fields.".to_owned(),
            },
        };

        RenderModel {
            framework: self.active,
            style: self.style,
            preview,
            segments,
            prefixes,
            fields,
            modifiers: state.modifiers.iter().cloned().collect(),
            modifier_message: message(FieldKey::Modifiers),
            errors: errors.clone(),
            warnings: warnings.clone(),
            status,
            copy_ready,
        }
    }
}

fn read_preference<S: Store>(store: &S, key: &str) -> Option<String> {
    match store.load_preference(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "Failed to read preference");
            None
        }
    }
}

fn save_preference<S: Store>(store: &mut S, key: &str, value: &str) {
    if let Err(err) = store.save_preference(key, value) {
        tracing::warn!(key, value, error = %err, "Failed to save preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn session() -> Session<MemoryStore> {
        Session::open(MemoryStore::default())
    }

    #[test]
    fn frameworks_keep_independent_input() {
        let mut session = session();
        assert!(session.set_field(FieldId::Property, "color").is_ok());
        session.switch_framework(Framework::Semantic);
        assert!(session.set_field(FieldId::Role, "text").is_ok());
        let model = session.switch_framework(Framework::Primitive);
        assert_eq!(model.preview, "color");
        assert_eq!(session.form(Framework::Semantic).state.values.value(FieldId::Role), "text");
    }

    #[test]
    fn required_errors_wait_for_touch() {
        let mut session = session();
        session.switch_framework(Framework::Semantic);
        let model = session.render();
        assert!(model.errors.is_empty());
        assert_eq!(model.status.tone, StatusTone::Idle);

        let touched = session.commit_field(FieldKey::Field(FieldId::Role));
        let errors = touched.map(|m| m.errors).unwrap_or_default();
        assert!(errors.contains_key(&FieldKey::Field(FieldId::Role)));
        assert!(!errors.contains_key(&FieldKey::Field(FieldId::Element)));
    }

    #[test]
    fn format_errors_show_immediately() {
        let mut session = session();
        session.switch_framework(Framework::Component);
        let model = session.set_field(FieldId::Component, "Button").ok();
        let tone = model.map(|m| m.status.tone);
        assert_eq!(tone, Some(StatusTone::Error));
    }

    #[test]
    fn field_outside_framework_is_rejected() {
        let mut session = session();
        assert!(matches!(
            session.set_field(FieldId::Part, "label"),
            Err(EngineError::UnknownField { .. })
        ));
        assert!(session.commit_field(FieldKey::Field(FieldId::Role)).is_err());
    }

    #[test]
    fn preferences_restore_on_open() {
        let mut store = MemoryStore::default();
        store.preferences.insert(PREF_FORMAT.to_owned(), "underscore".to_owned());
        store.preferences.insert(PREF_FRAMEWORK.to_owned(), "component".to_owned());
        let session = Session::open(store);
        assert_eq!(session.style(), NameStyle::Underscore);
        assert_eq!(session.active(), Framework::Component);
    }

    #[test]
    fn preset_fills_active_form() {
        let mut session = session();
        session.switch_framework(Framework::Component);
        let model = session.apply_preset("card/container/shadow/strong");
        let preview = model.map(|m| m.preview).unwrap_or_default();
        assert!(preview.starts_with("card/container/"), "{preview}");
        assert!(session.apply_preset("missing").is_err());
    }
}
