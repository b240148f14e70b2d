//! Copy, history and reset flows of a session against fake sinks.

use token_namer_engine::session::{COPIED_MESSAGE, COPY_FAILED_MESSAGE, NOT_READY_MESSAGE};
use token_namer_engine::sinks::NotifyLevel;
use token_namer_engine::store::MemoryStore;
use token_namer_engine::{CopyKind, CopyOutcome, FieldKey, NameStyle, Session, HISTORY_CAPACITY};
use token_namer_test_helpers::{
    session_with, FailingClipboard, FailingStore, RecordingClipboard, RecordingNotifier,
    BUTTON_BACKGROUND,
};
use token_namer_vocabulary::{FieldId, Framework, PrefixSlot};

fn copy_name<S: token_namer_engine::store::Store>(
    session: &mut Session<S>,
    clipboard: &mut RecordingClipboard,
) -> CopyOutcome {
    let mut notifier = RecordingNotifier::default();
    session
        .copy(CopyKind::Name, clipboard, &mut FailingClipboard::default(), &mut notifier)
        .unwrap()
}

// =============================================================================
// Copy
// =============================================================================

#[test]
fn component_names_in_every_style() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    assert_eq!(session.render().preview, "button/container/background-color");
    assert_eq!(
        session.set_style(NameStyle::Underscore).preview,
        "BUTTON_CONTAINER_BACKGROUND-COLOR"
    );
    assert_eq!(
        session.set_style(NameStyle::Dot).preview,
        "button.container.background-color"
    );
}

#[test]
fn blocked_copy_reveals_errors_and_notifies() {
    let mut session = session_with(Framework::Semantic, &[(FieldId::Role, "text")]).unwrap();
    assert!(session.render().errors.is_empty());

    let mut clipboard = RecordingClipboard::default();
    let mut notifier = RecordingNotifier::default();
    let outcome = session
        .copy(CopyKind::Name, &mut clipboard, &mut FailingClipboard::default(), &mut notifier)
        .unwrap();
    assert_eq!(
        outcome,
        CopyOutcome::NotReady {
            headline: "Element is required.".to_owned()
        }
    );
    assert!(clipboard.writes.is_empty());
    assert_eq!(notifier.texts(), vec![NOT_READY_MESSAGE]);
    assert!(session.history().is_empty());

    let model = session.render();
    assert!(model.errors.contains_key(&FieldKey::Field(FieldId::Element)));
    assert_eq!(model.status.message, "Element is required.");
}

#[test]
fn successful_copy_records_history() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    session.toggle_modifier("hover");
    let mut clipboard = RecordingClipboard::default();
    let mut notifier = RecordingNotifier::default();
    let outcome = session
        .copy(CopyKind::Name, &mut clipboard, &mut FailingClipboard::default(), &mut notifier)
        .unwrap();

    let expected = "button/container/background-color/hover";
    assert_eq!(outcome, CopyOutcome::Copied { text: expected.to_owned() });
    assert_eq!(clipboard.last(), Some(expected));
    assert_eq!(notifier.texts(), vec![COPIED_MESSAGE]);
    assert_eq!(notifier.messages[0].1.level, NotifyLevel::Success);

    let entry = &session.history()[0];
    assert_eq!(entry.token_name, expected);
    assert_eq!(entry.framework, Framework::Component);
    assert_eq!(entry.segments.len(), 4);
}

#[test]
fn json_copy_writes_export_payload() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    session.set_prefix(PrefixSlot::System, "ds");
    let mut clipboard = RecordingClipboard::default();
    let mut notifier = RecordingNotifier::default();
    session
        .copy(CopyKind::Json, &mut clipboard, &mut FailingClipboard::default(), &mut notifier)
        .unwrap();

    let payload: serde_json::Value = serde_json::from_str(clipboard.last().unwrap()).unwrap();
    assert_eq!(payload["framework"], "component");
    assert_eq!(payload["format"], "slash");
    assert_eq!(payload["tokenName"], "ds/button/container/background-color");
    assert_eq!(payload["fields"]["part"], "container");
    assert_eq!(payload["fields"]["state"], "");
}

#[test]
fn fallback_clipboard_is_used_when_primary_fails() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    let mut primary = FailingClipboard::default();
    let mut fallback = RecordingClipboard::default();
    let mut notifier = RecordingNotifier::default();
    let outcome = session
        .copy(CopyKind::Name, &mut primary, &mut fallback, &mut notifier)
        .unwrap();
    assert!(matches!(outcome, CopyOutcome::Copied { .. }));
    assert_eq!(primary.attempts, 1);
    assert_eq!(fallback.writes.len(), 1);
}

#[test]
fn double_clipboard_failure_keeps_state() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    let before = session.state().clone();
    let mut notifier = RecordingNotifier::default();
    let outcome = session
        .copy(
            CopyKind::Name,
            &mut FailingClipboard::default(),
            &mut FailingClipboard::default(),
            &mut notifier,
        )
        .unwrap();
    assert_eq!(outcome, CopyOutcome::ClipboardFailed);
    assert_eq!(notifier.texts(), vec![COPY_FAILED_MESSAGE]);
    assert_eq!(session.state(), &before);
    assert!(session.history().is_empty());
}

// =============================================================================
// History
// =============================================================================

#[test]
fn duplicate_copy_keeps_one_entry_at_front() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    let mut clipboard = RecordingClipboard::default();
    copy_name(&mut session, &mut clipboard);
    session.set_field(FieldId::Part, "label").unwrap();
    copy_name(&mut session, &mut clipboard);
    session.set_field(FieldId::Part, "container").unwrap();
    copy_name(&mut session, &mut clipboard);

    let names: Vec<&str> = session.history().iter().map(|e| e.token_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["button/container/background-color", "button/label/background-color"]
    );
}

#[test]
fn history_is_capped_and_evicts_oldest() {
    let properties = [
        "background-color", "text-color", "border-color", "border-width", "border-radius",
        "padding-x", "padding-y", "gap", "height", "width", "font-size",
    ];
    let mut session = session_with(
        Framework::Component,
        &[(FieldId::Component, "button"), (FieldId::Part, "container")],
    )
    .unwrap();
    let mut clipboard = RecordingClipboard::default();
    for property in properties {
        session.set_field(FieldId::Property, property).unwrap();
        copy_name(&mut session, &mut clipboard);
    }
    let history = session.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history[0].token_name, "button/container/font-size");
    assert!(history.iter().all(|e| e.token_name != "button/container/background-color"));
}

#[test]
fn fill_and_recopy_from_history() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    session.set_style(NameStyle::Underscore);
    let mut clipboard = RecordingClipboard::default();
    copy_name(&mut session, &mut clipboard);
    let id = session.history()[0].id;

    session.set_style(NameStyle::Slash);
    session.switch_framework(Framework::Primitive);
    let model = session.fill_from_history(id).unwrap();
    assert_eq!(model.framework, Framework::Component);
    assert_eq!(model.style, NameStyle::Underscore);
    assert_eq!(model.preview, "BUTTON_CONTAINER_BACKGROUND-COLOR");

    let mut notifier = RecordingNotifier::default();
    let outcome = session
        .copy_history(id, &mut clipboard, &mut FailingClipboard::default(), &mut notifier)
        .unwrap();
    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            text: "BUTTON_CONTAINER_BACKGROUND-COLOR".to_owned()
        }
    );
}

#[test]
fn remove_and_clear_history() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    let mut clipboard = RecordingClipboard::default();
    copy_name(&mut session, &mut clipboard);
    session.set_field(FieldId::Part, "icon").unwrap();
    copy_name(&mut session, &mut clipboard);

    let id = session.history()[1].id;
    assert_eq!(session.remove_history(id).unwrap().len(), 1);
    assert!(session.remove_history(id).is_err());

    let mut notifier = RecordingNotifier::default();
    assert!(session.clear_history(&mut notifier).is_empty());
    assert_eq!(notifier.texts(), vec!["History cleared."]);
    assert!(session.store().history.is_empty());
}

// =============================================================================
// Reset and Storage Failures
// =============================================================================

#[test]
fn clear_resets_fields_and_interaction() {
    let mut session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    session.set_prefix(PrefixSlot::Domain, "admin");
    session.toggle_modifier("hover");
    session.commit_field(FieldKey::Field(FieldId::Part)).unwrap();
    let mut clipboard = RecordingClipboard::default();
    copy_name(&mut session, &mut clipboard);

    let model = session.clear();
    assert_eq!(model.preview, "");
    assert!(!model.copy_ready);
    assert!(model.errors.is_empty());
    let form = session.form(Framework::Component);
    assert!(form.state.values.is_empty());
    assert!(form.state.modifiers.is_empty());
    assert_eq!(form.state.prefixes, Default::default());
    assert_eq!(form.interaction, Default::default());
}

#[test]
fn storage_failures_degrade_to_memory() {
    let mut session = Session::open(FailingStore::default());
    session.switch_framework(Framework::Component);
    for (field, value) in BUTTON_BACKGROUND {
        session.set_field(*field, value).unwrap();
    }
    session.set_style(NameStyle::Dot);
    let mut clipboard = RecordingClipboard::default();
    let outcome = copy_name(&mut session, &mut clipboard);
    assert!(matches!(outcome, CopyOutcome::Copied { .. }));
    assert_eq!(session.history().len(), 1);
    assert!(session.store().writes >= 2);
}

#[test]
fn preferences_survive_reopen() {
    let mut session = Session::open(MemoryStore::default());
    session.switch_framework(Framework::Semantic);
    session.set_style(NameStyle::Underscore);
    let store = session.store().clone();

    let reopened = Session::open(store);
    assert_eq!(reopened.active(), Framework::Semantic);
    assert_eq!(reopened.style(), NameStyle::Underscore);
}
