//! Scripted shell sessions against in-memory sessions.

use token_namer_clients::shell::{run, Sinks};
use token_namer_engine::store::MemoryStore;
use token_namer_engine::Session;
use token_namer_test_helpers::{FailingClipboard, RecordingClipboard, RecordingNotifier};
use token_namer_vocabulary::{FieldId, Framework};

struct Run {
    output: String,
    clipboard: RecordingClipboard,
    notifier: RecordingNotifier,
}

fn run_script(session: &mut Session<MemoryStore>, script: &str) -> Run {
    let mut clipboard = RecordingClipboard::default();
    let mut fallback = FailingClipboard::default();
    let mut notifier = RecordingNotifier::default();
    let mut out = Vec::new();
    {
        let mut sinks = Sinks {
            clipboard: &mut clipboard,
            fallback: &mut fallback,
            notifier: &mut notifier,
        };
        assert!(run(session, script.as_bytes(), &mut out, &mut sinks).is_ok());
    }
    Run {
        output: String::from_utf8(out).unwrap_or_default(),
        clipboard,
        notifier,
    }
}

#[test]
fn composes_and_copies_a_component_name() {
    let mut session = Session::open(MemoryStore::default());
    let script = "\
framework component
set component button
set part container
set property background-color
style underscore
copy
quit
set component card
";
    let run = run_script(&mut session, script);
    assert_eq!(run.clipboard.last(), Some("BUTTON_CONTAINER_BACKGROUND-COLOR"));
    assert!(run.notifier.texts().contains(&"Copied."));
    assert_eq!(session.history().len(), 1);
    // Lines after quit are never executed.
    assert_eq!(session.state().values.value(FieldId::Component), "button");
    assert!(run.output.contains("[component underscore] BUTTON_CONTAINER_BACKGROUND-COLOR"));
}

#[test]
fn blocked_copy_reports_the_headline() {
    let mut session = Session::open(MemoryStore::default());
    let run = run_script(&mut session, "framework semantic\ncopy\n");
    assert!(run.output.contains("not ready: Role is required."), "{}", run.output);
    assert!(run.output.contains("! Role is required."), "{}", run.output);
    assert!(run.clipboard.writes.is_empty());
    assert_eq!(run.notifier.texts(), vec!["Fix validation errors before copying."]);
    assert!(session.history().is_empty());
}

#[test]
fn errors_do_not_stop_the_shell() {
    let mut session = Session::open(MemoryStore::default());
    let run = run_script(&mut session, "frobnicate\nset part label\nset property color\n");
    assert!(run.output.contains("error: unknown command 'frobnicate'"), "{}", run.output);
    assert!(run.output.contains("error: field 'part'"), "{}", run.output);
    assert_eq!(session.active(), Framework::Primitive);
    assert_eq!(session.preview(), "color");
}

#[test]
fn prefixes_and_modifiers_reach_the_preview() {
    let mut session = Session::open(MemoryStore::default());
    let script = "\
set property color
set group blue
set identifier 500
prefix theme dark
mod hover
mod muted
mod hover
";
    run_script(&mut session, script);
    assert_eq!(session.preview(), "dark/color/blue/500/muted");
}

#[test]
fn presets_fill_the_active_form() {
    let mut session = Session::open(MemoryStore::default());
    let run = run_script(&mut session, "framework component\npreset button/container/background-color\nshow\n");
    assert_eq!(session.preview(), "button/container/background-color");
    assert!(run.output.contains("Ready to copy."), "{}", run.output);
}
