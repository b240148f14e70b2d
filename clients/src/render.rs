//! Plain-text rendering of session state for the terminal.

use std::io::{self, Write};

use token_namer_engine::session::{FieldView, PrefixView};
use token_namer_engine::{FieldKey, HistoryEntry, Issue, RenderModel, ValidationResult};
use token_namer_vocabulary::Term;

/// Writes the active form: preview, prefixes, visible fields, modifiers and status.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_model<W: Write>(out: &mut W, model: &RenderModel) -> io::Result<()> {
    let preview = if model.preview.is_empty() {
        "(empty)"
    } else {
        model.preview.as_str()
    };
    writeln!(out, "[{} {}] {preview}", model.framework, model.style)?;
    for prefix in &model.prefixes {
        write_prefix(out, model, prefix)?;
    }
    for field in model.fields.iter().filter(|f| f.visible) {
        write_field(out, model, field)?;
    }
    let modifiers = model.modifiers.join(", ");
    writeln!(out, "  {:<14} {modifiers}", "modifiers")?;
    if let Some(issue) = &model.modifier_message {
        write_issue(out, model, FieldKey::Modifiers, issue)?;
    }
    writeln!(out, "  status: {}", model.status.message)
}

fn write_prefix<W: Write>(out: &mut W, model: &RenderModel, prefix: &PrefixView) -> io::Result<()> {
    let key = FieldKey::Prefix(prefix.slot);
    writeln!(out, "  {:<14} {}", key.to_string(), prefix.value)?;
    match &prefix.message {
        Some(issue) => write_issue(out, model, key, issue),
        None => Ok(()),
    }
}

fn write_field<W: Write>(out: &mut W, model: &RenderModel, field: &FieldView) -> io::Result<()> {
    let label = if field.required {
        format!("{}*", field.label)
    } else {
        field.label.to_owned()
    };
    writeln!(out, "  {label:<14} {}", field.value)?;
    match &field.message {
        Some(issue) => write_issue(out, model, FieldKey::Field(field.id), issue),
        None => Ok(()),
    }
}

fn write_issue<W: Write>(out: &mut W, model: &RenderModel, key: FieldKey, issue: &Issue) -> io::Result<()> {
    let marker = if model.errors.contains_key(&key) { "!" } else { "~" };
    writeln!(out, "    {marker} {}", issue.message)
}

/// Writes every error and warning of an authoritative check, ignoring
/// interaction state.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_validation<W: Write>(out: &mut W, result: &ValidationResult) -> io::Result<()> {
    for (key, issue) in &result.errors {
        writeln!(out, "  error   {key}: {}", issue.message)?;
    }
    for (key, issue) in &result.warnings {
        writeln!(out, "  warning {key}: {}", issue.message)?;
    }
    Ok(())
}

/// Writes a term list as aligned `value  label` rows.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_terms<W: Write>(out: &mut W, terms: &[Term]) -> io::Result<()> {
    let width = terms.iter().map(|t| t.value.len()).max().unwrap_or(0);
    for term in terms {
        writeln!(out, "{:<width$}  {}", term.value, term.label)?;
    }
    Ok(())
}

/// Writes history entries, newest first.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_history<W: Write>(out: &mut W, entries: &[HistoryEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No history yet.");
    }
    for entry in entries {
        writeln!(
            out,
            "{}  {}  {:<9}  {}",
            entry.id,
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.framework.as_str(),
            entry.token_name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use token_namer_engine::session::Session;
    use token_namer_engine::store::MemoryStore;
    use token_namer_vocabulary::FieldId;

    fn rendered(model: &RenderModel) -> String {
        let mut buf = Vec::new();
        assert!(write_model(&mut buf, model).is_ok());
        String::from_utf8(buf).unwrap_or_default()
    }

    #[test]
    fn empty_form_shows_placeholder() {
        let session = Session::open(MemoryStore::default());
        let text = rendered(&session.render());
        assert!(text.starts_with("[primitive slash] (empty)"), "{text}");
        assert!(text.contains("Property*"), "{text}");
        assert!(!text.contains("Group"), "{text}");
    }

    #[test]
    fn field_errors_are_marked() {
        let mut session = Session::open(MemoryStore::default());
        let model = session.set_field(FieldId::Property, "colour");
        let text = model.map(|m| rendered(&m)).unwrap_or_default();
        assert!(text.contains("! 'colour' is not a supported property."), "{text}");
    }

    #[test]
    fn terms_are_aligned() {
        let terms = [Term::new("sm", "Small"), Term::new("large", "Large")];
        let mut buf = Vec::new();
        assert!(write_terms(&mut buf, &terms).is_ok());
        assert_eq!(String::from_utf8(buf).unwrap_or_default(), "sm     Small\nlarge  Large\n");
    }
}
