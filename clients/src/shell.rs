//! Line-driven interactive session.
//!
//! Each input line is one command; the active form is printed after every
//! change. Errors are printed and the shell keeps reading.
//!
//! ```text
//! framework component
//! set component button
//! set part container
//! set property background-color
//! copy
//! ```

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use token_namer_engine::sinks::{Clipboard, Notifier};
use token_namer_engine::store::Store;
use token_namer_engine::{CopyKind, CopyOutcome, FieldKey, NameStyle, Session};
use token_namer_vocabulary::{FieldId, Framework, PrefixSlot};

use crate::render::write_model;

const HELP: &str = "\
commands:
  framework <primitive|semantic|component>
  set <field> [value]        set or clear a field
  blur <field|prefix.slot|modifiers>
  prefix <slot> [value]      add a prefix slot, optionally with a value
  unprefix <slot>
  mod <value>                toggle a modifier
  style <slash|dot|underscore>
  clear | preset <label> | copy | json | show | help | quit";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Switch the active framework.
    Framework(Framework),
    /// Set a field; an empty value clears it.
    Set(FieldId, String),
    /// Mark a target as touched.
    Blur(FieldKey),
    /// Add a prefix slot, optionally setting its value.
    Prefix(PrefixSlot, Option<String>),
    /// Remove a prefix slot.
    Unprefix(PrefixSlot),
    /// Toggle a modifier.
    Modifier(String),
    /// Change the name style.
    Style(NameStyle),
    /// Reset the active form.
    Clear,
    /// Fill the active form from a preset.
    Preset(String),
    /// Copy the name or the JSON payload.
    Copy(CopyKind),
    /// Print the active form.
    Show,
    /// Print the command list.
    Help,
    /// Leave the shell.
    Quit,
}

impl ShellCommand {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or a malformed argument.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match word {
            "framework" => ShellCommand::Framework(parse_framework(rest)?),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                ShellCommand::Set(parse_field(field)?, value.trim().to_owned())
            }
            "blur" => ShellCommand::Blur(parse_key(rest)?),
            "prefix" => {
                let (slot, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let value = value.trim();
                ShellCommand::Prefix(
                    parse_slot(slot)?,
                    (!value.is_empty()).then(|| value.to_owned()),
                )
            }
            "unprefix" => ShellCommand::Unprefix(parse_slot(rest)?),
            "mod" => {
                if rest.is_empty() {
                    bail!("usage: mod <value>");
                }
                ShellCommand::Modifier(rest.to_owned())
            }
            "style" => ShellCommand::Style(
                NameStyle::from_name(rest).ok_or_else(|| anyhow!("unknown style '{rest}'"))?,
            ),
            "clear" => ShellCommand::Clear,
            "preset" => ShellCommand::Preset(rest.to_owned()),
            "copy" => ShellCommand::Copy(CopyKind::Name),
            "json" => ShellCommand::Copy(CopyKind::Json),
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(Some(command))
    }
}

/// Parses a framework name.
///
/// # Errors
///
/// Returns an error if the name is not a framework.
pub fn parse_framework(name: &str) -> Result<Framework> {
    Framework::from_name(name).ok_or_else(|| anyhow!("unknown framework '{name}'"))
}

/// Parses a field id.
///
/// # Errors
///
/// Returns an error if the name is not a field id.
pub fn parse_field(name: &str) -> Result<FieldId> {
    FieldId::from_name(name).ok_or_else(|| anyhow!("unknown field '{name}'"))
}

/// Parses a prefix slot name.
///
/// # Errors
///
/// Returns an error if the name is not a prefix slot.
pub fn parse_slot(name: &str) -> Result<PrefixSlot> {
    PrefixSlot::from_name(name).ok_or_else(|| anyhow!("unknown prefix slot '{name}'"))
}

fn parse_key(name: &str) -> Result<FieldKey> {
    if name == "modifiers" {
        return Ok(FieldKey::Modifiers);
    }
    match name.strip_prefix("prefix.") {
        Some(slot) => parse_slot(slot).map(FieldKey::Prefix),
        None => parse_field(name).map(FieldKey::Field),
    }
}

/// Output sinks the shell copies through.
pub struct Sinks<'a> {
    /// Primary clipboard.
    pub clipboard: &'a mut dyn Clipboard,
    /// Used when the primary clipboard fails.
    pub fallback: &'a mut dyn Clipboard,
    /// Receives copy and history notifications.
    pub notifier: &'a mut dyn Notifier,
}

/// Runs commands from `input` until it ends or `quit` is read.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `out` fails.
pub fn run<S, R, W>(session: &mut Session<S>, input: R, out: &mut W, sinks: &mut Sinks<'_>) -> Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    write_model(out, &session.render()).context("Failed to write to output")?;
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        tracing::debug!(?command, "Shell command");
        if let Err(err) = execute(session, command, out, sinks) {
            writeln!(out, "error: {err}")?;
        }
    }
    Ok(())
}

fn execute<S, W>(session: &mut Session<S>, command: ShellCommand, out: &mut W, sinks: &mut Sinks<'_>) -> Result<()>
where
    S: Store,
    W: Write,
{
    let model = match command {
        ShellCommand::Framework(framework) => session.switch_framework(framework),
        ShellCommand::Set(field, value) => session.set_field(field, &value)?,
        ShellCommand::Blur(key) => session.commit_field(key)?,
        ShellCommand::Prefix(slot, None) => session.add_prefix(slot),
        ShellCommand::Prefix(slot, Some(value)) => session.set_prefix(slot, &value),
        ShellCommand::Unprefix(slot) => session.remove_prefix(slot),
        ShellCommand::Modifier(value) => session.toggle_modifier(&value),
        ShellCommand::Style(style) => session.set_style(style),
        ShellCommand::Clear => session.clear(),
        ShellCommand::Preset(label) => session.apply_preset(&label)?,
        ShellCommand::Copy(kind) => {
            let outcome = session.copy(kind, sinks.clipboard, sinks.fallback, sinks.notifier)?;
            if let CopyOutcome::NotReady { headline } = outcome {
                writeln!(out, "not ready: {headline}")?;
                session.render()
            } else {
                return Ok(());
            }
        }
        ShellCommand::Show => session.render(),
        ShellCommand::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(());
        }
        ShellCommand::Quit => return Ok(()),
    };
    write_model(out, &model)?;
    Ok(())
}
