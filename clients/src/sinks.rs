//! Terminal implementations of the engine's clipboard and notification seams.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use token_namer_engine::sinks::{Clipboard, NotifyLevel, NotifyOptions, Notifier};
use token_namer_engine::ClipboardError;

/// Clipboard backed by an external program that reads the text on stdin
/// (`pbcopy`, `xclip -selection clipboard`, `wl-copy`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Builds a clipboard from `[program, args...]`; `None` when empty.
    #[must_use]
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// The program that receives the text.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()).map_err(ClipboardError::from),
            None => Err(ClipboardError::Rejected(format!("{} has no stdin", self.program))),
        };
        // Stdin is closed here, so the child can always be reaped.
        let status = child.wait()?;
        written?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Rejected(format!("{} exited with {status}", self.program)))
        }
    }
}

/// Fallback clipboard that prints the text on its own line.
#[derive(Debug)]
pub struct StreamClipboard<W> {
    out: W,
}

impl<W: Write> StreamClipboard<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the clipboard, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StreamClipboard<io::Stdout> {
    /// Prints copied text to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for StreamClipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Prints notifications to stderr, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl StderrNotifier {
    /// Renders one notification line.
    #[must_use]
    pub fn line(message: &str, options: &NotifyOptions) -> String {
        let tag = match options.level {
            NotifyLevel::Info => "info",
            NotifyLevel::Success => "ok",
            NotifyLevel::Error => "error",
        };
        match options.title {
            Some(title) => format!("[{tag}] {title}: {message}"),
            None => format!("[{tag}] {message}"),
        }
    }
}

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str, options: NotifyOptions) {
        eprintln!("{}", Self::line(message, &options));
    }
}
