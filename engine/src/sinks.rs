//! Output seams: clipboard and notification sinks.
//!
//! Both are consumed through traits so any presentation layer can supply
//! its own mechanism. A clipboard failure is reported back as data; a
//! notification is fire-and-forget.

use crate::error::ClipboardError;

/// Destination for copied text.
pub trait Clipboard {
    /// Writes `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] if the mechanism rejects the write.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes through `primary`, trying `fallback` only if `primary` fails.
///
/// Returns false when both fail; never propagates the error.
pub fn write_with_fallback(
    primary: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
    text: &str,
) -> bool {
    match primary.write_text(text) {
        Ok(()) => true,
        Err(primary_err) => {
            tracing::warn!(error = %primary_err, "Primary clipboard failed, trying fallback");
            match fallback.write_text(text) {
                Ok(()) => true,
                Err(fallback_err) => {
                    tracing::warn!(error = %fallback_err, "Fallback clipboard failed");
                    false
                }
            }
        }
    }
}

/// Tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    /// Neutral information.
    Info,
    /// An action succeeded.
    Success,
    /// An action failed.
    Error,
}

/// Optional presentation hints for a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyOptions {
    /// Short heading shown above the message.
    pub title: Option<&'static str>,
    /// Tone of the notification.
    pub level: NotifyLevel,
}

impl NotifyOptions {
    /// Neutral notification without a title.
    #[must_use]
    pub fn info() -> Self {
        Self {
            title: None,
            level: NotifyLevel::Info,
        }
    }

    /// Success notification without a title.
    #[must_use]
    pub fn success() -> Self {
        Self {
            title: None,
            level: NotifyLevel::Success,
        }
    }

    /// Error notification with a title.
    #[must_use]
    pub fn error(title: &'static str) -> Self {
        Self {
            title: Some(title),
            level: NotifyLevel::Error,
        }
    }
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    /// Shows `message`. Must not block the caller.
    fn notify(&mut self, message: &str, options: NotifyOptions);
}

/// Clipboard that accepts nothing; useful when no fallback exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Rejected("no clipboard available".to_owned()))
    }
}
