//! Support code for the `token-namer` command-line client.
//!
//! | Module | Role |
//! |---|---|
//! | [`config`] | Layered TOML and environment configuration |
//! | [`logging`] | Tracing subscriber on stderr |
//! | [`sinks`] | Command clipboard, stdout fallback and stderr notifications |
//! | [`render`] | Plain-text views of forms, terms and history |
//! | [`shell`] | Line-driven interactive session |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod logging;
pub mod render;
pub mod shell;
pub mod sinks;

use anyhow::{bail, Result};

/// Splits a `key=value` argument; the value may be empty.
///
/// # Errors
///
/// Returns an error if there is no `=` or the key is empty.
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_owned(), value.trim().to_owned()))
        }
        _ => bail!("expected key=value, got '{arg}'"),
    }
}
