//! Client configuration.
//!
//! Values are resolved in layers: built-in defaults, then the TOML file,
//! then `TOKEN_NAMER_*` environment variables. Command-line flags are
//! applied last by the binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use token_namer_engine::NameStyle;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "token-namer.toml";

/// Overrides the data directory.
pub const ENV_DATA_DIR: &str = "TOKEN_NAMER_DATA_DIR";
/// Overrides the default name style.
pub const ENV_STYLE: &str = "TOKEN_NAMER_STYLE";
/// Overrides the clipboard command; split on whitespace.
pub const ENV_CLIPBOARD: &str = "TOKEN_NAMER_CLIPBOARD";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding history, preferences and the config file.
    pub data_dir: PathBuf,
    /// Style used when no `format` preference has been stored yet.
    pub default_style: NameStyle,
    /// Program and arguments that receive copied text on stdin.
    /// Empty disables the system clipboard; copies then go to stdout.
    pub clipboard_command: Vec<String>,
    /// Log filter used when `TOKEN_NAMER_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_style: NameStyle::default(),
            clipboard_command: default_clipboard_command(),
            log_level: "warn".to_owned(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// With `explicit` set, that file must exist. Otherwise
    /// `token-namer.toml` is looked up in the data directory and a missing
    /// file is not an error. `env` resolves environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or if an
    /// environment override holds an invalid value.
    pub fn load<F>(explicit: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => env(ENV_DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir)
                .join(CONFIG_FILE),
        };
        let mut config = match fs::read_to_string(&path) {
            Ok(text) => Self::from_toml_str(&text)
                .with_context(|| format!("Invalid config file {}", path.display()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
                Self::default()
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config file {}", path.display()))
            }
        };
        config.apply_env_overrides(env)?;
        tracing::debug!(config = %path.display(), data_dir = %config.data_dir.display(), "Configuration loaded");
        Ok(config)
    }

    /// Parses a TOML document; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML of the expected shape.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse configuration")
    }

    /// Applies `TOKEN_NAMER_*` overrides resolved through `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if `TOKEN_NAMER_STYLE` names no known style.
    pub fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = env(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(style) = env(ENV_STYLE) {
            match NameStyle::from_name(&style) {
                Some(style) => self.default_style = style,
                None => bail!("Invalid {ENV_STYLE} value '{style}' (expected slash, dot or underscore)"),
            }
        }
        if let Some(command) = env(ENV_CLIPBOARD) {
            self.clipboard_command = command.split_whitespace().map(str::to_owned).collect();
        }
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("token-namer")
}

fn default_clipboard_command() -> Vec<String> {
    let command: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(target_os = "windows") {
        &["clip"]
    } else {
        &["xclip", "-selection", "clipboard"]
    };
    command.iter().map(|s| (*s).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml_str("default_style = \"dot\"").unwrap_or_default();
        assert_eq!(config.default_style, NameStyle::Dot);
        assert_eq!(config.log_level, "warn");
        assert!(config.data_dir.ends_with("token-namer"));
    }

    #[test]
    fn unknown_style_in_file_is_rejected() {
        assert!(Config::from_toml_str("default_style = \"kebab\"").is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::default();
        let env = |key: &str| match key {
            ENV_STYLE => Some("UNDERSCORE".to_owned()),
            ENV_CLIPBOARD => Some("wl-copy --trim-newline".to_owned()),
            ENV_DATA_DIR => Some("/tmp/names".to_owned()),
            _ => None,
        };
        assert!(config.apply_env_overrides(env).is_ok());
        assert_eq!(config.default_style, NameStyle::Underscore);
        assert_eq!(config.clipboard_command, vec!["wl-copy", "--trim-newline"]);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/names"));
    }

    #[test]
    fn bad_env_style_is_an_error() {
        let mut config = Config::default();
        let env = |key: &str| (key == ENV_STYLE).then(|| "camel".to_owned());
        assert!(config.apply_env_overrides(env).is_err());
        assert!(config.apply_env_overrides(no_env).is_ok());
    }
}
