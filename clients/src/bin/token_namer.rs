//! `token-namer`: composes, validates and copies design-token names from the
//! controlled vocabulary of the primitive, semantic and component frameworks.
//!
//! History and preferences live in the data directory
//! (`history.json`, `preferences.json`).
//!
//! **Usage:**
//! ```
//! token-namer compose --framework component --set component=button \
//!     --set part=container --set property=background-color [--style underscore] [--copy]
//! token-namer options --framework primitive --field group --set property=color
//! token-namer presets [--framework semantic]
//! token-namer history list | remove <id> | clear | copy <id>
//! token-namer vocab
//! token-namer shell
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use token_namer_clients::config::Config;
use token_namer_clients::render::{write_history, write_terms, write_validation};
use token_namer_clients::shell::{self, parse_field, parse_framework, parse_slot, Sinks};
use token_namer_clients::sinks::{CommandClipboard, StderrNotifier, StreamClipboard};
use token_namer_clients::{logging, parse_assignment};
use token_namer_engine::export::export_json;
use token_namer_engine::normalize::{filter_terms, normalize_segment};
use token_namer_engine::sinks::{Clipboard, NoClipboard};
use token_namer_engine::store::{JsonFileStore, MemoryStore, Store, PREF_FORMAT};
use token_namer_engine::{schema, CopyKind, CopyOutcome, NameStyle, Session};
use token_namer_vocabulary::serializer::json::to_json;
use token_namer_vocabulary::{FieldId, Framework, Vocabulary};
use uuid::Uuid;

/// Compose and validate design-token names.
#[derive(Parser)]
#[command(
    name = "token-namer",
    version,
    about = "Compose and validate design-token names from a controlled vocabulary"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: token-namer.toml in the data directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for history and preferences.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a name from field values, check it and optionally copy it.
    Compose(ComposeArgs),

    /// List the allowed terms of a field.
    Options {
        /// Framework: primitive, semantic or component.
        #[arg(long, short)]
        framework: String,

        /// Field to list options for.
        #[arg(long)]
        field: String,

        /// Upstream values as field=value, in field order.
        #[arg(long = "set")]
        sets: Vec<String>,

        /// Case-insensitive filter on value or label.
        #[arg(long)]
        query: Option<String>,
    },

    /// List ready-made compositions.
    Presets {
        /// Only list presets of this framework.
        #[arg(long, short)]
        framework: Option<String>,
    },

    /// Inspect and manage copied names.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Print the vocabulary as JSON.
    Vocab,

    /// Interactive session reading commands from stdin.
    Shell,
}

#[derive(Args)]
struct ComposeArgs {
    /// Framework: primitive, semantic or component.
    #[arg(long, short)]
    framework: String,

    /// Field values as field=value, in field order.
    #[arg(long = "set")]
    sets: Vec<String>,

    /// Prefix values as slot=value (system, theme, domain).
    #[arg(long = "prefix")]
    prefixes: Vec<String>,

    /// Suffix modifier; repeatable.
    #[arg(long = "modifier")]
    modifiers: Vec<String>,

    /// Name style: slash, dot or underscore.
    #[arg(long)]
    style: Option<String>,

    /// Normalize free text into segments before setting it.
    #[arg(long)]
    normalize: bool,

    /// Copy the result and record it in the history.
    #[arg(long)]
    copy: bool,

    /// Use the JSON payload instead of the bare name.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List entries, newest first.
    List,
    /// Remove one entry.
    Remove {
        /// Entry id.
        id: Uuid,
    },
    /// Remove every entry.
    Clear,
    /// Copy the stored name of an entry again.
    Copy {
        /// Entry id.
        id: Uuid,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref(), |key| std::env::var(key).ok())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    logging::init(&config.log_level, cli.verbose)?;

    let mut primary: Box<dyn Clipboard> = match CommandClipboard::from_command(&config.clipboard_command) {
        Some(clipboard) => Box::new(clipboard),
        None => Box::new(NoClipboard),
    };
    let mut fallback = StreamClipboard::stdout();
    let mut notifier = StderrNotifier;
    let mut sinks = Sinks {
        clipboard: primary.as_mut(),
        fallback: &mut fallback,
        notifier: &mut notifier,
    };

    let ok = match cli.command {
        Commands::Compose(args) => compose(&config, args, &mut sinks)?,
        Commands::Options {
            framework,
            field,
            sets,
            query,
        } => options(&framework, &field, &sets, query.as_deref())?,
        Commands::Presets { framework } => presets(framework.as_deref())?,
        Commands::History { action } => history(&config, action, &mut sinks)?,
        Commands::Vocab => {
            let json = serde_json::to_string_pretty(&to_json(Vocabulary::full()))
                .context("Failed to serialize vocabulary")?;
            println!("{json}");
            true
        }
        Commands::Shell => {
            let mut session = open_session(&config);
            shell::run(&mut session, io::stdin().lock(), &mut io::stdout(), &mut sinks)?;
            true
        }
    };

    if !ok {
        process::exit(1);
    }
    Ok(())
}

/// Opens the file-backed session, applying the configured style when no
/// `format` preference has been stored yet.
fn open_session(config: &Config) -> Session<JsonFileStore> {
    let store = JsonFileStore::new(&config.data_dir);
    let stored_style = store.load_preference(PREF_FORMAT).ok().flatten();
    let mut session = Session::open(store);
    if stored_style.is_none() && config.default_style != session.style() {
        session.set_style(config.default_style);
    }
    session
}

fn parse_style(name: &str) -> Result<NameStyle> {
    NameStyle::from_name(name).ok_or_else(|| anyhow!("unknown style '{name}' (expected slash, dot or underscore)"))
}

fn compose(config: &Config, args: ComposeArgs, sinks: &mut Sinks<'_>) -> Result<bool> {
    let framework = parse_framework(&args.framework)?;
    let mut session = open_session(config);
    session.switch_framework(framework);
    if let Some(style) = &args.style {
        session.set_style(parse_style(style)?);
    }

    let segment = |text: &str| {
        if args.normalize {
            normalize_segment(text)
        } else {
            text.to_owned()
        }
    };
    for arg in &args.prefixes {
        let (slot, value) = parse_assignment(arg)?;
        session.set_prefix(parse_slot(&slot)?, &segment(&value));
    }
    for arg in &args.sets {
        let (field, value) = parse_assignment(arg)?;
        let field = parse_field(&field)?;
        // Primitive property values are mixed case (`fontFamily`).
        let value = if framework == Framework::Primitive && field == FieldId::Property {
            value
        } else {
            segment(&value)
        };
        session
            .set_field(field, &value)
            .with_context(|| format!("Cannot set {field}"))?;
    }
    session.set_modifiers(args.modifiers.iter().map(|m| segment(m)));

    let kind = if args.json { CopyKind::Json } else { CopyKind::Name };
    if args.copy {
        let outcome = session.copy(kind, sinks.clipboard, sinks.fallback, sinks.notifier)?;
        return Ok(match outcome {
            CopyOutcome::Copied { .. } => true,
            CopyOutcome::NotReady { headline } => {
                eprintln!("not ready: {headline}");
                write_validation(&mut io::stderr(), &session.validate())?;
                false
            }
            CopyOutcome::ClipboardFailed => false,
        });
    }

    let result = session.validate();
    let ready = result.copy_ready(&session.preview());
    if args.json {
        println!("{}", export_json(session.state(), session.style())?);
    } else {
        println!("{}", session.preview());
    }
    write_validation(&mut io::stdout(), &result)?;
    println!("{}", if ready { "ready" } else { "not ready" });
    Ok(ready)
}

fn options(framework: &str, field: &str, sets: &[String], query: Option<&str>) -> Result<bool> {
    let framework = parse_framework(framework)?;
    let field = parse_field(field)?;
    schema(framework).require_field(field)?;

    let mut session = Session::open(MemoryStore::default());
    session.switch_framework(framework);
    for arg in sets {
        let (upstream, value) = parse_assignment(arg)?;
        session.set_field(parse_field(&upstream)?, &value)?;
    }
    let model = session.render();
    let Some(view) = model.fields.iter().find(|f| f.id == field) else {
        return Ok(false);
    };
    if !view.visible {
        eprintln!("{} is hidden for the current values.", view.label);
    }
    let terms = filter_terms(&view.options, query.unwrap_or(""));
    write_terms(&mut io::stdout(), &terms)?;
    Ok(true)
}

fn presets(framework: Option<&str>) -> Result<bool> {
    let frameworks = match framework {
        Some(name) => vec![parse_framework(name)?],
        None => Framework::ALL.to_vec(),
    };
    let vocabulary = Vocabulary::full();
    for framework in frameworks {
        for preset in vocabulary.presets_for(framework) {
            println!("{:<9}  {}", framework.as_str(), preset.label);
        }
    }
    Ok(true)
}

fn history(config: &Config, action: HistoryAction, sinks: &mut Sinks<'_>) -> Result<bool> {
    let mut session = open_session(config);
    let mut out = io::stdout();
    match action {
        HistoryAction::List => write_history(&mut out, session.history())?,
        HistoryAction::Remove { id } => {
            let remaining = session.remove_history(id)?;
            write_history(&mut out, remaining)?;
        }
        HistoryAction::Clear => {
            session.clear_history(sinks.notifier);
        }
        HistoryAction::Copy { id } => {
            let outcome = session.copy_history(id, sinks.clipboard, sinks.fallback, sinks.notifier)?;
            return Ok(matches!(outcome, CopyOutcome::Copied { .. }));
        }
    }
    Ok(true)
}

