//! corgi command-line snippet manager: configuration entry point.
//!
//! # Usage
//!
//! ```text
//! corgi [--verbose] <COMMAND>
//!
//! Commands:
//!   init        Create the config with detected defaults (if missing)
//!   show        Print the current config as JSON
//!   path        Print the config file location
//!   configure   Change the editor, filter command or snippets locations
//! ```
//!
//! Every command loads the config first, so the very first invocation of any
//! of them bootstraps `<config home>/.corgi/`.
//!
//! Logs go to stderr; the level is taken from `RUST_LOG` (e.g.
//! `RUST_LOG=debug`), defaulting to `warn`, or `debug` with `--verbose`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use corgi::application::config_manager::ConfigManager;
use corgi::application::configure::configure;
use corgi::infrastructure::platform::SystemEnvironment;
use corgi::infrastructure::storage::fs::LocalFileStore;
use corgi_core::{encode_config, ConfigUpdate, JsonStyle};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Command-line snippet manager.
#[derive(Debug, Parser)]
#[command(name = "corgi", about = "Command-line snippet manager", version)]
struct Cli {
    /// Log every bootstrap step to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the config with detected defaults if it does not exist yet.
    Init,

    /// Print the current config as JSON.
    Show,

    /// Print the location of the config file.
    Path,

    /// Change settings in the config file.
    Configure {
        /// Editor used to write snippets (path or command name).
        #[arg(long)]
        editor: Option<String>,

        /// Fuzzy-filter command used to pick snippets (e.g. fzf, peco).
        #[arg(long)]
        filter_cmd: Option<String>,

        /// File storing the snippets index.
        #[arg(long)]
        snippets_file: Option<PathBuf>,

        /// Directory storing individual snippets.
        #[arg(long)]
        snippets_dir: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let manager = ConfigManager::new(SystemEnvironment::new(), LocalFileStore::new());

    match cli.command {
        Command::Init => {
            manager.load().context("failed to initialise config")?;
            let path = manager.config_file_path().context("failed to locate config file")?;
            println!("{}", path.display());
        }
        Command::Show => {
            let config = manager.load().context("failed to load config")?;
            let text = encode_config(&config, &JsonStyle::default())
                .context("failed to render config")?;
            println!("{text}");
        }
        Command::Path => {
            let path = manager.config_file_path().context("failed to locate config file")?;
            println!("{}", path.display());
        }
        Command::Configure {
            editor,
            filter_cmd,
            snippets_file,
            snippets_dir,
        } => {
            let update = ConfigUpdate {
                snippets_file,
                snippets_dir,
                editor,
                filter_cmd,
            };
            let outcome = configure(&manager, &update).context("failed to update config")?;
            let text = encode_config(&outcome.config, &JsonStyle::default())
                .context("failed to render config")?;
            println!("{text}");
        }
    }

    Ok(())
}
