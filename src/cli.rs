//! Command-line surface over the ledger engine.

use std::path::{Path, PathBuf};

mod init;
mod list;
mod rollout;
mod set;
mod show;
mod terminal;

use clap::ArgAction;
use ledger::{Config, FileGateway, SeriesId, Session};

/// Parse a series id from a string.
///
/// This is a CLI boundary function; the engine itself only ever derives ids
/// from bracketed tags.
fn parse_series_id(s: &str) -> Result<SeriesId, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// Top-level argument parser.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the ledger root directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// Runs the selected subcommand, defaulting to `list`.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::List(list::List::default()))
            .run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Subcommands.
#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Apply the launch counter to a vehicle name
    Rollout(rollout::Rollout),

    /// List all series with labels and launch counts (default)
    List(list::List),

    /// Show detailed information about one series
    Show(show::Show),

    /// Manually set a series' launch count
    ///
    /// This bypasses the rollout increment entirely.
    Set(set::Set),

    /// Initialize a new ledger root
    Init,
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::Rollout(cmd) => cmd.run(root),
            Self::List(cmd) => cmd.run(root),
            Self::Show(cmd) => cmd.run(root),
            Self::Set(cmd) => cmd.run(root),
            Self::Init => init::run(root),
        }
    }
}

/// Loads the configuration from the ledger root, falling back to defaults.
fn load_config(root: &Path) -> Config {
    let path = root.join("config.toml");
    Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// Opens a session over the file gateway described by the configuration.
fn open_session(root: &Path, config: &Config) -> Session<FileGateway> {
    let mut gateway = FileGateway::new(root.join(config.store()));
    if let Some(legacy) = config.legacy_store() {
        gateway = gateway.with_legacy(root.join(legacy));
    }
    Session::open(gateway)
}
