use std::path::Path;

use anyhow::Context;
use clap::Parser;
use ledger::NumeralStyle;
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `lled rollout`.
#[derive(Debug, Parser)]
#[command(about = "Apply the launch counter to a vehicle name")]
pub struct Rollout {
    /// The raw vehicle name, optionally carrying a [series] tag
    name: String,

    /// Numeral style for this rollout (defaults to the configured style)
    #[arg(long, value_enum)]
    style: Option<NumeralStyle>,

    /// Evaluate the rename without persisting the counter
    #[arg(long)]
    dry_run: bool,
}

impl Rollout {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = super::load_config(root);
        let mut session = super::open_session(root, &config);
        let style = self.style.unwrap_or(config.style());

        match session.rollout(&self.name, style) {
            ledger::Rollout::Renamed(new_name) => {
                if !self.dry_run {
                    session.save().context("failed to persist the ledger")?;
                }
                println!("{}", new_name.success());
            }
            ledger::Rollout::Unchanged => {
                // No tag, or a corrupt record: the name stays as given.
                println!("{}", self.name);
            }
        }

        Ok(())
    }
}
