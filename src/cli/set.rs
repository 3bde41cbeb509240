use std::path::Path;

use anyhow::Context;
use clap::Parser;
use ledger::SeriesId;
use tracing::instrument;

/// Command arguments for `lled set`.
#[derive(Debug, Parser)]
#[command(about = "Manually set a series' launch count")]
pub struct Set {
    /// The series id (as shown by `lled list`)
    #[arg(value_parser = super::parse_series_id)]
    id: SeriesId,

    /// The new launch count (must be at least 1)
    count: u32,
}

impl Set {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = super::load_config(root);
        let mut session = super::open_session(root, &config);

        session.set_launch_count(&self.id, self.count)?;
        session.save().context("failed to persist the ledger")?;

        println!("{} is now at launch {}", self.id, self.count);
        Ok(())
    }
}
