use std::path::Path;

use clap::Parser;
use ledger::{NumeralStyle, SeriesId};
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `lled show`.
#[derive(Debug, Parser)]
#[command(about = "Show detailed information about one series")]
pub struct Show {
    /// The series id (as shown by `lled list`)
    #[arg(value_parser = super::parse_series_id)]
    id: SeriesId,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = super::load_config(root);
        let session = super::open_session(root, &config);

        let record = session
            .series_by_id(&self.id)
            .ok_or_else(|| anyhow::anyhow!("no series with id '{}'", self.id))?;

        let next = record.launch_count().saturating_add(1);

        println!("{}", record.display_label().info());
        println!("  id:       {}", record.id());
        println!("  launches: {}", record.launch_count());
        println!(
            "{}",
            format!(
                "  next:     {} {} | {} {} | {} {}",
                record.display_label(),
                NumeralStyle::Decimal.apply(next),
                record.display_label(),
                NumeralStyle::Roman.apply(next),
                record.display_label(),
                NumeralStyle::Alphabetic.apply(next),
            )
            .dim()
        );

        Ok(())
    }
}
