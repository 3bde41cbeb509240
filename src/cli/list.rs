use std::path::Path;

use clap::Parser;
use ledger::Record;
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `lled list`.
#[derive(Debug, Parser, Default)]
#[command(about = "List all series with labels and launch counts")]
pub struct List {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format rows for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = super::load_config(root);
        let session = super::open_session(root, &config);

        let series = session.ordered_series();
        let opaque = session
            .records()
            .filter(|record| matches!(record, Record::Opaque(_)))
            .count();

        if series.is_empty() && opaque == 0 {
            println!("No series recorded yet. Roll out a vehicle with a [series] tag.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => Self::output_json(&series)?,
            OutputFormat::Table => self.output_table(&series, opaque),
        }

        Ok(())
    }

    fn output_json(series: &[ledger::SeriesRecord]) -> anyhow::Result<()> {
        let rows: Vec<_> = series
            .iter()
            .map(|record| {
                serde_json::json!({
                    "id": record.id().as_str(),
                    "label": record.display_label(),
                    "launches": record.launch_count(),
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&rows)?);
        Ok(())
    }

    fn output_table(&self, series: &[ledger::SeriesRecord], opaque: usize) {
        let id_width = series
            .iter()
            .map(|record| record.id().as_str().len())
            .chain(std::iter::once("ID".len()))
            .max()
            .unwrap_or(2);
        let label_width = series
            .iter()
            .map(|record| record.display_label().len())
            .chain(std::iter::once("LABEL".len()))
            .max()
            .unwrap_or(5);

        if !self.quiet {
            let header = format!("{:<id_width$}  {:<label_width$}  LAUNCHES", "ID", "LABEL");
            println!("{}", header.dim());
        }

        for record in series {
            println!(
                "{:<id_width$}  {:<label_width$}  {:>8}",
                record.id().as_str(),
                record.display_label(),
                record.launch_count()
            );
        }

        if opaque > 0 && !self.quiet {
            let note = format!("({opaque} unrecognized ledger entries preserved)");
            println!("{}", note.dim());
        }
    }
}
