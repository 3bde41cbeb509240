use std::path::Path;

use anyhow::Context;
use ledger::{gateway::PersistenceGateway, store, Config, FileGateway};
use tracing::instrument;

/// Creates a fresh ledger root: a default `config.toml` and an empty store.
#[instrument(level = "debug")]
pub fn run(root: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(root)
        .with_context(|| format!("failed to create {}", root.display()))?;

    let config_path = root.join("config.toml");
    if config_path.exists() {
        anyhow::bail!("ledger already initialized at {}", root.display());
    }

    let config = Config::default();
    config.save(&config_path).map_err(|e| anyhow::anyhow!(e))?;

    let store_path = root.join(config.store());
    if !store_path.exists() {
        let mut gateway = FileGateway::new(store_path);
        gateway.save(&store::load_or_create(None))?;
    }

    println!("Initialized empty ledger in {}", root.display());
    Ok(())
}
