use std::io;

use anyhow::Context;

use stockroom_cli::Console;
use stockroom_infra::{ProductStore, load_app_config_from_env};

fn main() -> anyhow::Result<()> {
    let (config, ignored) = load_app_config_from_env();
    stockroom_observability::init(config.log_format);
    for err in &ignored {
        tracing::warn!(error = %err, "ignoring configuration override");
    }

    tracing::info!(catalog = %config.catalog_path.display(), "starting inventory console");
    let store = ProductStore::open(&config.catalog_path);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    stockroom_cli::run(&mut console, &store).context("console I/O failed")?;

    Ok(())
}
