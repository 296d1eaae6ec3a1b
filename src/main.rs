use clap::Parser;
use tracing::info;

use projboard::{AppConfig, logging};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    logging::init(&config.log_filter)?;

    info!(
        description_max_length = config.description_max_length,
        max_people = ?config.max_people,
        "starting projboard"
    );

    run(config)
}

#[cfg(feature = "gui")]
fn run(config: AppConfig) -> anyhow::Result<()> {
    projboard::gui::run(config).map_err(|e| anyhow::anyhow!("GUI exited with error: {}", e))
}

#[cfg(not(feature = "gui"))]
fn run(_config: AppConfig) -> anyhow::Result<()> {
    anyhow::bail!("projboard was built without the `gui` feature")
}
