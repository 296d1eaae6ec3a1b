use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global `fmt` subscriber using `filter` (e.g. `info`,
/// `projboard=debug`).
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| anyhow::anyhow!("Invalid log filter `{}`: {}", filter, e))?;
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    Ok(())
}
