//! Print effective node pool settings.

use anyhow::{bail, Context, Result};
use kaws_core::util::to_yaml;
use kaws_core::ClusterConfig;
use std::path::Path;
use tracing::debug;

pub fn execute(config: &Path, pool: Option<&str>) -> Result<()> {
    let cluster = ClusterConfig::load(config)
        .with_context(|| format!("Failed to load {}", config.display()))?;

    let mut pools = cluster.node_pools()?;
    if let Some(name) = pool {
        pools.retain(|p| p.name == name);
        if pools.is_empty() {
            bail!("no node pool named \"{}\" in {}", name, config.display());
        }
    }
    debug!(count = pools.len(), "printing composed node pools");

    print!("{}", to_yaml(&pools)?);
    Ok(())
}
