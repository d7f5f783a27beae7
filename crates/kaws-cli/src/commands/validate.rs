//! Validate a cluster.yaml.

use anyhow::{Context, Result};
use colored::Colorize;
use kaws_core::ClusterConfig;
use std::path::Path;

pub fn execute(config: &Path) -> Result<()> {
    let cluster = ClusterConfig::load(config)
        .with_context(|| format!("Failed to load {}", config.display()))?;

    let pools = cluster.node_pools()?;

    println!(
        "{} cluster {} is valid",
        "✓".green().bold(),
        cluster.settings.cluster_name.cyan()
    );
    for pool in &pools {
        println!("  • node pool {}", pool.name.cyan());
    }

    Ok(())
}
