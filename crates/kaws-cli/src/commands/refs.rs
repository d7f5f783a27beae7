//! Print template references to network resources.

use anyhow::{Context, Result};
use colored::Colorize;
use kaws_core::ClusterConfig;
use std::path::Path;

pub fn execute(config: &Path) -> Result<()> {
    let cluster = ClusterConfig::load(config)
        .with_context(|| format!("Failed to load {}", config.display()))?;
    let main = &cluster.settings;

    println!("{}:", "Control plane".green().bold());
    println!("  vpc: {}", main.vpc_ref());
    println!("  internetGateway: {}", main.internet_gateway_ref());
    println!("  routeTable: {}", main.route_table_ref());

    for pool in cluster.node_pools()? {
        println!("{} {}:", "Node pool".green().bold(), pool.name.cyan());
        println!("  vpc: {}", pool.vpc_ref());
    }

    Ok(())
}
