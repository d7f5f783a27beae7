//! CLI structure and command definitions.

use clap::{Parser, Subcommand};
use anyhow::Result;
use kaws_types::{LogFormat, LogLevel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kaws")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate and compose node pool configuration from cluster.yaml", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (none, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format (pretty, json, compact)
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the main settings and every node pool
    Validate {
        /// Path to cluster.yaml
        #[arg(default_value = "cluster.yaml")]
        config: PathBuf,
    },

    /// Print the effective settings of node pools as YAML
    Compose {
        /// Path to cluster.yaml
        #[arg(default_value = "cluster.yaml")]
        config: PathBuf,

        /// Only print this node pool
        #[arg(short, long)]
        pool: Option<String>,
    },

    /// Print the template references to network resources
    Refs {
        /// Path to cluster.yaml
        #[arg(default_value = "cluster.yaml")]
        config: PathBuf,
    },
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Validate { config } => validate::execute(config),
            Commands::Compose { config, pool } => compose::execute(config, pool.as_deref()),
            Commands::Refs { config } => refs::execute(config),
        }
    }
}
