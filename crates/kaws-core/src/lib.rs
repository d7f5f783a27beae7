//! # kaws Core
//!
//! Configuration loading, logging, and common functionality for the kaws
//! cluster provisioning tool.
//!
//! This crate provides:
//!
//! - **Configuration**: loading cluster.yaml and composing every node pool
//!   it declares
//! - **Logging**: `tracing` subscriber setup with pretty, JSON or compact
//!   output
//! - **Data**: YAML helpers
//!
//! ## Example
//!
//! ```no_run
//! use kaws_core::config::ClusterConfig;
//!
//! kaws_core::log::init_default()?;
//!
//! let cluster = ClusterConfig::load("cluster.yaml")?;
//! let pools = cluster.node_pools()?;
//! # Ok::<(), kaws_core::KawsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod util;

// Re-export commonly used items
pub use config::{ClusterConfig, ComposedNodePool, NodePoolConfig, WorkerConfig};
pub use kaws_types::{KawsError, Result};

/// kaws application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// kaws application name
pub const APP_NAME: &str = "kaws";
