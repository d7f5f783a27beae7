//! Loading of cluster.yaml.
//!
//! A cluster.yaml holds the main settings at its top level and one section
//! per node pool under `worker.nodePools`. Each node pool section uses the
//! same keys as the top level plus a `name`.
//!
//! ## Example
//!
//! ```no_run
//! use kaws_core::config::ClusterConfig;
//!
//! let cluster = ClusterConfig::load("cluster.yaml")?;
//! for pool in cluster.node_pools()? {
//!     println!("{}: {}", pool.name, pool.settings.k8s_version);
//! }
//! # Ok::<(), kaws_core::KawsError>(())
//! ```

use kaws_nodepool::{compose, valid, StandardExperimentalRules};
use kaws_types::{DeploymentSettings, ExperimentalValidator, KawsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::util::data::{load_yaml, load_yaml_file};

/// The contents of a cluster.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Settings of the main cluster
    #[serde(flatten)]
    pub settings: DeploymentSettings,

    /// Worker configuration
    #[serde(default)]
    pub worker: WorkerConfig,
}

/// The `worker` section of cluster.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerConfig {
    /// Node pool sections, as written
    #[serde(default)]
    pub node_pools: Vec<NodePoolConfig>,
}

/// One entry under `worker.nodePools`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePoolConfig {
    /// Node pool name
    pub name: String,

    /// Settings written in the node pool's section
    #[serde(flatten)]
    pub settings: DeploymentSettings,
}

/// A node pool with its effective settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedNodePool {
    /// Node pool name
    pub name: String,

    /// Settings after inheriting from the main cluster
    #[serde(flatten)]
    pub settings: DeploymentSettings,
}

impl ComposedNodePool {
    /// Template reference to the VPC, imported from the control plane stack.
    pub fn vpc_ref(&self) -> String {
        r#"{"Fn::ImportValue" : {"Fn::Sub" : "${ControlPlaneStackName}-VPC"}}"#.to_string()
    }
}

impl ClusterConfig {
    /// Load a cluster.yaml from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading cluster configuration");
        load_yaml_file(path).map_err(|e| match e {
            KawsError::Yaml(e) => {
                KawsError::Config(format!("Failed to parse {}: {}", path.display(), e))
            }
            other => other,
        })
    }

    /// Parse a cluster.yaml from a string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        load_yaml(content)
    }

    /// Validate the main settings and every node pool, and compose the
    /// effective settings of each pool, using the standard experimental rules.
    pub fn node_pools(&self) -> Result<Vec<ComposedNodePool>> {
        self.node_pools_with(&StandardExperimentalRules)
    }

    /// Like [`node_pools`](Self::node_pools) with custom experimental rules.
    ///
    /// Stops at the first invalid node pool; its error is prefixed with the
    /// pool's name.
    pub fn node_pools_with<V>(&self, experimental: &V) -> Result<Vec<ComposedNodePool>>
    where
        V: ExperimentalValidator + ?Sized,
    {
        valid(&self.settings, experimental)?;

        self.worker
            .node_pools
            .iter()
            .map(|pool| {
                let settings = compose(&pool.settings, &self.settings, experimental)
                    .map_err(|e| KawsError::Config(format!("invalid node pool \"{}\": {}", pool.name, e)))?;
                info!(pool = %pool.name, "composed node pool settings");
                Ok(ComposedNodePool {
                    name: pool.name.clone(),
                    settings,
                })
            })
            .collect()
    }
}
