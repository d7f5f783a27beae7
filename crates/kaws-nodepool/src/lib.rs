//! # kaws Node Pools
//!
//! Validation and composition of node pool settings.
//!
//! A node pool's section of cluster.yaml is checked with [`validate_inputs`]
//! before anything is inherited, so a pool can never drift from the network,
//! region or security context of its cluster. Valid input is then completed
//! from the main settings by [`with_defaults_from`].
//!
//! ## Example
//!
//! ```
//! use kaws_nodepool::{compose, StandardExperimentalRules};
//! use kaws_types::{DeploymentSettings, Region};
//!
//! let mut main = DeploymentSettings::default();
//! main.region = Region::new("us-west-1");
//!
//! let mut pool = DeploymentSettings::default();
//! pool.availability_zone = "us-west-1a".into();
//! let composed = compose(&pool, &main, &StandardExperimentalRules).unwrap();
//! assert_eq!(composed.region.as_str(), "us-west-1");
//!
//! pool.region = Region::new("eu-west-1");
//! assert!(compose(&pool, &main, &StandardExperimentalRules).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod composer;
pub mod experimental;
pub mod validator;

pub use composer::{with_defaults_from, MergeRule, MERGE_RULES};
pub use experimental::StandardExperimentalRules;
pub use validator::{valid, validate_inputs, ForbiddenOverride, FORBIDDEN_OVERRIDES};

use kaws_types::{DeploymentSettings, ExperimentalValidator, Result};

/// Validate a node pool and, if it passes, compose its effective settings.
///
/// Nothing is composed when validation fails.
pub fn compose<V>(
    node_pool: &DeploymentSettings,
    main: &DeploymentSettings,
    experimental: &V,
) -> Result<DeploymentSettings>
where
    V: ExperimentalValidator + ?Sized,
{
    validate_inputs(node_pool, experimental)?;
    Ok(with_defaults_from(node_pool, main))
}

/// Node pool operations on [`DeploymentSettings`] using
/// [`StandardExperimentalRules`].
pub trait NodePoolSettings {
    /// See [`validate_inputs`].
    fn validate_inputs(&self) -> Result<()>;

    /// See [`valid`].
    fn valid(&self) -> Result<()>;

    /// See [`with_defaults_from`].
    fn with_defaults_from(&self, main: &DeploymentSettings) -> DeploymentSettings;
}

impl NodePoolSettings for DeploymentSettings {
    fn validate_inputs(&self) -> Result<()> {
        validate_inputs(self, &StandardExperimentalRules)
    }

    fn valid(&self) -> Result<()> {
        valid(self, &StandardExperimentalRules)
    }

    fn with_defaults_from(&self, main: &DeploymentSettings) -> DeploymentSettings {
        with_defaults_from(self, main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaws_types::{KawsError, Taint};

    #[test]
    fn test_compose_fails_fast_without_merging() {
        let main = DeploymentSettings { cluster_name: "c".into(), ..Default::default() };
        let pool = DeploymentSettings { map_public_ips: true, ..Default::default() };
        let err = compose(&pool, &main, &StandardExperimentalRules).unwrap_err();
        assert_eq!(err.override_field(), Some("mapPublicIPs"));
    }

    #[test]
    fn test_settings_methods_use_standard_rules() {
        let mut pool = DeploymentSettings::default();
        assert!(pool.validate_inputs().is_ok());
        assert!(pool.valid().is_ok());

        pool.experimental.taints.push(Taint { key: "k".into(), value: "v".into(), effect: "Bogus".into() });
        assert!(matches!(pool.valid(), Err(KawsError::Experimental(_))));
        assert!(matches!(pool.validate_inputs(), Err(KawsError::Experimental(_))));

        let main = DeploymentSettings { ami_id: "ami-main".into(), ..Default::default() };
        assert_eq!(pool.with_defaults_from(&main).ami_id, "ami-main");
    }
}
