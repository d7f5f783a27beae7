//! Rejection of node pool settings that must stay uniform across a cluster.
//!
//! Every node pool imports its subnets from the main stack, so it has no use
//! for its own VPC, gateway, route table, CIDRs, public IP mapping or EFS
//! filesystem. Region, container runtime and KMS key cannot differ between
//! the control plane and its node pools either.

use kaws_types::{DeploymentSettings, ExperimentalValidator, Identifier, KawsError, OverrideValue, Result};
use tracing::debug;

/// A setting a node pool is not allowed to customize.
pub struct ForbiddenOverride {
    /// Name of the setting as written in cluster.yaml
    pub field: &'static str,
    /// The supplied value, if the setting is set
    pub supplied: fn(&DeploymentSettings) -> Option<OverrideValue>,
}

/// Forbidden settings in the order they are checked. The first one found set
/// is reported.
pub const FORBIDDEN_OVERRIDES: &[ForbiddenOverride] = &[
    ForbiddenOverride {
        field: "vpc",
        supplied: |s| identifier(&s.vpc),
    },
    ForbiddenOverride {
        field: "internetGateway",
        supplied: |s| identifier(&s.internet_gateway),
    },
    ForbiddenOverride {
        field: "routeTable",
        supplied: |s| identifier(&s.route_table),
    },
    ForbiddenOverride {
        field: "vpcCIDR",
        supplied: |s| string(&s.vpc_cidr),
    },
    ForbiddenOverride {
        field: "instanceCIDR",
        supplied: |s| string(&s.instance_cidr),
    },
    ForbiddenOverride {
        field: "mapPublicIPs",
        // false is indistinguishable from unset
        supplied: |s| s.map_public_ips.then(|| OverrideValue::Bare(s.map_public_ips.to_string())),
    },
    ForbiddenOverride {
        field: "elasticFileSystemId",
        supplied: |s| string(&s.elastic_file_system_id),
    },
    ForbiddenOverride {
        field: "region",
        supplied: |s| string(s.region.as_str()),
    },
    ForbiddenOverride {
        field: "containerRuntime",
        supplied: |s| string(&s.container_runtime),
    },
    ForbiddenOverride {
        field: "kmsKeyArn",
        supplied: |s| string(&s.kms_key_arn),
    },
];

fn string(value: &str) -> Option<OverrideValue> {
    (!value.is_empty()).then(|| OverrideValue::Quoted(value.to_string()))
}

fn identifier(value: &Identifier) -> Option<OverrideValue> {
    value.is_not_blank().then(|| OverrideValue::Quoted(value.to_string()))
}

/// Validate a node pool's settings as written in its own section of
/// cluster.yaml, before anything is inherited from the main cluster.
///
/// Fails on the first forbidden setting found set, then defers to
/// `experimental` and returns its error unchanged.
///
/// # Example
///
/// ```
/// use kaws_nodepool::{validate_inputs, StandardExperimentalRules};
/// use kaws_types::DeploymentSettings;
///
/// let mut pool = DeploymentSettings::default();
/// assert!(validate_inputs(&pool, &StandardExperimentalRules).is_ok());
///
/// pool.kms_key_arn = "arn:aws:kms:us-west-1:xxxxxxxxx:key/xxxxxxxxxxxxxxxxxxx".into();
/// let err = validate_inputs(&pool, &StandardExperimentalRules).unwrap_err();
/// assert_eq!(err.override_field(), Some("kmsKeyArn"));
/// ```
pub fn validate_inputs<V>(node_pool: &DeploymentSettings, experimental: &V) -> Result<()>
where
    V: ExperimentalValidator + ?Sized,
{
    for forbidden in FORBIDDEN_OVERRIDES {
        if let Some(value) = (forbidden.supplied)(node_pool) {
            debug!(field = forbidden.field, "node pool customizes a cluster-wide setting");
            return Err(KawsError::Override {
                field: forbidden.field,
                value,
            });
        }
    }

    experimental.validate(&node_pool.experimental)
}

/// Validate settings of either the main cluster or a node pool.
///
/// Only the experimental settings group is checked.
pub fn valid<V>(settings: &DeploymentSettings, experimental: &V) -> Result<()>
where
    V: ExperimentalValidator + ?Sized,
{
    experimental.validate(&settings.experimental)
}
