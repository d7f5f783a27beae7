//! Composition of a node pool's effective settings from the main cluster's.
//!
//! Rules run in table order. A later rule may depend on an earlier one: the
//! hyperkube tag is forced only after the Kubernetes version is resolved.

use kaws_types::{DeploymentSettings, MergeIfEmpty};
use tracing::debug;

/// One step of node pool composition.
pub struct MergeRule {
    /// Short description used in logs
    pub name: &'static str,
    /// Applies the rule to the node pool, reading from the main settings
    pub apply: fn(&mut DeploymentSettings, &DeploymentSettings),
}

/// Composition rules in the order they are applied.
pub const MERGE_RULES: &[MergeRule] = &[
    MergeRule {
        name: "inherit cluster name",
        apply: |pool, main| pool.cluster_name = main.cluster_name.clone(),
    },
    MergeRule {
        name: "default key name, release channel, AMI and Kubernetes version",
        apply: |pool, main| {
            default_string(&mut pool.key_name, &main.key_name);
            // no defaulting for availabilityZone: it must be explicit for HA
            default_string(&mut pool.release_channel, &main.release_channel);
            default_string(&mut pool.ami_id, &main.ami_id);
            default_string(&mut pool.k8s_version, &main.k8s_version);
        },
    },
    MergeRule {
        name: "merge images",
        apply: |pool, main| {
            pool.hyperkube_image.merge_if_empty(&main.hyperkube_image);
            pool.aws_cli_image.merge_if_empty(&main.aws_cli_image);
            pool.calico_ctl_image.merge_if_empty(&main.calico_ctl_image);
            pool.calico_cni_image.merge_if_empty(&main.calico_cni_image);
            pool.pause_image.merge_if_empty(&main.pause_image);
            pool.flannel_image.merge_if_empty(&main.flannel_image);
            pool.journald_cloud_watch_logs_image
                .merge_if_empty(&main.journald_cloud_watch_logs_image);
        },
    },
    MergeRule {
        name: "tag hyperkube with the Kubernetes version",
        apply: |pool, _| pool.hyperkube_image.tag = pool.k8s_version.clone(),
    },
    MergeRule {
        name: "inherit TLS bootstrap",
        apply: |pool, main| {
            pool.experimental.tls_bootstrap = main.experimental.tls_bootstrap.clone()
        },
    },
    MergeRule {
        name: "default SSH authorized keys",
        apply: |pool, main| {
            if pool.ssh_authorized_keys.is_empty() {
                pool.ssh_authorized_keys = main.ssh_authorized_keys.clone();
            }
        },
    },
    MergeRule {
        name: "inherit certificate management, region, container runtime and KMS key",
        apply: |pool, main| {
            pool.manage_certificates = main.manage_certificates;
            pool.region = main.region.clone();
            pool.container_runtime = main.container_runtime.clone();
            pool.kms_key_arn = main.kms_key_arn.clone();
        },
    },
    MergeRule {
        name: "default elastic filesystem",
        apply: |pool, main| {
            // TODO: mount per-pool filesystems in managed subnets; today a
            // pool-level id needs user-provided subnets with mount targets
            default_string(&mut pool.elastic_file_system_id, &main.elastic_file_system_id)
        },
    },
    MergeRule {
        name: "merge CloudWatch logging",
        apply: |pool, main| pool.cloud_watch_logging.merge_if_empty(&main.cloud_watch_logging),
    },
];

fn default_string(value: &mut String, fallback: &str) {
    if value.is_empty() {
        *value = fallback.to_string();
    }
}

/// Compute a node pool's effective settings, inheriting from `main`.
///
/// `node_pool` is expected to have passed
/// [`validate_inputs`](crate::validate_inputs); it is not checked again.
/// Neither input is modified.
///
/// # Example
///
/// ```
/// use kaws_nodepool::with_defaults_from;
/// use kaws_types::{DeploymentSettings, Region};
///
/// let mut main = DeploymentSettings::default();
/// main.cluster_name = "kubeawstest".into();
/// main.region = Region::new("us-west-1");
/// main.k8s_version = "v1.7.4_coreos.0".into();
///
/// let pool = with_defaults_from(&DeploymentSettings::default(), &main);
/// assert_eq!(pool.cluster_name, "kubeawstest");
/// assert_eq!(pool.region, main.region);
/// assert_eq!(pool.hyperkube_image.tag, "v1.7.4_coreos.0");
/// ```
pub fn with_defaults_from(
    node_pool: &DeploymentSettings,
    main: &DeploymentSettings,
) -> DeploymentSettings {
    let mut composed = node_pool.clone();
    for rule in MERGE_RULES {
        debug!(rule = rule.name, "applying node pool merge rule");
        (rule.apply)(&mut composed, main);
    }
    composed
}
