//! Deployment settings shared by the main cluster and its node pools.
//!
//! The same [`DeploymentSettings`] shape is deserialized from the top level
//! of cluster.yaml and from every entry under `worker.nodePools`. Every key
//! is optional: a missing key leaves the field at its `Default` value, which
//! is what "unset" means throughout kaws.

use serde::{Deserialize, Serialize};
use crate::identifiers::{Identifier, Region};

/// Settings describing one deployment unit, either the main cluster or a
/// node pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentSettings {
    /// Name of the cluster the unit belongs to
    pub cluster_name: String,
    /// EC2 key pair name
    pub key_name: String,
    /// Container Linux release channel
    pub release_channel: String,
    /// AMI used for instances
    pub ami_id: String,
    /// Kubernetes version, also used as the hyperkube image tag
    #[serde(rename = "kubernetesVersion")]
    pub k8s_version: String,
    /// Availability zone; never inherited from the main cluster
    pub availability_zone: String,

    /// VPC the cluster runs in
    pub vpc: Identifier,
    /// Internet gateway attached to the VPC
    pub internet_gateway: Identifier,
    /// Route table for public subnets
    pub route_table: Identifier,
    /// CIDR block of the VPC
    #[serde(rename = "vpcCIDR")]
    pub vpc_cidr: String,
    /// CIDR block of the instance subnet
    #[serde(rename = "instanceCIDR")]
    pub instance_cidr: String,
    /// Whether instances get public IP addresses
    #[serde(rename = "mapPublicIPs")]
    pub map_public_ips: bool,
    /// EFS filesystem mounted on every node
    pub elastic_file_system_id: String,

    /// AWS region
    pub region: Region,
    /// Container runtime, e.g. `docker`
    pub container_runtime: String,
    /// KMS key used to encrypt assets
    pub kms_key_arn: String,
    /// Whether kaws manages TLS assets itself
    pub manage_certificates: bool,

    /// Public keys added to the core user's authorized_keys
    pub ssh_authorized_keys: Vec<String>,

    /// Hyperkube image
    pub hyperkube_image: Image,
    /// AWS CLI image
    pub aws_cli_image: Image,
    /// calicoctl image
    pub calico_ctl_image: Image,
    /// Calico CNI plugin image
    pub calico_cni_image: Image,
    /// Pause container image
    pub pause_image: Image,
    /// Flannel image
    pub flannel_image: Image,
    /// Sidecar shipping journald logs to CloudWatch
    pub journald_cloud_watch_logs_image: Image,

    /// CloudWatch logging of node journals
    pub cloud_watch_logging: CloudWatchLogging,

    /// Experimental features
    pub experimental: Experimental,
}

/// A container image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    /// Repository, e.g. `quay.io/coreos/hyperkube`
    pub repo: String,
    /// Tag
    pub tag: String,
    /// Whether rkt pulls the image with the docker:// scheme
    pub rkt_pull_docker: bool,
}

impl Image {
    /// `repo:tag` form of the reference.
    pub fn repo_with_tag(&self) -> String {
        format!("{}:{}", self.repo, self.tag)
    }
}

crate::impl_merge_if_empty!(Image { repo, tag, rkt_pull_docker });

/// Shipping of node journals to CloudWatch Logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudWatchLogging {
    /// Whether logs are shipped
    pub enabled: bool,
    /// Retention of the log group
    pub retention_in_days: u32,
    /// Streaming of matching log lines back to the operator's terminal
    pub local_streaming: LocalStreaming,
}

crate::impl_merge_if_empty!(CloudWatchLogging { enabled, retention_in_days; nested: local_streaming });

/// Local streaming of CloudWatch log events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalStreaming {
    /// Whether events are streamed
    pub enabled: bool,
    /// CloudWatch filter pattern
    pub filter: String,
    /// Polling interval in seconds
    pub interval: u32,
}

crate::impl_merge_if_empty!(LocalStreaming { enabled, filter, interval });

/// Experimental settings group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experimental {
    /// Kubelet TLS bootstrapping
    pub tls_bootstrap: TlsBootstrap,
    /// Draining of nodes before they are terminated
    pub node_drainer: NodeDrainer,
    /// Taints registered with each node
    pub taints: Vec<Taint>,
}

/// Kubelet TLS bootstrap mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TlsBootstrap {
    /// Whether kubelets request their certificates from the API server
    pub enabled: bool,
}

/// Node drainer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeDrainer {
    /// Whether nodes are drained before termination
    pub enabled: bool,
    /// Minutes to wait for a drain to finish
    pub drain_timeout: u32,
}

/// A node taint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taint {
    /// Taint key
    pub key: String,
    /// Taint value
    pub value: String,
    /// `NoSchedule`, `PreferNoSchedule` or `NoExecute`
    pub effect: String,
}

impl DeploymentSettings {
    /// Template reference to the VPC, defaulting to the stack's own VPC resource.
    pub fn vpc_ref(&self) -> String {
        self.vpc.reference(|| logical_ref("VPC"))
    }

    /// Template reference to the internet gateway.
    pub fn internet_gateway_ref(&self) -> String {
        self.internet_gateway.reference(|| logical_ref("InternetGateway"))
    }

    /// Template reference to the public route table.
    pub fn route_table_ref(&self) -> String {
        self.route_table.reference(|| logical_ref("PublicRouteTable"))
    }
}

fn logical_ref(name: &str) -> String {
    format!("{{\"Ref\" : \"{}\"}}", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MergeIfEmpty;

    #[test]
    fn test_deserialize_cluster_yaml_keys() {
        let yaml = r#"
clusterName: kubeawstest
kubernetesVersion: v1.7.4_coreos.0
vpcCIDR: 10.0.0.0/16
instanceCIDR: 10.0.1.0/24
mapPublicIPs: true
region: us-west-1
vpc:
  id: vpc-xxxx
hyperkubeImage:
  repo: quay.io/coreos/hyperkube
experimental:
  tlsBootstrap:
    enabled: true
  taints:
    - key: reservation
      value: spot
      effect: NoSchedule
"#;
        let s: DeploymentSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(s.cluster_name, "kubeawstest");
        assert_eq!(s.k8s_version, "v1.7.4_coreos.0");
        assert_eq!(s.vpc_cidr, "10.0.0.0/16");
        assert_eq!(s.instance_cidr, "10.0.1.0/24");
        assert!(s.map_public_ips);
        assert_eq!(s.region, Region::new("us-west-1"));
        assert_eq!(s.vpc, Identifier::literal("vpc-xxxx"));
        assert!(s.internet_gateway.is_blank());
        assert_eq!(s.hyperkube_image.repo, "quay.io/coreos/hyperkube");
        assert!(s.experimental.tls_bootstrap.enabled);
        assert_eq!(s.experimental.taints[0].effect, "NoSchedule");
    }

    #[test]
    fn test_image_merge_if_empty_is_field_wise() {
        let mut pool = Image { repo: "my/hyperkube".into(), ..Image::default() };
        let main = Image { repo: "quay.io/coreos/hyperkube".into(), tag: "v1.7.4".into(), rkt_pull_docker: true };
        pool.merge_if_empty(&main);
        assert_eq!(pool.repo, "my/hyperkube");
        assert_eq!(pool.tag, "v1.7.4");
        assert!(pool.rkt_pull_docker);
        assert_eq!(pool.repo_with_tag(), "my/hyperkube:v1.7.4");
    }

    #[test]
    fn test_cloud_watch_logging_merge_if_empty() {
        let mut pool = CloudWatchLogging { retention_in_days: 7, ..Default::default() };
        let main = CloudWatchLogging {
            enabled: true,
            retention_in_days: 30,
            local_streaming: LocalStreaming { enabled: true, filter: "{ $.priority = \"CRIT\" }".into(), interval: 60 },
        };
        pool.merge_if_empty(&main);
        assert!(pool.enabled);
        assert_eq!(pool.retention_in_days, 7);
        assert_eq!(pool.local_streaming, main.local_streaming);
    }

    #[test]
    fn test_network_refs_fall_back_to_logical_resources() {
        let mut s = DeploymentSettings::default();
        assert_eq!(s.vpc_ref(), r#"{"Ref" : "VPC"}"#);
        assert_eq!(s.internet_gateway_ref(), r#"{"Ref" : "InternetGateway"}"#);
        assert_eq!(s.route_table_ref(), r#"{"Ref" : "PublicRouteTable"}"#);

        s.vpc = Identifier::imported_output("network-VPC");
        assert_eq!(s.vpc_ref(), r#"{ "Fn::ImportValue" : "network-VPC" }"#);
    }
}
