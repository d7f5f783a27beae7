//! # kaws Types
//!
//! Core types, traits, and enums shared across all kaws crates.
//!
//! This crate provides the fundamental building blocks for composing node
//! pool configuration from a cluster's main configuration:
//!
//! - The [`DeploymentSettings`] model deserialized from cluster.yaml
//! - [`Identifier`], a reference to an infrastructure resource that renders
//!   into a stack template fragment
//! - The [`MergeIfEmpty`] and [`ExperimentalValidator`] traits
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use kaws_types::{DeploymentSettings, Identifier};
//!
//! let mut settings = DeploymentSettings::default();
//! assert_eq!(settings.vpc_ref(), r#"{"Ref" : "VPC"}"#);
//!
//! settings.vpc = Identifier::literal("vpc-0a1b2c3d");
//! assert_eq!(settings.vpc_ref(), r#""vpc-0a1b2c3d""#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{KawsError, OverrideValue, Result};
pub use identifiers::{Identifier, Region};
pub use enums::{LogLevel, LogFormat, TaintEffect};
pub use traits::{ExperimentalValidator, MergeIfEmpty};
pub use config::{
    CloudWatchLogging, DeploymentSettings, Experimental, Image, LocalStreaming, NodeDrainer,
    Taint, TlsBootstrap,
};
