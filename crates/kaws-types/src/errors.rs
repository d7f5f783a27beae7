//! Error types for kaws operations.

use std::fmt;
use thiserror::Error;

/// The main error type for kaws operations.
///
/// Validation of node pool settings produces either [`KawsError::Override`]
/// or [`KawsError::Experimental`]; the remaining variants come from loading
/// configuration documents at the edges of the tool.
#[derive(Error, Debug)]
pub enum KawsError {
    /// A node pool customized a setting that must be uniform across the cluster
    #[error("although you can't customize `{field}` per node pool but you did specify {value} in your cluster.yaml")]
    Override {
        /// Name of the offending setting as written in cluster.yaml
        field: &'static str,
        /// The value the node pool supplied
        value: OverrideValue,
    },

    /// The experimental settings group rejected its own contents
    #[error("{0}")]
    Experimental(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl KawsError {
    /// Name of the offending setting, if this is an override error.
    pub fn override_field(&self) -> Option<&'static str> {
        match self {
            Self::Override { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// A value supplied by a node pool for a forbidden setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideValue {
    /// String and reference values, shown in double quotes
    Quoted(String),
    /// Boolean values, shown as-is
    Bare(String),
}

impl fmt::Display for OverrideValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideValue::Quoted(v) => write!(f, "\"{}\"", v),
            OverrideValue::Bare(v) => write!(f, "{}", v),
        }
    }
}

/// A specialized Result type for kaws operations.
pub type Result<T> = std::result::Result<T, KawsError>;

/// Helper macro to bail out with a KawsError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if !valid {
///     bail!(Experimental, "invalid taint: {}", reason);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::KawsError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::KawsError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::KawsError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::KawsError::Other(format!($fmt, $($arg)*)))
    };
}
