//! YAML data handling utilities.

use kaws_types::{KawsError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load YAML from string.
pub fn load_yaml<T: DeserializeOwned>(content: &str) -> Result<T> {
    serde_yaml::from_str(content).map_err(KawsError::Yaml)
}

/// Load YAML from file.
pub fn load_yaml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        KawsError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    load_yaml(&content)
}

/// Serialize to a YAML document.
pub fn to_yaml(data: &impl Serialize) -> Result<String> {
    Ok(serde_yaml::to_string(data)?)
}
