//! Loading the launch spec from YAML

use super::schema::LaunchSpec;
use super::validate::validate_spec;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a launch spec from a YAML file (without launching)
///
/// Parses and validates; the local-data preflight is separate because it
/// only applies when local data is selected.
pub fn load_spec<P: AsRef<Path>>(config_path: P) -> Result<LaunchSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let spec: LaunchSpec = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;

    validate_spec(&spec).map_err(|e| Error::Config(format!("Invalid config: {e}")))?;

    Ok(spec)
}
