use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::types::ServiceConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, ServiceError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["mindmap.yml", "mindmap.yaml", "mindmap.toml", "mindmap.json"];

/// Load the service configuration.
///
/// An explicit file must exist. Without one, the first default file found in
/// `search_dir` is used, and when none exists the built-in defaults apply.
pub fn load_config<P: AsRef<Path>>(
    search_dir: P,
    config_file: Option<&Path>,
) -> BoxResult<ServiceConfig> {
    let config_path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config_file(&search_dir),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            ServiceConfig::default()
        }
    };

    let config = validation::validate_config(config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file in `dir`
fn find_default_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Read and parse one configuration file, choosing the format by extension
fn parse_config_file(config_path: &Path) -> BoxResult<ServiceConfig> {
    if !config_path.exists() {
        return Err(ServiceError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| ServiceError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let config = match ext.as_str() {
        "yml" | "yaml" => parse_yaml_config(&content, config_path)?,
        "toml" => parse_toml_config(&content, config_path)?,
        "json" => parse_json_config(&content, config_path)?,
        other => {
            return Err(ServiceError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    Ok(config)
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<ServiceConfig, ServiceError> {
    // An empty YAML document means "all defaults"
    if content.trim().is_empty() {
        return Ok(ServiceConfig::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| ServiceError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<ServiceConfig, ServiceError> {
    toml::from_str(content)
        .map_err(|e| ServiceError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> Result<ServiceConfig, ServiceError> {
    serde_json::from_str(content)
        .map_err(|e| ServiceError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )))
}
