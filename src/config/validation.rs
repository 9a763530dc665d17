use log::{debug, warn};

use crate::config::ServiceConfig;
use crate::utils::error::ServiceError;
use crate::utils::path::normalize_extension_entry;

/// Validate the configuration, normalising values where that is unambiguous
pub fn validate_config(mut config: ServiceConfig) -> Result<ServiceConfig, ServiceError> {
    validate_network(&config)?;
    validate_limits(&config)?;
    normalize_extensions(&mut config);
    validate_directories(&config);

    Ok(config)
}

/// Validate host, port and public URL
fn validate_network(config: &ServiceConfig) -> Result<(), ServiceError> {
    if config.host.trim().is_empty() {
        return Err(ServiceError::Config("host must not be empty".to_string()));
    }

    if config.port == 0 {
        return Err(ServiceError::Config("port must be between 1 and 65535".to_string()));
    }

    if let Some(url) = &config.public_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServiceError::Config(format!(
                "public_url must start with http:// or https://: {}", url
            )));
        }
    }

    Ok(())
}

/// Validate sizes and timeouts
fn validate_limits(config: &ServiceConfig) -> Result<(), ServiceError> {
    if config.max_file_size == 0 {
        return Err(ServiceError::Config("max_file_size must be positive".to_string()));
    }

    if config.chunk_size == 0 {
        return Err(ServiceError::Config("chunk_size must be positive".to_string()));
    }

    if config.request_timeout_secs == 0 {
        return Err(ServiceError::Config("request_timeout_secs must be positive".to_string()));
    }

    if config.external_renderer.timeout_secs == 0 {
        return Err(ServiceError::Config(
            "external_renderer.timeout_secs must be positive".to_string(),
        ));
    }

    if config.external_renderer.program.trim().is_empty() {
        return Err(ServiceError::Config(
            "external_renderer.program must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Lower-case every allowed extension and make sure it starts with a dot
fn normalize_extensions(config: &mut ServiceConfig) {
    let mut normalized: Vec<String> = Vec::with_capacity(config.allowed_extensions.len());
    for ext in &config.allowed_extensions {
        let ext = normalize_extension_entry(ext);
        if ext != "." && !normalized.contains(&ext) {
            normalized.push(ext);
        }
    }
    config.allowed_extensions = normalized;

    if config.allowed_extensions.is_empty() {
        warn!("No allowed upload extensions configured; every upload will be rejected");
    }
}

/// Report the storage layout; the directories are created on start-up
fn validate_directories(config: &ServiceConfig) {
    for (label, dir) in [
        ("Upload", &config.static_dir),
        ("Markdown", &config.markdown_dir),
        ("HTML", &config.html_dir),
    ] {
        if dir.exists() && !dir.is_dir() {
            warn!("{} path exists but is not a directory: {}", label, dir.display());
        } else {
            debug!("{} directory: {}", label, dir.display());
        }
    }
}
