use log::{error, info};
use std::path::PathBuf;

use crate::config::{validate_config, ServiceConfig};
use crate::server;
use crate::utils::error::BoxResult;

/// Overrides collected from `serve` flags
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub public_url: Option<String>,
    pub storage: Option<PathBuf>,
}

/// Apply command-line overrides on top of the loaded configuration
pub fn apply_overrides(mut config: ServiceConfig, overrides: ServeOverrides) -> BoxResult<ServiceConfig> {
    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(public_url) = overrides.public_url {
        config.public_url = Some(public_url);
    }
    if let Some(storage) = overrides.storage {
        config = config.with_storage_root(&storage);
    }

    Ok(validate_config(config)?)
}

/// Handle the serve command
pub async fn handle_serve_command(config: ServiceConfig, overrides: ServeOverrides) -> BoxResult<()> {
    let config = apply_overrides(config, overrides)?;

    info!("Starting mindmap service at {}", config.url());
    if let Err(e) = server::serve(config).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
