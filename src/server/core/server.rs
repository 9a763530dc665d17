use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};
use tokio::signal;

use crate::config::ServiceConfig;
use crate::mindmap::MarkmapRenderer;
use crate::server::app::create_app;
use crate::server::types::AppState;
use crate::utils::error::BoxResult;
use crate::utils::fs::ensure_storage_dirs;

/// Resolve the configured host and port to a socket address
async fn resolve_address(config: &ServiceConfig) -> BoxResult<SocketAddr> {
    let address = config.address_string();
    let mut candidates = tokio::net::lookup_host(address.as_str()).await?;
    candidates
        .next()
        .ok_or_else(|| format!("Could not resolve listen address {}", address).into())
}

/// Start the HTTP service and run until Ctrl+C
pub async fn serve(config: ServiceConfig) -> BoxResult<()> {
    ensure_storage_dirs(&config)?;

    let renderer = Arc::new(MarkmapRenderer::from_config(&config.external_renderer));
    let addr = resolve_address(&config).await?;

    print_server_banner(&config);

    let app = create_app(AppState::new(config, renderer));

    info!("Starting HTTP server on {}", addr);
    let server = axum_server::bind(addr).serve(app.into_make_service());

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e.into());
            }
            info!("Server stopped");
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

/// Print a banner with server information
fn print_server_banner(config: &ServiceConfig) {
    println!("\n{}", "-".repeat(60));
    println!(" Mindmap & File Management Service");
    println!(" - URL: {}", config.url());
    println!(" - Uploads: {}", config.static_dir.display());
    println!(" - Markdown: {}", config.markdown_dir.display());
    println!(" - Pages: {}", config.html_dir.display());
    println!(" - Max upload size: {}", config.max_file_size_label());
    println!(" - External renderer: {}", config.external_renderer.program);
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
