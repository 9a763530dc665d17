use std::sync::Arc;

use axum::http::{header, HeaderMap};

use crate::config::ServiceConfig;
use crate::mindmap::ExternalRenderer;

/// State shared with every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub renderer: Arc<dyn ExternalRenderer>,
}

impl AppState {
    pub fn new(config: ServiceConfig, renderer: Arc<dyn ExternalRenderer>) -> Self {
        Self {
            config: Arc::new(config),
            renderer,
        }
    }

    /// Base URL for links handed back to clients, always ending in `/`
    pub fn base_url(&self, headers: &HeaderMap) -> String {
        if let Some(public) = &self.config.public_url {
            return format!("{}/", public.trim_end_matches('/'));
        }

        match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
            Some(host) if !host.is_empty() => format!("http://{}/", host),
            _ => self.config.url(),
        }
    }
}
