use std::path::PathBuf;
use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::config::defaults;

/// A literal substitution applied to pages produced by the external renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRewrite {
    pub from: String,
    pub to: String,
}

impl AssetRewrite {
    pub fn new(from: &str, to: &str) -> Self {
        Self { from: from.to_string(), to: to.to_string() }
    }
}

/// Settings for the external mind-map command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalRendererConfig {
    /// Program to execute (looked up on PATH)
    #[serde(default = "defaults::default_renderer_program")]
    pub program: String,

    /// Seconds to wait before the command is killed
    #[serde(default = "defaults::default_renderer_timeout_secs")]
    pub timeout_secs: u64,

    /// Rewrites applied to the generated HTML, in order
    #[serde(default = "defaults::default_asset_rewrites")]
    pub asset_rewrites: Vec<AssetRewrite>,
}

impl Default for ExternalRendererConfig {
    fn default() -> Self {
        Self {
            program: defaults::default_renderer_program(),
            timeout_secs: defaults::default_renderer_timeout_secs(),
            asset_rewrites: defaults::default_asset_rewrites(),
        }
    }
}

impl ExternalRendererConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Service configuration, built once at start-up and shared read-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address to bind to
    #[serde(default = "defaults::default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "defaults::default_port")]
    pub port: u16,

    /// Externally visible base URL; derived from the Host header when unset
    #[serde(default)]
    pub public_url: Option<String>,

    /// Root directory of the upload store
    #[serde(default = "defaults::default_static_dir")]
    pub static_dir: PathBuf,

    /// Where submitted Markdown sources are kept
    #[serde(default = "defaults::default_markdown_dir")]
    pub markdown_dir: PathBuf,

    /// Where generated mind-map pages are written
    #[serde(default = "defaults::default_html_dir")]
    pub html_dir: PathBuf,

    /// Largest accepted upload in bytes
    #[serde(default = "defaults::default_max_file_size")]
    pub max_file_size: u64,

    /// Write buffer size used while streaming uploads to disk
    #[serde(default = "defaults::default_chunk_size")]
    pub chunk_size: usize,

    /// Accepted upload extensions, with the leading dot
    #[serde(default = "defaults::default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Verbose logging
    #[serde(default = "defaults::default_debug")]
    pub debug: bool,

    #[serde(default)]
    pub external_renderer: ExternalRendererConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: defaults::default_host(),
            port: defaults::default_port(),
            public_url: None,
            static_dir: defaults::default_static_dir(),
            markdown_dir: defaults::default_markdown_dir(),
            html_dir: defaults::default_html_dir(),
            max_file_size: defaults::default_max_file_size(),
            chunk_size: defaults::default_chunk_size(),
            allowed_extensions: defaults::default_allowed_extensions(),
            request_timeout_secs: defaults::default_request_timeout_secs(),
            debug: defaults::default_debug(),
            external_renderer: ExternalRendererConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Rebase every storage directory under `root`
    pub fn with_storage_root(mut self, root: &std::path::Path) -> Self {
        self.static_dir = root.to_path_buf();
        self.markdown_dir = root.join("markdown");
        self.html_dir = root.join("html");
        self
    }

    /// Get the bind address string (e.g., "0.0.0.0:5001")
    pub fn address_string(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Get the URL the service is reachable at, for the start-up banner
    pub fn url(&self) -> String {
        if let Some(public) = &self.public_url {
            return format!("{}/", public.trim_end_matches('/'));
        }

        let address = if self.host == "0.0.0.0" || self.host == "127.0.0.1" {
            "localhost".to_string()
        } else if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        format!("http://{}:{}/", address, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Human-readable size limit, as reported in upload errors
    pub fn max_file_size_label(&self) -> String {
        const MIB: u64 = 1024 * 1024;
        if self.max_file_size >= MIB && self.max_file_size % MIB == 0 {
            format!("{}MB", self.max_file_size / MIB)
        } else {
            format!("{} bytes", self.max_file_size)
        }
    }
}
