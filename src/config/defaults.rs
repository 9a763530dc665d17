use std::path::PathBuf;

use crate::config::types::AssetRewrite;

/// Default bind address
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default port
pub fn default_port() -> u16 {
    5001
}

/// Default upload store root
pub fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Default directory for submitted Markdown
pub fn default_markdown_dir() -> PathBuf {
    PathBuf::from("static/markdown")
}

/// Default directory for generated pages
pub fn default_html_dir() -> PathBuf {
    PathBuf::from("static/html")
}

/// 50MB
pub fn default_max_file_size() -> u64 {
    50 * 1024 * 1024
}

/// 8KB
pub fn default_chunk_size() -> usize {
    8192
}

/// Extensions accepted by the upload endpoint
pub fn default_allowed_extensions() -> Vec<String> {
    [
        ".txt", ".md", ".pdf", ".png", ".jpg", ".jpeg", ".gif", ".doc", ".docx",
        ".xls", ".xlsx", ".ppt", ".pptx", ".zip", ".rar", ".html", ".css", ".js",
        ".json", ".xml", ".csv", ".mp3", ".mp4", ".avi", ".mov",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}

pub fn default_request_timeout_secs() -> u64 {
    300
}

pub fn default_debug() -> bool {
    false
}

pub fn default_renderer_program() -> String {
    "markmap".to_string()
}

pub fn default_renderer_timeout_secs() -> u64 {
    120
}

/// Point markmap's CDN scripts at the locally served copies
pub fn default_asset_rewrites() -> Vec<AssetRewrite> {
    vec![
        AssetRewrite::new("https://cdn.jsdelivr.net/npm/d3@7.9.0/dist", "../html"),
        AssetRewrite::new("https://cdn.jsdelivr.net/npm/markmap-toolbar@0.18.10/dist", "../htmljs"),
        AssetRewrite::new(
            "https://cdn.jsdelivr.net/npm/markmap-view@0.18.10/dist/browser/index.js",
            "../htmljs/index2.js",
        ),
    ]
}
