use axum::{
    extract::{Path, Request, State},
    http::HeaderMap,
    response::Response,
};
use log::debug;

use crate::files::resolve_stored_file;
use crate::mindmap::{publish_builtin, publish_external};
use crate::server::handlers::{content_type_for, serve_path};
use crate::server::types::AppState;
use crate::utils::error::ServiceError;

/// Preview URL for a generated page
pub fn preview_url(base_url: &str, html_name: &str) -> String {
    format!("{}html/{}", base_url, html_name)
}

/// POST /upload: render Markdown with the built-in pipeline
pub async fn upload_markdown(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<String, ServiceError> {
    debug!("Received {} bytes of Markdown", body.len());
    let html_name = publish_builtin(&state.config, &body).await?;
    Ok(preview_url(&state.base_url(&headers), &html_name))
}

/// POST /upload2: render Markdown with the external renderer
pub async fn upload_markdown_external(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<String, ServiceError> {
    debug!("Received {} bytes of Markdown for {}", body.len(), state.renderer.name());
    let html_name = publish_external(&state.config, state.renderer.as_ref(), &body).await?;
    Ok(preview_url(&state.base_url(&headers), &html_name))
}

/// GET /html/{filename}: serve a generated page
pub async fn get_html(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> Result<Response, ServiceError> {
    let path = resolve_stored_file(&state.config.html_dir, &filename).await?;
    Ok(serve_path(&path, &content_type_for(&path), request).await)
}
