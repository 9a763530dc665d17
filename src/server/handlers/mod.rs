pub mod index;
pub mod mindmap;
pub mod files;

use std::path::Path;

use axum::{
    body::Body,
    extract::Request,
    response::Response,
};
use mime_guess::mime::{self, Mime};
use tower::ServiceExt;
use tower_http::services::ServeFile;

pub use index::service_info;
pub use mindmap::{get_html, upload_markdown, upload_markdown_external};
pub use files::{download_file, list_uploaded_files, upload_file};

/// Guess the content type of a file, marking text types as UTF-8
pub fn content_type_for(path: &Path) -> Mime {
    let guessed = mime_guess::from_path(path).first_or_octet_stream();
    if guessed.type_() == mime::TEXT && guessed.get_param(mime::CHARSET).is_none() {
        format!("{}; charset=utf-8", guessed.essence_str())
            .parse()
            .unwrap_or(guessed)
    } else {
        guessed
    }
}

/// Stream a file from disk, honouring conditional and range requests
pub async fn serve_path(path: &Path, content_type: &Mime, request: Request) -> Response {
    let response = match ServeFile::new_with_mime(path, content_type).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };
    response.map(Body::new)
}
