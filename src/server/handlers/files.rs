use axum::{
    extract::{Multipart, Path, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Response,
    Json,
};
use log::debug;
use serde_json::{json, Value};

use crate::files::{list_files, resolve_stored_file, save_upload, UploadReceipt};
use crate::server::handlers::{content_type_for, serve_path};
use crate::server::types::AppState;
use crate::utils::error::ServiceError;

/// Form field carrying the uploaded file
const FILE_FIELD: &str = "file";

/// Extensions a browser may render inline under our origin
const INLINE_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "gif"];

/// `inline` for documents and raster images, `attachment` for everything else
pub fn disposition_for(path: &std::path::Path) -> &'static str {
    let inline = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| INLINE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    if inline {
        "inline"
    } else {
        "attachment"
    }
}

fn multipart_error(e: axum::extract::multipart::MultipartError, limit: String) -> ServiceError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServiceError::FileTooLarge { limit }
    } else {
        ServiceError::BadRequest(e.body_text())
    }
}

/// POST /upload-file: store a multipart upload
pub async fn upload_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<UploadReceipt>, ServiceError> {
    let base_url = state.base_url(&headers);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, state.config.max_file_size_label()))?
    {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let original_filename = field.file_name().unwrap_or_default().to_string();
        let receipt = save_upload(&state.config, &original_filename, &base_url, Box::pin(field)).await?;
        return Ok(Json(receipt));
    }

    Err(ServiceError::BadRequest("No file selected".to_string()))
}

/// GET /download/{filename}: stream a stored file, inline only for the safe preview set
pub async fn download_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> Result<Response, ServiceError> {
    let path = resolve_stored_file(&state.config.static_dir, &filename).await?;

    let mut response = serve_path(&path, &content_type_for(&path), request).await;

    let disposition = format!(
        "{}; filename=\"{}\"",
        disposition_for(&path),
        filename.replace('"', "")
    );
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        response.headers_mut().insert(header::CONTENT_DISPOSITION, value);
    }

    Ok(response)
}

/// GET /files: list stored uploads
pub async fn list_uploaded_files(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ServiceError> {
    let files = list_files(&state.config, &state.base_url(&headers)).await?;
    Ok(Json(json!({ "files": files })))
}
