use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::server::types::AppState;

/// GET /: describe the service and its endpoints
pub async fn service_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Mindmap & File Management Service",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "mindmap": "Mind-map generation from Markdown",
            "file_management": "File upload and download"
        },
        "endpoints": {
            "mindmap": {
                "upload": "POST /upload - submit Markdown text, returns the page URL",
                "upload_external": format!(
                    "POST /upload2 - submit Markdown text, rendered with {}",
                    state.renderer.name()
                ),
                "view": "GET /html/{filename} - view a generated mind map"
            },
            "file_management": {
                "upload": "POST /upload-file - upload a file (multipart field 'file')",
                "download": "GET /download/{filename} - download or preview a file",
                "list": "GET /files - list uploaded files"
            }
        },
        "limits": {
            "max_file_size": state.config.max_file_size,
            "allowed_extensions": state.config.allowed_extensions,
        }
    }))
}
