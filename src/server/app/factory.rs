use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::server::handlers::{
    download_file, get_html, list_uploaded_files, service_info, upload_file, upload_markdown,
    upload_markdown_external,
};
use crate::server::middleware::{nosniff_layer, referrer_policy_layer, CorsMiddleware};
use crate::server::types::AppState;

/// Room for multipart framing on top of the largest accepted file
const BODY_LIMIT_HEADROOM: usize = 1024 * 1024;

/// Build the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let body_limit = usize::try_from(state.config.max_file_size)
        .unwrap_or(usize::MAX)
        .saturating_add(BODY_LIMIT_HEADROOM);
    let timeout = state.config.request_timeout();

    Router::new()
        .route("/", get(service_info))
        .route("/upload", post(upload_markdown))
        .route("/upload2", post(upload_markdown_external))
        .route("/html/{filename}", get(get_html))
        .route("/upload-file", post(upload_file))
        .route("/download/{filename}", get(download_file))
        .route("/files", get(list_uploaded_files))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(nosniff_layer())
        .layer(referrer_policy_layer())
        .layer(CompressionLayer::new())
        .layer(CorsMiddleware::allow_all())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::new())
}
