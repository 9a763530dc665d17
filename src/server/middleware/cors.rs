use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::OPTIONS, Method::HEAD];

/// CORS policy for browser clients of the mind-map and file endpoints
pub struct CorsMiddleware;

impl CorsMiddleware {
    /// Allow any origin to call the service
    pub fn allow_all() -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(Any)
            .expose_headers([header::CONTENT_DISPOSITION])
    }
}
