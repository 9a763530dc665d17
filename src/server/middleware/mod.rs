pub mod cors;
pub mod security;

pub use cors::CorsMiddleware;
pub use security::{nosniff_layer, referrer_policy_layer};
