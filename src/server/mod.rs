pub mod types;
pub mod handlers;
pub mod app;
pub mod core;
pub mod middleware;

pub use core::serve;
