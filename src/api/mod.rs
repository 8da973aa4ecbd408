//! HTTP API: routes, handlers and response helpers

pub mod handler;
pub mod helpers;
pub mod router;

// Re-export the main entry points for convenience
pub use helpers::{ApiError, MessageBody};
pub use router::{AppState, build_router};
