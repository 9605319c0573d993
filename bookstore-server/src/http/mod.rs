//! HTTP layer
//!
//! Axum router with:
//! - JSON error envelopes (`{"message": ...}`)
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
