//! bookstore-server: JSON-over-HTTP access to the books table
//!
//! The crate is split the way requests flow: [`db`] owns the connection
//! pool and the book repository, [`http`] owns the router, the error
//! envelope, and the server loop. [`models`] holds the data types both
//! sides exchange.

pub mod db;
pub mod http;
pub mod models;

pub use http::error::ApiError;
pub use http::server::{build_router, run_server, AppState, ServerConfig};
