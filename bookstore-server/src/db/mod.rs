//! Database layer - connection pool and the book repository
//!
//! Every statement is parameterized; identifiers and field values travel
//! as bound parameters, never concatenated into SQL.

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
