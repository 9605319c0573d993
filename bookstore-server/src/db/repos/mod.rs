//! Repository implementations for database access

pub mod books;

pub use books::{BookRepo, DbError};
