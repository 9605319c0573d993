//! Book domain types
//!
//! The service performs no validation beyond the type coercion serde
//! applies while deserializing; titles, authors, and prices are stored
//! as given.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted book record.
///
/// `id` is assigned by the database on insert and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Request body for `POST /books`.
///
/// Carries exactly the caller-supplied columns. An `id` field in the
/// body is accepted and ignored; the database assigns the real one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub price: f64,
}
