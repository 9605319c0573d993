//! Book repository
//!
//! Translates between the Book entity and SQL statements; no business
//! rules live here.

use sqlx::PgPool;

use crate::models::{Book, CreateBookRequest};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Book repository
pub struct BookRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all books, ordered by id so output is deterministic.
    ///
    /// An empty table yields an empty vec, not an error.
    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, price FROM books ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(books)
    }

    /// Fetch a single book by primary key.
    ///
    /// Zero rows is a distinct `NotFound`, never a generic query error.
    pub async fn get(&self, id: i64) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, price FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "Book",
            id: id.to_string(),
        })
    }

    /// Insert a book and return the persisted record.
    ///
    /// The id is generated by the database; `RETURNING` reads the row
    /// back so callers see it exactly as stored.
    pub async fn create(&self, req: CreateBookRequest) -> Result<Book, DbError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, price)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, price
            "#,
        )
        .bind(&req.title)
        .bind(&req.author)
        .bind(req.price)
        .fetch_one(self.pool)
        .await?;

        Ok(book)
    }
}
