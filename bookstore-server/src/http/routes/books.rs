//! Book endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::BookRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, BookId};
use crate::http::server::AppState;
use crate::models::{Book, CreateBookRequest};

/// GET /books - list all books
async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = BookRepo::new(state.pool()).list().await?;
    Ok(Json(books))
}

/// GET /books/{id} - get a single book
async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<Book>, ApiError> {
    let book = BookRepo::new(state.pool()).get(id).await?;
    Ok(Json(book))
}

/// POST /books - insert a new book
///
/// Responds 201 with the persisted record, generated id included.
async fn create_book(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = BookRepo::new(state.pool()).create(req).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Book routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/{id}", get(get_book))
}
