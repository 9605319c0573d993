//! HTTP surface tests
//!
//! The router-level tests drive the real router through
//! `tower::ServiceExt::oneshot` over a lazily-connecting pool, so every
//! path that must not touch the database runs without one. The
//! end-to-end test at the bottom needs a real PostgreSQL instance and is
//! ignored by default:
//!
//!     DATABASE_URL=postgres://... cargo test -p bookstore-server -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use bookstore_server::db::create_pool;
use bookstore_server::db::repos::{BookRepo, DbError};
use bookstore_server::models::CreateBookRequest;
use bookstore_server::{build_router, AppState};

/// Router over a pool that never connects, for paths that stay out of
/// the database.
fn offline_router() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/bookstore")
        .expect("lazy pool");
    build_router(AppState::new(pool))
}

async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request")
}

#[tokio::test]
async fn welcome_envelope() {
    let response = offline_router().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Welcome to the bookstore API");
}

#[tokio::test]
async fn malformed_post_body_is_400() {
    let response = offline_router()
        .oneshot(post_json("/books", "{not json".into()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn mistyped_post_body_is_400() {
    let payload = json!({"title": "Dune", "author": "Herbert", "price": "expensive"});
    let response = offline_router()
        .oneshot(post_json("/books", payload.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let response = offline_router()
        .oneshot(get("/books/not-a-number"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = offline_router().oneshot(get("/shelves")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_405() {
    let request = Request::delete("/books/1")
        .body(Body::empty())
        .expect("request");
    let response = offline_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// === Database-backed tests ===

async fn database_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    sqlx::raw_sql(include_str!("../schema.sql"))
        .execute(&pool)
        .await
        .expect("schema apply failed");
    pool
}

/// Repository and handler behavior against a real table, run as one
/// sequence over a freshly truncated table so the steps cannot race.
#[tokio::test]
#[ignore = "requires database"]
async fn books_end_to_end() {
    let pool = database_pool().await;
    sqlx::query("TRUNCATE books RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("truncate");

    let repo = BookRepo::new(&pool);

    // Empty table lists as an empty sequence, not an error.
    assert!(repo.list().await.expect("list").is_empty());

    // A missing id is NotFound, never a generic query error.
    match repo.get(1).await {
        Err(DbError::NotFound { .. }) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }

    // Insert reads back the generated id.
    let created = repo
        .create(CreateBookRequest {
            title: "Dune".into(),
            author: "Herbert".into(),
            price: 19.99,
        })
        .await
        .expect("create");
    assert!(created.id > 0);

    // get returns the row with the requested id.
    let fetched = repo.get(created.id).await.expect("get");
    assert_eq!(fetched, created);

    // list includes the inserted values.
    let all = repo.list().await.expect("list");
    assert!(all
        .iter()
        .any(|b| b.title == "Dune" && b.author == "Herbert" && b.price == 19.99));

    // Full stack: POST responds 201 with the persisted record. The id in
    // the request body is ignored; the database assigns the real one.
    let app = build_router(AppState::new(pool.clone()));
    let payload = json!({"id": 4242, "title": "Hyperion", "author": "Simmons", "price": 9.5});
    let response = app
        .clone()
        .oneshot(post_json("/books", payload.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    let id = body["id"].as_i64().expect("id in response");
    assert!(id > 0);
    assert_ne!(id, 4242);
    assert_eq!(body["title"], "Hyperion");
    assert_eq!(body["author"], "Simmons");
    assert_eq!(body["price"], 9.5);

    // The persisted record is fetchable by the returned id.
    let response = app
        .clone()
        .oneshot(get(&format!("/books/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, body);

    // 404 carries the pinned message.
    let response = app.clone().oneshot(get("/books/999999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_json(response).await["message"], "Book not found");

    // Concurrent inserts all land; each appears exactly once.
    let mut handles = Vec::new();
    for i in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            BookRepo::new(&pool)
                .create(CreateBookRequest {
                    title: format!("concurrent-{}", i),
                    author: "writer".into(),
                    price: f64::from(i),
                })
                .await
                .expect("concurrent create")
        }));
    }
    for handle in handles {
        handle.await.expect("task panicked");
    }

    let all = repo.list().await.expect("list");
    for i in 0..8 {
        let title = format!("concurrent-{}", i);
        assert_eq!(all.iter().filter(|b| b.title == title).count(), 1);
    }
}
