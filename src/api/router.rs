use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, add_book, delete_book, list_books, root};

/// Creates the API router with all catalog endpoints
///
/// - GET /books - List all books
/// - POST /books - Look up an ISBN and add the book
/// - DELETE /books/:isbn - Remove every book with the ISBN
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", get(list_books).post(add_book))
        .route("/books/:isbn", delete(delete_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
