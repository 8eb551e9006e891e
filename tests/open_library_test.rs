use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use book_catalog::adapters::open_library::{OpenLibraryClient, UNKNOWN_AUTHOR};
use book_catalog::domain::Isbn;
use book_catalog::ports::{BookLookup, LookupError};
use serde_json::json;
use std::time::Duration;

async fn edition(Path(file): Path<String>) -> Response {
    match file.as_str() {
        "1111.json" => Json(json!({ "title": "Dune" })).into_response(),
        "2222.json" => Json(json!({
            "title": "Dune",
            "authors": [{ "name": "Frank Herbert" }],
            "isbn_13": ["9780441013593"]
        }))
        .into_response(),
        "3333.json" => Json(json!({ "title": "Plain", "authors": ["Plain Author"] })).into_response(),
        "4444.json" => (StatusCode::OK, "not json").into_response(),
        "5555.json" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "title": "Too late" })).into_response()
        }
        "6666.json" => Redirect::temporary("/books/OL1M.json").into_response(),
        "7777.json" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn book_record() -> Json<serde_json::Value> {
    Json(json!({ "title": "Redirected", "authors": [{ "name": "Someone" }] }))
}

// ============================================================================
// Open Library の代わりのローカルサーバー
// ============================================================================

/// Start the stand-in server and return its base URL
async fn spawn_server() -> String {
    let app = Router::new()
        .route("/isbn/:file", get(edition))
        .route("/books/OL1M.json", get(book_record));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> OpenLibraryClient {
    OpenLibraryClient::new(base_url, Duration::from_secs(1)).unwrap()
}

#[tokio::test]
async fn test_resolves_title_without_authors() {
    let base_url = spawn_server().await;

    let book = client(&base_url).resolve(&Isbn::new("1111")).await.unwrap();

    assert_eq!(book.title(), "Dune");
    assert_eq!(book.author(), UNKNOWN_AUTHOR);
    assert_eq!(book.isbn().value(), "1111");
}

#[tokio::test]
async fn test_resolves_structured_author_and_keeps_requested_isbn() {
    let base_url = spawn_server().await;

    let book = client(&base_url).resolve(&Isbn::new("2222")).await.unwrap();

    assert_eq!(book.author(), "Frank Herbert");
    assert_eq!(book.isbn().value(), "2222");
}

#[tokio::test]
async fn test_resolves_plain_author() {
    let base_url = spawn_server().await;

    let book = client(&base_url).resolve(&Isbn::new("3333")).await.unwrap();

    assert_eq!(book.author(), "Plain Author");
}

#[tokio::test]
async fn test_follows_redirects() {
    let base_url = spawn_server().await;

    let book = client(&base_url).resolve(&Isbn::new("6666")).await.unwrap();

    assert_eq!(book.title(), "Redirected");
    assert_eq!(book.isbn().value(), "6666");
}

#[tokio::test]
async fn test_missing_edition_is_not_found() {
    let base_url = spawn_server().await;

    let err = client(&base_url).resolve(&Isbn::new("0000")).await.unwrap_err();

    assert_eq!(err, LookupError::NotFound);
}

#[tokio::test]
async fn test_server_error_is_unexpected_status() {
    let base_url = spawn_server().await;

    let err = client(&base_url).resolve(&Isbn::new("7777")).await.unwrap_err();

    assert_eq!(err, LookupError::UnexpectedStatus { status: 500 });
    // 500は書籍が存在しないことを意味しない
    assert!(!err.to_string().contains("no book found"));
}

#[tokio::test]
async fn test_unparseable_body_is_invalid_payload() {
    let base_url = spawn_server().await;

    let err = client(&base_url).resolve(&Isbn::new("4444")).await.unwrap_err();

    assert!(matches!(err, LookupError::InvalidPayload(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let base_url = spawn_server().await;

    let err = client(&base_url).resolve(&Isbn::new("5555")).await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // 一度バインドしてすぐ閉じたポートには接続できない
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .resolve(&Isbn::new("1111"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)));
}
