#![allow(dead_code)]

//! In-process stand-in for the book analysis backend.

use axum::{
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use book_client::{ApiClient, Book, ClientConfig};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Default)]
pub struct StubBackend {
    pub books: Mutex<Vec<Book>>,
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl StubBackend {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, method: &Method, uri: &Uri, headers: &HeaderMap, body: String) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
    }
}

type Shared = Arc<StubBackend>;

pub fn sample_book(id: &str) -> Book {
    Book {
        id: id.to_string(),
        title: "Pride and Prejudice".to_string(),
        description: "A novel of manners.".to_string(),
        book_type: "book".to_string(),
        image: "https://www.gutenberg.org/cache/epub/1342/pg1342.cover.medium.jpg".to_string(),
        url: "https://www.gutenberg.org/ebooks/1342".to_string(),
        site_name: "Project Gutenberg".to_string(),
        content: "It is a truth universally acknowledged...".to_string(),
    }
}

pub async fn spawn_backend(books: Vec<Book>) -> (ApiClient, Shared) {
    let backend = Arc::new(StubBackend {
        books: Mutex::new(books),
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/health", get(health))
        .route("/unhealthy", get(unhealthy))
        .route("/book/:id", get(get_book))
        .route("/book", post(save_book))
        .route("/books", get(list_books))
        .route("/characters", post(analyze))
        .route("/language", post(analyze))
        .route("/sentiment", post(analyze))
        .route("/summary", post(analyze))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::with_config(ClientConfig::for_base_url(format!("http://{}", addr)));
    (client, backend)
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn unhealthy() -> Response {
    detail(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
}

async fn get_book(
    Path(id): Path<String>,
    State(backend): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    backend.record(&method, &uri, &headers, String::new());

    if id == "garbled" {
        return (StatusCode::OK, "not json").into_response();
    }

    let found = backend
        .books
        .lock()
        .unwrap()
        .iter()
        .find(|book| book.id == id)
        .cloned();

    match found {
        Some(book) => Json(book).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Book not found"),
    }
}

async fn save_book(
    State(backend): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    backend.record(&method, &uri, &headers, body.clone());

    let book: Book = match serde_json::from_str(&body) {
        Ok(book) => book,
        Err(_) => return detail(StatusCode::UNPROCESSABLE_ENTITY, "Invalid book payload"),
    };

    let mut books = backend.books.lock().unwrap();
    if books.iter().any(|existing| existing.id == book.id) {
        return detail(StatusCode::CONFLICT, "Book already exists");
    }
    books.push(book);

    Json(json!({ "message": "Book saved successfully", "status": "success" })).into_response()
}

async fn list_books(
    State(backend): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    backend.record(&method, &uri, &headers, String::new());
    let books = backend.books.lock().unwrap().clone();
    Json(books).into_response()
}

async fn analyze(
    State(backend): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    backend.record(&method, &uri, &headers, body);

    let Some(book_id) = params.get("book_id") else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "book_id is required");
    };

    match book_id.as_str() {
        "missing" => return detail(StatusCode::NOT_FOUND, "Book not found"),
        "crash" => return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        _ => {}
    }

    let kind = uri.path().trim_start_matches('/');
    if kind == "sentiment" && book_id == "no-sentiment" {
        return detail(StatusCode::SERVICE_UNAVAILABLE, "Sentiment model unavailable");
    }

    let result = match kind {
        "characters" => json!({
            "characters": [
                { "name": "Elizabeth Bennet", "role": "protagonist" },
                { "name": "Fitzwilliam Darcy", "role": "love interest" }
            ]
        }),
        "language" if book_id == "self-reported-failure" => json!({
            "success": false,
            "language_code": "fr",
            "confidence": 0.51
        }),
        "language" => json!({ "language_code": "en", "confidence": 0.97 }),
        "sentiment" => json!({ "sentiment": 0.42, "classification": "positive" }),
        "summary" => json!({
            "summary": "Elizabeth Bennet and Mr. Darcy overcome pride and prejudice.",
            "word_count": 120
        }),
        _ => return detail(StatusCode::NOT_FOUND, "Not Found"),
    };

    Json(result).into_response()
}
