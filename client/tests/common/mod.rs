use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const MAX_UPLOAD_BYTES: usize = 64;

/// What the stub server has been sent.
#[derive(Debug, Default)]
pub struct Received {
    pub uploads: Vec<(String, String, Vec<u8>)>,
    pub questions: Vec<String>,
    pub cleanups: usize,
}

pub type Shared = Arc<Mutex<Received>>;

/// Starts a stand-in for the page's server on an ephemeral port and returns
/// its base URL.
pub async fn spawn_stub() -> (String, Shared) {
    let received: Shared = Arc::default();

    let app = Router::new()
        .route("/upload", post(upload))
        .route("/query", post(query))
        .route("/cleanup", post(cleanup))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), received)
}

async fn upload(State(received): State<Shared>, mut multipart: Multipart) -> Response {
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap().to_vec();
        let size = bytes.len();
        received
            .lock()
            .unwrap()
            .uploads
            .push((file_name.clone(), content_type, bytes));

        if size > MAX_UPLOAD_BYTES {
            return (StatusCode::PAYLOAD_TOO_LARGE, Json(json!({"error": "too large"})))
                .into_response();
        }
        if !file_name.ends_with(".pdf") {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid file type"})))
                .into_response();
        }
        return Json(json!({
            "message": "PDF processed successfully",
            "filename": file_name,
        }))
        .into_response();
    }

    (StatusCode::BAD_REQUEST, Json(json!({"error": "No file part"}))).into_response()
}

async fn query(State(received): State<Shared>, Json(body): Json<Value>) -> Response {
    let question = body["question"].as_str().unwrap_or_default().to_string();
    received.lock().unwrap().questions.push(question.clone());

    match question.as_str() {
        "no document" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Please upload a PDF first"})),
        )
            .into_response(),
        "crash" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "garbage" => (StatusCode::OK, "not json").into_response(),
        "bare" => Json(json!({"answer": "bare answer", "pdf_name": "doc.pdf"})).into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"answer": "late", "pdf_name": "doc.pdf", "sources": []})).into_response()
        }
        _ => Json(json!({
            "answer": "A",
            "pdf_name": "doc.pdf",
            "sources": ["s1", "s2"],
        }))
        .into_response(),
    }
}

async fn cleanup(State(received): State<Shared>) -> Json<Value> {
    received.lock().unwrap().cleanups += 1;
    Json(json!({"message": "Cleanup successful"}))
}
