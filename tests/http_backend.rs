//! Wire contract of the HTTP backend, checked against a local axum server

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use resume_righter::api::{ApiError, Backend, GenerateRequest, HttpBackend, ResumeUpload};
use resume_righter::config::Settings;

const PAGE_TOKEN: &str = "page-token-123";

#[derive(Debug, Clone, PartialEq)]
struct Seen {
    path: &'static str,
    csrf: Option<String>,
    body: Value,
}

type Log = Arc<Mutex<Vec<Seen>>>;

fn csrf_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-csrftoken")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn index() -> Html<String> {
    Html(format!(
        r#"<html><body><form><input type="hidden" name="csrfmiddlewaretoken" value="{}"></form></body></html>"#,
        PAGE_TOKEN
    ))
}

async fn validate_resume(
    State(log): State<Log>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut rejected = false;
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap();
        rejected |= file_name.contains("bad");
        fields.push(json!({
            "name": name,
            "file_name": file_name,
            "content_type": content_type,
            "content": String::from_utf8_lossy(&bytes),
        }));
    }
    log.lock().unwrap().push(Seen {
        path: "resume",
        csrf: csrf_of(&headers),
        body: Value::Array(fields),
    });
    if rejected {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Could not extract text from the file."})),
        )
            .into_response();
    }
    Json(json!({"valid": true, "extracted_text": "Jane Doe, Rust engineer"})).into_response()
}

async fn validate_job_posting(
    State(log): State<Log>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let url = body["url"].as_str().unwrap_or_default().to_string();
    log.lock().unwrap().push(Seen {
        path: "job_posting",
        csrf: csrf_of(&headers),
        body,
    });
    if url.contains("bad") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Could not fetch job posting."})),
        )
            .into_response();
    }
    Json(json!({"valid": true, "job_posting_text": "Senior Rust engineer"})).into_response()
}

async fn validate_considerations(
    State(log): State<Log>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let text = body["text"].as_str().unwrap_or_default().to_string();
    log.lock().unwrap().push(Seen {
        path: "considerations",
        csrf: csrf_of(&headers),
        body,
    });
    Json(json!({"valid": true, "validated_data": text.to_uppercase()}))
}

async fn generate_resume(
    State(log): State<Log>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let fail = body["considerations"] == "fail";
    log.lock().unwrap().push(Seen {
        path: "generate",
        csrf: csrf_of(&headers),
        body,
    });
    if fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    (
        [(
            header::CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        )],
        b"PK\x03\x04docx".to_vec(),
    )
        .into_response()
}

/// Serve the fake service on an ephemeral port and return its base URL
async fn spawn_server() -> (String, Log) {
    let log: Log = Arc::default();
    let app = Router::new()
        .route("/", get(index))
        .route("/api/validate-resume/", post(validate_resume))
        .route("/api/validate-job-posting/", post(validate_job_posting))
        .route(
            "/api/validate-special-considerations/",
            post(validate_considerations),
        )
        .route("/api/generate-resume/", post(generate_resume))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), log)
}

fn backend(base_url: &str, csrf_token: Option<&str>) -> HttpBackend {
    let settings = Settings {
        base_url: base_url.to_string(),
        csrf_token: csrf_token.map(str::to_string),
        ..Settings::default()
    };
    HttpBackend::new(&settings).unwrap()
}

#[tokio::test]
async fn test_resume_upload_is_multipart_with_csrf_header() {
    let (url, log) = spawn_server().await;
    let backend = backend(&url, Some("fixed-token"));

    let upload = ResumeUpload::new("cv.txt", b"Jane Doe".to_vec()).unwrap();
    let result = backend.validate_resume(&upload).await.unwrap();

    assert!(result.valid);
    assert_eq!(result.text, "Jane Doe, Rust engineer");

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].csrf.as_deref(), Some("fixed-token"));
    assert_eq!(
        seen[0].body,
        json!([{
            "name": "resume_file",
            "file_name": "cv.txt",
            "content_type": "text/plain",
            "content": "Jane Doe",
        }])
    );
}

#[tokio::test]
async fn test_json_bodies_use_documented_keys() {
    let (url, log) = spawn_server().await;
    let backend = backend(&url, Some("fixed-token"));

    let posting = backend
        .validate_job_posting("https://jobs.example/42")
        .await
        .unwrap();
    assert!(posting.valid);
    assert_eq!(posting.text, "Senior Rust engineer");

    let considerations = backend.validate_considerations("remote only").await.unwrap();
    assert!(considerations.valid);
    assert_eq!(considerations.text, "REMOTE ONLY");

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen[0].body, json!({"url": "https://jobs.example/42"}));
    assert_eq!(seen[1].body, json!({"text": "remote only"}));
    assert!(seen
        .iter()
        .all(|s| s.csrf.as_deref() == Some("fixed-token")));
}

#[tokio::test]
async fn test_error_body_decodes_as_rejection() {
    let (url, _log) = spawn_server().await;
    let backend = backend(&url, Some("fixed-token"));

    let result = backend
        .validate_job_posting("https://bad.example")
        .await
        .unwrap();

    assert!(!result.valid);
    assert_eq!(result.text, "");
}

#[tokio::test]
async fn test_resume_error_body_decodes_as_rejection() {
    let (url, log) = spawn_server().await;
    let backend = backend(&url, Some("fixed-token"));

    let upload = ResumeUpload::new("bad.pdf", b"%PDF-1.7".to_vec()).unwrap();
    let result = backend.validate_resume(&upload).await.unwrap();

    assert!(!result.valid);
    assert_eq!(result.text, "");
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_generate_returns_document_bytes() {
    let (url, log) = spawn_server().await;
    let backend = backend(&url, Some("fixed-token"));

    let request = GenerateRequest {
        resume_text: "Jane Doe".into(),
        job_posting_text: "Senior Rust engineer".into(),
        considerations: String::new(),
    };
    let document = backend.generate_resume(&request).await.unwrap();

    assert_eq!(&document[..], b"PK\x03\x04docx");
    let seen = log.lock().unwrap().clone();
    assert_eq!(
        seen[0].body,
        json!({
            "resume_text": "Jane Doe",
            "job_posting_text": "Senior Rust engineer",
            "considerations": "",
        })
    );
}

#[tokio::test]
async fn test_generate_server_error_is_status_error() {
    let (url, _log) = spawn_server().await;
    let backend = backend(&url, Some("fixed-token"));

    let request = GenerateRequest {
        resume_text: "Jane Doe".into(),
        job_posting_text: "Senior Rust engineer".into(),
        considerations: "fail".into(),
    };
    let err = backend.generate_resume(&request).await.unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_token_fetched_once_from_index_page() {
    let (url, log) = spawn_server().await;
    let backend = backend(&url, None);

    backend.validate_job_posting("https://jobs.example/1").await.unwrap();
    backend.validate_considerations("hybrid").await.unwrap();

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|s| s.csrf.as_deref() == Some(PAGE_TOKEN)));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = backend(&format!("http://{}", addr), Some("fixed-token"));
    let err = backend
        .validate_considerations("anything")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
}
