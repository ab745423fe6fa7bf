use axum::http::{HeaderMap, StatusCode, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use pirabel_core::{CompletionModel, CompletionRequest, Error, Schema};
use pirabel_inference::models::GeminiModel;

#[derive(Debug, Clone)]
struct Seen {
    path: String,
    api_key: Option<String>,
    body: Value,
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1beta")
}

fn request() -> CompletionRequest {
    CompletionRequest {
        model: "gemini-test".to_string(),
        prompt: "Generate keywords".to_string(),
        schema: Schema::array(Schema::string()),
    }
}

#[tokio::test]
async fn test_complete_sends_key_and_joins_parts() {
    let seen: Arc<Mutex<Vec<Seen>>> = Arc::default();
    let recorder = seen.clone();
    let router = Router::new().fallback(move |uri: Uri, headers: HeaderMap, Json(body): Json<Value>| {
        let recorder = recorder.clone();
        async move {
            recorder.lock().unwrap().push(Seen {
                path: uri.path().to_string(),
                api_key: headers
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body,
            });
            Json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "[\"a\"," }, { "text": "\"b\"]" }] } }]
            }))
        }
    });
    let base_url = spawn(router).await;

    let model = GeminiModel::new(Some("test-key".to_string()), &base_url).unwrap();
    let text = model.complete(&request()).await.unwrap();
    assert_eq!(text, "[\"a\",\"b\"]");

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(seen[0].api_key.as_deref(), Some("test-key"));
    assert_eq!(seen[0].body["contents"][0]["parts"][0]["text"], "Generate keywords");
    assert_eq!(seen[0].body["generationConfig"]["responseMimeType"], "application/json");
}

#[tokio::test]
async fn test_non_success_status_is_a_completion_error() {
    let router = Router::new().fallback(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model overloaded") });
    let base_url = spawn(router).await;

    let model = GeminiModel::new(Some("test-key".to_string()), &base_url).unwrap();
    let err = model.complete(&request()).await.unwrap_err();
    assert!(err.is_transport());
    match err {
        Error::Completion(message) => {
            assert!(message.contains("503"), "{message}");
            assert!(message.contains("model overloaded"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
