use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use myra_chat::{
    config::{Config, LlmConfig},
    server,
};
use secrecy::Secret;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

use super::mocks::MockLlmClient;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        llm: LlmConfig {
            api_key: Secret::new("test-api-key".to_string()),
            ..LlmConfig::default()
        },
        ..Config::default()
    }
}

/// Router backed by the given mock
pub fn create_test_app(client: &MockLlmClient) -> Router {
    server::router(Arc::new(client.clone()))
}

/// Write a config file into a fresh temporary directory
pub async fn create_test_config_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, content).await.unwrap();
    (dir, path)
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and decode the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:9999/v1"
  api_key: "test-api-key"
  model: "llama-3.1-8b-instant"
  system_prompt: "You are a helpful assistant."
  temperature: 0.3
  max_tokens: 256
  timeout_secs: 5

assistant:
  name: "Myra"
  user_name: "Tester"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
