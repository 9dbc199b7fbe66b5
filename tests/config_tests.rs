use myra_chat::{Error, config};
use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;

mod common;

use common::test_utils::{
    INVALID_CONFIG_YAML, SAMPLE_CONFIG_YAML, create_test_config, create_test_config_file,
};

#[tokio::test]
async fn test_load_file_reads_all_sections() {
    let (_dir, path) = create_test_config_file(SAMPLE_CONFIG_YAML).await;

    let config = config::load_file(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.llm.base_url, "http://localhost:9999/v1");
    assert_eq!(config.llm.api_key.expose_secret(), "test-api-key");
    assert_eq!(config.llm.model, "llama-3.1-8b-instant");
    assert_eq!(
        config.llm.system_prompt.as_deref(),
        Some("You are a helpful assistant.")
    );
    assert_eq!(config.llm.temperature, 0.3);
    assert_eq!(config.llm.max_tokens, Some(256));
    assert_eq!(config.llm.timeout_secs, 5);
    assert_eq!(config.assistant.user_name, "Tester");
    config.validate().unwrap();
}

#[tokio::test]
async fn test_load_file_rejects_bad_types() {
    let (_dir, path) = create_test_config_file(INVALID_CONFIG_YAML).await;

    let err = config::load_file(&path).await.unwrap_err();

    assert!(matches!(err, Error::Yaml(_)));
}

#[tokio::test]
async fn test_load_file_missing_path() {
    let dir = tempfile::tempdir().unwrap();

    let err = config::load_file(dir.path().join("absent.yaml"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn test_file_without_key_fails_validation() {
    let (_dir, path) = create_test_config_file("server:\n  port: 9000\n").await;

    let config = config::load_file(&path).await.unwrap();

    assert_eq!(config.server.port, 9000);
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn test_default_config_with_key_is_ready() {
    let config = create_test_config();

    config.validate().unwrap();
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
}
