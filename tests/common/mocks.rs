use async_trait::async_trait;
use myra_chat::{Error, Result, llm::LlmClient};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock LLM client for testing
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub response: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
    pub delay: Option<Duration>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            response: "mock response".to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
            delay: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        Ok(self.response.clone())
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
