use super::types::ChatMessage;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::time::Duration;
use tracing::debug;

/// Chat-completion backend. Given a prompt, returns the generated text.
///
/// Implementations hold no conversation state between calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: Option<String>,
    temperature: f32,
    max_tokens: Option<u32>,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.api_key.expose_secret().clone());

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        // async-openai retries 429/5xx with its own backoff; failures surface
        // to the caller immediately instead.
        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(openai_config).with_backoff(no_retry);

        Self {
            client,
            model: config.model,
            system_prompt: config.system_prompt,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self, prompt: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = &self.system_prompt {
            messages.push(ChatMessage::system(system_prompt.clone()));
        }
        messages.push(ChatMessage::user(prompt));
        messages
    }

    pub fn build_request(&self, prompt: &str) -> Result<openai_types::CreateChatCompletionRequest> {
        let messages = self
            .messages(prompt)
            .iter()
            .map(ChatMessage::to_openai_message)
            .collect::<Result<Vec<_>>>()?;

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature);

        if let Some(max_tokens) = self.max_tokens {
            request_builder.max_completion_tokens(max_tokens);
        }

        Ok(request_builder.build()?)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt)?;

        debug!(
            "Creating chat completion with {} messages on model {}",
            request.messages.len(),
            self.model
        );

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| Error::Timeout {
                after: self.timeout,
            })??;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::upstream("Model returned no content"))
    }
}
