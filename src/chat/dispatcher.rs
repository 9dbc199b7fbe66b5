use super::{
    Endpoint, prompts,
    validation::{ChatRequest, DetectionData, SummarizeRequest},
};
use crate::{Error, Result, llm::LlmClient};
use std::sync::Arc;
use tracing::{debug, info};

/// A validated request, ready to be turned into a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    Chat(ChatRequest),
    Summarize(SummarizeRequest),
    Scenario(DetectionData),
}

impl ChatCommand {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Chat(_) => Endpoint::Chat,
            Self::Summarize(_) => Endpoint::Summarize,
            Self::Scenario(_) => Endpoint::Scenario,
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Self::Chat(request) => prompts::chat_prompt(request),
            Self::Summarize(request) => prompts::summarize_prompt(request),
            Self::Scenario(data) => prompts::scenario_prompt(data),
        }
    }
}

/// Sends each command to the model exactly once. No retries.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn LlmClient>,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub async fn dispatch(&self, command: ChatCommand) -> Result<String> {
        let endpoint = command.endpoint();

        match &command {
            ChatCommand::Chat(request) => info!(
                "Received chat request with query: {}...",
                truncate(request.query(), 100)
            ),
            ChatCommand::Summarize(request) => info!(
                "Summarizing {} characters of text",
                request.text().chars().count()
            ),
            ChatCommand::Scenario(data) => info!(
                "Describing scenario for {} ({} detections)",
                data.filename(),
                data.detection_count()
            ),
        }

        let prompt = command.prompt();
        debug!("Dispatching {} prompt of {} bytes", endpoint, prompt.len());

        let output = self.client.complete(&prompt).await?;
        // Only a summary must be non-empty; chat and scenario pass any text through.
        if endpoint == Endpoint::Summarize && output.is_empty() {
            return Err(Error::EmptyOutput(endpoint.to_string()));
        }

        info!("{} request processed successfully", endpoint);
        Ok(output)
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("hello", 100), "hello");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("héllo", 2), "hé");
    }
}
