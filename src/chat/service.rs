use super::{
    Endpoint,
    dispatcher::{ChatCommand, Dispatcher},
    lifecycle::{RequestEvent, RequestLifecycle},
    response::ApiResponse,
    types::{ChatPayload, ScenarioPayload, SummarizePayload},
    validation,
};
use crate::{Result, error::ValidationError, llm::LlmClient};
use std::sync::Arc;
use tracing::{error, warn};

/// A parsed but not yet validated request.
#[derive(Debug, Clone)]
pub enum ApiRequest {
    Chat(ChatPayload),
    Summarize(SummarizePayload),
    Scenario(ScenarioPayload),
}

impl ApiRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Chat(_) => Endpoint::Chat,
            Self::Summarize(_) => Endpoint::Summarize,
            Self::Scenario(_) => Endpoint::Scenario,
        }
    }

    pub fn validate(self) -> std::result::Result<ChatCommand, ValidationError> {
        Ok(match self {
            Self::Chat(payload) => ChatCommand::Chat(validation::validate_chat(payload)?),
            Self::Summarize(payload) => {
                ChatCommand::Summarize(validation::validate_summarize(payload)?)
            }
            Self::Scenario(payload) => {
                ChatCommand::Scenario(validation::validate_scenario(payload)?)
            }
        })
    }
}

/// Entry point for every endpoint: validate, dispatch, format.
///
/// Holds no per-request state, so one instance serves concurrent requests.
#[derive(Clone)]
pub struct ChatService {
    dispatcher: Dispatcher,
}

impl ChatService {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            dispatcher: Dispatcher::new(client),
        }
    }

    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        let endpoint = request.endpoint();
        let mut lifecycle = RequestLifecycle::new(endpoint);

        match self.process(&mut lifecycle, request).await {
            Ok(output) => ApiResponse::success(endpoint, output),
            Err(e) => {
                if e.is_client_error() {
                    warn!(request_id = %lifecycle.id(), "Rejected {} request: {}", endpoint, e);
                } else {
                    error!(request_id = %lifecycle.id(), "Failed to process {} request: {}", endpoint, e);
                }
                ApiResponse::failure(endpoint, &e)
            }
        }
    }

    async fn process(
        &self,
        lifecycle: &mut RequestLifecycle,
        request: ApiRequest,
    ) -> Result<String> {
        let command = match request.validate() {
            Ok(command) => command,
            Err(e) => {
                lifecycle.transition(RequestEvent::Failed)?;
                return Err(e.into());
            }
        };
        lifecycle.transition(RequestEvent::ValidationPassed)?;

        lifecycle.transition(RequestEvent::ModelCalled)?;
        match self.dispatcher.dispatch(command).await {
            Ok(output) => {
                lifecycle.transition(RequestEvent::ModelResponded)?;
                Ok(output)
            }
            Err(e) => {
                lifecycle.transition(RequestEvent::Failed)?;
                Err(e)
            }
        }
    }
}
