use super::Endpoint;
use crate::{Error, Result};
use tracing::{debug, warn};
use uuid::Uuid;

// Request states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    Validated,
    Dispatched,
    Completed,
    Failed,
}

// Request events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    ValidationPassed,
    ModelCalled,
    ModelResponded,
    Failed,
}

/// Tracks one inbound request from receipt to its single outcome.
pub struct RequestLifecycle {
    id: Uuid,
    endpoint: Endpoint,
    state: RequestState,
}

impl RequestLifecycle {
    pub fn new(endpoint: Endpoint) -> Self {
        let id = Uuid::new_v4();
        debug!(request_id = %id, endpoint = %endpoint, "Request received");
        Self {
            id,
            endpoint,
            state: RequestState::Received,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_state(&self) -> RequestState {
        self.state
    }

    pub fn transition(&mut self, event: RequestEvent) -> Result<()> {
        let new_state = match (self.state, event) {
            (RequestState::Received, RequestEvent::ValidationPassed) => RequestState::Validated,
            (RequestState::Validated, RequestEvent::ModelCalled) => RequestState::Dispatched,
            (RequestState::Dispatched, RequestEvent::ModelResponded) => RequestState::Completed,
            (state, RequestEvent::Failed) if !Self::is_terminal_state(state) => {
                RequestState::Failed
            }
            (state, event) => {
                warn!(
                    request_id = %self.id,
                    "Invalid request transition from {:?} with event {:?}",
                    state,
                    event
                );
                return Err(Error::lifecycle(format!(
                    "Invalid transition from {:?} with event {:?}",
                    state, event
                )));
            }
        };

        debug!(
            request_id = %self.id,
            endpoint = %self.endpoint,
            "Request state transition: {:?} -> {:?} (event: {:?})",
            self.state,
            new_state,
            event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        Self::is_terminal_state(self.state)
    }

    fn is_terminal_state(state: RequestState) -> bool {
        matches!(state, RequestState::Completed | RequestState::Failed)
    }
}
