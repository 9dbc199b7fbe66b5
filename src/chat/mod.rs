mod dispatcher;
pub mod lifecycle;
pub mod prompts;
mod response;
mod service;
pub mod types;
pub mod validation;

pub use dispatcher::{ChatCommand, Dispatcher};
pub use lifecycle::{RequestEvent, RequestLifecycle, RequestState};
pub use response::{ApiResponse, Envelope};
pub use service::{ApiRequest, ChatService};
pub use types::{ChatPayload, DetectionMap, DetectionPayload, ScenarioPayload, SummarizePayload};

use std::fmt;

/// The model-backed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Chat,
    Summarize,
    Scenario,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chat => "chat",
            Self::Summarize => "summarize",
            Self::Scenario => "scenario",
        };
        f.write_str(name)
    }
}
