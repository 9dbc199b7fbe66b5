use super::Endpoint;
use crate::Error;
use serde::Serialize;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// JSON body of every response: a single key naming what it carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Envelope {
    Response(String),
    Summary(String),
    Description(String),
    Detail(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Envelope,
}

impl ApiResponse {
    pub fn success(endpoint: Endpoint, output: String) -> Self {
        let body = match endpoint {
            Endpoint::Chat => Envelope::Response(output),
            Endpoint::Summarize => Envelope::Summary(output),
            Endpoint::Scenario => Envelope::Description(output),
        };
        Self {
            status: STATUS_OK,
            body,
        }
    }

    /// Validation failures become 400 with the field detail; everything else
    /// is a 500. Only chat failures carry the underlying error text.
    pub fn failure(endpoint: Endpoint, error: &Error) -> Self {
        if let Error::Validation(validation) = error {
            return Self::bad_request(validation.to_string());
        }

        let detail = match (endpoint, error) {
            (Endpoint::Chat, _) => format!("Failed to process chat request: {}", error),
            (Endpoint::Summarize, Error::EmptyOutput(_)) => "Failed to generate summary".to_string(),
            (Endpoint::Summarize, _) => "Failed to process summarization request".to_string(),
            (Endpoint::Scenario, _) => {
                "Failed to process scenario description request".to_string()
            }
        };
        Self {
            status: STATUS_INTERNAL_ERROR,
            body: Envelope::Detail(detail),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            body: Envelope::Detail(detail.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}
