use std::{fmt, time::Duration};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Model call timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("Model returned an empty {0} response")]
    EmptyOutput(String),

    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// True for failures caused by the caller's input rather than by this
    /// service or the model provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Rejection of a request payload before anything is sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error_display_names_field() {
        let err = ValidationError::new("text", "Text is too short to summarize");
        assert_eq!(err.to_string(), "text: Text is too short to summarize");
    }

    #[test]
    fn test_timeout_keeps_sub_second_precision() {
        let err = Error::Timeout {
            after: Duration::from_millis(200),
        };
        assert_eq!(err.to_string(), "Model call timed out after 200ms");
    }

    #[test]
    fn test_only_validation_is_client_error() {
        let validation: Error = ValidationError::new("query", "Query cannot be empty").into();
        assert!(validation.is_client_error());
        assert!(!Error::upstream("rate limited").is_client_error());
        assert!(
            !Error::Timeout {
                after: Duration::from_secs(30)
            }
            .is_client_error()
        );
        assert!(!Error::config("missing key").is_client_error());
    }
}
