/// Error taxonomy for backend calls
use crate::game_data::PayloadError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Rejected locally; no request was issued
    #[error("validation failed: {0}")]
    Validation(String),

    /// Transport failure, non-2xx status, or a payload that failed validation
    #[error("request failed: {reason}")]
    RequestFailed {
        status: Option<u16>,
        detail: Option<String>,
        reason: String,
    },
}

impl ClientError {
    pub fn transport(reason: impl Into<String>) -> ClientError {
        ClientError::RequestFailed {
            status: None,
            detail: None,
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => *status,
            ClientError::Validation(_) => None,
        }
    }

    /// Server-supplied detail message, if the error body carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::RequestFailed { detail, .. } => detail.as_deref(),
            ClientError::Validation(_) => None,
        }
    }

    /// Message to show the user: the validation message, the server detail,
    /// or `fallback` when neither is available.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(message) => message.clone(),
            ClientError::RequestFailed { detail, .. } => detail
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    pub(crate) fn malformed(status: u16, err: PayloadError) -> ClientError {
        ClientError::RequestFailed {
            status: Some(status),
            detail: None,
            reason: format!("unexpected response payload: {}", err),
        }
    }
}

/// Errors from building the application configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),

    #[error("failed to read configuration object: {0}")]
    Js(String),
}
