use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error object the API reports, either embedded in a 200 body or sent with
/// a non-success status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Free-form; the API sends a string, null, or occasionally an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Wrap a raw, undecoded response body.
    pub fn from_raw_body(body: impl Into<String>) -> Self {
        Self {
            message: body.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_type {
            Some(error_type) => write!(f, "{} ({})", self.message, error_type),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Credential that must be configured before an authenticated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    ApiKey,
    Organization,
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ApiKey => write!(f, "API key"),
            Credential::Organization => write!(f, "organization"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Missing credential: no {0} configured")]
    MissingCredential(Credential),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported response format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Unauthorized{}", unauthorized_detail(.error))]
    Unauthorized { error: Option<ApiError> },

    #[error("Bad gateway: {error}")]
    BadGateway { error: ApiError },

    #[error("Unknown API error (status {status_code}): {error}")]
    Unknown { status_code: u16, error: ApiError },

    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("Response contains no choices")]
    NoChoices,

    #[error("Function '{name}' not found in response")]
    FunctionNotFound { name: String },
}

fn unauthorized_detail(error: &Option<ApiError>) -> String {
    error
        .as_ref()
        .map(|error| format!(": {error}"))
        .unwrap_or_default()
}

impl LlmError {
    /// The provider-reported error payload, for the status-code variants.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            LlmError::Unauthorized { error } => error.as_ref(),
            LlmError::BadGateway { error } | LlmError::Unknown { error, .. } => Some(error),
            _ => None,
        }
    }

    /// HTTP status code the error was classified from, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Unauthorized { .. } => Some(401),
            LlmError::BadGateway { .. } => Some(502),
            LlmError::Unknown { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
