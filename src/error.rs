//! Error types for the steering client and its hooks.

use reqwest::StatusCode;

/// Errors raised by a hook that abort the current call.
///
/// Recoverable conditions (an unparseable path id, a response body that is
/// neither an array nor an object) never surface here; hooks degrade to a
/// pass-through for those and only log.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("unable to read {message} body: {source}")]
    BodyRead {
        message: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode request body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unable to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("hook '{hook}' rejected the call: {reason}")]
    Rejected { hook: String, reason: String },
}

impl HookError {
    /// Body read failure on an outgoing request.
    pub fn request_body(source: std::io::Error) -> Self {
        HookError::BodyRead {
            message: "request",
            source,
        }
    }

    /// Body read failure on an incoming response.
    pub fn response_body(source: std::io::Error) -> Self {
        HookError::BodyRead {
            message: "response",
            source,
        }
    }

    /// Shorthand for a rejection raised by a named hook.
    pub fn rejected(hook: impl Into<String>, reason: impl Into<String>) -> Self {
        HookError::Rejected {
            hook: hook.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by [`ApiClient`](crate::client::ApiClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("hook error: {0}")]
    Hook(#[from] HookError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("body error: {0}")]
    Body(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

pub type HookResult<T> = std::result::Result<T, HookError>;
pub type ClientResult<T> = std::result::Result<T, ClientError>;
