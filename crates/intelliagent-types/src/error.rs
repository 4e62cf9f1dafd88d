use thiserror::Error;

/// Errors from a workflow backend submission.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a non-success status. `detail` carries the
    /// `detail` field of the error body when there was one.
    #[error("backend responded with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request never completed (connection refused, DNS, reset, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// A success response whose body was not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

/// Errors raised while resolving configuration into runtime settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL for {field}: '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}
