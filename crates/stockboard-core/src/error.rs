//! Error types shared by the client, the list controller and the forms.

use thiserror::Error;

/// Failure of a call against the REST API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (server down, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    #[error("{method} {path} failed: HTTP {status} {reason}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
        reason: String,
    },

    /// The body did not match the expected JSON shape
    #[error("unexpected response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl ApiError {
    pub fn decode(path: impl Into<String>, err: impl ToString) -> Self {
        ApiError::Decode {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Form input rejected before any request is made
///
/// The messages are shown verbatim in a blocking alert.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Fill all fields")]
    IncompleteProduct,
    #[error("Fill task title")]
    MissingTaskTitle,
    #[error("Fill setting name and value")]
    IncompleteSetting,
}

/// Failure of a form submit: rejected locally, or rejected by the server
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
