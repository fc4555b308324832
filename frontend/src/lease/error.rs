use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::QUICK_CLAUSE_MAX_CHARS;

/// Failure of a call to the analysis or billing backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Message supplied by the server in an `error`/`detail`/`message` field.
    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl ApiError {
    pub fn from_js(err: JsValue) -> Self {
        let message = match err.dyn_ref::<js_sys::Error>() {
            Some(js_error) => String::from(js_error.message()),
            None => format!("{:?}", err),
        };
        ApiError::Transport(message)
    }
}

/// Input rejected locally, before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a file first")]
    MissingDocument,

    #[error("User ID not available. Please refresh the page.")]
    MissingIdentity,

    #[error("Please enter a clause to analyze")]
    EmptyClause,

    #[error("Text too long. Maximum {} characters.", QUICK_CLAUSE_MAX_CHARS)]
    ClauseTooLong,

    #[error("Please enter your email address to continue with payment")]
    MissingEmail,
}

/// Why a flow refused to start a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("a request is already in progress")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("local storage access failed: {0}")]
    Access(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("Payment system is not available right now. Please try again in a moment.")]
    Unavailable,

    #[error("Payment widget failed: {0}")]
    Failed(String),
}
