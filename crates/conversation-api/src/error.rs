//! Error types for the conversation service client.

use thiserror::Error;

/// Errors that can occur talking to the conversation service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("conversation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A required environment variable is missing.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An empty conversation id was passed where one is required.
    #[error("conversation id required")]
    MissingConversationId,
}
