// File: crates/glow-client/src/error.rs
// Summary: Error types for the skincare backend client.

use thiserror::Error;

use crate::upload::UploadError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, timeout or undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The image was rejected before any request was made.
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("invalid base URL `{0}`")]
    BaseUrl(String),
}
