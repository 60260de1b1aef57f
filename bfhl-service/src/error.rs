use crate::services::providers::ProviderError;
use axum::http::StatusCode;
use thiserror::Error;

/// Failure of a single `/bfhl` request.
///
/// Shape errors on the envelope itself are client errors (400); a bad value
/// for a known key and anything that goes wrong downstream are reported as
/// 500.
#[derive(Debug, Error)]
pub enum BfhlError {
    #[error("Invalid JSON body")]
    MalformedBody,

    #[error("Exactly one key is required")]
    KeyCount,

    #[error("Invalid key")]
    InvalidKey,

    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("Operation failed: {0}")]
    TaskFailed(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl BfhlError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BfhlError::MalformedBody | BfhlError::KeyCount | BfhlError::InvalidKey => {
                StatusCode::BAD_REQUEST
            }
            BfhlError::InvalidInput(_) | BfhlError::TaskFailed(_) | BfhlError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
