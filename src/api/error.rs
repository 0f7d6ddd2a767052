//! API client error types

use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out")]
    Timeout,

    #[error("API unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Unavailable(e.to_string())
        } else {
            ApiError::Request(e)
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { status, .. } => FetchError::Status(status),
            ApiError::Request(e) if e.is_decode() || e.is_body() => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}
