//! Fetch error types

use thiserror::Error;

use crate::stats::SchemaError;

/// Why a statistics fetch did not produce data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request never completed (refused, reset, timed out, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// Body could not be read as text
    #[error("Decode error: {0}")]
    Decode(String),

    /// Body was read but does not match the expected payload
    #[error("Invalid payload: {0}")]
    Schema(#[from] SchemaError),
}

impl FetchError {
    /// Transport-level failures, as opposed to a bad answer from the server
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }
}
