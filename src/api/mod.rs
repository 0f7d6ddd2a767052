//! Native HTTP access to the remote statistics and account API

pub mod client;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;

pub use client::ApiClient;
pub use error::ApiError;
