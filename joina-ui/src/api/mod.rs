//! API Access
//!
//! Browser-side HTTP calls and local storage.

pub mod client;

pub use client::*;
