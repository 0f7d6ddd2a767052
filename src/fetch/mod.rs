//! View-state and data-fetch lifecycle
//!
//! Per-view `loading | error | ready` state bound to the view's mounted
//! lifetime.

pub mod controller;
pub mod error;
#[cfg(feature = "native")]
pub mod source;
pub mod state;

pub use controller::{Completion, FetchTicket, ViewController};
pub use error::FetchError;
#[cfg(feature = "native")]
pub use source::StatsSource;
pub use state::{FetchState, ViewData};
