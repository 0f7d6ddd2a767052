//! State Management
//!
//! Global application state, per-view fetch state and form submission.

pub mod fetch;
pub mod form;
pub mod global;

pub use fetch::{use_view_state, ViewHandle};
pub use form::submit_form;
pub use global::{provide_global_state, GlobalState};
