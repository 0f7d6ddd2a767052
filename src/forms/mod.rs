//! Form Controllers
//!
//! Field schemas, state and submission handling for the login, register and
//! settings forms.

pub mod controller;
pub mod error;
pub mod schema;
pub mod settings;
pub mod state;

pub use controller::{FormController, FormStatus, SubmitOutcome, Submission};
pub use error::FormError;
pub use schema::{FieldKind, FieldSpec, FieldValue, FormKind, FormSchema};
pub use settings::{Language, Settings, Theme, SETTINGS_STORAGE_KEY};
pub use state::FormState;
