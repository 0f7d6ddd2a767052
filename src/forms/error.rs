//! Form error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Text written to a toggle or a flag written to a text field
    #[error("Field {field} expects a {expected} value")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidChoice { field: &'static str, value: String },

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),

    #[error("A submission is already in progress")]
    InFlight,

    /// State built from a different form than the one being read
    #[error("Expected the {expected} form, got the {found} form")]
    WrongForm {
        expected: &'static str,
        found: &'static str,
    },
}
