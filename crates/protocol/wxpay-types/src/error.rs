//! Error types for wxpay-types

use thiserror::Error;

/// Result type for model conversion.
pub type TypesResult<T> = Result<T, TypesError>;

/// Errors that can occur while building models from wire parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// An integer field carried non-numeric text.
    #[error("field '{field}' is not an integer: {value:?}")]
    InvalidInteger {
        /// Wire name of the field
        field: &'static str,
        /// The offending value
        value: String,
    },

    /// Client configuration is incomplete.
    #[error("invalid configuration: {0}")]
    Config(String),
}
