//! Error types for wxpay-crypto

use thiserror::Error;

/// Result type for signing operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors raised when a signing precondition is not met.
///
/// These indicate a programming error on the caller's side rather than a
/// runtime condition worth recovering from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The shared secret was empty.
    #[error("signing secret is empty")]
    EmptySecret,

    /// Nothing left to sign once the `sign` entry is removed.
    #[error("no signable fields in parameter map")]
    NoSignableFields,

    /// Verification was requested on a map without a `sign` entry.
    #[error("parameter map carries no '{0}' field")]
    MissingSignature(&'static str),
}
