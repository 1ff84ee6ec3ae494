//! Error types for gateway calls.

use thiserror::Error;
use wxpay_crypto::CryptoError;
use wxpay_types::TypesError;
use wxpay_wire::{DecodeError, EncodeError};

/// Result type for gateway operations.
pub type PayResult<T> = Result<T, PayError>;

/// Errors that can occur while talking to the gateway.
///
/// A business failure (`result_code=FAIL`) is not an error: it comes back as
/// a normal response for the caller to inspect. Nothing here is retried
/// automatically.
#[derive(Debug, Error)]
pub enum PayError {
    /// Network, TLS or timeout failure before a response arrived.
    #[error("gateway transport error: {0}")]
    Transport(String),

    /// The gateway answered with a non-2xx HTTP status.
    #[error("gateway returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body (truncated, for diagnostics only)
        body: String,
    },

    /// The response body is not a valid envelope for the expected message.
    #[error("failed to decode gateway response: {0}")]
    Decode(String),

    /// The request could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// The request could not be signed (empty secret, missing nonce, nothing to sign).
    #[error("signing precondition failed: {reason}")]
    SigningPrecondition {
        /// What was missing
        reason: String,
    },

    /// A received message's `sign` field does not match its contents.
    #[error("signature mismatch on {context}")]
    SignatureMismatch {
        /// Which message failed verification
        context: &'static str,
    },

    /// Client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PayError {
    /// Create a signing precondition error.
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::SigningPrecondition {
            reason: reason.into(),
        }
    }

    /// Returns a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::Transport(_) => {
                "Check connectivity; query the order before re-submitting to avoid a double charge"
            }
            Self::HttpStatus { .. } => "Check the endpoint URL and the gateway's service status",
            Self::Decode(_) => "The gateway response was not the expected XML envelope",
            Self::Encode(_) => "Check request field names and values",
            Self::SigningPrecondition { .. } => {
                "Set the merchant API key and supply a nonce_str for every request"
            }
            Self::SignatureMismatch { .. } => {
                "Verify the merchant API key; reject the message if the key is correct"
            }
            Self::Config(_) => "Fix app_id, mch_id and endpoints in the configuration",
        }
    }

    /// Whether the failure happened before a usable response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// Whether a response arrived but could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// The HTTP status, for [`PayError::HttpStatus`].
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PayError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<CryptoError> for PayError {
    fn from(e: CryptoError) -> Self {
        Self::precondition(e.to_string())
    }
}

impl From<DecodeError> for PayError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<EncodeError> for PayError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e.to_string())
    }
}

impl From<TypesError> for PayError {
    fn from(e: TypesError) -> Self {
        match e {
            TypesError::Config(msg) => Self::Config(msg),
            other => Self::Decode(other.to_string()),
        }
    }
}
