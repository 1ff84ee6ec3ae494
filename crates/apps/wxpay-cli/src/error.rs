//! CLI error types.

use thiserror::Error;
use wxpay_client::PayError;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Gateway error.
    #[error("{0}")]
    Pay(#[from] PayError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Config(_) | Self::Toml(_) => 3,
            Self::Pay(e) if e.is_transport() => 5,
            Self::Pay(PayError::SignatureMismatch { .. }) => 6,
            Self::Pay(_) => 7,
            Self::Io(_) => 9,
        }
    }

    /// Recovery hint, if there is one.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Pay(e) => Some(e.suggestion()),
            Self::Config(_) | Self::Toml(_) => {
                Some("Check the [merchant] section of the config file")
            }
            _ => None,
        }
    }
}
