//! Error types for the XML envelope.

use thiserror::Error;
use wxpay_types::TypesError;

/// Errors that can occur when encoding an envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// The XML writer failed
    #[error("XML encoding failed: {0}")]
    Xml(String),

    /// A field name is not a valid XML element name
    #[error("invalid element name: {0:?}")]
    InvalidName(String),

    /// A field value holds a character XML 1.0 cannot carry
    #[error("field {field:?} holds a character not allowed in XML: U+{code:04X}")]
    InvalidChar {
        /// Wire name of the field
        field: String,
        /// Code point of the offending character
        code: u32,
    },
}

/// Errors that can occur when decoding an envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Body is not well-formed XML
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// Body has no root element
    #[error("XML document has no root element")]
    MissingRoot,

    /// A field element contains child elements
    #[error("unexpected nested element <{0}>")]
    UnexpectedNesting(String),

    /// Element text is not valid UTF-8
    #[error("invalid UTF-8 in element <{0}>")]
    InvalidUtf8(String),

    /// Well-formed envelope whose field values do not fit the target model
    #[error("field decode failed: {0}")]
    Field(#[from] TypesError),
}

impl From<quick_xml::Error> for DecodeError {
    fn from(err: quick_xml::Error) -> Self {
        DecodeError::Malformed(err.to_string())
    }
}
