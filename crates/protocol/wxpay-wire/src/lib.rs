//! XML envelope encoding for the WeChat Pay v2 API.
//!
//! Converts between a [`ParameterMap`](wxpay_crypto::ParameterMap) and the
//! gateway's flat XML document. Typed messages go through their field tables
//! ([`ToParams`](wxpay_types::ToParams) / [`FromParams`](wxpay_types::FromParams)),
//! so the omission rule and integer formatting live in one place.
//!
//! # Example
//!
//! ```
//! use wxpay_types::{NotifyReply, QueryResponse};
//! use wxpay_wire::{decode_message, encode_message};
//!
//! let body = encode_message(&NotifyReply::success()).unwrap();
//! assert!(body.starts_with("<xml><return_code>SUCCESS"));
//!
//! let resp: QueryResponse = decode_message(
//!     b"<xml><return_code><![CDATA[SUCCESS]]></return_code><total_fee>1</total_fee></xml>",
//! )
//! .unwrap();
//! assert_eq!(resp.total_fee, 1);
//! ```

pub mod error;
pub mod xml;

pub use error::{DecodeError, EncodeError};
pub use xml::{decode_message, decode_params, encode_message, encode_params, ROOT_ELEMENT};
