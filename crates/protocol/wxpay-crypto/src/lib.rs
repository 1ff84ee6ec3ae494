//! Parameter signing for the WeChat Pay v2 (XML) API.
//!
//! This crate provides the two pieces every gateway message goes through:
//!
//! - **[`ParameterMap`]**: the flat `wire name -> string value` projection of a message
//! - **Signing**: the gateway's canonical MD5 signature over that map
//!
//! # Example
//!
//! ```
//! use wxpay_crypto::{sign, verify, ParameterMap};
//!
//! let mut params: ParameterMap = [
//!     ("appid", "wx123"),
//!     ("mch_id", "M1"),
//!     ("nonce_str", "abc"),
//!     ("body", "Test"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let signature = sign(&params, "secretkey").unwrap();
//! assert_eq!(signature, "DB19209C817CEF44091C14B775A92E98");
//!
//! params.insert("sign", signature);
//! assert!(verify(&params, "secretkey").unwrap());
//! ```

mod error;
mod nonce;
mod params;
mod sign;

pub use error::{CryptoError, CryptoResult};
pub use nonce::{generate_nonce, generate_nonce_with_len, MAX_NONCE_LEN};
pub use params::{ParameterMap, SIGN_FIELD};
pub use sign::{canonical_string, sign, verify};
