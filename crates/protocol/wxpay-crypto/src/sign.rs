//! Canonical parameter signature.
//!
//! The gateway signs every message the same way:
//! ```text
//! sign = UPPER_HEX(MD5(k1=v1&k2=v2&...&kn=vn&key=<secret>))
//! ```
//! where `k1..kn` are all fields except `sign`, in byte-wise ascending order.
//! Empty values still take part (`k=&`). The gateway rejects a mismatched
//! signature without further detail.

use md5::{Digest, Md5};

use crate::error::{CryptoError, CryptoResult};
use crate::params::{ParameterMap, SIGN_FIELD};

/// Build the exact byte string that gets hashed.
///
/// Exposed for diagnostics; [`sign`] is what callers normally want.
///
/// # Example
/// ```
/// use wxpay_crypto::{canonical_string, ParameterMap};
///
/// let params: ParameterMap = [("mch_id", "M1"), ("appid", "wx123")].into_iter().collect();
/// assert_eq!(canonical_string(&params, "k"), "appid=wx123&mch_id=M1&key=k");
/// ```
pub fn canonical_string(params: &ParameterMap, secret: &str) -> String {
    let mut buf = String::new();
    // ParameterMap iterates in byte order already
    for (k, v) in params.iter().filter(|(k, _)| *k != SIGN_FIELD) {
        buf.push_str(k);
        buf.push('=');
        buf.push_str(v);
        buf.push('&');
    }
    buf.push_str("key=");
    buf.push_str(secret);
    buf
}

/// Compute the signature of `params` under `secret`.
///
/// Returns 32 uppercase hex characters. Any `sign` entry already in the map is
/// ignored.
///
/// # Errors
/// - [`CryptoError::EmptySecret`] if `secret` is empty
/// - [`CryptoError::NoSignableFields`] if nothing but `sign` is present
pub fn sign(params: &ParameterMap, secret: &str) -> CryptoResult<String> {
    if secret.is_empty() {
        return Err(CryptoError::EmptySecret);
    }
    if params.iter().all(|(k, _)| k == SIGN_FIELD) {
        return Err(CryptoError::NoSignableFields);
    }

    let digest = Md5::digest(canonical_string(params, secret).as_bytes());
    Ok(hex::encode_upper(digest))
}

/// Check the `sign` entry of `params` against a freshly computed signature.
///
/// Hex case is not significant.
pub fn verify(params: &ParameterMap, secret: &str) -> CryptoResult<bool> {
    let claimed = params
        .signature()
        .ok_or(CryptoError::MissingSignature(SIGN_FIELD))?;
    let expected = sign(params, secret)?;
    Ok(expected.eq_ignore_ascii_case(claimed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParameterMap {
        [
            ("appid", "wx123"),
            ("mch_id", "M1"),
            ("nonce_str", "abc"),
            ("body", "Test"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_canonical_string_reference_vector() {
        assert_eq!(
            canonical_string(&sample(), "secretkey"),
            "appid=wx123&body=Test&mch_id=M1&nonce_str=abc&key=secretkey"
        );
    }

    #[test]
    fn test_sign_reference_vector() {
        // md5("appid=wx123&body=Test&mch_id=M1&nonce_str=abc&key=secretkey")
        assert_eq!(
            sign(&sample(), "secretkey").unwrap(),
            "DB19209C817CEF44091C14B775A92E98"
        );
    }

    #[test]
    fn test_sign_deterministic_and_uppercase() {
        let first = sign(&sample(), "secretkey").unwrap();
        let second = sign(&sample(), "secretkey").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_sign_ignores_construction_order() {
        let reversed: ParameterMap = [
            ("body", "Test"),
            ("nonce_str", "abc"),
            ("mch_id", "M1"),
            ("appid", "wx123"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            sign(&sample(), "secretkey").unwrap(),
            sign(&reversed, "secretkey").unwrap()
        );
    }

    #[test]
    fn test_sign_excludes_existing_sign_entry() {
        let mut with_sign = sample();
        with_sign.insert("sign", "WHATEVER");
        assert_eq!(
            sign(&sample(), "secretkey").unwrap(),
            sign(&with_sign, "secretkey").unwrap()
        );
    }

    #[test]
    fn test_empty_value_still_participates() {
        let params: ParameterMap = [("a", ""), ("b", "2")].into_iter().collect();
        assert_eq!(canonical_string(&params, "k"), "a=&b=2&key=k");
        // md5("a=&b=2&key=k")
        assert_eq!(
            sign(&params, "k").unwrap(),
            "9B105C65503F37BD179B8AC634873798"
        );
    }

    #[test]
    fn test_keys_sorted_bytewise_not_locale() {
        let params: ParameterMap = [("b", "1"), ("B", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(canonical_string(&params, "k"), "B=2&a=3&b=1&key=k");
    }

    #[test]
    fn test_secret_changes_signature() {
        assert_ne!(
            sign(&sample(), "secretkey").unwrap(),
            sign(&sample(), "otherkey").unwrap()
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(sign(&sample(), ""), Err(CryptoError::EmptySecret));
    }

    #[test]
    fn test_no_signable_fields_rejected() {
        assert_eq!(
            sign(&ParameterMap::new(), "k"),
            Err(CryptoError::NoSignableFields)
        );

        let only_sign: ParameterMap = [("sign", "ABC")].into_iter().collect();
        assert_eq!(sign(&only_sign, "k"), Err(CryptoError::NoSignableFields));
    }

    #[test]
    fn test_verify_roundtrip() {
        let mut params = sample();
        let signature = sign(&params, "secretkey").unwrap();
        params.insert("sign", signature.to_lowercase());
        assert!(verify(&params, "secretkey").unwrap());
        assert!(!verify(&params, "wrongkey").unwrap());

        params.insert("body", "Tampered");
        assert!(!verify(&params, "secretkey").unwrap());
    }

    #[test]
    fn test_verify_requires_sign_entry() {
        assert_eq!(
            verify(&sample(), "secretkey"),
            Err(CryptoError::MissingSignature("sign"))
        );
    }
}
