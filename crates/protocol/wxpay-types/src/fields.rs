//! Field tables: how each model maps to and from a [`ParameterMap`].
//!
//! Every model implements [`ToParams`] and [`FromParams`] by hand, listing its
//! fields with their wire names. Omission rule on the way out: empty strings and
//! zero integers are left out of the map entirely, since the gateway treats a
//! present-but-empty field differently from an absent one.

use wxpay_crypto::{CryptoResult, ParameterMap};

use crate::error::{TypesError, TypesResult};

/// Projection of a value onto its wire parameters.
pub trait ToParams {
    /// Build the parameter map, omitting zero-valued fields.
    fn to_params(&self) -> ParameterMap;
}

/// Construction of a value from wire parameters.
///
/// Unknown keys are ignored and missing keys take the field's zero value.
pub trait FromParams: Sized {
    /// Build the value from a decoded parameter map.
    fn from_params(params: &ParameterMap) -> TypesResult<Self>;
}

/// A message carrying its own `sign` field.
pub trait Signable: ToParams {
    /// Current signature (empty if unsigned).
    fn signature(&self) -> &str;

    /// Replace the signature.
    fn set_signature(&mut self, sign: String);

    /// Compute the signature over the current field values and store it.
    ///
    /// Mutating the value afterwards invalidates the signature.
    fn sign_with(&mut self, secret: &str) -> CryptoResult<()> {
        let signature = wxpay_crypto::sign(&self.to_params(), secret)?;
        self.set_signature(signature);
        Ok(())
    }
}

/// Read a string field, `""` when absent.
pub(crate) fn read_str(params: &ParameterMap, field: &str) -> String {
    params.get_or_empty(field).to_string()
}

/// Read an integer field, `0` when absent or blank.
pub(crate) fn read_int(params: &ParameterMap, field: &'static str) -> TypesResult<u64> {
    let raw = params.get_or_empty(field).trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|_| TypesError::InvalidInteger {
        field,
        value: raw.to_string(),
    })
}
