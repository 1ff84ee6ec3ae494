//! Offline signing of arbitrary parameters.

use wxpay_client::PayError;
use wxpay_crypto::{canonical_string, ParameterMap};

use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Render, SignOutput};

const SECRET_MASK: &str = "***";

/// Parse `key=value` arguments. Values may be empty or contain `=`.
pub fn parse_pairs(pairs: &[String]) -> CliResult<ParameterMap> {
    let mut params = ParameterMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::user(format!("Expected key=value, got '{}'", pair)))?;
        if key.is_empty() {
            return Err(CliError::user(format!("Empty key in '{}'", pair)));
        }
        params.insert(key, value);
    }
    Ok(params)
}

/// Execute the sign command.
pub fn sign(format: OutputFormat, pairs: &[String], secret: &str) -> CliResult<String> {
    let params = parse_pairs(pairs)?;
    let sign = wxpay_crypto::sign(&params, secret).map_err(PayError::from)?;

    let output = SignOutput {
        canonical: canonical_string(&params, SECRET_MASK),
        sign,
    };
    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[&str]) -> Vec<String> {
        pairs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sign_reference_vector() {
        let output = sign(
            OutputFormat::Json,
            &args(&["mch_id=M1", "appid=wx123", "nonce_str=abc", "body=Test"]),
            "secretkey",
        )
        .unwrap();
        assert!(output.contains("DB19209C817CEF44091C14B775A92E98"));
        assert!(output.contains("appid=wx123&body=Test&mch_id=M1&nonce_str=abc&key=***"));
        assert!(!output.contains("secretkey"));
    }

    #[test]
    fn test_sign_keeps_empty_values() {
        let output = sign(OutputFormat::Json, &args(&["b=2", "a="]), "k").unwrap();
        assert!(output.contains("9B105C65503F37BD179B8AC634873798"));
    }

    #[test]
    fn test_value_with_equals() {
        let params = parse_pairs(&args(&["attach=a=b"])).unwrap();
        assert_eq!(params.get("attach"), Some("a=b"));
    }

    #[test]
    fn test_malformed_pair() {
        assert!(matches!(
            parse_pairs(&args(&["novalue"])),
            Err(CliError::User(_))
        ));
        assert!(matches!(parse_pairs(&args(&["=x"])), Err(CliError::User(_))));
    }

    #[test]
    fn test_sign_without_secret() {
        let err = sign(OutputFormat::Json, &args(&["a=1"]), "").unwrap_err();
        assert!(matches!(
            err,
            CliError::Pay(PayError::SigningPrecondition { .. })
        ));
    }
}
