//! Verify a saved payment notification.

use wxpay_client::{HttpExecutor, WechatPay};

use crate::error::CliResult;
use crate::output::{NotifyOutput, OutputFormat, Render};

/// Execute the notify command.
///
/// Fails when the signature does not verify; the gateway will redeliver in
/// that case, so no reply is printed.
pub fn notify<E: HttpExecutor>(
    client: &WechatPay<E>,
    format: OutputFormat,
    body: &[u8],
) -> CliResult<String> {
    let payload = client.parse_notify(body)?;
    let reply = client.notify_reply(true, "")?;

    let output = NotifyOutput {
        paid: payload.is_paid(),
        payload,
        reply,
    };
    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use wxpay_client::PayError;
    use wxpay_test_utils::{paid_params, test_config, MockHttpExecutor, TEST_API_KEY};
    use wxpay_wire::encode_params;

    fn client() -> WechatPay<MockHttpExecutor> {
        WechatPay::with_executor(test_config(), MockHttpExecutor::new())
    }

    fn signed_body() -> Vec<u8> {
        let mut params = paid_params("T-1001", "4200001");
        params.remove("trade_state");
        let sign = wxpay_crypto::sign(&params, TEST_API_KEY).unwrap();
        params.insert("sign", sign);
        encode_params(&params).unwrap().into_bytes()
    }

    #[test]
    fn test_notify_valid() {
        let output = notify(&client(), OutputFormat::Json, &signed_body()).unwrap();
        assert!(output.contains("\"paid\": true"));
        assert!(output.contains("4200001"));
        assert!(output.contains("<return_code>SUCCESS</return_code>"));
    }

    #[test]
    fn test_notify_tampered() {
        let body = String::from_utf8(signed_body())
            .unwrap()
            .replace("<total_fee>100</total_fee>", "<total_fee>1</total_fee>");

        let err = notify(&client(), OutputFormat::Json, body.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Pay(PayError::SignatureMismatch { .. })
        ));
        assert_eq!(err.exit_code(), 6);
    }
}
