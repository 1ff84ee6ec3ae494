//! Look up an order.

use wxpay_client::{HttpExecutor, WechatPay};
use wxpay_crypto::generate_nonce;
use wxpay_types::{BaseCredentials, QueryRequest};

use crate::error::CliResult;
use crate::output::{OutputFormat, QueryOutput, Render};

/// Which identifier to query by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    /// Merchant order number.
    OutTradeNo(String),
    /// Gateway transaction id.
    TransactionId(String),
}

/// Execute the query command.
pub async fn query<E: HttpExecutor>(
    client: &WechatPay<E>,
    format: OutputFormat,
    target: QueryTarget,
    nonce: Option<String>,
) -> CliResult<String> {
    let nonce = nonce.unwrap_or_else(generate_nonce);
    let base = BaseCredentials::new("", "", &nonce);

    let req = match &target {
        QueryTarget::OutTradeNo(no) => QueryRequest::by_out_trade_no(base, no),
        QueryTarget::TransactionId(id) => QueryRequest::by_transaction_id(base, id),
    };

    let response = client.query(req).await?;
    let output = QueryOutput {
        paid: response.is_paid(),
        response,
    };
    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxpay_test_utils::{paid_params, params, test_config, MockHttpExecutor, TEST_API_KEY};

    #[tokio::test]
    async fn test_query_paid() {
        let http = MockHttpExecutor::new();
        http.push_signed(&paid_params("T-1001", "4200001"), TEST_API_KEY);
        let client = WechatPay::with_executor(test_config(), http.clone());

        let output = query(
            &client,
            OutputFormat::Human,
            QueryTarget::OutTradeNo("T-1001".into()),
            Some("abc".into()),
        )
        .await
        .unwrap();
        assert!(output.contains("4200001"));
        assert!(output.contains("1.00"));

        let sent = http.last_request_params().unwrap();
        assert_eq!(sent.get("out_trade_no"), Some("T-1001"));
        assert!(!sent.contains_key("transaction_id"));
    }

    #[tokio::test]
    async fn test_query_by_transaction_id_json() {
        let http = MockHttpExecutor::new();
        http.push_params(&params(&[
            ("return_code", "SUCCESS"),
            ("result_code", "FAIL"),
            ("err_code", "ORDERNOTEXIST"),
        ]));
        let client = WechatPay::with_executor(test_config(), http.clone());

        let output = query(
            &client,
            OutputFormat::Json,
            QueryTarget::TransactionId("4200001".into()),
            None,
        )
        .await
        .unwrap();
        assert!(output.contains("\"paid\": false"));
        assert!(output.contains("ORDERNOTEXIST"));

        let sent = http.last_request_params().unwrap();
        assert_eq!(sent.get("transaction_id"), Some("4200001"));
    }
}
