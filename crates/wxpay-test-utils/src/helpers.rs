//! Fixture builders shared by integration tests.

use wxpay_crypto::ParameterMap;
use wxpay_types::constants::trade_type;
use wxpay_types::{BaseCredentials, OrderRequest, QueryRequest, WechatPayConfig};

/// App ID used by fixtures.
pub const TEST_APP_ID: &str = "wx123";
/// Merchant ID used by fixtures.
pub const TEST_MCH_ID: &str = "M1";
/// Merchant API key used by fixtures.
pub const TEST_API_KEY: &str = "secretkey";

/// Configuration pointing at fake endpoints.
pub fn test_config() -> WechatPayConfig {
    let mut config = WechatPayConfig::new(TEST_APP_ID, TEST_MCH_ID, TEST_API_KEY);
    config.order_url = "https://gateway.test/pay/unifiedorder".to_string();
    config.query_url = "https://gateway.test/pay/orderquery".to_string();
    config
}

/// An APP order request with blank credentials and the given nonce.
pub fn order_request(nonce_str: &str) -> OrderRequest {
    OrderRequest::new(
        BaseCredentials::new("", "", nonce_str),
        "Test",
        "T-1001",
        100,
        "127.0.0.1",
        "https://merchant.test/notify",
        trade_type::APP,
    )
}

/// A query by merchant order number with blank credentials.
pub fn query_request(nonce_str: &str, out_trade_no: &str) -> QueryRequest {
    QueryRequest::by_out_trade_no(BaseCredentials::new("", "", nonce_str), out_trade_no)
}

/// Build a parameter map from literal pairs.
pub fn params(pairs: &[(&str, &str)]) -> ParameterMap {
    pairs.iter().copied().collect()
}

/// A successful unified order reply.
pub fn order_success_params(prepay_id: &str) -> ParameterMap {
    params(&[
        ("return_code", "SUCCESS"),
        ("return_msg", "OK"),
        ("result_code", "SUCCESS"),
        ("appid", TEST_APP_ID),
        ("mch_id", TEST_MCH_ID),
        ("nonce_str", "srvnonce"),
        ("trade_type", "APP"),
        ("prepay_id", prepay_id),
    ])
}

/// A successful payment as reported by query or notification.
pub fn paid_params(out_trade_no: &str, transaction_id: &str) -> ParameterMap {
    params(&[
        ("return_code", "SUCCESS"),
        ("result_code", "SUCCESS"),
        ("appid", TEST_APP_ID),
        ("mch_id", TEST_MCH_ID),
        ("nonce_str", "srvnonce"),
        ("openid", "oUpF8uMuAJO_M2pxb1Q9zNjWeS6o"),
        ("is_subscribe", "Y"),
        ("trade_type", "APP"),
        ("trade_state", "SUCCESS"),
        ("bank_type", "CMC"),
        ("total_fee", "100"),
        ("cash_fee", "100"),
        ("transaction_id", transaction_id),
        ("out_trade_no", out_trade_no),
        ("time_end", "20261018101010"),
    ])
}
