//! Gateway constants: endpoints, status codes and enumerated field values.

/// Unified order (order creation) endpoint.
pub const ORDER_URL: &str = "https://api.mch.weixin.qq.com/pay/unifiedorder";

/// Order query endpoint.
pub const QUERY_URL: &str = "https://api.mch.weixin.qq.com/pay/orderquery";

/// Value of `return_code` / `result_code` on success.
pub const SUCCESS: &str = "SUCCESS";

/// Value of `return_code` / `result_code` on failure.
pub const FAIL: &str = "FAIL";

/// `package` value expected by the in-app payment widget.
pub const APP_PACKAGE: &str = "Sign=WXPay";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Values of `trade_type`.
pub mod trade_type {
    /// In-app browser / official account payment.
    pub const JSAPI: &str = "JSAPI";
    /// QR code payment.
    pub const NATIVE: &str = "NATIVE";
    /// Native app payment.
    pub const APP: &str = "APP";
    /// Mobile web payment.
    pub const MWEB: &str = "MWEB";
}

/// Values of `trade_state` in query responses and notifications.
pub mod trade_state {
    pub const SUCCESS: &str = "SUCCESS";
    pub const REFUND: &str = "REFUND";
    pub const NOTPAY: &str = "NOTPAY";
    pub const CLOSED: &str = "CLOSED";
    pub const REVOKED: &str = "REVOKED";
    pub const USERPAYING: &str = "USERPAYING";
    pub const PAYERROR: &str = "PAYERROR";
}

/// Common business error codes (`err_code`).
pub mod err_code {
    pub const ORDERNOTEXIST: &str = "ORDERNOTEXIST";
    pub const ORDERPAID: &str = "ORDERPAID";
    pub const ORDERCLOSED: &str = "ORDERCLOSED";
    pub const NOTENOUGH: &str = "NOTENOUGH";
    pub const OUT_TRADE_NO_USED: &str = "OUT_TRADE_NO_USED";
    pub const SIGNERROR: &str = "SIGNERROR";
    pub const SYSTEMERROR: &str = "SYSTEMERROR";
}
