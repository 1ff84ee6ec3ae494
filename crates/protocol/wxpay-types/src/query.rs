//! Order query: poll the state of an order.

use serde::{Deserialize, Serialize};
use wxpay_crypto::ParameterMap;

use crate::base::{BaseCredentials, BaseResult};
use crate::constants::trade_state;
use crate::error::TypesResult;
use crate::fields::{read_int, read_str, FromParams, Signable, ToParams};

/// Order query request. Identify the order by either `transaction_id` or
/// `out_trade_no`; the gateway prefers `transaction_id` when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(flatten)]
    pub base: BaseCredentials,
    pub transaction_id: String,
    pub out_trade_no: String,
}

impl QueryRequest {
    /// Query by the merchant's own order number.
    pub fn by_out_trade_no(base: BaseCredentials, out_trade_no: &str) -> Self {
        Self {
            base,
            out_trade_no: out_trade_no.to_string(),
            ..Default::default()
        }
    }

    /// Query by the gateway's transaction ID.
    pub fn by_transaction_id(base: BaseCredentials, transaction_id: &str) -> Self {
        Self {
            base,
            transaction_id: transaction_id.to_string(),
            ..Default::default()
        }
    }
}

impl ToParams for QueryRequest {
    fn to_params(&self) -> ParameterMap {
        let mut p = self.base.to_params();
        p.put_str("transaction_id", &self.transaction_id);
        p.put_str("out_trade_no", &self.out_trade_no);
        p
    }
}

impl FromParams for QueryRequest {
    fn from_params(params: &ParameterMap) -> TypesResult<Self> {
        Ok(Self {
            base: BaseCredentials::from_params(params)?,
            transaction_id: read_str(params, "transaction_id"),
            out_trade_no: read_str(params, "out_trade_no"),
        })
    }
}

impl Signable for QueryRequest {
    fn signature(&self) -> &str {
        &self.base.sign
    }

    fn set_signature(&mut self, sign: String) {
        self.base.sign = sign;
    }
}

/// Order query response. Also the shape of the asynchronous payment notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(flatten)]
    pub result: BaseResult,
    #[serde(flatten)]
    pub base: BaseCredentials,
    pub device_info: String,
    pub openid: String,
    pub is_subscribe: String,
    pub trade_type: String,
    pub trade_state: String,
    pub bank_type: String,
    pub total_fee: u64,
    pub fee_type: String,
    pub cash_fee: u64,
    pub cash_fee_type: String,
    pub coupon_fee: u64,
    pub coupon_count: u64,
    pub transaction_id: String,
    pub out_trade_no: String,
    pub attach: String,
    pub time_end: String,
    pub trade_state_desc: String,
}

impl QueryResponse {
    /// The order has been paid.
    ///
    /// Push notifications omit `trade_state`; a successful result code there
    /// already means the payment went through.
    pub fn is_paid(&self) -> bool {
        if !self.result.is_success() {
            return false;
        }
        self.trade_state.is_empty() || self.trade_state == trade_state::SUCCESS
    }
}

impl ToParams for QueryResponse {
    fn to_params(&self) -> ParameterMap {
        let mut p = self.result.to_params();
        p.extend(self.base.to_params());
        p.put_str("device_info", &self.device_info);
        p.put_str("openid", &self.openid);
        p.put_str("is_subscribe", &self.is_subscribe);
        p.put_str("trade_type", &self.trade_type);
        p.put_str("trade_state", &self.trade_state);
        p.put_str("bank_type", &self.bank_type);
        p.put_int("total_fee", self.total_fee);
        p.put_str("fee_type", &self.fee_type);
        p.put_int("cash_fee", self.cash_fee);
        p.put_str("cash_fee_type", &self.cash_fee_type);
        p.put_int("coupon_fee", self.coupon_fee);
        p.put_int("coupon_count", self.coupon_count);
        p.put_str("transaction_id", &self.transaction_id);
        p.put_str("out_trade_no", &self.out_trade_no);
        p.put_str("attach", &self.attach);
        p.put_str("time_end", &self.time_end);
        p.put_str("trade_state_desc", &self.trade_state_desc);
        p
    }
}

impl FromParams for QueryResponse {
    fn from_params(params: &ParameterMap) -> TypesResult<Self> {
        Ok(Self {
            result: BaseResult::from_params(params)?,
            base: BaseCredentials::from_params(params)?,
            device_info: read_str(params, "device_info"),
            openid: read_str(params, "openid"),
            is_subscribe: read_str(params, "is_subscribe"),
            trade_type: read_str(params, "trade_type"),
            trade_state: read_str(params, "trade_state"),
            bank_type: read_str(params, "bank_type"),
            total_fee: read_int(params, "total_fee")?,
            fee_type: read_str(params, "fee_type"),
            cash_fee: read_int(params, "cash_fee")?,
            cash_fee_type: read_str(params, "cash_fee_type"),
            coupon_fee: read_int(params, "coupon_fee")?,
            coupon_count: read_int(params, "coupon_count")?,
            transaction_id: read_str(params, "transaction_id"),
            out_trade_no: read_str(params, "out_trade_no"),
            attach: read_str(params, "attach"),
            time_end: read_str(params, "time_end"),
            trade_state_desc: read_str(params, "trade_state_desc"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypesError;

    #[test]
    fn test_query_request_params() {
        let req = QueryRequest::by_out_trade_no(BaseCredentials::new("wx1", "m1", "n1"), "T-1");
        let p = req.to_params();
        assert_eq!(p.get("out_trade_no"), Some("T-1"));
        assert!(!p.contains_key("transaction_id"));

        let req = QueryRequest::by_transaction_id(BaseCredentials::new("wx1", "m1", "n1"), "42");
        let p = req.to_params();
        assert_eq!(p.get("transaction_id"), Some("42"));
        assert!(!p.contains_key("out_trade_no"));
    }

    #[test]
    fn test_response_params_roundtrip() {
        let resp = QueryResponse {
            result: BaseResult {
                return_code: "SUCCESS".into(),
                result_code: "SUCCESS".into(),
                ..Default::default()
            },
            base: BaseCredentials::new("wx1", "m1", "n1"),
            trade_state: "SUCCESS".into(),
            total_fee: 888,
            cash_fee: 800,
            coupon_fee: 88,
            coupon_count: 1,
            out_trade_no: "T-1".into(),
            ..Default::default()
        };

        let decoded = QueryResponse::from_params(&resp.to_params()).unwrap();
        assert_eq!(decoded, resp);
        assert!(decoded.is_paid());
    }

    #[test]
    fn test_business_failure_kept_as_data() {
        let p: ParameterMap = [
            ("return_code", "SUCCESS"),
            ("result_code", "FAIL"),
            ("err_code", "ORDERNOTEXIST"),
            ("err_code_des", "order does not exist"),
        ]
        .into_iter()
        .collect();

        let resp = QueryResponse::from_params(&p).unwrap();
        assert_eq!(resp.result.err_code, "ORDERNOTEXIST");
        assert!(!resp.is_paid());
        assert_eq!(resp.total_fee, 0);
    }

    #[test]
    fn test_invalid_integer_field() {
        let p: ParameterMap = [("cash_fee", "ten")].into_iter().collect();
        assert!(matches!(
            QueryResponse::from_params(&p),
            Err(TypesError::InvalidInteger { field: "cash_fee", .. })
        ));
    }

    #[test]
    fn test_unpaid_trade_state() {
        let resp = QueryResponse {
            result: BaseResult {
                return_code: "SUCCESS".into(),
                result_code: "SUCCESS".into(),
                ..Default::default()
            },
            trade_state: trade_state::NOTPAY.into(),
            ..Default::default()
        };
        assert!(!resp.is_paid());
    }
}
