//! Parameters for the client-side (in-app) payment widget.
//!
//! After a successful unified order the merchant server signs this record and
//! hands it to its mobile app, which passes it to the payment SDK. It never goes
//! over this crate's own transport; it is serialized to JSON for the app.

use serde::{Deserialize, Serialize};
use wxpay_crypto::ParameterMap;

use crate::constants::APP_PACKAGE;
use crate::error::TypesResult;
use crate::fields::{read_str, FromParams, Signable, ToParams};
use crate::order::OrderResponse;

/// Signed invocation parameters for the in-app payment SDK.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInvocationParameters {
    #[serde(rename = "appid")]
    pub app_id: String,
    #[serde(rename = "partnerid")]
    pub partner_id: String,
    #[serde(rename = "prepayid")]
    pub prepay_id: String,
    pub package: String,
    #[serde(rename = "noncestr")]
    pub nonce_str: String,
    /// Unix seconds as decimal text.
    pub timestamp: String,
    pub sign: String,
}

impl AppInvocationParameters {
    /// Unsigned parameters for the order's prepay ID.
    ///
    /// `appid` and `partnerid` come from the order response's echoed credentials.
    pub fn from_order(order: &OrderResponse, nonce_str: &str, timestamp: u64) -> Self {
        Self {
            app_id: order.base.app_id.clone(),
            partner_id: order.base.mch_id.clone(),
            prepay_id: order.prepay_id.clone(),
            package: APP_PACKAGE.to_string(),
            nonce_str: nonce_str.to_string(),
            timestamp: timestamp.to_string(),
            sign: String::new(),
        }
    }
}

impl ToParams for AppInvocationParameters {
    fn to_params(&self) -> ParameterMap {
        let mut p = ParameterMap::new();
        p.put_str("appid", &self.app_id);
        p.put_str("partnerid", &self.partner_id);
        p.put_str("prepayid", &self.prepay_id);
        p.put_str("package", &self.package);
        p.put_str("noncestr", &self.nonce_str);
        p.put_str("timestamp", &self.timestamp);
        p.put_str("sign", &self.sign);
        p
    }
}

impl FromParams for AppInvocationParameters {
    fn from_params(params: &ParameterMap) -> TypesResult<Self> {
        Ok(Self {
            app_id: read_str(params, "appid"),
            partner_id: read_str(params, "partnerid"),
            prepay_id: read_str(params, "prepayid"),
            package: read_str(params, "package"),
            nonce_str: read_str(params, "noncestr"),
            timestamp: read_str(params, "timestamp"),
            sign: read_str(params, "sign"),
        })
    }
}

impl Signable for AppInvocationParameters {
    fn signature(&self) -> &str {
        &self.sign
    }

    fn set_signature(&mut self, sign: String) {
        self.sign = sign;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BaseCredentials;

    fn order() -> OrderResponse {
        OrderResponse {
            base: BaseCredentials::new("wx123", "M1", "srv-nonce"),
            prepay_id: "wx2017033010242291fcfe0db70013231072".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_order() {
        let params = AppInvocationParameters::from_order(&order(), "app-nonce", 1490840662);
        assert_eq!(params.app_id, "wx123");
        assert_eq!(params.partner_id, "M1");
        assert_eq!(params.package, "Sign=WXPay");
        assert_eq!(params.timestamp, "1490840662");
        assert!(params.sign.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let params = AppInvocationParameters::from_order(&order(), "app-nonce", 1490840662);
        let p = params.to_params();
        let keys: Vec<&str> = p.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["appid", "noncestr", "package", "partnerid", "prepayid", "timestamp"]
        );
    }

    #[test]
    fn test_signed_json_for_client() {
        let mut params = AppInvocationParameters::from_order(&order(), "app-nonce", 1490840662);
        params.sign_with("app-secret").unwrap();

        let json: serde_json::Value = serde_json::to_value(&params).unwrap();
        assert_eq!(json["partnerid"], "M1");
        assert_eq!(json["noncestr"], "app-nonce");
        assert_eq!(json["sign"].as_str().unwrap().len(), 32);
    }
}
