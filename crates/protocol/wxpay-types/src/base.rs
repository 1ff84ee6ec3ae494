//! Fields shared by every request and response.

use serde::{Deserialize, Serialize};
use wxpay_crypto::ParameterMap;

use crate::constants::SUCCESS;
use crate::error::TypesResult;
use crate::fields::{read_str, FromParams, ToParams};

/// Merchant identity and per-message signature data.
///
/// `nonce_str` must be unique per request. It is always supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCredentials {
    /// Application ID (`appid`).
    #[serde(rename = "appid")]
    pub app_id: String,
    /// Merchant ID (`mch_id`).
    pub mch_id: String,
    /// Per-request random string (`nonce_str`).
    pub nonce_str: String,
    /// Signature over all other fields (`sign`).
    pub sign: String,
}

impl BaseCredentials {
    /// Credentials for a new unsigned request.
    pub fn new(app_id: &str, mch_id: &str, nonce_str: &str) -> Self {
        Self {
            app_id: app_id.to_string(),
            mch_id: mch_id.to_string(),
            nonce_str: nonce_str.to_string(),
            sign: String::new(),
        }
    }
}

impl ToParams for BaseCredentials {
    fn to_params(&self) -> ParameterMap {
        let mut p = ParameterMap::new();
        p.put_str("appid", &self.app_id);
        p.put_str("mch_id", &self.mch_id);
        p.put_str("nonce_str", &self.nonce_str);
        p.put_str("sign", &self.sign);
        p
    }
}

impl FromParams for BaseCredentials {
    fn from_params(params: &ParameterMap) -> TypesResult<Self> {
        Ok(Self {
            app_id: read_str(params, "appid"),
            mch_id: read_str(params, "mch_id"),
            nonce_str: read_str(params, "nonce_str"),
            sign: read_str(params, "sign"),
        })
    }
}

/// Two-layer outcome carried by every response.
///
/// `return_code` reports whether the gateway accepted the call at all;
/// `result_code`/`err_code` report the business outcome. A call can succeed at
/// the first layer and still fail at the second, so check both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResult {
    pub return_code: String,
    pub return_msg: String,
    pub result_code: String,
    pub err_code: String,
    pub err_code_des: String,
}

impl BaseResult {
    /// The gateway accepted the call (`return_code == SUCCESS`).
    pub fn is_return_success(&self) -> bool {
        self.return_code == SUCCESS
    }

    /// The business operation succeeded (`result_code == SUCCESS`).
    pub fn is_result_success(&self) -> bool {
        self.result_code == SUCCESS
    }

    /// Both layers report success.
    pub fn is_success(&self) -> bool {
        self.is_return_success() && self.is_result_success()
    }

    /// Best available description of a failure, if any.
    pub fn failure_reason(&self) -> Option<&str> {
        if !self.is_return_success() {
            return Some(if self.return_msg.is_empty() {
                self.return_code.as_str()
            } else {
                self.return_msg.as_str()
            });
        }
        if !self.is_result_success() {
            return Some(if self.err_code_des.is_empty() {
                self.err_code.as_str()
            } else {
                self.err_code_des.as_str()
            });
        }
        None
    }
}

impl ToParams for BaseResult {
    fn to_params(&self) -> ParameterMap {
        let mut p = ParameterMap::new();
        p.put_str("return_code", &self.return_code);
        p.put_str("return_msg", &self.return_msg);
        p.put_str("result_code", &self.result_code);
        p.put_str("err_code", &self.err_code);
        p.put_str("err_code_des", &self.err_code_des);
        p
    }
}

impl FromParams for BaseResult {
    fn from_params(params: &ParameterMap) -> TypesResult<Self> {
        Ok(Self {
            return_code: read_str(params, "return_code"),
            return_msg: read_str(params, "return_msg"),
            result_code: read_str(params, "result_code"),
            err_code: read_str(params, "err_code"),
            err_code_des: read_str(params, "err_code_des"),
        })
    }
}
