//! Asynchronous payment notification and the merchant's acknowledgement.

use serde::{Deserialize, Serialize};
use wxpay_crypto::ParameterMap;

use crate::constants::{FAIL, SUCCESS};
use crate::error::TypesResult;
use crate::fields::{read_str, FromParams, ToParams};
use crate::query::QueryResponse;

/// Payment result pushed by the gateway to the merchant's `notify_url`.
///
/// Carries the same fields as a query response and decodes the same way.
pub type NotifyPayload = QueryResponse;

/// Body the merchant returns to the gateway after handling a notification.
///
/// Anything but `SUCCESS` makes the gateway re-deliver the notification later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyReply {
    pub return_code: String,
    pub return_msg: String,
}

impl NotifyReply {
    /// Acknowledge the notification.
    pub fn success() -> Self {
        Self {
            return_code: SUCCESS.to_string(),
            return_msg: "OK".to_string(),
        }
    }

    /// Reject the notification so the gateway retries it.
    pub fn fail(msg: &str) -> Self {
        Self {
            return_code: FAIL.to_string(),
            return_msg: msg.to_string(),
        }
    }

    /// Whether this reply acknowledges the notification.
    pub fn is_success(&self) -> bool {
        self.return_code == SUCCESS
    }
}

impl ToParams for NotifyReply {
    fn to_params(&self) -> ParameterMap {
        let mut p = ParameterMap::new();
        p.put_str("return_code", &self.return_code);
        p.put_str("return_msg", &self.return_msg);
        p
    }
}

impl FromParams for NotifyReply {
    fn from_params(params: &ParameterMap) -> TypesResult<Self> {
        Ok(Self {
            return_code: read_str(params, "return_code"),
            return_msg: read_str(params, "return_msg"),
        })
    }
}
