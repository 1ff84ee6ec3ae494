//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIMEOUT_SECS, ORDER_URL, QUERY_URL};
use crate::error::{TypesError, TypesResult};

/// Merchant credentials and gateway endpoints.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WechatPayConfig {
    /// Application ID issued by the gateway.
    pub app_id: String,

    /// Merchant ID.
    pub mch_id: String,

    /// Merchant API key: the shared secret for server-to-server signatures.
    pub api_key: String,

    /// Secret for signing in-app invocation parameters. Falls back to `api_key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_secret: Option<String>,

    /// Unified order endpoint.
    pub order_url: String,

    /// Order query endpoint.
    pub query_url: String,

    /// HTTP timeout in seconds.
    pub timeout_secs: u64,

    /// Reject responses whose `sign` field does not verify.
    pub verify_response_sign: bool,
}

impl Default for WechatPayConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            mch_id: String::new(),
            api_key: String::new(),
            app_secret: None,
            order_url: ORDER_URL.to_string(),
            query_url: QUERY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verify_response_sign: true,
        }
    }
}

impl WechatPayConfig {
    /// Configuration for the production endpoints.
    pub fn new(app_id: &str, mch_id: &str, api_key: &str) -> Self {
        Self {
            app_id: app_id.to_string(),
            mch_id: mch_id.to_string(),
            api_key: api_key.to_string(),
            ..Default::default()
        }
    }

    /// Secret used for in-app invocation parameters.
    pub fn app_signing_secret(&self) -> &str {
        match &self.app_secret {
            Some(secret) if !secret.is_empty() => secret,
            _ => &self.api_key,
        }
    }

    /// Check that identifiers and endpoints are present.
    ///
    /// The API key is not checked here. Signing without one fails as a
    /// signing precondition.
    pub fn validate(&self) -> TypesResult<()> {
        if self.app_id.is_empty() {
            return Err(TypesError::Config("app_id is not set".into()));
        }
        if self.mch_id.is_empty() {
            return Err(TypesError::Config("mch_id is not set".into()));
        }
        if self.order_url.is_empty() || self.query_url.is_empty() {
            return Err(TypesError::Config("gateway endpoints are not set".into()));
        }
        if self.timeout_secs == 0 {
            return Err(TypesError::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for WechatPayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WechatPayConfig")
            .field("app_id", &self.app_id)
            .field("mch_id", &self.mch_id)
            .field("api_key", &"[REDACTED]")
            .field("app_secret", &self.app_secret.as_ref().map(|_| "[REDACTED]"))
            .field("order_url", &self.order_url)
            .field("query_url", &self.query_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("verify_response_sign", &self.verify_response_sign)
            .finish()
    }
}
