//! Gateway façade.
//!
//! Every outbound call follows the same steps: fill credentials from config,
//! sign, send, decode, optionally verify the response signature, and hand the
//! typed response back. Business failures stay in the response.

use std::time::Duration;

use tracing::{debug, info, warn};
use wxpay_crypto::{verify, CryptoError, ParameterMap};
use wxpay_types::{
    AppInvocationParameters, BaseCredentials, BaseResult, FromParams, NotifyPayload,
    NotifyReply, OrderRequest, OrderResponse, QueryRequest, QueryResponse, Signable, ToParams,
    WechatPayConfig,
};
use wxpay_wire::{decode_params, encode_message};

use crate::error::{PayError, PayResult};
use crate::http::{HttpExecutor, ReqwestExecutor};
use crate::transport::Transport;

/// Client for the gateway's unified order and order query APIs.
///
/// Stateless between calls; share one instance across tasks if the executor
/// allows it (the default one does).
#[derive(Clone)]
pub struct WechatPay<E = ReqwestExecutor> {
    config: WechatPayConfig,
    transport: Transport<E>,
}

impl WechatPay<ReqwestExecutor> {
    /// Create a client using reqwest with the configured timeout.
    pub fn new(config: WechatPayConfig) -> PayResult<Self> {
        config.validate()?;
        let executor = ReqwestExecutor::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_executor(config, executor))
    }
}

impl<E: HttpExecutor> WechatPay<E> {
    /// Create a client over a custom HTTP executor.
    pub fn with_executor(config: WechatPayConfig, executor: E) -> Self {
        Self {
            config,
            transport: Transport::new(executor),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &WechatPayConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Transport<E> {
        &self.transport
    }

    /// Sign a message with the merchant API key.
    pub fn sign_request<S: Signable>(&self, message: &mut S) -> PayResult<()> {
        message.sign_with(&self.config.api_key)?;
        Ok(())
    }

    /// Create a unified order.
    ///
    /// Blank `appid`/`mch_id` are taken from the configuration. `nonce_str`
    /// must be set by the caller. Check `result` on the returned response: a
    /// business rejection is not an error here.
    pub async fn order(&self, mut req: OrderRequest) -> PayResult<OrderResponse> {
        self.prepare(&mut req.base)?;
        self.sign_request(&mut req)?;
        debug!(out_trade_no = %req.out_trade_no, total_fee = req.total_fee, "Creating unified order");

        let (resp, raw): (OrderResponse, _) = self
            .transport
            .round_trip(&self.config.order_url, &req.to_params())
            .await?;
        self.check_response_sign(&raw, "order response")?;
        log_outcome("order", &resp.result);

        Ok(resp)
    }

    /// Query the state of an order.
    pub async fn query(&self, mut req: QueryRequest) -> PayResult<QueryResponse> {
        if req.transaction_id.is_empty() && req.out_trade_no.is_empty() {
            return Err(PayError::precondition(
                "query needs transaction_id or out_trade_no",
            ));
        }
        self.prepare(&mut req.base)?;
        self.sign_request(&mut req)?;
        debug!(
            out_trade_no = %req.out_trade_no,
            transaction_id = %req.transaction_id,
            "Querying order"
        );

        let (resp, raw): (QueryResponse, _) = self
            .transport
            .round_trip(&self.config.query_url, &req.to_params())
            .await?;
        self.check_response_sign(&raw, "query response")?;
        log_outcome("query", &resp.result);

        Ok(resp)
    }

    /// Decode and authenticate a payment notification body.
    ///
    /// The signature is checked over every received field, including ones this
    /// crate does not model. Unsigned or tampered notifications are rejected.
    pub fn parse_notify(&self, body: &[u8]) -> PayResult<NotifyPayload> {
        let raw = decode_params(body)?;

        match verify(&raw, &self.config.api_key) {
            Ok(true) => {}
            Ok(false) | Err(CryptoError::MissingSignature(_)) => {
                warn!(
                    out_trade_no = raw.get_or_empty("out_trade_no"),
                    "Rejected notification with invalid signature"
                );
                return Err(PayError::SignatureMismatch {
                    context: "payment notification",
                });
            }
            Err(e) => return Err(e.into()),
        }

        let payload = NotifyPayload::from_params(&raw)?;
        info!(
            out_trade_no = %payload.out_trade_no,
            transaction_id = %payload.transaction_id,
            result_code = %payload.result.result_code,
            "Payment notification received"
        );
        Ok(payload)
    }

    /// XML acknowledgement body for a handled notification.
    ///
    /// `msg` is only sent on failure; success always carries `OK`.
    pub fn notify_reply(&self, ok: bool, msg: &str) -> PayResult<String> {
        let reply = if ok {
            NotifyReply::success()
        } else {
            NotifyReply::fail(msg)
        };
        notify_reply_body(&reply)
    }

    /// Build signed parameters for the in-app payment SDK.
    ///
    /// Signed with the app secret, or the API key when none is configured.
    pub fn app_params(
        &self,
        order: &OrderResponse,
        nonce_str: &str,
        timestamp: u64,
    ) -> PayResult<AppInvocationParameters> {
        if order.prepay_id.is_empty() {
            return Err(PayError::precondition("order response carries no prepay_id"));
        }
        if nonce_str.is_empty() {
            return Err(PayError::precondition("nonce_str is empty"));
        }

        let mut params = AppInvocationParameters::from_order(order, nonce_str, timestamp);
        if params.app_id.is_empty() {
            params.app_id = self.config.app_id.clone();
        }
        if params.partner_id.is_empty() {
            params.partner_id = self.config.mch_id.clone();
        }
        params.sign_with(self.config.app_signing_secret())?;
        Ok(params)
    }

    fn prepare(&self, base: &mut BaseCredentials) -> PayResult<()> {
        if base.app_id.is_empty() {
            base.app_id = self.config.app_id.clone();
        }
        if base.mch_id.is_empty() {
            base.mch_id = self.config.mch_id.clone();
        }
        if base.nonce_str.is_empty() {
            return Err(PayError::precondition("nonce_str is empty"));
        }
        Ok(())
    }

    fn check_response_sign(&self, raw: &ParameterMap, context: &'static str) -> PayResult<()> {
        if !self.config.verify_response_sign || raw.signature().is_none() {
            return Ok(());
        }
        if verify(raw, &self.config.api_key)? {
            Ok(())
        } else {
            warn!(context, "Response signature did not verify");
            Err(PayError::SignatureMismatch { context })
        }
    }
}

impl<E> std::fmt::Debug for WechatPay<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WechatPay")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Render the XML body a webhook returns after handling a notification.
pub fn notify_reply_body(reply: &NotifyReply) -> PayResult<String> {
    Ok(encode_message(reply)?)
}

fn log_outcome(operation: &str, result: &BaseResult) {
    if let Some(reason) = result.failure_reason() {
        info!(
            operation,
            return_code = %result.return_code,
            result_code = %result.result_code,
            err_code = %result.err_code,
            reason,
            "Gateway reported failure"
        );
    }
}
