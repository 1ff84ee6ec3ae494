//! Server-to-server client for the WeChat Pay v2 (XML) API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  OrderRequest   ┌──────────────────────────────────────┐
//! │   Merchant   │ ──────────────→ │ WechatPay                            │
//! │   server     │                 │  fill credentials → sign (MD5)       │
//! │              │                 │         │                            │
//! │              │                 │  ┌──────▼──────┐   POST text/xml     │      ┌─────────┐
//! │              │                 │  │ Transport   │ ───────────────────────→ │ Gateway │
//! │              │                 │  │ (XML codec) │ ←─────────────────────── │         │
//! │              │                 │  └──────┬──────┘   <xml>...</xml>    │      └────┬────┘
//! │              │  OrderResponse  │   decode → verify sign               │           │
//! │              │ ←────────────── │                                      │           │
//! │              │                 └──────────────────────────────────────┘           │
//! │  notify_url  │ ←────────────── payment notification (same shape as query) ────────┘
//! └──────────────┘
//! ```
//!
//! # Components
//!
//! - **[`gateway`]**: The [`WechatPay`] façade (order, query, notify, app params)
//! - **[`transport`]**: XML-over-POST adapter
//! - **[`http`]**: The [`HttpExecutor`] seam and its reqwest implementation
//! - **[`error`]**: Error taxonomy with recovery suggestions
//!
//! # Usage
//!
//! ```rust,no_run
//! use wxpay_client::{WechatPay, WechatPayConfig};
//! use wxpay_types::{constants::trade_type, BaseCredentials, OrderRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WechatPay::new(WechatPayConfig::new("wx2421b1c4370ec43b", "10000100", "api-key"))?;
//!
//! let req = OrderRequest::new(
//!     // appid / mch_id left blank are filled from the config
//!     BaseCredentials::new("", "", "5K8264ILTKCH16CQ2502SI8ZNMTM67VS"),
//!     "Coffee",
//!     "20261018-0001",
//!     1200,
//!     "203.0.113.7",
//!     "https://shop.example.com/wxpay/notify",
//!     trade_type::APP,
//! );
//!
//! let resp = client.order(req).await?;
//! if resp.result.is_success() {
//!     let app = client.app_params(&resp, "n0nce", 1_790_000_000)?;
//!     println!("{}", app.prepay_id);
//! } else {
//!     // business failure is data, not an error
//!     println!("rejected: {:?}", resp.result.failure_reason());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Retries
//!
//! Nothing is retried. A transport error after the request left may still have
//! created the order; query by `out_trade_no` before submitting again.

pub mod error;
pub mod gateway;
pub mod http;
pub mod transport;

// Re-export main types
pub use error::{PayError, PayResult};
pub use gateway::{notify_reply_body, WechatPay};
pub use http::{HttpExecutor, HttpRequest, HttpResponse, ReqwestExecutor, XML_CONTENT_TYPE};
pub use transport::Transport;
pub use wxpay_types::WechatPayConfig;
