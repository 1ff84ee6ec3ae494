//! Request and response models for the WeChat Pay v2 (XML) API.
//!
//! Each model is a flat record with an explicit field table ([`ToParams`] /
//! [`FromParams`]) that maps its fields to wire names. Shared fields live in
//! [`BaseCredentials`] (every request and echoing response) and [`BaseResult`]
//! (every response).
//!
//! # Module Organization
//!
//! - [`base`] - Credentials and two-layer result shared by all messages
//! - [`order`] - Unified order request/response
//! - [`query`] - Order query request/response
//! - [`notify`] - Payment notification payload and acknowledgement
//! - [`app`] - Signed parameters for the in-app payment SDK
//! - [`config`] - Merchant configuration
//! - [`constants`] - Endpoints and enumerated field values
//!
//! # Example
//!
//! ```
//! use wxpay_types::{constants::trade_type, BaseCredentials, OrderRequest, Signable, ToParams};
//!
//! let mut req = OrderRequest::new(
//!     BaseCredentials::new("wx123", "M1", "abc"),
//!     "Test",
//!     "T-1001",
//!     100,
//!     "127.0.0.1",
//!     "https://example.com/notify",
//!     trade_type::APP,
//! );
//! req.sign_with("secretkey").unwrap();
//!
//! let params = req.to_params();
//! assert_eq!(params.get("total_fee"), Some("100"));
//! assert!(!params.contains_key("detail"));
//! ```

pub mod app;
pub mod base;
pub mod config;
pub mod constants;
pub mod error;
pub mod fields;
pub mod notify;
pub mod order;
pub mod query;

pub use app::AppInvocationParameters;
pub use base::{BaseCredentials, BaseResult};
pub use config::WechatPayConfig;
pub use error::{TypesError, TypesResult};
pub use fields::{FromParams, Signable, ToParams};
pub use notify::{NotifyPayload, NotifyReply};
pub use order::{OrderRequest, OrderResponse};
pub use query::{QueryRequest, QueryResponse};
pub use wxpay_crypto::ParameterMap;
