//! Shared test utilities for the wxpay crates.
//!
//! - [`MockHttpExecutor`]: scripted stand-in for the gateway's HTTP endpoint
//! - [`helpers`]: fixture configuration, requests and gateway replies

pub mod helpers;
pub mod mock_http;

pub use helpers::*;
pub use mock_http::MockHttpExecutor;
