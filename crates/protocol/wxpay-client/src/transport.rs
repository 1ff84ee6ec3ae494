//! Transport adapter: XML envelope over HTTP POST.

use tracing::{debug, warn};
use wxpay_crypto::ParameterMap;
use wxpay_types::FromParams;
use wxpay_wire::{decode_params, encode_params};

use crate::error::{PayError, PayResult};
use crate::http::{HttpExecutor, HttpRequest};

/// Longest slice of an error body kept in [`PayError::HttpStatus`].
const MAX_ERROR_BODY: usize = 512;

/// Sends signed parameter maps to the gateway and returns raw or decoded replies.
#[derive(Debug, Clone)]
pub struct Transport<E> {
    executor: E,
}

impl<E: HttpExecutor> Transport<E> {
    /// Create a transport over the given executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// POST `params` as XML to `url` and return the response body.
    ///
    /// A non-2xx status is an error and the body is not decoded.
    pub async fn call(&self, url: &str, params: &ParameterMap) -> PayResult<Vec<u8>> {
        let body = encode_params(params)?;
        debug!(url = %url, fields = params.len(), "Sending gateway request");

        let response = self
            .executor
            .execute(HttpRequest::post_xml(url, body.into_bytes()))
            .await?;

        if !response.is_success() {
            warn!(url = %url, status = response.status, "Gateway returned non-success status");
            return Err(PayError::HttpStatus {
                status: response.status,
                body: truncate(&String::from_utf8_lossy(&response.body), MAX_ERROR_BODY),
            });
        }

        debug!(url = %url, bytes = response.body.len(), "Received gateway response");
        Ok(response.body)
    }

    /// POST `params` and decode the reply into `T`.
    ///
    /// Also returns the raw decoded map, which is what the gateway signed.
    pub async fn round_trip<T: FromParams>(
        &self,
        url: &str,
        params: &ParameterMap,
    ) -> PayResult<(T, ParameterMap)> {
        let bytes = self.call(url, params).await?;
        let raw = decode_params(&bytes)?;
        let value = T::from_params(&raw)?;
        Ok((value, raw))
    }
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
