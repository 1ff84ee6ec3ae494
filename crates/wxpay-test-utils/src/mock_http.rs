//! Mock implementation of the `HttpExecutor` trait for testing.
//!
//! Responses are scripted up front and handed out in order; every request is
//! recorded so tests can inspect exactly what went over the wire.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wxpay_client::{HttpExecutor, HttpRequest, HttpResponse, PayError, PayResult};
use wxpay_crypto::ParameterMap;
use wxpay_wire::{decode_params, encode_params};

enum Scripted {
    Reply(HttpResponse),
    Fail(String),
}

#[derive(Default)]
struct MockHttpInner {
    /// Responses still to be returned, front first.
    script: VecDeque<Scripted>,
    /// Every request received, oldest first.
    requests: Vec<HttpRequest>,
}

/// A scripted `HttpExecutor`.
///
/// Cheap to clone; all clones share the same script and request log. A request
/// arriving with an empty script fails with a transport error.
#[derive(Clone, Default)]
pub struct MockHttpExecutor {
    inner: Arc<Mutex<MockHttpInner>>,
}

impl MockHttpExecutor {
    /// Create an executor with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.lock()
            .script
            .push_back(Scripted::Reply(HttpResponse::new(status, body)));
        self
    }

    /// Queue a 200 response whose body is `params` as an XML envelope.
    pub fn push_params(&self, params: &ParameterMap) -> &Self {
        let body = encode_params(params).expect("fixture params must encode");
        self.push_response(200, body)
    }

    /// Queue a 200 response signed with `secret`.
    pub fn push_signed(&self, params: &ParameterMap, secret: &str) -> &Self {
        let mut params = params.clone();
        let sign = wxpay_crypto::sign(&params, secret).expect("fixture params must sign");
        params.insert("sign", sign);
        self.push_params(&params)
    }

    /// Queue a transport failure (no response at all).
    pub fn push_transport_error(&self, reason: &str) -> &Self {
        self.lock()
            .script
            .push_back(Scripted::Fail(reason.to_string()));
        self
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// The most recent request body decoded back into parameters.
    pub fn last_request_params(&self) -> Option<ParameterMap> {
        let inner = self.lock();
        let last = inner.requests.last()?;
        decode_params(&last.body).ok()
    }

    /// Number of scripted responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lock().script.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockHttpInner> {
        self.inner.lock().expect("mock http lock poisoned")
    }
}

#[async_trait]
impl HttpExecutor for MockHttpExecutor {
    async fn execute(&self, request: HttpRequest) -> PayResult<HttpResponse> {
        let mut inner = self.lock();
        inner.requests.push(request);
        match inner.script.pop_front() {
            Some(Scripted::Reply(response)) => Ok(response),
            Some(Scripted::Fail(reason)) => Err(PayError::Transport(reason)),
            None => Err(PayError::Transport("no scripted response".to_string())),
        }
    }
}
