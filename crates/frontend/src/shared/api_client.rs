//! HTTP client for the SmartPOS REST backend
//!
//! `Transport` moves JSON values over the wire; `ApiClient` adds typed
//! encoding/decoding on top of it. The browser transport is built on
//! `gloo-net` and bounds every request with a timeout.

use super::api_utils::{api_base, api_url};
use super::config::ApiConfig;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    /// The body arrived but does not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_data_shape(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }

    /// Message for maintenance forms: the backend's `{"detail": "..."}` when
    /// a rejected request carries one, otherwise the error itself
    pub fn detail(&self) -> String {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            detail: Option<String>,
        }

        if let ApiError::Status { body, .. } = self {
            if let Ok(ErrorResponse {
                detail: Some(detail),
            }) = serde_json::from_str::<ErrorResponse>(body)
            {
                return detail;
            }
        }
        self.to_string()
    }
}

/// Wire-level seam: one request, one decoded JSON body
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, method: Method, path: &str, body: Option<Value>)
        -> Result<Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.call(Method::Get, path, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.call(Method::Post, path, Some(body)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.call(Method::Put, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.call(Method::Delete, path, None).await
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        log::debug!("{} {}", method.as_str(), path);

        let value = match self.transport.send(method, path, body).await {
            Ok(value) => value,
            Err(e) => {
                log::error!("{} {} failed: {}", method.as_str(), path, e);
                return Err(e);
            }
        };

        serde_json::from_value(value).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            log::error!("{} {} returned malformed body: {}", method.as_str(), path, e);
            err
        })
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

// ============================================================================
// Browser transport
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlooTransport {
    base_url: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(api_base(config), config.timeout_ms)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for GlooTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = api_url(&self.base_url, path);
        if self.timeout_ms == 0 {
            return execute(method, url, body).await;
        }

        let request = Box::pin(execute(method, url, body));
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::Timeout(self.timeout_ms)),
        }
    }
}

/// Owns `url` so the request future borrows nothing from the caller
async fn execute(method: Method, url: String, body: Option<Value>) -> Result<Value, ApiError> {
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    }
    .header("Accept", "application/json");

    let sent = match body {
        Some(body) => builder
            .json(&body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status { status, body: text });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

// ============================================================================
// In-memory transport for tests
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub body: Option<Value>,
    }

    #[derive(Default)]
    struct FakeState {
        replies: HashMap<(Method, String), VecDeque<Result<Value, ApiError>>>,
        holds: HashMap<(Method, String), oneshot::Receiver<()>>,
        requests: Vec<RecordedRequest>,
    }

    /// Scripted transport: replies are queued per `(method, path)` and
    /// consumed in order. Unscripted routes answer HTTP 404.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        state: Rc<RefCell<FakeState>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(&self, method: Method, path: &str, reply: Result<Value, ApiError>) -> &Self {
            self.state
                .borrow_mut()
                .replies
                .entry((method, path.to_string()))
                .or_default()
                .push_back(reply);
            self
        }

        pub fn ok(&self, method: Method, path: &str, body: Value) -> &Self {
            self.reply(method, path, Ok(body))
        }

        pub fn fail(&self, method: Method, path: &str, err: ApiError) -> &Self {
            self.reply(method, path, Err(err))
        }

        /// The next request to this route stays pending until the returned
        /// sender fires (or is dropped)
        pub fn hold(&self, method: Method, path: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.state
                .borrow_mut()
                .holds
                .insert((method, path.to_string()), rx);
            tx
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.state.borrow().requests.clone()
        }

        pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
            self.requests()
                .into_iter()
                .filter(|r| r.method == method && r.path == path)
                .collect()
        }
    }

    impl Transport for FakeTransport {
        async fn send(
            &self,
            method: Method,
            path: &str,
            body: Option<Value>,
        ) -> Result<Value, ApiError> {
            let key = (method, path.to_string());
            let hold = {
                let mut state = self.state.borrow_mut();
                state.requests.push(RecordedRequest {
                    method,
                    path: path.to_string(),
                    body,
                });
                state.holds.remove(&key)
            };
            if let Some(rx) = hold {
                let _ = rx.await;
            }

            self.state
                .borrow_mut()
                .replies
                .get_mut(&key)
                .and_then(|queue| queue.pop_front())
                .unwrap_or_else(|| {
                    Err(ApiError::Status {
                        status: 404,
                        body: format!("no scripted reply for {} {}", method.as_str(), path),
                    })
                })
        }
    }
}
