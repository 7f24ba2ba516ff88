use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::Method;
use thiserror::Error;

/// A fully resolved request, ready to be put on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The transport knows what went wrong, the message is shown as is.
    #[error("{0}")]
    Failed(String),

    #[error("transport failed without a reason")]
    Opaque,
}

/// The network call the [`Client`](super::Client) is built on. One call per
/// request, no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder {
            timeout: None,
            accept_invalid_certs: false,
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(req.method, &req.url).headers(req.headers);
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(err) => {
                debug!("Transport error for '{}': {err:?}", req.url);
                return Err(TransportError::Failed(err.to_string()));
            }
        };

        let status = resp.status();
        let body = match resp.bytes().await {
            Ok(body) => body.to_vec(),
            // Error answers are decided by their status, the body is optional.
            Err(err) if !status.is_success() => {
                debug!("Read body of {status} from '{}' failed: {err}", req.url);
                Vec::new()
            }
            Err(err) => {
                return Err(TransportError::Failed(format!(
                    "read response body: {err}"
                )))
            }
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

impl ReqwestTransportBuilder {
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<ReqwestTransport> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().context("build http client")?;
        Ok(ReqwestTransport { client })
    }
}
