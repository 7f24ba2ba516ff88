pub mod config;
pub mod factory;
pub mod transport;

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::session::Session;

use self::transport::{HttpRequest, Transport, TransportError};

pub const MIME_JSON: &str = "application/json";

pub const UNAUTHORIZED_MESSAGE: &str = "401: Unauthorized - Please login again";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";

/// Pass as the body of [`Client::post`] or [`Client::put`] to send none.
pub const NO_BODY: Option<&()> = None;

/// The request client every API call goes through.
///
/// It attaches the session's bearer token, sends the request through the
/// [`Transport`], and turns whatever comes back into either the decoded JSON
/// payload or a [`RequestError`]. It never retries.
#[derive(Clone)]
pub struct Client {
    url: String,
    transport: Arc<dyn Transport>,
    session: Session,
    clear_user_on_unauthorized: bool,
}

/// Every failure a request can end with. The display text is the message
/// alone, ready to show to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered 401. The token has been evicted already.
    #[error("{0}")]
    Unauthorized(String),

    /// Any other non-2xx answer. The message is the server's `error` field
    /// when it sent one.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// The exchange could not complete.
    #[error("{0}")]
    Network(String),

    /// A 2xx answer whose payload doesn't have the expected shape.
    #[error("{0}")]
    Schema(String),
}

/// Description of one request: verb, path, optional JSON body and headers
/// that override the defaults.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    body: Option<String>,
    headers: HeaderMap,
}

impl Client {
    pub fn new(url: &str, transport: Arc<dyn Transport>, session: Session) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            transport,
            session,
            clear_user_on_unauthorized: false,
        }
    }

    /// On 401, also drop the cached user record instead of only the token.
    pub fn clear_user_on_unauthorized(mut self, clear: bool) -> Self {
        self.clear_user_on_unauthorized = clear;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.execute(Request::new(Method::GET, path)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = Request::new(Method::POST, path).with_body(body)?;
        self.execute(req).await
    }

    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = Request::new(Method::PUT, path).with_body(body)?;
        self.execute(req).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.execute(Request::new(Method::DELETE, path)).await
    }

    /// Sends the request and decodes the payload into `T`. A payload that
    /// doesn't fit `T` is a [`RequestError::Schema`].
    pub async fn execute<T: DeserializeOwned>(&self, req: Request) -> Result<T, RequestError> {
        let path = req.path.clone();
        let value = self.execute_json(req).await?;
        serde_json::from_value(value).map_err(|e| {
            RequestError::Schema(format!("unexpected response payload from '{path}': {e}"))
        })
    }

    async fn execute_json(&self, req: Request) -> Result<Value, RequestError> {
        let url = format!("{}{}", self.url, req.path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MIME_JSON));
        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => info!("Session token is not a valid header value, send without it"),
            }
        }
        for name in req.headers.keys() {
            headers.remove(name);
        }
        for (name, value) in req.headers.iter() {
            headers.append(name.clone(), value.clone());
        }

        debug!("Request {} {}", req.method, url);
        let resp = self
            .transport
            .send(HttpRequest {
                method: req.method,
                url,
                headers,
                body: req.body,
            })
            .await?;
        debug!("Response {} for '{}'", resp.status, req.path);

        if resp.status == 401 {
            if self.clear_user_on_unauthorized {
                match self.session.clear() {
                    Ok(()) => info!("Session cleared after 401 from '{}'", req.path),
                    Err(err) => warn!("Clear session after 401 failed: {err:#}"),
                }
            } else {
                self.session.evict_token();
            }
            return Err(RequestError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()));
        }

        if !(200..300).contains(&resp.status) {
            return Err(RequestError::RequestFailed {
                status: resp.status,
                message: error_message(resp.status, &resp.body),
            });
        }

        parse_payload(&resp.body)
    }
}

impl Request {
    /// A path without a leading `/` gets one.
    pub fn new(method: Method, path: &str) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            method,
            path,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_body<B>(mut self, body: Option<&B>) -> Result<Self, RequestError>
    where
        B: Serialize + ?Sized,
    {
        self.body = match body {
            Some(body) => Some(serde_json::to_string(body).map_err(|e| {
                RequestError::Schema(format!("encode request body for '{}': {e}", self.path))
            })?),
            None => None,
        };
        Ok(self)
    }

    /// Sets a header, replacing the default of the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl RequestError {
    pub fn message(&self) -> &str {
        match self {
            RequestError::Unauthorized(message)
            | RequestError::Network(message)
            | RequestError::Schema(message) => message,
            RequestError::RequestFailed { message, .. } => message,
        }
    }

    /// The HTTP status the server answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Unauthorized(_) => Some(401),
            RequestError::RequestFailed { status, .. } => Some(*status),
            RequestError::Network(_) | RequestError::Schema(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RequestError::Unauthorized(_))
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Failed(message) => RequestError::Network(message),
            TransportError::Opaque => RequestError::Network(NETWORK_ERROR_MESSAGE.to_string()),
        }
    }
}

/// The message of a non-2xx answer: the `error` string of a JSON body, or
/// the status code when there is none.
fn error_message(status: u16, body: &[u8]) -> String {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();
    match parsed
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
    {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("HTTP error! status: {status}"),
    }
}

/// An empty body decodes as `null`.
fn parse_payload(body: &[u8]) -> Result<Value, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|e| RequestError::Schema(format!("server returned invalid json: {e}")))
}
