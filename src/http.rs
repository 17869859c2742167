//! Request construction and execution against the GoCollect REST API.
//!
//! A [`Connection`] owns the base URL, bearer token and blocking transport.
//! It resolves endpoint paths, attaches credentials, encodes JSON bodies,
//! maps HTTP failures onto [`GoCollectError`], and decodes JSON replies. It
//! keeps no per-request state, so one connection can be shared across threads.

use std::fmt;

use reqwest::blocking::{Client, Request, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{GoCollectError, Result};
use crate::query::QueryBuilder;

const JSON_MIME: &str = "application/json";

/// Single-record responses arrive wrapped as `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// Authenticated HTTP connection to the API.
pub struct Connection {
    http: Client,
    base_url: Url,
    token: String,
}

impl Connection {
    /// Create a connection from an already-validated base URL.
    pub fn new(http: Client, base_url: Url, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            token: token.into(),
        }
    }

    /// Base URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- Request building --------------------------------------------------

    /// Resolve `path` against the base URL, then append percent-encoded
    /// identifier segments and the query string.
    ///
    /// An absolute `path` replaces any path carried by the base URL.
    pub fn endpoint(&self, path: &str, segments: &[&str], query: &QueryBuilder) -> Result<Url> {
        let mut url = self.base_url.join(path).map_err(|e| {
            GoCollectError::RequestConstruction(format!("cannot resolve path {path:?}: {e}"))
        })?;

        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| {
                    GoCollectError::RequestConstruction(format!(
                        "URL {url_str} cannot carry path segments",
                        url_str = self.base_url
                    ))
                })?
                .extend(segments);
        }

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(&query.build());
        }

        Ok(url)
    }

    /// Build an authenticated request.
    ///
    /// When `body` is `Some`, it is serialized to JSON up front and sent with
    /// `Content-Type: application/json`; a serialization failure is returned
    /// before any request object exists.
    pub fn build_request<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| GoCollectError::RequestConstruction(format!("cannot encode body: {e}")))?;

        let mut builder = self
            .http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, JSON_MIME);

        if let Some(bytes) = payload {
            builder = builder.header(CONTENT_TYPE, JSON_MIME).body(bytes);
        }

        builder
            .build()
            .map_err(|e| GoCollectError::RequestConstruction(e.to_string()))
    }

    // -- Execution ---------------------------------------------------------

    /// Send a request and decode the JSON body into `T`.
    ///
    /// Returns `Ok(None)` for `204 No Content`. The response is dropped
    /// before returning on every path.
    pub fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<Option<T>> {
        let response = self.send(request)?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().map_err(GoCollectError::Transport)?;
        trace!(status = status.as_u16(), len = bytes.len(), "decoding response body");
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(GoCollectError::Decode)
    }

    /// Send a request whose reply body is not needed.
    pub fn execute_discard(&self, request: Request) -> Result<StatusCode> {
        let response = self.send(request)?;
        Ok(response.status())
    }

    /// `GET` a URL and decode the reply.
    pub fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        let request = self.build_request::<()>(Method::GET, url, None)?;
        self.execute(request)
    }

    /// `GET` a URL whose reply is wrapped in a `data` envelope and unwrap it.
    pub fn get_enveloped<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        match self.get_json::<Envelope<T>>(url)? {
            Some(envelope) => Ok(envelope.data),
            None => Err(GoCollectError::EmptyResponse {
                status: StatusCode::NO_CONTENT.as_u16(),
            }),
        }
    }

    /// `POST` a JSON body, ignoring the reply payload.
    pub fn post_json<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<()> {
        let request = self.build_request(Method::POST, url, Some(body))?;
        self.execute_discard(request)?;
        Ok(())
    }

    fn send(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self
            .http
            .execute(request)
            .map_err(GoCollectError::Transport)?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status.as_u16() >= 400 {
            // Best effort: an unreadable body is reported as empty.
            let body = response.text().unwrap_or_default();
            return Err(GoCollectError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}
