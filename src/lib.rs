//! GoCollect SDK for Rust.
//!
//! A blocking client for the GoCollect collectibles-pricing API. It covers
//! catalog search, pricing insights, and partner submission of sold examples
//! and staged sales. Every call is a single authenticated HTTPS round-trip;
//! the client does not retry, cache, or rate-limit.
//!
//! # Quick start
//!
//! ```no_run
//! use gocollect_sdk::{GoCollectClient, SearchItemsParams};
//!
//! let client = GoCollectClient::builder("my-api-token").build().unwrap();
//!
//! let items = client
//!     .collectibles()
//!     .search_items(&SearchItemsParams::new("Hulk #181").limit(10))
//!     .unwrap();
//!
//! let insights = client
//!     .insights()
//!     .get_item_insights(items[0].item_id, "9.8", Some("cgc"), None)
//!     .unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod query;
pub mod services;

#[cfg(feature = "async")]
pub use async_client::AsyncGoCollectClient;
pub use error::{GoCollectError, Result};
pub use http::Connection;
pub use models::{ItemInsights, Metrics, SaleFormat, SearchItem, SoldExample, StagedSale};
pub use query::QueryBuilder;
pub use reqwest::Url;
pub use services::SearchItemsParams;

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;

// ---------------------------------------------------------------------------
// GoCollectClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`GoCollectClient`].
///
/// Use [`GoCollectClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](GoCollectClientBuilder::build). Setting the
/// same option twice keeps the last value.
pub struct GoCollectClientBuilder {
    token: String,
    base_url: Option<String>,
    http_client: Option<Client>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GoCollectClientBuilder {
    fn new(token: String) -> Self {
        Self {
            token,
            base_url: None,
            http_client: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL.
    ///
    /// Defaults to [`config::DEFAULT_BASE_URL`]. The value is validated by
    /// [`build()`](Self::build) and must be an absolute `http` or `https` URL.
    /// Endpoint paths are absolute, so any path on the base URL is replaced.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a caller-configured HTTP client.
    ///
    /// When set, [`timeout`](Self::timeout) and
    /// [`user_agent`](Self::user_agent) are ignored.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a total request timeout on the default HTTP client.
    ///
    /// No timeout is applied unless one is set here.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` sent by the default HTTP client.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// Fails with [`GoCollectError::Configuration`] when the base URL is not
    /// a usable absolute URL or the default HTTP client cannot be created.
    pub fn build(self) -> Result<GoCollectClient> {
        let base_url = parse_base_url(
            self.base_url
                .as_deref()
                .unwrap_or(config::DEFAULT_BASE_URL),
        )?;

        let http = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout)
                .user_agent(self.user_agent.unwrap_or_else(config::default_user_agent))
                .build()
                .map_err(|e| {
                    GoCollectError::Configuration(format!("cannot build HTTP client: {e}"))
                })?,
        };

        Ok(GoCollectClient {
            conn: Connection::new(http, base_url, self.token),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| GoCollectError::Configuration(format!("invalid base URL {raw:?}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(GoCollectError::Configuration(format!(
            "base URL {raw:?} must be an absolute http(s) URL"
        )));
    }

    Ok(url)
}

// ---------------------------------------------------------------------------
// GoCollectClient
// ---------------------------------------------------------------------------

/// The main entry point for the GoCollect SDK.
///
/// Wraps a [`Connection`] and exposes one lightweight borrowing service per
/// API resource family. The client holds no mutable state and is `Send +
/// Sync`, so it can be shared between threads behind an `Arc`.
pub struct GoCollectClient {
    conn: Connection,
}

impl GoCollectClient {
    /// Create a new builder for a client authenticating with `token`.
    pub fn builder(token: impl Into<String>) -> GoCollectClientBuilder {
        GoCollectClientBuilder::new(token.into())
    }

    /// Build a client with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    // -- Service accessors -------------------------------------------------

    /// Access catalog search.
    pub fn collectibles(&self) -> services::CollectiblesService<'_> {
        services::CollectiblesService::new(&self.conn)
    }

    /// Access pricing insights.
    pub fn insights(&self) -> services::InsightsService<'_> {
        services::InsightsService::new(&self.conn)
    }

    /// Access sold example submission and lookup.
    pub fn sold_examples(&self) -> services::SoldExamplesService<'_> {
        services::SoldExamplesService::new(&self.conn)
    }

    /// Access staged sale submission and lookup.
    pub fn staged_sales(&self) -> services::StagedSalesService<'_> {
        services::StagedSalesService::new(&self.conn)
    }

    // -- Accessors ---------------------------------------------------------

    /// Base URL the client sends requests to.
    pub fn base_url(&self) -> &Url {
        self.conn.base_url()
    }

    /// Return the underlying [`Connection`] for requests not covered by the
    /// services.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl fmt::Debug for GoCollectClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoCollectClient")
            .field("conn", &self.conn)
            .finish()
    }
}

impl fmt::Display for GoCollectClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GoCollectClient(base_url={})", self.conn.base_url())
    }
}
