//! Async wrapper around [`GoCollectClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every call on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking transport waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use gocollect_sdk::{AsyncGoCollectClient, SearchItemsParams};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncGoCollectClient::builder("my-api-token").build().await.unwrap();
//!
//!     let items = client
//!         .search_items(SearchItemsParams::new("Hulk #181"))
//!         .await
//!         .unwrap();
//!
//!     // Any sync call via closure
//!     let sale = client
//!         .run(|c| c.staged_sales().get_staged_sale("listing-1"))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{GoCollectError, Result};
use crate::models::{ItemInsights, SearchItem, SoldExample, StagedSale};
use crate::services::SearchItemsParams;
use crate::{GoCollectClient, GoCollectClientBuilder};

// ---------------------------------------------------------------------------
// AsyncGoCollectClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncGoCollectClient`].
pub struct AsyncGoCollectClientBuilder {
    inner: GoCollectClientBuilder,
}

impl AsyncGoCollectClientBuilder {
    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(base_url);
        self
    }

    /// Use a caller-configured blocking HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.inner = self.inner.http_client(client);
        self
    }

    /// Set a total request timeout on the default HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(user_agent);
        self
    }

    /// Build the async client.
    ///
    /// The blocking transport is created on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncGoCollectClient> {
        let builder = self.inner;
        tokio::task::spawn_blocking(move || {
            let client = builder.build()?;
            Ok(AsyncGoCollectClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| GoCollectError::Task(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncGoCollectClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`GoCollectClient`].
///
/// The wrapped client is shared through an [`Arc`]; it holds no mutable
/// state, so concurrent calls need no lock.
#[derive(Clone)]
pub struct AsyncGoCollectClient {
    inner: Arc<GoCollectClient>,
}

impl AsyncGoCollectClient {
    /// Create a new builder for an async client authenticating with `token`.
    pub fn builder(token: impl Into<String>) -> AsyncGoCollectClientBuilder {
        AsyncGoCollectClientBuilder {
            inner: GoCollectClient::builder(token),
        }
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&GoCollectClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| GoCollectError::Task(format!("Task join error: {e}")))?
    }

    pub async fn search_items(&self, params: SearchItemsParams) -> Result<Vec<SearchItem>> {
        self.run(move |c| c.collectibles().search_items(&params)).await
    }

    pub async fn get_item_insights(
        &self,
        item_id: u64,
        grade: &str,
        company: Option<&str>,
        label: Option<&str>,
    ) -> Result<ItemInsights> {
        let grade = grade.to_string();
        let company = company.map(str::to_string);
        let label = label.map(str::to_string);
        self.run(move |c| {
            c.insights()
                .get_item_insights(item_id, &grade, company.as_deref(), label.as_deref())
        })
        .await
    }

    pub async fn get_item_insights_by_cgc_id(
        &self,
        cgc_id: &str,
        grade: &str,
        company: Option<&str>,
        label: Option<&str>,
    ) -> Result<ItemInsights> {
        let cgc_id = cgc_id.to_string();
        let grade = grade.to_string();
        let company = company.map(str::to_string);
        let label = label.map(str::to_string);
        self.run(move |c| {
            c.insights().get_item_insights_by_cgc_id(
                &cgc_id,
                &grade,
                company.as_deref(),
                label.as_deref(),
            )
        })
        .await
    }

    pub async fn create_sold_example(&self, example: SoldExample) -> Result<()> {
        self.run(move |c| c.sold_examples().create_sold_example(&example))
            .await
    }

    pub async fn get_sold_example(&self, partner_sale_id: &str) -> Result<SoldExample> {
        let id = partner_sale_id.to_string();
        self.run(move |c| c.sold_examples().get_sold_example(&id)).await
    }

    pub async fn create_staged_sale(&self, sale: StagedSale) -> Result<()> {
        self.run(move |c| c.staged_sales().create_staged_sale(&sale))
            .await
    }

    pub async fn get_staged_sale(&self, id: &str) -> Result<StagedSale> {
        let id = id.to_string();
        self.run(move |c| c.staged_sales().get_staged_sale(&id)).await
    }
}
