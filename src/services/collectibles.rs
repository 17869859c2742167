//! Catalog search against `/api/collectibles/v1/item/search`.

use crate::config;
use crate::error::Result;
use crate::http::Connection;
use crate::models::SearchItem;
use crate::query::QueryBuilder;

// ---------------------------------------------------------------------------
// SearchItemsParams
// ---------------------------------------------------------------------------

/// Parameters for an item search.
///
/// `query` is always sent. `cam` is skipped when `None` or empty, and `limit`
/// is skipped unless it is greater than zero.
#[derive(Debug, Clone, Default)]
pub struct SearchItemsParams {
    pub query: String,
    pub cam: Option<String>,
    pub limit: Option<u32>,
}

impl SearchItemsParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Restrict results to one category (e.g. `"Comics"`).
    pub fn cam(mut self, cam: impl Into<String>) -> Self {
        self.cam = Some(cam.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn to_query(&self) -> QueryBuilder {
        let mut qb = QueryBuilder::new();
        qb.push("query", &self.query)
            .push_opt("cam", self.cam.as_deref())
            .push_positive("limit", self.limit);
        qb
    }
}

// ---------------------------------------------------------------------------
// CollectiblesService
// ---------------------------------------------------------------------------

/// Read-only search over the collectibles catalog.
pub struct CollectiblesService<'a> {
    conn: &'a Connection,
}

impl<'a> CollectiblesService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Search the catalog. Results are returned in server order, unpaginated.
    pub fn search_items(&self, params: &SearchItemsParams) -> Result<Vec<SearchItem>> {
        let url = self
            .conn
            .endpoint(config::SEARCH_ITEMS_PATH, &[], &params.to_query())?;
        Ok(self.conn.get_json(url)?.unwrap_or_default())
    }
}
