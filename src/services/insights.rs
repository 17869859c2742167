//! Pricing insights against `/api/insights/v1/item/...`.

use crate::config;
use crate::error::{GoCollectError, Result};
use crate::http::Connection;
use crate::models::ItemInsights;
use crate::query::QueryBuilder;

/// Lookup of valuation metrics for a single item.
///
/// An item can be addressed by its GoCollect item ID or by its CGC
/// identifier. Both hit the same underlying resource; nothing is shared or
/// cached between the two lookups.
pub struct InsightsService<'a> {
    conn: &'a Connection,
}

impl<'a> InsightsService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get insights for a GoCollect item ID at the given grade.
    ///
    /// `company` and `label` are only sent when present and non-empty. A
    /// `204 No Content` reply fails with [`GoCollectError::EmptyResponse`].
    pub fn get_item_insights(
        &self,
        item_id: u64,
        grade: &str,
        company: Option<&str>,
        label: Option<&str>,
    ) -> Result<ItemInsights> {
        let id = item_id.to_string();
        self.fetch(config::ITEM_INSIGHTS_PATH, &id, grade, company, label)
    }

    /// Get insights for an item addressed by its CGC identifier.
    pub fn get_item_insights_by_cgc_id(
        &self,
        cgc_id: &str,
        grade: &str,
        company: Option<&str>,
        label: Option<&str>,
    ) -> Result<ItemInsights> {
        self.fetch(config::CGC_ITEM_INSIGHTS_PATH, cgc_id, grade, company, label)
    }

    fn fetch(
        &self,
        path: &str,
        id: &str,
        grade: &str,
        company: Option<&str>,
        label: Option<&str>,
    ) -> Result<ItemInsights> {
        let mut qb = QueryBuilder::new();
        qb.push("grade", grade)
            .push_opt("company", company)
            .push_opt("label", label);

        let url = self.conn.endpoint(path, &[id], &qb)?;
        self.conn
            .get_json(url)?
            .ok_or(GoCollectError::EmptyResponse { status: 204 })
    }
}
