//! Active and scheduled listings under `/api/resources/v1/staged-sales`.

use crate::config;
use crate::error::Result;
use crate::http::Connection;
use crate::models::StagedSale;
use crate::query::QueryBuilder;

/// Submit and fetch staged sales.
pub struct StagedSalesService<'a> {
    conn: &'a Connection,
}

impl<'a> StagedSalesService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create_staged_sale(&self, sale: &StagedSale) -> Result<()> {
        let url = self
            .conn
            .endpoint(config::STAGED_SALES_PATH, &[], &QueryBuilder::new())?;
        self.conn.post_json(url, sale)
    }

    /// Fetch a staged sale by ID. The `data` envelope is unwrapped.
    pub fn get_staged_sale(&self, id: &str) -> Result<StagedSale> {
        let url = self
            .conn
            .endpoint(config::STAGED_SALES_PATH, &[id], &QueryBuilder::new())?;
        self.conn.get_enveloped(url)
    }
}
