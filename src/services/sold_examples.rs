//! Completed-sale records under `/api/resources/v1/sold-examples`.

use crate::config;
use crate::error::Result;
use crate::http::Connection;
use crate::models::SoldExample;
use crate::query::QueryBuilder;

/// Submit and fetch sold examples.
///
/// There is no update or delete. Submissions are sent once; the server is
/// the only place duplicates or invalid fields are rejected.
pub struct SoldExamplesService<'a> {
    conn: &'a Connection,
}

impl<'a> SoldExamplesService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create_sold_example(&self, example: &SoldExample) -> Result<()> {
        let url = self
            .conn
            .endpoint(config::SOLD_EXAMPLES_PATH, &[], &QueryBuilder::new())?;
        self.conn.post_json(url, example)
    }

    /// Fetch a sold example by its partner sale ID.
    pub fn get_sold_example(&self, partner_sale_id: &str) -> Result<SoldExample> {
        let url = self.conn.endpoint(
            config::SOLD_EXAMPLES_PATH,
            &[partner_sale_id],
            &QueryBuilder::new(),
        )?;
        self.conn.get_enveloped(url)
    }
}
