pub const DEFAULT_BASE_URL: &str = "https://gocollect.com";

pub const SEARCH_ITEMS_PATH: &str = "/api/collectibles/v1/item/search";
pub const ITEM_INSIGHTS_PATH: &str = "/api/insights/v1/item";
pub const CGC_ITEM_INSIGHTS_PATH: &str = "/api/insights/v1/item/cgc-id";
pub const SOLD_EXAMPLES_PATH: &str = "/api/resources/v1/sold-examples";
pub const STAGED_SALES_PATH: &str = "/api/resources/v1/staged-sales";

pub fn default_user_agent() -> String {
    format!("gocollect-sdk/{}", env!("CARGO_PKG_VERSION"))
}
