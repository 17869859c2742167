use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SearchItem — Catalog entry returned by item search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub item_id: u64,
    pub uuid: String,
    pub slug: String,
    pub name: String,
    /// Catalog entry this item is a variant of, if any.
    pub variant_of_item_id: Option<u64>,
    pub variant_description: Option<String>,
}

impl SearchItem {
    pub fn is_variant(&self) -> bool {
        self.variant_of_item_id.is_some()
    }
}
