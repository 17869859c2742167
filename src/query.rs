//! Query-string builder for API endpoints.
//!
//! Collects `key=value` pairs in insertion order. Optional filters are only
//! emitted when they carry a value, so the server never sees an empty
//! `company=` or a `limit=0`. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use gocollect_sdk::QueryBuilder;
//! let pairs = QueryBuilder::new()
//!     .push("query", "Hulk #181")
//!     .push_opt("cam", None)
//!     .push_positive("limit", Some(10))
//!     .build();
//! assert_eq!(pairs.len(), 2);
//! ```

/// Builds the query-string portion of a request.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter unconditionally, even when `value` is empty.
    pub fn push(&mut self, key: &str, value: &str) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only when `value` is `Some` and non-empty.
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key.to_string(), v.to_string()));
        }
        self
    }

    /// Add a numeric parameter only when it is present and greater than zero.
    pub fn push_positive(&mut self, key: &str, value: Option<u32>) -> &mut Self {
        if let Some(n) = value.filter(|n| *n > 0) {
            self.pairs.push((key.to_string(), n.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the collected pairs in insertion order.
    pub fn build(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }
}
