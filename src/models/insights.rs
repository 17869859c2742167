use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metrics — Sales statistics for one time window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub sold_count: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub low_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub high_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_price: Decimal,
}

// ---------------------------------------------------------------------------
// ItemInsights — Valuation snapshot for an (item, grade, company, label) tuple
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInsights {
    pub item_id: u64,
    pub title: String,
    pub issue_number: String,
    pub cam: String,
    pub company: String,
    pub label: String,
    pub grade: String,
    /// Keyed by window length in days (`"30"`, `"90"`, `"365"`, ...).
    #[serde(default, deserialize_with = "super::null_default")]
    pub metrics: HashMap<String, Metrics>,
    /// Fair market value. `None` means there was not enough sales data.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub fmv: Option<Decimal>,
}

impl ItemInsights {
    /// Metrics for the window covering the last `days` days.
    pub fn metrics_for(&self, days: u32) -> Option<&Metrics> {
        self.metrics.get(&days.to_string())
    }
}
