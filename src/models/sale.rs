use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::GoCollectError;

// ---------------------------------------------------------------------------
// SaleFormat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleFormat {
    Auction,
    FixedPrice,
}

impl SaleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auction => "auction",
            Self::FixedPrice => "fixed_price",
        }
    }
}

impl fmt::Display for SaleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleFormat {
    type Err = GoCollectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auction" => Ok(Self::Auction),
            "fixed_price" => Ok(Self::FixedPrice),
            other => Err(GoCollectError::InvalidArgument(format!(
                "unknown sale format: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// SoldExample — A completed sale reported by a partner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoldExample {
    /// Partner-assigned identifier; unique per partner.
    pub partner_sale_id: String,
    pub cam: String,
    pub title: String,
    #[serde(default, deserialize_with = "super::null_default")]
    pub image_urls: Vec<String>,
    pub gocollect_item_id: Option<u64>,
    pub certification_company: String,
    pub certification_key: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub listed_price: Option<Decimal>,
    pub listed_at: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub sold_price: Decimal,
    pub sold_at: DateTime<Utc>,
    pub url: String,
    pub format: SaleFormat,
    pub auction_name: Option<String>,
    pub bid_count: Option<u32>,
}

impl SoldExample {
    pub fn is_auction(&self) -> bool {
        self.format == SaleFormat::Auction
    }
}

// ---------------------------------------------------------------------------
// StagedSale — An active or scheduled listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedSale {
    pub partner_sale_id: String,
    pub cam: String,
    pub title: String,
    pub is_active: bool,
    #[serde(default, deserialize_with = "super::null_default")]
    pub image_urls: Vec<String>,
    pub gocollect_item_id: Option<u64>,
    pub is_graded: bool,
    pub certification_company: String,
    pub certification_key: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub listed_price: Option<Decimal>,
    /// Current asking price or high bid.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub sold_at: DateTime<Utc>,
    pub url: String,
    pub format: SaleFormat,
    pub auction_name: Option<String>,
    /// End of the listing; `None` for listings without a set end.
    pub ends_at: Option<DateTime<Utc>>,
}

impl StagedSale {
    pub fn is_open_ended(&self) -> bool {
        self.ends_at.is_none()
    }
}
