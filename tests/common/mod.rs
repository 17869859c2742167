//! Shared fixtures for the GoCollect SDK integration tests.
//!
//! The SDK is blocking, while `wiremock` runs on tokio. Tests start a
//! `MockServer` on the runtime and drive the client through [`blocking`],
//! which builds, uses and drops the client on tokio's blocking pool.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use gocollect_sdk::{GoCollectClient, SaleFormat, SoldExample, StagedSale};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

pub const TOKEN: &str = "test-token";

/// Run a blocking closure off the async runtime and return its output.
pub async fn blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

/// Build a client pointed at the given mock server URI.
pub fn client_for(uri: &str) -> GoCollectClient {
    GoCollectClient::builder(TOKEN).base_url(uri).build().unwrap()
}

/// Return the single request received by `server`.
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

/// Query-string keys of a received request, in order.
pub fn query_keys(request: &Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect()
}

// ---------------------------------------------------------------------------
// Sample records
// ---------------------------------------------------------------------------

pub fn sample_sold_example() -> SoldExample {
    SoldExample {
        partner_sale_id: "sale-1001".to_string(),
        cam: "Comics".to_string(),
        title: "Incredible Hulk #181 CGC 9.8".to_string(),
        image_urls: vec![
            "https://img.example.com/hulk-181-front.jpg".to_string(),
            "https://img.example.com/hulk-181-back.jpg".to_string(),
        ],
        gocollect_item_id: Some(4242),
        certification_company: "cgc".to_string(),
        certification_key: Some("1234567001".to_string()),
        listed_price: None,
        listed_at: Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap(),
        sold_price: dec!(1250.5),
        sold_at: Utc.with_ymd_and_hms(2024, 3, 8, 2, 15, 0).unwrap(),
        url: "https://auctions.example.com/lot/1001".to_string(),
        format: SaleFormat::Auction,
        auction_name: Some("Spring Comics Auction".to_string()),
        bid_count: Some(37),
    }
}

pub fn sample_staged_sale() -> StagedSale {
    StagedSale {
        partner_sale_id: "listing-77".to_string(),
        cam: "Comics".to_string(),
        title: "Amazing Spider-Man #300 CGC 9.6".to_string(),
        is_active: true,
        image_urls: vec!["https://img.example.com/asm-300.jpg".to_string()],
        gocollect_item_id: None,
        is_graded: true,
        certification_company: "cgc".to_string(),
        certification_key: None,
        listed_price: Some(dec!(899.5)),
        price: Some(dec!(899.5)),
        sold_at: Utc.with_ymd_and_hms(2024, 4, 2, 12, 0, 0).unwrap(),
        url: "https://shop.example.com/listing/77".to_string(),
        format: SaleFormat::FixedPrice,
        auction_name: None,
        ends_at: None,
    }
}

pub fn sold_example_json() -> Value {
    json!({
        "partner_sale_id": "sale-1001",
        "cam": "Comics",
        "title": "Incredible Hulk #181 CGC 9.8",
        "image_urls": [
            "https://img.example.com/hulk-181-front.jpg",
            "https://img.example.com/hulk-181-back.jpg"
        ],
        "gocollect_item_id": 4242,
        "certification_company": "cgc",
        "certification_key": "1234567001",
        "listed_price": null,
        "listed_at": "2024-03-01T18:30:00Z",
        "sold_price": 1250.5,
        "sold_at": "2024-03-08T02:15:00Z",
        "url": "https://auctions.example.com/lot/1001",
        "format": "auction",
        "auction_name": "Spring Comics Auction",
        "bid_count": 37
    })
}

pub fn staged_sale_json() -> Value {
    json!({
        "partner_sale_id": "listing-77",
        "cam": "Comics",
        "title": "Amazing Spider-Man #300 CGC 9.6",
        "is_active": true,
        "image_urls": ["https://img.example.com/asm-300.jpg"],
        "gocollect_item_id": null,
        "is_graded": true,
        "certification_company": "cgc",
        "certification_key": null,
        "listed_price": 899.5,
        "price": 899.5,
        "sold_at": "2024-04-02T12:00:00Z",
        "url": "https://shop.example.com/listing/77",
        "format": "fixed_price",
        "auction_name": null,
        "ends_at": null
    })
}

pub fn insights_json() -> Value {
    json!({
        "item_id": 4242,
        "title": "Incredible Hulk",
        "issue_number": "181",
        "cam": "Comics",
        "company": "cgc",
        "label": "universal",
        "grade": "9.8",
        "metrics": {
            "30": {"sold_count": 3, "low_price": 1100.0, "high_price": 1400.0, "average_price": 1250.5},
            "90": {"sold_count": 11, "low_price": 950, "high_price": 1400.0, "average_price": 1175.25},
            "365": {"sold_count": 40, "low_price": 800.0, "high_price": 1600.0, "average_price": 1099.75}
        },
        "fmv": 1225.5
    })
}
