//! Staged sale submission and lookup.

mod common;

use chrono::{TimeZone, Utc};
use gocollect_sdk::{GoCollectError, SaleFormat, StagedSale};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STAGED_PATH: &str = "/api/resources/v1/staged-sales";

#[tokio::test]
async fn create_staged_sale_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STAGED_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    common::blocking(move || {
        common::client_for(&uri)
            .staged_sales()
            .create_staged_sale(&common::sample_staged_sale())
    })
    .await
    .unwrap();

    let request = common::only_request(&server).await;
    let body: serde_json::Value = request.body_json().unwrap();
    assert_eq!(body, common::staged_sale_json());
}

#[tokio::test]
async fn create_staged_sale_auction_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STAGED_PATH))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let sale = StagedSale {
        format: SaleFormat::Auction,
        auction_name: Some("Weekly Comics Auction".to_string()),
        ends_at: Some(Utc.with_ymd_and_hms(2024, 4, 9, 3, 0, 0).unwrap()),
        listed_price: None,
        price: Some(dec!(410.25)),
        ..common::sample_staged_sale()
    };

    let uri = server.uri();
    let sent = sale.clone();
    common::blocking(move || {
        common::client_for(&uri)
            .staged_sales()
            .create_staged_sale(&sent)
    })
    .await
    .unwrap();

    let request = common::only_request(&server).await;
    let echoed: StagedSale = request.body_json().unwrap();
    assert_eq!(echoed, sale);
    assert!(!echoed.is_open_ended());

    let raw: serde_json::Value = request.body_json().unwrap();
    assert_eq!(raw["ends_at"], "2024-04-09T03:00:00Z");
    assert!(raw["listed_price"].is_null());
}

#[tokio::test]
async fn create_staged_sale_server_error_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STAGED_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = common::blocking(move || {
        common::client_for(&uri)
            .staged_sales()
            .create_staged_sale(&common::sample_staged_sale())
    })
    .await
    .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some(""));
}

#[tokio::test]
async fn get_staged_sale_unwraps_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{STAGED_PATH}/listing-77")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": common::staged_sale_json()})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let sale = common::blocking(move || {
        common::client_for(&uri)
            .staged_sales()
            .get_staged_sale("listing-77")
    })
    .await
    .unwrap();

    assert_eq!(sale.partner_sale_id, "listing-77");
    assert_eq!(sale, common::sample_staged_sale());
    assert!(sale.is_open_ended());
    assert!(sale.is_active);
    assert_eq!(sale.format, SaleFormat::FixedPrice);
}

#[tokio::test]
async fn get_staged_sale_missing_optional_keys_decode_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{STAGED_PATH}/listing-78")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {
            "partner_sale_id": "listing-78",
            "cam": "Comics",
            "title": "Giant-Size X-Men #1",
            "is_active": false,
            "is_graded": false,
            "certification_company": "raw",
            "sold_at": "2024-05-01T00:00:00+02:00",
            "url": "https://shop.example.com/listing/78",
            "format": "auction"
        }})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let sale = common::blocking(move || {
        common::client_for(&uri)
            .staged_sales()
            .get_staged_sale("listing-78")
    })
    .await
    .unwrap();

    assert!(sale.image_urls.is_empty());
    assert_eq!(sale.gocollect_item_id, None);
    assert_eq!(sale.certification_key, None);
    assert_eq!(sale.listed_price, None);
    assert_eq!(sale.price, None);
    assert_eq!(sale.ends_at, None);
    assert_eq!(sale.sold_at, Utc.with_ymd_and_hms(2024, 4, 30, 22, 0, 0).unwrap());
}

#[tokio::test]
async fn get_staged_sale_not_found_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{STAGED_PATH}/missing")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = common::blocking(move || {
        common::client_for(&uri)
            .staged_sales()
            .get_staged_sale("missing")
    })
    .await
    .unwrap_err();
    assert!(matches!(err, GoCollectError::Api { status: 404, .. }));
}
