//! Integration tests for the bid endpoint.

use std::sync::Arc;

use bid_server::bidding::{Bid, BidError, BidService, PlacementId};
use bid_server::config::ServerConfig;
use bid_server::http::handlers::{AddRequest, AddResponse};
use uuid::Uuid;

mod common;

struct FailingService;

impl BidService for FailingService {
    fn bid(&self, _placement: PlacementId) -> Result<Bid, BidError> {
        Err(BidError::Internal("injected failure".to_string()))
    }
}

#[tokio::test]
async fn get_add_returns_a_valid_bid() {
    let (addr, shutdown) = common::spawn_server(ServerConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/add", addr))
        .send()
        .await
        .expect("server reachable");
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = res.json().await.expect("valid JSON body");
    let add_id = body["addID"].as_str().expect("addID is a string");
    assert!(Uuid::parse_str(add_id).is_ok(), "addID {:?} is not a UUID", add_id);

    let price = body["bidPrice"].as_f64().expect("bidPrice is a float");
    assert!(
        (69.69..70.69).contains(&price),
        "price {} outside [69.69, 70.69)",
        price
    );

    shutdown.trigger();
}

#[tokio::test]
async fn successive_bids_have_distinct_ids() {
    let (addr, shutdown) = common::spawn_server(ServerConfig::default()).await;
    let client = common::client();

    let first: AddResponse = client
        .get(format!("http://{}/add", addr))
        .send()
        .await
        .expect("server reachable")
        .json()
        .await
        .expect("valid JSON body");
    let second: AddResponse = client
        .get(format!("http://{}/add", addr))
        .send()
        .await
        .expect("server reachable")
        .json()
        .await
        .expect("valid JSON body");

    assert_ne!(first.add_id, second.add_id);

    shutdown.trigger();
}

#[tokio::test]
async fn request_body_is_ignored() {
    let (addr, shutdown) = common::spawn_server(ServerConfig::default()).await;
    let client = common::client();
    let url = format!("http://{}/add", addr);

    // Well-formed body.
    let res = client
        .post(&url)
        .json(&AddRequest {
            add_placement_id: Uuid::new_v4(),
        })
        .send()
        .await
        .expect("server reachable");
    assert_eq!(res.status(), 200);

    // Malformed JSON must not crash the handler.
    let res = client
        .post(&url)
        .header("content-type", "application/json")
        .body("{not json at all")
        .send()
        .await
        .expect("server reachable");
    assert_eq!(res.status(), 200);

    // No body at all.
    let res = client.post(&url).send().await.expect("server reachable");
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

// The handler generates a fresh placement id instead of reading the
// caller-supplied one; the submitted addPlacementID has no effect on the
// response.
#[tokio::test]
async fn caller_supplied_placement_id_is_not_echoed() {
    let (addr, shutdown) = common::spawn_server(ServerConfig::default()).await;
    let client = common::client();

    let placement = Uuid::new_v4();
    let body: AddResponse = client
        .post(format!("http://{}/add", addr))
        .json(&AddRequest {
            add_placement_id: placement,
        })
        .send()
        .await
        .expect("server reachable")
        .json()
        .await
        .expect("valid JSON body");

    assert_ne!(body.add_id, placement);

    shutdown.trigger();
}

#[tokio::test]
async fn failing_service_yields_single_empty_no_content_response() {
    let (addr, shutdown) =
        common::spawn_server_with(ServerConfig::default(), Arc::new(FailingService)).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/add", addr))
        .send()
        .await
        .expect("server reachable");
    assert_eq!(res.status(), 204);

    let body = res.text().await.expect("body readable");
    assert!(body.is_empty(), "204 response must carry no body");

    shutdown.trigger();
}

#[tokio::test]
async fn configured_base_price_moves_the_bid_band() {
    let mut config = ServerConfig::default();
    config.bidding.base_price = 10.0;

    let (addr, shutdown) = common::spawn_server(config).await;
    let client = common::client();

    let body: AddResponse = client
        .get(format!("http://{}/add", addr))
        .send()
        .await
        .expect("server reachable")
        .json()
        .await
        .expect("valid JSON body");
    assert!(
        (10.0..11.0).contains(&body.bid_price),
        "price {} outside [10, 11)",
        body.bid_price
    );

    shutdown.trigger();
}

#[tokio::test]
async fn health_probe_responds_ok() {
    let (addr, shutdown) = common::spawn_server(ServerConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("server reachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.expect("body readable"), "OK");

    shutdown.trigger();
}
