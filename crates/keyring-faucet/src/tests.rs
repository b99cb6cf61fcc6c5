//! Tests for the faucet client.

use std::time::Duration;

use keyring_wallet::{Address, Network};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::FaucetClient;
use crate::error::FaucetError;
use crate::types::{Balance, FaucetConfig};

const TESTNET_ADDRESS: &str = "mxQXvGavKwj7i2h9jUVpkrfP8HhaMuaHHK";
const MAINNET_ADDRESS: &str = "1HtadDVwWvHrvvDY1uXSvwT4GJ6sTCAgLH";
const TXID: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

fn test_config(server_url: &str) -> FaucetConfig {
    FaucetConfig {
        faucet_url: format!("{}/v1", server_url),
        explorer_url: format!("{}/v1/bsv/test", server_url),
        channel: "test-channel".to_string(),
        poll_attempts: 3,
        poll_interval: Duration::from_millis(10),
    }
}

#[tokio::test]
async fn test_request_coins_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/faucet/tbsv"))
        .and(body_json(serde_json::json!({
            "address": TESTNET_ADDRESS,
            "channel": "test-channel"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 0,
            "message": "success",
            "raw": "0100000001",
            "txid": TXID
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    let address = Address::from_string(TESTNET_ADDRESS).unwrap();
    let resp = client.request_coins(&address).await.unwrap();

    assert_eq!(resp.code, 0);
    assert_eq!(resp.message, "success");
    assert_eq!(resp.txid, TXID);
}

#[tokio::test]
async fn test_request_coins_rejects_mainnet_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    let address = Address::from_string(MAINNET_ADDRESS).unwrap();
    assert_eq!(address.network(), Network::Mainnet);

    let result = client.request_coins(&address).await;
    assert!(matches!(result, Err(FaucetError::MainnetAddress)));
}

#[tokio::test]
async fn test_request_coins_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/faucet/tbsv"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    let address = Address::from_string(TESTNET_ADDRESS).unwrap();

    match client.request_coins(&address).await {
        Err(FaucetError::ServerError {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 429);
            assert_eq!(message, "slow down");
        }
        other => panic!("expected ServerError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_address_balance_sums_parts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/address/{}/balance", TESTNET_ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "confirmed": 150000,
            "unconfirmed": -2500
        })))
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    let address = Address::from_string(TESTNET_ADDRESS).unwrap();
    let total = client.address_balance(&address).await.unwrap();
    assert_eq!(total, 147500);

    let balance = client.balance(&address).await.unwrap();
    assert_eq!(balance.confirmed, 150000);
    assert_eq!(balance.unconfirmed, -2500);
}

#[tokio::test]
async fn test_address_balance_bad_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/address/{}/balance", TESTNET_ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    let address = Address::from_string(TESTNET_ADDRESS).unwrap();
    let result = client.address_balance(&address).await;
    assert!(matches!(result, Err(FaucetError::SerializationError(_))));
}

#[tokio::test]
async fn test_address_balance_overflow_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/address/{}/balance", TESTNET_ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "confirmed": i64::MAX,
            "unconfirmed": 1
        })))
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    let address = Address::from_string(TESTNET_ADDRESS).unwrap();
    let result = client.address_balance(&address).await;
    assert!(matches!(result, Err(FaucetError::InvalidBalance)));

    // The split view is still readable.
    let balance = client.balance(&address).await.unwrap();
    assert_eq!(balance.confirmed, i64::MAX);
    assert_eq!(balance.total(), None);
}

#[test]
fn test_balance_total_bounds() {
    let balance = Balance {
        confirmed: i64::MIN,
        unconfirmed: -1,
    };
    assert_eq!(balance.total(), None);

    let balance = Balance {
        confirmed: i64::MAX,
        unconfirmed: -1,
    };
    assert_eq!(balance.total(), Some(i64::MAX - 1));
}

#[tokio::test]
async fn test_wait_for_transaction_found_after_404s() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/tx/hash/{}", TXID)))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/tx/hash/{}", TXID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "txid": TXID,
            "size": 225
        })))
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    assert!(client.wait_for_transaction(TXID).await);
}

#[tokio::test]
async fn test_wait_for_transaction_retries_after_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/tx/hash/{}", TXID)))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/tx/hash/{}", TXID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "txid": TXID
        })))
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    assert!(client.wait_for_transaction(TXID).await);
}

#[tokio::test]
async fn test_wait_for_transaction_gives_up() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/tx/hash/{}", TXID)))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    assert!(!client.wait_for_transaction(TXID).await);
}

#[tokio::test]
async fn test_wait_for_transaction_ignores_body_without_txid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/tx/hash/{}", TXID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(3)
        .mount(&server)
        .await;

    let client = FaucetClient::new(test_config(&server.uri()));
    assert!(!client.wait_for_transaction(TXID).await);
}

#[test]
fn test_default_config() {
    let config = FaucetConfig::default();
    assert_eq!(config.faucet_url, "https://witnessonchain.com/v1");
    assert_eq!(config.explorer_url, "https://api.whatsonchain.com/v1/bsv/test");
    assert_eq!(config.channel, "bsv-ai-wallet");
    assert_eq!(config.poll_attempts, 10);
    assert_eq!(config.poll_interval, Duration::from_secs(5));
}

#[test]
fn test_config_deserializes_seconds() {
    let config: FaucetConfig =
        serde_json::from_str(r#"{"poll_attempts": 2, "poll_interval": 1}"#).unwrap();
    assert_eq!(config.poll_attempts, 2);
    assert_eq!(config.poll_interval, Duration::from_secs(1));
    assert_eq!(config.channel, "bsv-ai-wallet");
}
