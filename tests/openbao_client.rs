use bao_init::NodeAddress;
use bao_init::error::InitError;
use bao_init::openbao::{HttpNodeApi, OpenBaoClient};
use bao_init::probe::{NodeApi, NodeStatus, StatusProbe};
use bao_init::request::{InitParams, InitRequest};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn node_api() -> HttpNodeApi {
    HttpNodeApi::new(None).expect("client init should succeed")
}

#[tokio::test]
async fn is_initialized_reads_init_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "initialized": true })))
        .mount(&server)
        .await;

    let client = OpenBaoClient::new(&server.uri()).expect("client init should succeed");
    assert!(client.is_initialized().await.expect("init status"));
}

#[tokio::test]
async fn probe_targets_the_given_address() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "initialized": false })))
        .expect(1)
        .mount(&first)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "initialized": true })))
        .expect(1)
        .mount(&second)
        .await;

    let api = node_api();
    let first_status = api
        .probe(&NodeAddress::new(first.uri()))
        .await
        .expect("probe first");
    let second_status = api
        .probe(&NodeAddress::new(second.uri()))
        .await
        .expect("probe second");

    assert_eq!(first_status, NodeStatus::NotInitialized);
    assert_eq!(second_status, NodeStatus::Initialized);
}

#[tokio::test]
async fn probe_error_carries_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let address = NodeAddress::new(server.uri());
    let err = node_api().probe(&address).await.unwrap_err();
    assert_eq!(err.address, address);
}

#[tokio::test]
async fn initialize_sends_request_and_returns_keys_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/sys/init"))
        .and(body_json(json!({
            "secret_shares": 5,
            "secret_threshold": 3,
            "pgp_keys": ["keybase:a", "keybase:b", "keybase:c", "keybase:d", "keybase:e"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": ["e5", "d4", "c3", "b2", "a1"],
            "keys_base64": ["ZTU=", "ZDQ=", "YzM=", "YjI=", "YTE="],
            "root_token": "s.root"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = InitRequest::new(InitParams {
        pgp_keys: ["a", "b", "c", "d", "e"]
            .iter()
            .map(|user| format!("keybase:{user}"))
            .collect(),
        ..InitParams::default()
    })
    .expect("request");

    let result = node_api()
        .initialize(&NodeAddress::new(server.uri()), &request)
        .await
        .expect("initialize");

    assert_eq!(result.unseal_keys, vec!["e5", "d4", "c3", "b2", "a1"]);
    assert!(result.recovery_keys.is_empty());
    assert_eq!(result.root_token, "s.root");
}

#[tokio::test]
async fn initialize_maps_already_initialized() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": ["Vault is already initialized"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = InitRequest::new(InitParams::default()).expect("request");
    let err = node_api()
        .initialize(&NodeAddress::new(server.uri()), &request)
        .await
        .unwrap_err();

    assert!(matches!(err, InitError::AlreadyInitialized { .. }));
}

#[tokio::test]
async fn initialize_reports_other_failures_with_cause() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": ["invalid seal configuration"]
        })))
        .mount(&server)
        .await;

    let request = InitRequest::new(InitParams::default()).expect("request");
    let err = node_api()
        .initialize(&NodeAddress::new(server.uri()), &request)
        .await
        .unwrap_err();

    let InitError::Request { source, .. } = err else {
        panic!("expected request error");
    };
    assert!(source.to_string().contains("invalid seal configuration"));
}

#[tokio::test]
async fn initialize_rejects_missing_root_token() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/sys/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": ["k1", "k2", "k3", "k4", "k5"]
        })))
        .mount(&server)
        .await;

    let request = InitRequest::new(InitParams::default()).expect("request");
    let err = node_api()
        .initialize(&NodeAddress::new(server.uri()), &request)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InitError::MalformedResponse {
            reason: "missing root token",
            ..
        }
    ));
}
