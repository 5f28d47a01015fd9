use std::time::Duration;
use tikblock_client::{RouterOsClient, SyncError, Transport, TransportConfig};
use tikblock_core::{BlacklistEntry, Credential};
use wiremock::matchers::{basic_auth, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RouterOsClient {
    RouterOsClient::builder(
        "192.168.88.1".parse().unwrap(),
        Credential::new("admin", "s3cret").unwrap(),
    )
    .base_url(server.uri())
    .build()
    .unwrap()
}

#[tokio::test]
async fn resource_sends_basic_auth_and_parses_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/system/resource"))
        .and(basic_auth("admin", "s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "board-name": "hAP ax2",
            "version": "7.15 (stable)",
            "uptime": "3d01:02:03"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = client_for(&server).system().resource().await.unwrap();
    assert_eq!(resource.board_name.as_deref(), Some("hAP ax2"));
    assert_eq!(resource.uptime.as_deref(), Some("3d01:02:03"));
}

#[tokio::test]
async fn resource_401_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/system/resource"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": 401,
            "message": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).system().resource().await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn resource_non_200_success_is_still_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/system/resource"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client_for(&server).system().resource().await.unwrap_err();
    assert_eq!(err.status_code(), Some(204));
}

#[tokio::test]
async fn resource_with_unexpected_body_still_verifies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/system/resource"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let resource = client_for(&server).system().resource().await.unwrap();
    assert!(resource.board_name.is_none());
}

#[tokio::test]
async fn put_sends_routeros_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/rest/ip/firewall/address-list"))
        .and(basic_auth("admin", "s3cret"))
        .and(header("content-type", "application/json; charset=UTF-8"))
        .and(body_json(serde_json::json!({
            "address": "1.2.3.4",
            "disabled": "false",
            "dynamic": "false",
            "list": "TALOS_BLACKLIST"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("x-routeros", "7")
                .set_body_json(serde_json::json!({".id": "*1A", "address": "1.2.3.4"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let entry = BlacklistEntry::new("1.2.3.4".parse().unwrap());
    let receipt = client_for(&server).address_list().put(&entry).await.unwrap();

    assert_eq!(receipt.status, 201);
    assert!(receipt.body.contains("*1A"));
    assert!(receipt
        .headers
        .iter()
        .any(|(name, value)| name == "x-routeros" && value == "7"));
}

#[tokio::test]
async fn put_duplicate_reports_device_detail() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/rest/ip/firewall/address-list"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": 400,
            "message": "Bad Request",
            "detail": "failure: already have such entry"
        })))
        .mount(&server)
        .await;

    let entry = BlacklistEntry::new("1.2.3.4".parse().unwrap());
    let err = client_for(&server).address_list().put(&entry).await.unwrap_err();

    match err {
        SyncError::Auth { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "failure: already have such entry");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let client = RouterOsClient::builder(
        "192.168.88.1".parse().unwrap(),
        Credential::new("admin", "s3cret").unwrap(),
    )
    .base_url("http://127.0.0.1:1")
    .build()
    .unwrap();

    let err = client.system().resource().await.unwrap_err();
    assert!(matches!(err, SyncError::Network(_)), "{err}");
}

#[tokio::test]
async fn slow_device_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/system/resource"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = TransportConfig::default().timeout(Some(Duration::from_millis(100)));
    let transport = Transport::new(config).unwrap();
    let client = RouterOsClient::builder(
        "192.168.88.1".parse().unwrap(),
        Credential::new("admin", "s3cret").unwrap(),
    )
    .base_url(server.uri())
    .transport(transport)
    .build()
    .unwrap();

    let err = client.system().resource().await.unwrap_err();
    assert!(matches!(err, SyncError::Timeout), "{err}");
}
