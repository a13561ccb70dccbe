use ipwho_client::{IpwhoClient, IpwhoError};
use wiremock::matchers::{header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> IpwhoClient {
    IpwhoClient::builder().base_url(server.uri()).build().unwrap()
}

#[tokio::test]
async fn lookup_hits_bare_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geolocate"))
        .and(header_regex("user-agent", "^ipwho/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"exit_ip":"203.0.113.5"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let record = client_for(&server).geolocate().lookup().await.unwrap();
    assert_eq!(record.exit_ip, "203.0.113.5");
}

#[tokio::test]
async fn lookup_ip_appends_address() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geolocate/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"country_name":"United States","country_code":"US","call_codes":["+1"],"asn":15169}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let record = client_for(&server).geolocate().lookup_ip("8.8.8.8").await.unwrap();
    assert_eq!(record.country_name, "United States");
    assert_eq!(record.country_code, "US");
    assert_eq!(record.call_codes, vec!["+1".to_string()]);
}

#[tokio::test]
async fn non_success_status_surfaces_raw_body() {
    let server = MockServer::start().await;
    let body = r#"{"message":"invalid IP address: 999.1.1.1"}"#;
    Mock::given(method("GET"))
        .and(path("/geolocate/999.1.1.1"))
        .respond_with(ResponseTemplate::new(400).set_body_string(body))
        .mount(&server)
        .await;

    let err = client_for(&server).geolocate().lookup_ip("999.1.1.1").await.unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert!(err.to_string().contains(body));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geolocate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"exit_ip\":"))
        .mount(&server)
        .await;

    let err = client_for(&server).geolocate().lookup().await.unwrap_err();
    assert!(matches!(err, IpwhoError::Decode(_)));
}

#[tokio::test]
async fn array_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geolocate"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"["1.2.3.4"]"#))
        .mount(&server)
        .await;

    let err = client_for(&server).geolocate().lookup().await.unwrap_err();
    assert!(matches!(err, IpwhoError::Decode(_)));
}

#[tokio::test]
async fn fetch_returns_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geolocate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let raw = client_for(&server).fetch(None).await.unwrap();
    assert_eq!(raw.status, 503);
    assert_eq!(raw.body, "maintenance");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Port 9 (discard) on loopback is expected to refuse connections.
    let client = IpwhoClient::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = client.geolocate().lookup().await.unwrap_err();
    assert!(matches!(err, IpwhoError::Transport(_)));
    // The OS-level cause is kept, not just reqwest's top-level message.
    assert!(err.to_string().to_lowercase().contains("refused"), "{err}");
}
