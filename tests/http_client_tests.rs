use phishscan::client::{ClientConfig, HttpScanClient, ScanClient, ScanError};
use phishscan::models::{Confidence, Verdict};
use std::time::Duration;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> HttpScanClient {
    HttpScanClient::new(ClientConfig::default().with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_scan_url_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan_url"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "url": "http://paypa1-login.example/verify" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "PHISHING",
            "confidence": 0.81
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .scan_url("http://paypa1-login.example/verify")
        .await
        .unwrap();

    assert_eq!(response.verdict(), Verdict::Flagged("PHISHING".to_string()));
    assert_eq!(response.summary(), "PHISHING (Confidence: 0.81)");
}

#[tokio::test]
async fn test_scan_email_sends_text_verbatim() {
    let server = MockServer::start().await;
    let text = "  Dear user,\nyour account will be closed. Pay now.\n";

    Mock::given(method("POST"))
        .and(path("/scan_email"))
        .and(body_json(serde_json::json!({ "text": text })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "PHISHING",
            "confidence": "100% (Keyword Detected)"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).scan_email(text).await.unwrap();
    assert_eq!(
        response.confidence,
        Confidence::Text("100% (Keyword Detected)".to_string())
    );
}

#[tokio::test]
async fn test_non_json_body_is_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan_url"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Internal error</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).scan_url("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScanError::Schema(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_missing_confidence_is_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan_email"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": "SAFE" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).scan_email("hello").await.unwrap_err();
    assert_eq!(err.kind(), "schema");
}

#[tokio::test]
async fn test_server_error_status_is_reported_even_with_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan_url"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "result": "SAFE",
            "confidence": 1.0
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).scan_url("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScanError::Status(500)), "got {:?}", err);
}

#[tokio::test]
async fn test_refused_connection_is_unreachable() {
    // Bind an ephemeral port, then release it so nothing is listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uri = format!("http://127.0.0.1:{}", port);

    let client = HttpScanClient::new(ClientConfig::default().with_base_url(uri)).unwrap();
    let err = client.scan_url("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScanError::Unreachable(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_configured_timeout_surfaces_as_unreachable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan_url"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "result": "SAFE", "confidence": 0.5 }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(100));
    let client = HttpScanClient::new(config).unwrap();

    let err = client.scan_url("https://example.com").await.unwrap_err();
    assert_eq!(err.kind(), "unreachable");
}
