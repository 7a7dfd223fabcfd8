//! Integration tests for the gateway status proxy.
//!
//! These run against real sockets on localhost: a stub HTTP server stands in
//! for the bridge process, so the failure-translation behavior is exercised
//! end to end without a running gateway.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use courier_gateway::{ProxyError, StatusProxy};

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
const QR_TIMEOUT: Duration = Duration::from_secs(15);

/// Spawn a one-shot HTTP server that answers every request with `body` and
/// the given content type. Returns the base URL to point the proxy at.
async fn spawn_stub_gateway(content_type: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                content_type,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });

    format!("http://{}", addr)
}

/// Bind a port, then release it, so connections to it are refused.
async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_status_forwards_json_payload() {
    let base = spawn_stub_gateway("application/json", r#"{"connected": true}"#).await;
    let proxy = StatusProxy::new(base, STATUS_TIMEOUT, QR_TIMEOUT);

    let payload = proxy.get_status().await.unwrap();
    assert_eq!(payload["connected"], true);
}

#[tokio::test]
async fn test_qr_forwards_json_payload() {
    let base = spawn_stub_gateway("application/json", r#"{"qr": "2@abcdef=="}"#).await;
    let proxy = StatusProxy::new(base, STATUS_TIMEOUT, QR_TIMEOUT);

    let payload = proxy.get_pairing_qr().await.unwrap();
    assert_eq!(payload["qr"], "2@abcdef==");
}

#[tokio::test]
async fn test_connection_failure_is_unreachable() {
    let base = refused_base_url().await;
    let proxy = StatusProxy::new(base, STATUS_TIMEOUT, QR_TIMEOUT);

    let err = proxy.get_status().await.unwrap_err();
    assert!(
        matches!(err, ProxyError::Unreachable(_)),
        "expected Unreachable, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_non_json_body_is_unexpected_response() {
    let base = spawn_stub_gateway("text/html", "<html>bridge says hi</html>").await;
    let proxy = StatusProxy::new(base, STATUS_TIMEOUT, QR_TIMEOUT);

    let err = proxy.get_status().await.unwrap_err();
    assert!(
        matches!(err, ProxyError::UnexpectedResponse(_)),
        "expected UnexpectedResponse, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_failure_kinds_are_distinguishable() {
    let refused = refused_base_url().await;
    let garbage = spawn_stub_gateway("text/plain", "not json at all").await;

    let down = StatusProxy::new(refused, STATUS_TIMEOUT, QR_TIMEOUT)
        .get_status()
        .await
        .unwrap_err();
    let confused = StatusProxy::new(garbage, STATUS_TIMEOUT, QR_TIMEOUT)
        .get_status()
        .await
        .unwrap_err();

    assert!(matches!(down, ProxyError::Unreachable(_)));
    assert!(matches!(confused, ProxyError::UnexpectedResponse(_)));
}
