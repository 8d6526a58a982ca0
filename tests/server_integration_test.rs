//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and verify behavior that can only
//! be tested with actual network connections.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use chroma_vision::models::AppConfig;
use chroma_vision::server::{build_router, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let state = create_app_state(AppConfig::default());
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

/// Send one raw HTTP/1.1 request and read the whole response.
async fn send_raw(port: u16, request: &str) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");

    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(5),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timeout waiting for response")
    .expect("Failed to read response");

    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server().await;

    let response = send_raw(
        port,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(response.ends_with("OK"));
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let port = start_test_server().await;

    let response = send_raw(
        port,
        "GET /api/color/FF0000 HTTP/1.1\r\nHost: localhost\r\nOrigin: http://picker.example\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(
        response
            .to_lowercase()
            .contains("access-control-allow-origin: *"),
        "Response should carry a permissive CORS header: {response}"
    );
}

#[tokio::test]
async fn test_concurrent_session_creation() {
    let port = start_test_server().await;

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            tokio::spawn(send_raw(
                port,
                "POST /api/sessions HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            ))
        })
        .collect();

    let mut ids = std::collections::HashSet::new();
    for task in tasks {
        let response = task.await.unwrap();
        assert!(response.starts_with("HTTP/1.1 201"), "got: {response}");

        let body = response.split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        ids.insert(json["id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 8, "Every session should get its own id");
}
