#![allow(dead_code)]

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE, USER_AGENT};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use xws_client::{ApiClient, ApiClientBuilder, ContentRange, HttpClientConfig};

// Common test constants
pub const TEST_BASE_URL: &str = "https://api.example.com/v1/";
pub const TEST_HTTPBIN_URL: &str = "https://httpbin.org/";
pub const TEST_USER_AGENT: &str = "xws-client-test-agent";

/// Installs a tracing subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// === Content Range Helpers ===

/// Parses a header value the test knows to be valid.
pub fn content_range(value: &str) -> ContentRange {
    value
        .parse()
        .unwrap_or_else(|e| panic!("{value:?} should parse: {e}"))
}

/// Builds a valid range through the wire format.
pub fn known_range(offset: u32, last: u32, total: u32) -> ContentRange {
    content_range(&format!("items {}-{}/{}", offset, last, total))
}

/// Builds a valid range with an unknown total through the wire format.
pub fn unknown_range(offset: u32, last: u32) -> ContentRange {
    content_range(&format!("items {}-{}/*", offset, last))
}

/// Creates a header map carrying the given Content-Range value.
pub fn content_range_headers(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_RANGE, HeaderValue::from_static(value));
    headers
}

/// Header values that must be rejected.
pub fn malformed_content_ranges() -> Vec<&'static str> {
    vec![
        "items abc-24/100",
        "0-24/100",
        "items 0-24",
        "items 24/100",
        "items 0-24/abc",
        "items 24-0/100",
        "items 0-24/10",
        "bytes 0-1023/2048",
        "",
    ]
}

// === HTTP Configuration Helpers ===

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates a test HTTP client configuration with custom retries
pub fn create_test_http_config_with_retries(retries: u32) -> HttpClientConfig {
    HttpClientConfig {
        retries,
        headers: Some(create_test_headers()),
        ..HttpClientConfig::default()
    }
}

// === Client Helpers ===

/// Creates a client against the example base URL
pub fn create_test_client() -> ApiClient {
    ApiClientBuilder::try_from(TEST_BASE_URL)
        .expect("Invalid base url")
        .headers(create_test_headers())
        .build()
        .expect("Failed to build client")
}

/// Creates a client against httpbin with few retries
pub fn create_httpbin_client(page_size: u32) -> ApiClient {
    ApiClientBuilder::try_from(TEST_HTTPBIN_URL)
        .expect("Invalid base url")
        .retries(1)
        .page_size(page_size)
        .headers(create_test_headers())
        .build()
        .expect("Failed to build client")
}

/// Creates a client against a local server, without retries so that every
/// canned response is consumed by exactly one request
pub fn create_local_client(base_url: &str, page_size: u32) -> ApiClient {
    ApiClientBuilder::try_from(base_url)
        .expect("Invalid base url")
        .retries(0)
        .page_size(page_size)
        .build()
        .expect("Failed to build client")
}

// === Local Server Helpers ===

/// One response served by [`spawn_canned_server`].
#[derive(Debug, Clone, Copy)]
pub struct CannedResponse {
    pub status: u16,
    pub content_range: Option<&'static str>,
}

/// A 200 response carrying the given Content-Range value
pub fn ok_page(content_range: &'static str) -> CannedResponse {
    CannedResponse {
        status: 200,
        content_range: Some(content_range),
    }
}

/// A response without Content-Range
pub fn status_only(status: u16) -> CannedResponse {
    CannedResponse {
        status,
        content_range: None,
    }
}

/// Serves `responses` in order, one per connection, on a local port.
///
/// Returns the base URL of the server and the request lines it received.
pub async fn spawn_canned_server(
    responses: Vec<CannedResponse>,
) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind local listener");
    let addr = listener.local_addr().expect("Failed to get local address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    tokio::spawn(async move {
        for canned in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        head.extend_from_slice(&chunk[..n]);
                        if head.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }
            if let Some(line) = String::from_utf8_lossy(&head).lines().next() {
                seen.lock().unwrap().push(line.to_string());
            }

            let body = "[]";
            let mut response = format!(
                "HTTP/1.1 {} Canned\r\nContent-Length: {}\r\nConnection: close\r\n",
                canned.status,
                body.len()
            );
            if let Some(range) = canned.content_range {
                response.push_str(&format!("Content-Range: {}\r\n", range));
            }
            response.push_str("\r\n");
            response.push_str(body);

            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}/v1/", addr), requests)
}

/// Request lines received so far
pub fn received(requests: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    requests.lock().unwrap().clone()
}
