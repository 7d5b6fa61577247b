//! HTTP client setup and middleware configuration.
//!
//! Every request the API client sends goes through a reqwest client wrapped
//! in two middlewares:
//!
//! - **Tracing**: a span per request, see the `tracing` crate to consume them.
//! - **Retry**: exponential backoff for transient failures.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use xws_client::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, ACCEPT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(ACCEPT, "application/json".parse()?);
//!
//! let config = HttpClientConfig {
//!     retries: 5,
//!     proxy: None,
//!     headers: Some(headers),
//!     timeout: Some(Duration::from_secs(30)),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Number of retries for failed requests.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
    /// Optional timeout applied to every request.
    ///
    /// A paginated walk awaits its pages one after the other, so a single
    /// hung response stalls the whole walk unless this is set.
    pub timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            proxy: None,
            headers: None,
            timeout: None,
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// # Example
///
/// ```rust
/// use xws_client::http::client::{create_http_client, HttpClientConfig};
///
/// let config = HttpClientConfig::default();
/// let client = create_http_client(config).unwrap();
/// ```
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);

    let mut inner_client_builder = reqwest::Client::builder();

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    if let Some(timeout) = config.timeout {
        inner_client_builder = inner_client_builder.timeout(timeout);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        // Retry failed requests.
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

    Ok(client)
}
