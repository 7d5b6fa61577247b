//! Configuration of the API client.

use reqwest::{header::HeaderMap, Proxy, Url};
use std::time::Duration;

/// Number of elements requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Configuration structure for the API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL every request path is resolved against.
    pub base_url: Url,
    /// Number of retries per request.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Custom HTTP headers sent with every request.
    pub headers: Option<HeaderMap>,
    /// Number of elements requested per page.
    pub page_size: u32,
    /// Optional timeout applied to every request.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration with default settings for `base_url`.
    ///
    /// A trailing slash is added to the base path if missing, otherwise
    /// resolving `users/me` against `https://host/v1` would drop the `v1`.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            base_url,
            retries: 3,
            proxy: None,
            headers: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
        }
    }
}
