//! Builder pattern implementation for creating [`ApiClient`] instances.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use reqwest::header::{HeaderValue, ACCEPT};
//! use xws_client::ApiClientBuilder;
//!
//! # fn example() -> Result<(), xws_client::Error> {
//! let client = ApiClientBuilder::try_from("https://api.example.com/v1/")?
//!     .retries(5)
//!     .page_size(50)
//!     .timeout(Duration::from_secs(30))
//!     .header(ACCEPT, HeaderValue::from_static("application/json"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{client::ApiClient, config::ClientConfig};
use crate::{Error, Result};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::{Proxy, Url};
use std::time::Duration;

/// A builder used to create an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    config: ClientConfig,
}

impl ApiClientBuilder {
    /// Creates a builder with the default options for `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            config: ClientConfig::new(base_url),
        }
    }

    /// Set the number of retries per request.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the proxy every request goes through.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the number of elements requested per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.config.page_size = page_size.max(1);
        self
    }

    /// Set the timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// Calling `.headers()` several times merges all maps into one.
    /// See also [`header()`](ApiClientBuilder::header).
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`ApiClient`] with the specified options.
    pub fn build(self) -> Result<ApiClient> {
        ApiClient::new(self.config)
    }
}

impl TryFrom<&str> for ApiClientBuilder {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let url = Url::parse(value).map_err(|e| {
            Error::InvalidUrl(format!("the url \"{}\" cannot be parsed: {}", value, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!(
                "the url \"{}\" cannot be used as a base url",
                value
            )));
        }
        Ok(Self::new(url))
    }
}
