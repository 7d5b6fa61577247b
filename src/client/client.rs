//! Core API client implementation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use xws_client::pagination::PageRequest;
//! use xws_client::ApiClientBuilder;
//!
//! # async fn example() -> Result<(), xws_client::Error> {
//! let client = ApiClientBuilder::try_from("https://api.example.com/v1/")?.build()?;
//!
//! let page = client.fetch_page("users/me/contacts", PageRequest::new(50, 25)).await?;
//! if let Some(range) = page.range() {
//!     println!("{} of {:?}", range, range.total());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::ClientConfig;
use crate::http::{create_http_client, HttpClientConfig};
use crate::pagination::{Page, PageRequest, Paginator};
use crate::{Error, Result};

use reqwest::{header::HeaderMap, Response, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use tracing::debug;

/// Client for a paginated REST API.
///
/// Cloning is cheap, clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: ClientWithMiddleware,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish()
    }
}

impl ApiClient {
    /// Creates a new ApiClient with the given configuration.
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let http = create_http_client(HttpClientConfig {
            retries: config.retries,
            proxy: config.proxy.clone(),
            headers: config.headers.clone(),
            timeout: config.timeout,
        })?;

        Ok(Self { config, http })
    }

    /// Gets the base URL request paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Gets the number of retries per request.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the number of elements requested per page.
    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Resolves `path` against the base URL.
    ///
    /// A leading `/` is ignored so that the base path is always kept.
    pub fn url(&self, path: &str) -> Result<Url> {
        self.config
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                Error::InvalidUrl(format!(
                    "the path \"{}\" cannot be joined to \"{}\": {}",
                    path, self.config.base_url, e
                ))
            })
    }

    /// Sends a GET request to `path`.
    ///
    /// Non-success status codes are turned into [`Error::UnexpectedStatus`].
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path)?;
        self.send(url).await
    }

    /// Fetches a single page of the collection at `path`.
    pub async fn fetch_page(&self, path: &str, request: PageRequest) -> Result<Page> {
        let url = request.apply_to(&self.url(path)?);
        let response = self.send(url).await?;
        Page::from_response(request, response).await
    }

    /// Walks every page of the collection at `path`, starting at offset 0
    /// with the configured page size.
    pub fn paginate(&self, path: &str) -> Paginator<'_> {
        Paginator::new(self, path, PageRequest::first(self.config.page_size))
    }

    async fn send(&self, url: Url) -> Result<Response> {
        debug!("Fetching {}", &url);
        let res = self.http.get(url.clone()).send().await?;

        let status = res.status();
        if !status.is_success() {
            debug!("{} answered {}", &url, status);
            return Err(Error::UnexpectedStatus { url, status });
        }

        Ok(res)
    }
}
