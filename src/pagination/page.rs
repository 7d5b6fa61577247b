//! A single page of a paginated response.

use super::request::PageRequest;
use crate::range::ContentRange;
use crate::Result;

use reqwest::{header::HeaderMap, Response, StatusCode};

/// Represents one fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Request that produced the page.
    request: PageRequest,
    /// HTTP status code.
    status: StatusCode,
    /// Parsed `Content-Range` header, if the server sent one.
    range: Option<ContentRange>,
    /// Response body.
    body: String,
}

impl Page {
    /// Builds a page from the parts of a response.
    ///
    /// Fails if the `Content-Range` header is present but malformed.
    pub fn from_parts(
        request: PageRequest,
        status: StatusCode,
        headers: &HeaderMap,
        body: String,
    ) -> Result<Self> {
        Ok(Self {
            request,
            status,
            range: ContentRange::from_headers(headers)?,
            body,
        })
    }

    /// Builds a page by consuming a response.
    pub async fn from_response(request: PageRequest, response: Response) -> Result<Self> {
        let status = response.status();
        let range = ContentRange::from_headers(response.headers())?;
        let body = response.text().await?;
        Ok(Self {
            request,
            status,
            range,
            body,
        })
    }

    /// Get the request that produced this page.
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Get the page's status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the page's content range.
    pub fn range(&self) -> Option<&ContentRange> {
        self.range.as_ref()
    }

    /// Get a reference to the page's body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the page and returns its body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// The request for the following page, `None` if this is the last one.
    ///
    /// A response without `Content-Range` is not paginated and has no
    /// following page.
    pub fn next_request(&self) -> Option<PageRequest> {
        self.range
            .as_ref()
            .and_then(|range| self.request.next_after(range))
    }
}
