//! Sequential walk over the pages of a collection.
//!
//! # Examples
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use xws_client::ApiClientBuilder;
//!
//! # async fn example() -> Result<(), xws_client::Error> {
//! let client = ApiClientBuilder::try_from("https://api.example.com/v1/")?
//!     .page_size(50)
//!     .build()?;
//!
//! // Page by page.
//! let mut contacts = client.paginate("users/me/contacts");
//! while let Some(page) = contacts.next_page().await? {
//!     println!("{:?}: {}", page.range(), page.body());
//! }
//!
//! // Or as a stream.
//! let pages: Vec<_> = client.paginate("users/me/contacts").into_stream().try_collect().await?;
//! # Ok(())
//! # }
//! ```

use super::page::Page;
use super::request::PageRequest;
use crate::client::ApiClient;
use crate::{Error, Result};

use futures::stream::{self, Stream};
use tracing::debug;

/// Walks the pages of one endpoint, one request at a time.
///
/// Every request is derived from the `Content-Range` of the previous
/// response. The walk ends after a page without a following page, or after
/// the first error.
#[derive(Debug)]
pub struct Paginator<'a> {
    client: &'a ApiClient,
    path: String,
    next: Option<PageRequest>,
    fetched: usize,
}

impl<'a> Paginator<'a> {
    pub(crate) fn new(client: &'a ApiClient, path: &str, first: PageRequest) -> Self {
        Self {
            client,
            path: path.to_string(),
            next: Some(first),
            fetched: 0,
        }
    }

    /// Gets the endpoint path being walked.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Gets the request the next call to [`next_page`](Self::next_page) sends.
    pub fn pending(&self) -> Option<PageRequest> {
        self.next
    }

    /// Gets the number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.fetched
    }

    /// Fetches the next page, `Ok(None)` once the collection is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Page>> {
        let Some(request) = self.next.take() else {
            return Ok(None);
        };

        let page = self.client.fetch_page(&self.path, request).await?;
        self.fetched += 1;
        self.next = page.next_request();

        match page.range() {
            Some(range) => debug!("{} page {}: {}", self.path, self.fetched, range),
            None => debug!("{} is not paginated", self.path),
        }

        Ok(Some(page))
    }

    /// Turns the walk into a stream of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page>> + 'a {
        stream::try_unfold(self, |mut paginator| async move {
            let page = paginator.next_page().await?;
            Ok::<_, Error>(page.map(|page| (page, paginator)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiClientBuilder;

    #[test]
    fn test_starts_at_first_page() {
        let client = ApiClientBuilder::try_from("https://api.example.com/v1/")
            .unwrap()
            .page_size(10)
            .build()
            .unwrap();
        let paginator = client.paginate("users/me/contacts");

        assert_eq!(paginator.path(), "users/me/contacts");
        assert_eq!(paginator.pending(), Some(PageRequest::first(10)));
        assert_eq!(paginator.pages_fetched(), 0);
    }
}
