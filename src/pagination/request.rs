//! Offset/limit parameters of a page request.

use crate::range::ContentRange;

use reqwest::Url;
use tracing::warn;

/// Query parameter carrying the offset of the requested page.
pub const OFFSET_PARAM: &str = "offset";
/// Query parameter carrying the size of the requested page.
pub const LIMIT_PARAM: &str = "limit";

/// The slice of a collection asked for by a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    offset: u32,
    limit: u32,
}

impl PageRequest {
    /// Creates a request for `limit` elements starting at `offset`.
    ///
    /// A zero limit is raised to one.
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset,
            limit: limit.max(1),
        }
    }

    /// Request for the first page.
    pub fn first(limit: u32) -> Self {
        Self::new(0, limit)
    }

    /// Position of the first requested element.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Maximum number of requested elements.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns `url` with its `offset` and `limit` query parameters set to
    /// this request, keeping every other query parameter in place.
    pub fn apply_to(&self, url: &Url) -> Url {
        let kept = form_urlencoded::parse(url.query().unwrap_or_default().as_bytes())
            .filter(|(key, _)| key != OFFSET_PARAM && key != LIMIT_PARAM);

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(kept)
            .append_pair(OFFSET_PARAM, &self.offset.to_string())
            .append_pair(LIMIT_PARAM, &self.limit.to_string())
            .finish();

        let mut url = url.clone();
        url.set_query(Some(&query));
        url
    }

    /// Computes the request following the page described by `range`.
    ///
    /// With a known total the walk goes on while `last + 1 < total`. With an
    /// unknown total it goes on as long as the server fills whole pages.
    /// Returns `None` when the collection is exhausted or when the range does
    /// not move past this request's offset.
    pub fn next_after(&self, range: &ContentRange) -> Option<PageRequest> {
        let more = range
            .has_more()
            .unwrap_or_else(|| range.count() >= self.limit);
        if !more {
            return None;
        }

        let next = range.next_offset()?;
        if next <= self.offset {
            warn!(
                "Pagination stalled: requested offset {} but server answered \"{}\"",
                self.offset,
                range.header_value()
            );
            return None;
        }

        Some(Self::new(next, self.limit))
    }
}
