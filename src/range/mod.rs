//! The `Content-Range` value of a paginated response.
//!
//! XWS answers every paginated request with a `Content-Range` header telling
//! which slice of the collection the response holds:
//!
//! - `Content-Range: items [offset]-[last]/[total]` when the total is known.
//! - `Content-Range: items [offset]-[last]/*` when the total is unknown.
//!
//! A [`ContentRange`] can only be obtained by parsing such a header (see
//! [`parse`]), so every value in circulation satisfies `offset <= last` and,
//! when the total is known, `last < total`.
//!
//! # Examples
//!
//! ```rust
//! use xws_client::ContentRange;
//!
//! # fn main() -> Result<(), xws_client::Error> {
//! let range: ContentRange = "items 0-24/100".parse()?;
//! assert_eq!(range.offset(), 0);
//! assert_eq!(range.last(), 24);
//! assert_eq!(range.total(), Some(100));
//! assert_eq!(range.has_more(), Some(true));
//! assert_eq!(range.to_string(), "Content-Range: items 0-24/100");
//! # Ok(())
//! # }
//! ```

pub mod parse;

use std::fmt;

/// Wire-level stand-in for an unknown total, see [`ContentRange::total_or_unknown`].
pub const UNKNOWN_TOTAL: i64 = -1;

/// Content range data of a paginated response: current offset, last element
/// position and the total number of available elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentRange {
    offset: u32,
    last: u32,
    total: Option<u32>,
}

impl ContentRange {
    /// Creates a range without checking it. Only the parser hands ranges out.
    pub(crate) fn new(offset: u32, last: u32, total: Option<u32>) -> Self {
        Self {
            offset,
            last,
            total,
        }
    }

    /// Returns the content range offset.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the content range last element position.
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Returns the content total, `None` if the server did not report it.
    pub fn total(&self) -> Option<u32> {
        self.total
    }

    /// Returns the content total, or [`UNKNOWN_TOTAL`] if it is unknown.
    pub fn total_or_unknown(&self) -> i64 {
        self.total.map_or(UNKNOWN_TOTAL, i64::from)
    }

    /// Number of elements in this page.
    pub fn count(&self) -> u32 {
        self.last.saturating_sub(self.offset).saturating_add(1)
    }

    /// Position of the first element after this page.
    ///
    /// `None` if it does not fit a `u32`.
    pub fn next_offset(&self) -> Option<u32> {
        self.last.checked_add(1)
    }

    /// Whether elements remain after this page, `None` if the total is unknown.
    pub fn has_more(&self) -> Option<bool> {
        self.total
            .map(|total| u64::from(self.last) + 1 < u64::from(total))
    }

    /// Number of elements after this page, `None` if the total is unknown.
    pub fn remaining(&self) -> Option<u32> {
        self.total
            .map(|total| total.saturating_sub(self.last).saturating_sub(1))
    }

    /// The header value without the header name, e.g. `items 0-24/100`.
    pub fn header_value(&self) -> String {
        match self.total {
            Some(total) => format!("items {}-{}/{}", self.offset, self.last, total),
            None => format!("items {}-{}/*", self.offset, self.last),
        }
    }
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Content-Range: {}", self.header_value())
    }
}
