//! Parsing of `Content-Range` header values.
//!
//! The accepted grammar is
//!
//! ```text
//! [Content-Range:] items <offset>-<last>/<total|*>
//! ```
//!
//! where `<offset>`, `<last>` and `<total>` are plain decimal numbers. The
//! header name prefix is optional so that the [`Display`](std::fmt::Display)
//! output of a [`ContentRange`] parses back to the same value.
//!
//! Structurally valid but inconsistent values are rejected too: a last
//! index below the offset, and a known total that does not exceed the last
//! index (`items 0-0/0`).
//!
//! # Examples
//!
//! ```rust
//! use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE};
//! use xws_client::ContentRange;
//!
//! # fn main() -> Result<(), xws_client::Error> {
//! let mut headers = HeaderMap::new();
//! headers.insert(CONTENT_RANGE, HeaderValue::from_static("items 50-74/*"));
//!
//! let range = ContentRange::from_headers(&headers)?.expect("header is present");
//! assert_eq!(range.total(), None);
//! assert_eq!(range.header_value(), "items 50-74/*");
//! # Ok(())
//! # }
//! ```

use super::ContentRange;
use crate::error::{ContentRangeError, Error, Result};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE};
use std::str::FromStr;

const HEADER_NAME: &str = "content-range:";
const UNIT: &str = "items";

impl ContentRange {
    /// Reads the `Content-Range` header out of a response header map.
    ///
    /// Returns `Ok(None)` when the header is absent and an error when it is
    /// present but malformed.
    pub fn from_headers(headers: &HeaderMap) -> Result<Option<Self>> {
        headers.get(CONTENT_RANGE).map(Self::try_from).transpose()
    }
}

impl FromStr for ContentRange {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        parse(value).map_err(|source| Error::MalformedContentRange {
            value: value.to_string(),
            source,
        })
    }
}

impl TryFrom<&str> for ContentRange {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<&HeaderValue> for ContentRange {
    type Error = Error;

    fn try_from(value: &HeaderValue) -> Result<Self> {
        match value.to_str() {
            Ok(v) => v.parse(),
            Err(_) => Err(Error::MalformedContentRange {
                value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
                source: ContentRangeError::NotText,
            }),
        }
    }
}

fn parse(value: &str) -> std::result::Result<ContentRange, ContentRangeError> {
    let value = value.trim();
    let value = strip_prefix_ignore_case(value, HEADER_NAME)
        .map(str::trim_start)
        .unwrap_or(value);

    let rest = strip_prefix_ignore_case(value, UNIT).ok_or(ContentRangeError::MissingUnit)?;
    let rest_start = rest.trim_start_matches([' ', '\t']);
    // "items" must be followed by whitespace, "itemsfoo" is another unit.
    if rest_start.len() == rest.len() {
        return Err(ContentRangeError::MissingUnit);
    }

    let (span, total) = rest_start
        .split_once('/')
        .ok_or(ContentRangeError::MissingSlash)?;
    let (offset, last) = span.split_once('-').ok_or(ContentRangeError::MissingDash)?;

    let offset =
        number(offset).ok_or_else(|| ContentRangeError::InvalidOffset(offset.to_string()))?;
    let last = number(last).ok_or_else(|| ContentRangeError::InvalidLast(last.to_string()))?;
    let total = match total {
        "*" => None,
        t => Some(number(t).ok_or_else(|| ContentRangeError::InvalidTotal(t.to_string()))?),
    };

    if last < offset {
        return Err(ContentRangeError::Decreasing { offset, last });
    }
    if let Some(total) = total {
        if total <= last {
            return Err(ContentRangeError::TotalTooSmall { last, total });
        }
    }

    Ok(ContentRange::new(offset, last, total))
}

/// Parses a plain decimal number; `u32::from_str` alone would accept a `+`.
fn number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    match value.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&value[prefix.len()..]),
        _ => None,
    }
}
