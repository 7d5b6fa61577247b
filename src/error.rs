//! Error handling for the xws-client library.
//!
//! Every fallible operation of the crate returns [`Error`]. Malformed
//! `Content-Range` headers get their own variant carrying a
//! [`ContentRangeError`] that names what exactly was wrong with the value.

use reqwest::{StatusCode, Url};
use thiserror::Error;

/// Errors that can happen when using xws-client.
#[derive(Error, Debug)]
pub enum Error {
    /// A `Content-Range` header did not match
    /// `items <offset>-<last>/<total|*>`.
    ///
    /// No partially filled range is ever produced; the raw header value is
    /// kept for diagnostics.
    #[error("Malformed Content-Range header \"{value}\": {source}")]
    MalformedContentRange {
        value: String,
        #[source]
        source: ContentRangeError,
    },

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status code.
    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus { url: Url, status: StatusCode },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the middleware stack (retries, tracing) wrapping Reqwest.
    #[error("Middleware Error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

/// The ways a `Content-Range` header value can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentRangeError {
    /// The header value contains non visible-ASCII bytes.
    #[error("value is not valid header text")]
    NotText,

    /// The value does not start with the `items` unit.
    #[error("missing \"items\" unit")]
    MissingUnit,

    /// No `-` between offset and last index.
    #[error("missing '-' between offset and last index")]
    MissingDash,

    /// No `/` before the total.
    #[error("missing '/' before the total")]
    MissingSlash,

    #[error("invalid offset {0:?}")]
    InvalidOffset(String),

    #[error("invalid last index {0:?}")]
    InvalidLast(String),

    /// The total is neither a number nor `*`.
    #[error("invalid total {0:?}")]
    InvalidTotal(String),

    /// The last index is smaller than the offset.
    #[error("last index {last} precedes offset {offset}")]
    Decreasing { offset: u32, last: u32 },

    /// A known total does not cover the last index.
    #[error("total {total} does not cover last index {last}")]
    TotalTooSmall { last: u32, total: u32 },
}

/// Result type alias for operations that can fail with an xws-client error.
pub type Result<T> = std::result::Result<T, Error>;
