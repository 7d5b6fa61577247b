//! Offset/limit pagination driven by `Content-Range` responses.
//!
//! - `request` - [`PageRequest`], the `offset`/`limit` query parameters of one request
//! - `page` - [`Page`], one fetched page with its parsed content range
//! - `paginator` - [`Paginator`], the sequential walk over all pages
//!
//! # Examples
//!
//! ```rust
//! use xws_client::pagination::PageRequest;
//! use xws_client::ContentRange;
//!
//! # fn main() -> Result<(), xws_client::Error> {
//! let request = PageRequest::first(25);
//! let range: ContentRange = "items 0-24/100".parse()?;
//! assert_eq!(request.next_after(&range), Some(PageRequest::new(25, 25)));
//! # Ok(())
//! # }
//! ```

pub mod page;
pub mod paginator;
pub mod request;

pub use page::Page;
pub use paginator::Paginator;
pub use request::{PageRequest, LIMIT_PARAM, OFFSET_PARAM};
