//! xws-client is a small client for REST APIs paginating their collections
//! with the `Content-Range` header.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xws_client::{ApiClientBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let client = ApiClientBuilder::try_from("https://api.example.com/v1/")?
//!     .page_size(25)
//!     .build()?;
//!
//! let mut contacts = client.paginate("users/me/contacts");
//! while let Some(page) = contacts.next_page().await? {
//!     if let Some(range) = page.range() {
//!         println!("{}", range);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`range`] - The [`ContentRange`] value object and its header parser
//! - [`pagination`] - Page requests, fetched pages and the [`Paginator`]
//! - [`client`] - The [`ApiClient`] and [`ApiClientBuilder`]
//! - [`http`] - HTTP client creation with retry and tracing middleware
//! - [`error`] - Centralized error handling with the [`Error`] enum

pub mod client;
pub mod error;
pub mod http;
pub mod pagination;
pub mod range;

pub use client::{ApiClient, ApiClientBuilder, ClientConfig};
pub use error::{ContentRangeError, Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use pagination::{Page, PageRequest, Paginator};
pub use range::{ContentRange, UNKNOWN_TOTAL};
