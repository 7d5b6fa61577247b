//! The API client, its builder and configuration.
//!
//! - `client` - [`ApiClient`], request sending and page fetching
//! - `builder` - [`ApiClientBuilder`] for configuring a client
//! - `config` - [`ClientConfig`] and its defaults
//!
//! # Examples
//!
//! ```rust
//! use xws_client::client::ApiClientBuilder;
//!
//! # fn example() -> Result<(), xws_client::Error> {
//! let client = ApiClientBuilder::try_from("https://api.example.com/v1/")?
//!     .page_size(25)
//!     .build()?;
//! assert_eq!(client.url("users/me")?.as_str(), "https://api.example.com/v1/users/me");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod config;

pub use builder::ApiClientBuilder;
pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_PAGE_SIZE};
