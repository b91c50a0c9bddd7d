//! Blocking HTTP client for the Condenser URL shortening service.
//!
//! # Example
//!
//! ```no_run
//! use pare_client::{ApiResponse, PareClient, ShortenRequest};
//!
//! # fn example() -> pare_client::Result<()> {
//! let client = PareClient::builder()
//!     .server("https://s.example")
//!     .api_key("secret")
//!     .build()?;
//!
//! let request = ShortenRequest::new("http://a.com").with_shortcode("abc");
//! match client.links().shorten(&request)? {
//!     ApiResponse::Success(response) => println!("{}", response.short_url),
//!     ApiResponse::Status(409) => println!("conflict"),
//!     ApiResponse::Status(code) => println!("unexpected status {}", code),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Only a 200 response body is ever read. Any other status is handed back as
//! [`ApiResponse::Status`] so callers can apply their own policy.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::{DELETE_ENDPOINT, LinksApi, META_ENDPOINT, SHORTEN_ENDPOINT};
pub use client::{API_KEY_HEADER, ClientBuilder, PareClient};
pub use error::{Error, Result};
pub use types::*;
