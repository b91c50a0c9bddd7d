//! API endpoint implementations.

mod links;

pub use links::{DELETE_ENDPOINT, LinksApi, META_ENDPOINT, SHORTEN_ENDPOINT};
