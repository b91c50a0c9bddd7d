//! Links API: shorten, delete, and metadata lookup.

use reqwest::Method;

use crate::client::PareClient;
use crate::error::Result;
use crate::types::{
    ApiResponse, DeleteRequest, DeleteResponse, EmptyBody, MetaResponse, ShortenRequest,
    ShortenResponse,
};

/// Endpoint for creating short links.
pub const SHORTEN_ENDPOINT: &str = "/api/shorten";

/// Endpoint for deleting short links.
pub const DELETE_ENDPOINT: &str = "/api/delete";

/// Endpoint prefix for metadata lookups; the code is appended as a segment.
pub const META_ENDPOINT: &str = "/api/meta";

/// Links API client.
///
/// Methods return the raw [`ApiResponse`]; deciding what a 404 or 409 means
/// is left to the caller.
pub struct LinksApi {
    client: PareClient,
}

impl LinksApi {
    pub(crate) fn new(client: PareClient) -> Self {
        Self { client }
    }

    /// Shorten a URL.
    pub fn shorten(&self, request: &ShortenRequest) -> Result<ApiResponse<ShortenResponse>> {
        self.client.call(Method::POST, SHORTEN_ENDPOINT, request)
    }

    /// Delete a shortcode.
    pub fn delete(&self, code: &str) -> Result<ApiResponse<DeleteResponse>> {
        self.client.call(Method::POST, DELETE_ENDPOINT, &DeleteRequest::new(code))
    }

    /// Fetch metadata for a shortcode.
    pub fn meta(&self, code: &str) -> Result<ApiResponse<MetaResponse>> {
        let url = self.client.url_with_segment(META_ENDPOINT, code)?;
        let request = self
            .client
            .build_request_for_url(Method::GET, url, &EmptyBody {})?;
        self.client.execute(request)
    }
}
