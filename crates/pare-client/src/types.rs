//! Request and response types for the Condenser API.
//!
//! These types mirror the server's wire contract. Optional strings are
//! `Option<String>`; an empty string is never sent and is read back as `None`,
//! because the server treats an omitted field differently from an empty one.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a single API round trip.
///
/// Only a 200 response is decoded. Every other status is returned as-is,
/// with the body left unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// The server answered 200 and the body decoded into `T`.
    Success(T),
    /// Any non-200 status.
    Status(u16),
}

impl<T> ApiResponse<T> {
    /// The HTTP status code of the response.
    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Success(_) => 200,
            ApiResponse::Status(code) => *code,
        }
    }

    /// Get the decoded body, if the server answered 200.
    pub fn success(self) -> Option<T> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Status(_) => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shorten
// ─────────────────────────────────────────────────────────────────────────────

/// Request to shorten a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten.
    pub url: String,
    /// Requested shortcode. The server picks one when absent.
    #[serde(
        rename = "code",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub shortcode: Option<String>,
    /// Free-form user metadata.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub meta: Option<String>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            shortcode: None,
            meta: None,
        }
    }

    /// Request a specific shortcode. An empty code leaves it unset.
    pub fn with_shortcode(mut self, shortcode: impl Into<String>) -> Self {
        self.shortcode = non_empty(shortcode.into());
        self
    }

    /// Attach user metadata. Empty metadata leaves it unset.
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = non_empty(meta.into());
        self
    }
}

/// Response to a successful shorten request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    /// The full short URL, ready to share.
    pub short_url: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────────────────

/// Request to delete a shortcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub code: String,
}

impl DeleteRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// The code the server acted on.
    pub code: String,
    /// What happened to it.
    pub status: DeleteStatus,
}

/// Server-reported status of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeleteStatus {
    /// The code existed and was removed.
    Deleted,
    /// The code did not exist.
    NoExist,
    /// Any other value the server sends, kept verbatim.
    Other(String),
}

impl DeleteStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DeleteStatus::Deleted => "deleted",
            DeleteStatus::NoExist => "noexist",
            DeleteStatus::Other(status) => status,
        }
    }
}

impl From<String> for DeleteStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "deleted" => DeleteStatus::Deleted,
            "noexist" => DeleteStatus::NoExist,
            _ => DeleteStatus::Other(status),
        }
    }
}

impl From<DeleteStatus> for String {
    fn from(status: DeleteStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for DeleteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Meta
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata for a shortcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaResponse {
    /// The URL the code redirects to.
    pub full_url: String,
    pub meta: LinkMetadata,
}

/// Ownership and creation details for a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMetadata {
    /// Owner of the API key that created the link.
    pub owner: String,
    /// Creation time, in the offset the server reported it.
    pub time: DateTime<FixedOffset>,
    /// Metadata supplied when the link was created.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_meta: Option<String>,
}

/// Body for requests that carry no meaningful payload; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyBody {}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(non_empty))
}
