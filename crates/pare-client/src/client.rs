//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{Client, Request};
use reqwest::header::{ACCEPT, CONNECTION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use pare_config::Config;

use crate::api::LinksApi;
use crate::error::{Error, Result};
use crate::types::ApiResponse;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Condenser API client.
///
/// Each request is built with the JSON and auth headers, sent once, and the
/// connection is closed afterwards.
#[derive(Clone)]
pub struct PareClient {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: Client,
    /// Server base URL with any trailing slash removed.
    pub(crate) server: String,
    /// Value of the `X-API-Key` header.
    pub(crate) api_key: HeaderValue,
    /// Value of the `User-Agent` header.
    pub(crate) user_agent: HeaderValue,
}

// The API key never appears in debug output.
impl fmt::Debug for PareClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PareClient")
            .field("server", &self.inner.server)
            .field("user_agent", &self.inner.user_agent)
            .finish_non_exhaustive()
    }
}

impl PareClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from the effective configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder()
            .server(&config.server)
            .api_key(&config.api_key)
            .build()
    }

    /// Get the server base URL.
    pub fn server(&self) -> &str {
        &self.inner.server
    }

    /// Access the links API (shorten, delete, meta).
    pub fn links(&self) -> LinksApi {
        LinksApi::new(self.clone())
    }

    /// Build the URL for an endpoint path by appending it to the server URL.
    pub fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.inner.server, endpoint))?)
    }

    /// Build the URL for an endpoint followed by one path segment.
    ///
    /// The segment is percent-encoded, so `/` inside it cannot change the
    /// endpoint being addressed. `.` and `..` are rejected: URL parsing treats
    /// them (and their encoded forms) as dot segments and would drop them.
    pub fn url_with_segment(&self, endpoint: &str, segment: &str) -> Result<Url> {
        if segment == "." || segment == ".." {
            return Err(Error::InvalidPathSegment(segment.to_string()));
        }
        let mut url = self.url(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| Error::Config("server URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Construct a request to `server + endpoint` with a JSON body.
    pub fn build_request<B>(&self, method: Method, endpoint: &str, body: &B) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint)?;
        self.build_request_for_url(method, url, body)
    }

    /// Construct a request to an already-built URL with a JSON body.
    pub fn build_request_for_url<B>(&self, method: Method, url: Url, body: &B) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        tracing::debug!(body = %body, "serialized request body");

        let request = self
            .inner
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(API_KEY_HEADER, self.inner.api_key.clone())
            .header(USER_AGENT, self.inner.user_agent.clone())
            .header(CONNECTION, HeaderValue::from_static("close"))
            .body(body)
            .build()?;

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            headers = ?request.headers(),
            "built request"
        );
        Ok(request)
    }

    /// Send a request and decode the body if, and only if, the status is 200.
    pub fn execute<T>(&self, request: Request) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.inner.http.execute(request)?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            return Ok(ApiResponse::Status(status.as_u16()));
        }

        let body = response.text()?;
        tracing::debug!(body = %body, "response body");
        Ok(ApiResponse::Success(serde_json::from_str(&body)?))
    }

    /// Build and send a request in one step.
    pub fn call<T, B>(&self, method: Method, endpoint: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, endpoint, body)?;
        self.execute(request)
    }
}

/// Builder for creating a PareClient.
pub struct ClientBuilder {
    server: Option<String>,
    api_key: String,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            server: None,
            api_key: String::new(),
            user_agent: None,
        }
    }

    /// Set the server base URL.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<PareClient> {
        let server = self
            .server
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "no server configured; set \"Server\" in ~/.pare.json or pass --server"
                        .to_string(),
                )
            })?;

        let base = Url::parse(&server)?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("server URL cannot be a base: {}", server)));
        }
        let server = server.strip_suffix('/').unwrap_or(&server).to_string();

        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("pare/{} (reqwest)", env!("CARGO_PKG_VERSION")));
        let user_agent = HeaderValue::from_str(&user_agent)
            .map_err(|_| Error::Config("Invalid user agent".to_string()))?;

        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(PareClient {
            inner: Arc::new(ClientInner {
                http,
                server,
                api_key,
                user_agent,
            }),
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("server", &self.server)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
