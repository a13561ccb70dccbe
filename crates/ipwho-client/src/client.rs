//! Main ExtractIP API client implementation.

use crate::api::GeolocateApi;
use ipwho_core::{GeolocationRecord, IpwhoError, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// The ExtractIP API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.extractip.com";

/// User-Agent sent with every request
const USER_AGENT: &str = concat!("ipwho/", env!("CARGO_PKG_VERSION"));

/// Status and body of an API response, before decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

/// Main ExtractIP API client
#[derive(Clone)]
pub struct IpwhoClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
}

impl IpwhoClient {
    /// Create a new client against the public API
    pub fn new() -> Result<Self> {
        IpwhoClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> IpwhoClientBuilder {
        IpwhoClientBuilder::new()
    }

    /// Access geolocation endpoints
    #[must_use]
    pub const fn geolocate(&self) -> GeolocateApi<'_> {
        GeolocateApi::new(self)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Send one GET to `/geolocate`, or `/geolocate/<target>` when a target is
    /// given, and return the undecoded response.
    pub async fn fetch(&self, target: Option<&str>) -> Result<RawResponse> {
        let url = self.build_url(target)?;
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&e))?;
        debug!(status, bytes = body.len(), "response received");

        Ok(RawResponse { status, body })
    }

    /// Build the endpoint URL. The target is pushed as a single path segment.
    fn build_url(&self, target: Option<&str>) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                IpwhoError::Transport(format!("cannot use {} as a base URL", self.inner.base_url))
            })?;
            segments.pop_if_empty().push("geolocate");
            if let Some(ip) = target {
                segments.push(ip);
            }
        }
        Ok(url)
    }
}

/// Transport error carrying the whole cause chain, e.g. the refused connection
/// underneath reqwest's "error sending request".
fn transport_error(err: &reqwest::Error) -> IpwhoError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    IpwhoError::Transport(message)
}

/// Turn a raw response into a record.
///
/// Any status other than 200 is an [`IpwhoError::Api`] carrying the body
/// verbatim.
pub fn decode(raw: RawResponse) -> Result<GeolocationRecord> {
    if raw.status != 200 {
        warn!(status = raw.status, "API returned an error");
        return Err(IpwhoError::Api {
            status: raw.status,
            body: raw.body,
        });
    }

    serde_json::from_str(&raw.body).map_err(IpwhoError::Decode)
}

/// Builder for configuring an [`IpwhoClient`]
pub struct IpwhoClientBuilder {
    base_url: String,
}

impl Default for IpwhoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IpwhoClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<IpwhoClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| IpwhoError::Transport(format!("invalid base URL {}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| IpwhoError::Transport(e.to_string()))?;

        Ok(IpwhoClient {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }
}
