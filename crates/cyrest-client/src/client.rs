//! CyREST client handle

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::common::HttpClient;
use crate::cyndex2::Cyndex2;
use crate::error::CyRestError;
use crate::networks::Networks;

/// Default service root for a local Cytoscape instance.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234";

/// Default REST API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Handle to a running CyREST service.
///
/// Holds the immutable service location; all resource clients borrow it.
/// Construct once per target instance and share freely; every operation
/// is a single independent request with no session state.
#[derive(Debug)]
pub struct CyRestClient {
    http: HttpClient,
}

impl CyRestClient {
    /// Create a client for the service rooted at `base_url`, speaking
    /// the default API version.
    ///
    /// # Arguments
    /// * `base_url` - service root, e.g. "http://localhost:1234"
    pub fn new(base_url: &str) -> Result<Self, CyRestError> {
        Self::with_version(base_url, DEFAULT_API_VERSION)
    }

    /// Create a client for `base_url` speaking the given API version.
    ///
    /// Fails without touching the network when `base_url` is not an
    /// absolute http(s) URL.
    pub fn with_version(base_url: &str, version: &str) -> Result<Self, CyRestError> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CyRestError::InvalidRequest(format!(
                "base URL must be absolute (http:// or https://): {base_url}"
            )));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(CyRestError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url.to_string(), version.to_string()),
        })
    }

    /// The service root URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// The API version segment paths are composed with.
    pub fn version(&self) -> &str {
        self.http.version()
    }

    /// The `networks` resource group.
    pub fn networks(&self) -> Networks<'_> {
        Networks::new(&self.http)
    }

    /// The `cyndex2` resource group.
    pub fn cyndex2(&self) -> Cyndex2<'_> {
        Cyndex2::new(&self.http)
    }

    /// Fetch the server's version report.
    ///
    /// A lightweight probe that tests connectivity and API compatibility
    /// before a longer sequence of operations.
    pub async fn server_version(&self) -> Result<Value, CyRestError> {
        let path = format!("/{}/version", self.http.version());
        self.http.get(&path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_base_url_before_any_network_call() {
        let err = CyRestClient::new("localhost:1234").unwrap_err();
        assert!(matches!(err, CyRestError::InvalidRequest(_)));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = CyRestClient::new("http://localhost:1234/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
        assert_eq!(client.version(), "v1");
    }
}
