//! Shared request plumbing for the CyREST API client.
//!
//! Every resource method funnels through [`HttpClient::dispatch`]: one
//! query-string serialization, one HTTP round trip, one decode. Failures
//! surface immediately to the caller; there are no retries.

pub mod query;

use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::CyRestError;

/// Query parameters as (name, optional value) pairs. Unset values never
/// appear in the serialized query string.
pub type QueryPairs<'a> = [(&'a str, Option<String>)];

/// HTTP client wrapper holding the immutable service location.
///
/// The service root and the API version segment are stored separately so
/// that resource paths (`/{version}/networks/...`, `/cyndex2/{version}/...`)
/// are composed by concatenation, never recovered from a joined URL.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    version: String,
}

impl HttpClient {
    /// Create a new HTTP client wrapper.
    ///
    /// `base_url` is the service root (e.g. `http://localhost:1234`);
    /// `version` is the API version path segment (e.g. `v1`).
    pub fn new(client: Client, base_url: String, version: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            version: version.trim_matches('/').to_string(),
        }
    }

    /// The service root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API version path segment.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Build a full URL from a root-relative path and query parameters.
    pub fn build_url(&self, path: &str, params: &QueryPairs<'_>) -> String {
        let query = query::build_query_string(params);
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }

    /// Issue the single HTTP request for an operation.
    ///
    /// Serializes `params` into the query string, attaches `body` as a
    /// JSON payload when present, and maps non-success statuses to the
    /// error taxonomy. 2xx responses (204 included) come back for the
    /// caller to decode.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        params: &QueryPairs<'_>,
        body: Option<&Value>,
    ) -> Result<Response, CyRestError> {
        let url = self.build_url(path, params);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url).header("Accept", "*/*");
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(CyRestError::Http)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, path, body))
    }

    /// Decode a successful response as JSON. A 204 or an empty body is
    /// success with no payload.
    async fn decode_json(response: Response) -> Result<Value, CyRestError> {
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        let text = response.text().await.map_err(CyRestError::Http)?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            CyRestError::Decode(format!(
                "error decoding response body: {} - response (first 500 chars): {}",
                e,
                text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Make a GET request returning decoded JSON.
    pub async fn get(&self, path: &str, params: &QueryPairs<'_>) -> Result<Value, CyRestError> {
        let response = self.dispatch(Method::GET, path, params, None).await?;
        Self::decode_json(response).await
    }

    /// Make a GET request returning the raw response bytes (image and
    /// PDF endpoints).
    pub async fn get_bytes(
        &self,
        path: &str,
        params: &QueryPairs<'_>,
    ) -> Result<Vec<u8>, CyRestError> {
        let response = self.dispatch(Method::GET, path, params, None).await?;
        Ok(response.bytes().await.map_err(CyRestError::Http)?.to_vec())
    }

    /// Make a GET request returning the response body text (CSV/TSV
    /// table exports).
    pub async fn get_text(&self, path: &str, params: &QueryPairs<'_>) -> Result<String, CyRestError> {
        let response = self.dispatch(Method::GET, path, params, None).await?;
        response.text().await.map_err(CyRestError::Http)
    }

    /// Make a POST request with an optional JSON payload.
    pub async fn post(
        &self,
        path: &str,
        params: &QueryPairs<'_>,
        body: Option<&Value>,
    ) -> Result<Value, CyRestError> {
        let response = self.dispatch(Method::POST, path, params, body).await?;
        Self::decode_json(response).await
    }

    /// Make a PUT request with a JSON payload.
    pub async fn put(
        &self,
        path: &str,
        params: &QueryPairs<'_>,
        body: &Value,
    ) -> Result<Value, CyRestError> {
        let response = self.dispatch(Method::PUT, path, params, Some(body)).await?;
        Self::decode_json(response).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Value, CyRestError> {
        let response = self.dispatch(Method::DELETE, path, &[], None).await?;
        Self::decode_json(response).await
    }
}

/// Map a non-success status to the error taxonomy, keeping the response
/// body text for diagnosis.
fn status_error(status: StatusCode, path: &str, body: String) -> CyRestError {
    match status {
        StatusCode::NOT_FOUND => CyRestError::NotFound(format!("{path}: {body}")),
        StatusCode::PRECONDITION_FAILED => {
            CyRestError::PreconditionFailed(format!("{path}: {body}"))
        }
        s if s.is_server_error() => CyRestError::Server {
            status: s.as_u16(),
            body,
        },
        s => CyRestError::Api {
            status: s.as_u16(),
            body,
        },
    }
}
