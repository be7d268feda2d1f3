// GoPhish API client core
//
// Every call attaches the static admin API key as a bearer credential and
// runs under a bounded timeout. 2xx bodies decode to untyped JSON and pass
// through unchanged; non-2xx bodies go through the error classifier.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;

use crate::error::{classify, GophishError, Result};

/// Upstream calls are synchronous request/response with no retries, so a
/// hung connection would otherwise pin the inbound request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the GoPhish admin REST API.
///
/// # Example
///
/// ```ignore
/// use phishdeck_gophish::GophishClient;
///
/// let client = GophishClient::from_env()?;
/// // or with an explicit endpoint
/// let client = GophishClient::new("api-key", "https://gophish.internal:3333")?;
/// ```
#[derive(Clone)]
pub struct GophishClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GophishClient {
    /// Create a client for the given API key and base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Create a client from `GOPHISH_API_KEY` and `GOPHISH_API_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOPHISH_API_KEY")
            .map_err(|_| GophishError::Config("GOPHISH_API_KEY environment variable not set"))?;
        let base_url = std::env::var("GOPHISH_API_URL")
            .map_err(|_| GophishError::Config("GOPHISH_API_URL environment variable not set"))?;
        Self::new(api_key, base_url)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send a request with the bearer credential attached and decode the
    /// response. Non-2xx responses are classified before being returned.
    pub(crate) async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "upstream returned an error");
            return Err(classify(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| GophishError::Decode(e.to_string()))
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        self.execute(self.client.get(self.url(path))).await
    }

    pub(crate) async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.execute(self.client.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.execute(self.client.put(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(self.client.delete(self.url(path))).await
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value> {
        self.execute(self.client.post(self.url(path)).multipart(form))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let client = GophishClient::new("key", "https://gophish.local:3333").unwrap();
        assert_eq!(
            client.url("/api/campaigns/"),
            "https://gophish.local:3333/api/campaigns/"
        );
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let client = GophishClient::new("key", "https://gophish.local:3333/").unwrap();
        assert_eq!(
            client.url("/api/groups/7"),
            "https://gophish.local:3333/api/groups/7"
        );
    }
}
