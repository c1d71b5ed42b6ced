//! Blocking HTTP client for the content API

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use super::ContentSource;
use crate::config::Config;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("knightpacks/", env!("CARGO_PKG_VERSION"));

/// Direct, uncached access to the content API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl ApiClient {
    /// Create a client for `base_url`.
    pub fn new(base_url: &str, timeout: Duration, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    /// Create a client from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, config.timeout(), config.api_token.clone())
    }

    /// Absolute URL of an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl ContentSource for ApiClient {
    fn get(&mut self, path: &str) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let transport = |message: String| Error::Transport {
            path: path.to_string(),
            message,
        };

        let mut request = self.http.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!("HTTP {status} from {url}")));
        }

        response
            .json::<Value>()
            .map_err(|e| transport(format!("invalid JSON body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_single_slash() {
        let client = ApiClient::new("https://content.example.org/api/", Duration::from_secs(1), None).unwrap();
        assert_eq!(client.url("weapon/3"), "https://content.example.org/api/weapon/3");
        assert_eq!(client.url("/arcana"), "https://content.example.org/api/arcana");
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let mut client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2), None).unwrap();
        let err = client.get("armour").unwrap_err();
        assert!(matches!(err, Error::Transport { ref path, .. } if path == "armour"));
    }
}
