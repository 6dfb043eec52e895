use crate::error::Result;
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Create the HTTP client used for API requests
pub fn create_rest_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(concat!("tumblr-rs/", env!("CARGO_PKG_VERSION")))
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme (http or https)
    pub scheme: String,
    /// API host
    pub api_host: String,
    /// Host serving the OAuth token endpoints
    pub oauth_host: String,
    /// Whole-request timeout
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: "https".to_string(),
            api_host: "api.tumblr.com".to_string(),
            oauth_host: "www.tumblr.com".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Create a configuration serving both the API and OAuth endpoints from one host
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        let host = host.into();
        Config {
            scheme: scheme.into(),
            api_host: host.clone(),
            oauth_host: host,
            ..Config::default()
        }
    }

    pub fn with_oauth_host(mut self, host: impl Into<String>) -> Self {
        self.oauth_host = host.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> String {
        format!("{}://{}/v2", self.scheme, self.api_host)
    }

    /// Get the URL of an OAuth endpoint (request_token, authorize, access_token)
    pub fn oauth_url(&self, endpoint: &str) -> String {
        format!("{}://{}/oauth/{}", self.scheme, self.oauth_host, endpoint)
    }
}
