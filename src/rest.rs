use crate::client::{create_rest_client, Config};
use crate::credentials::Credentials;
use crate::error::{Result, TumblrError};
use crate::oauth;
use crate::response::{Envelope, Params};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

/// Client for the Tumblr v2 API.
///
/// Holds the HTTP client, the endpoint configuration and the signing
/// credentials. Nothing is mutated after construction, so a `Tumblr` can be
/// shared by reference across threads.
#[derive(Clone)]
pub struct Tumblr {
    /// HTTP client
    pub client: Client,
    /// Configuration
    pub config: Config,
    credentials: Credentials,
}

impl Tumblr {
    /// Create a client talking to api.tumblr.com
    ///
    /// # Arguments
    /// * `consumer_key` / `consumer_secret` - the application's key pair
    /// * `token` / `token_secret` - the user's delegated access token pair
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(consumer_key, consumer_secret, token, token_secret);
        Tumblr::with_config(credentials, Config::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: Config) -> Result<Self> {
        Ok(Tumblr {
            client: create_rest_client(&config)?,
            config,
            credentials,
        })
    }

    pub(crate) fn from_parts(client: Client, config: Config, credentials: Credentials) -> Self {
        Tumblr {
            client,
            config,
            credentials,
        }
    }

    /// The credentials every request is signed with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The consumer key, sent as `api_key` on endpoints that use key authentication
    pub fn api_key(&self) -> &str {
        &self.credentials.consumer_key
    }

    /// Build an API URL from path segments below the base URL.
    /// Each segment is escaped, so hostnames and tags are passed verbatim.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url())?;
        url.path_segments_mut()
            .map_err(|_| TumblrError::RequestBuild("base URL cannot have path segments".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// URL below `/blog/{hostname}/`
    pub(crate) fn blog_endpoint(&self, blog_hostname: &str, path: &str) -> Result<Url> {
        let mut segments = vec!["blog", blog_hostname];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
        self.endpoint(&segments)
    }

    /// Send a signed request and decode the response envelope.
    ///
    /// `form` is sent as an url-encoded body for POST requests and is part of
    /// the signature. Transport and decode failures are returned as errors; a
    /// non-success envelope is returned as-is for the caller to inspect.
    pub fn execute(&self, method: Method, url: Url, form: &[(String, String)]) -> Result<Envelope> {
        let authorization =
            oauth::authorization_header(&self.credentials, method.as_str(), &url, form, &[])?;

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, authorization);

        if method == Method::POST {
            let body = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(form)
                .finish();
            request = request
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }

        let start = Instant::now();
        let http_response = request.send()?;
        let status = http_response.status();
        let body = http_response.bytes()?;

        debug!(
            method = %method,
            path = url.path(),
            status = status.as_u16(),
            elapsed = ?start.elapsed(),
            "tumblr request"
        );

        let envelope: Envelope = serde_json::from_slice(&body).map_err(|e| {
            if status.is_client_error() || status.is_server_error() {
                warn!(status = status.as_u16(), path = url.path(), "non-JSON error response");
                TumblrError::http(status.as_u16(), String::from_utf8_lossy(&body).to_string())
            } else {
                TumblrError::Json(e)
            }
        })?;

        if !envelope.is_success() {
            warn!(
                status = envelope.meta.status,
                msg = %envelope.meta.msg,
                path = url.path(),
                "tumblr API returned an error"
            );
        }

        Ok(envelope)
    }

    /// GET an informational endpoint and decode its payload into `T`
    pub fn info<T>(&self, url: Url) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = url.path().to_string();
        let envelope = self.execute(Method::GET, url, &[])?.check()?;
        envelope.apply().map_err(|e| {
            warn!(path = %path, error = %e, "payload did not match the expected shape");
            e
        })
    }

    /// POST a form to a write endpoint and require a success envelope
    pub fn action(&self, url: Url, form: &[(String, String)]) -> Result<Envelope> {
        self.execute(Method::POST, url, form)?.check()
    }

    /// GET a signed URL and return the raw body (used for avatar images)
    pub fn raw_get(&self, url: Url) -> Result<Vec<u8>> {
        let authorization =
            oauth::authorization_header(&self.credentials, Method::GET.as_str(), &url, &[], &[])?;

        let http_response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, authorization)
            .send()?;
        let status = http_response.status();
        let body = http_response.bytes()?;

        debug!(path = url.path(), status = status.as_u16(), bytes = body.len(), "tumblr raw get");

        if !status.is_success() {
            warn!(status = status.as_u16(), path = url.path(), "raw get failed");
            return Err(TumblrError::http(
                status.as_u16(),
                String::from_utf8_lossy(&body).to_string(),
            ));
        }

        Ok(body.to_vec())
    }
}

impl std::fmt::Debug for Tumblr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tumblr")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Merge caller parameters with the ones an endpoint requires.
/// Required parameters always win; the result is sorted by key.
pub(crate) fn merge_params(params: &Params, required: &[(&str, String)]) -> Vec<(String, String)> {
    let mut merged: BTreeMap<String, String> = params
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    for (key, value) in required {
        merged.insert(key.to_string(), value.clone());
    }
    merged.into_iter().collect()
}

/// Append query pairs to a URL
pub(crate) fn with_query(mut url: Url, pairs: &[(String, String)]) -> Url {
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    url
}
