//! Three-legged OAuth 1.0a flow for obtaining a user's access token.
//!
//! ```no_run
//! use tumblr::Authorizer;
//!
//! let auth = Authorizer::new("consumer_key", "consumer_secret")?;
//! let request = auth.request_token("https://example.com/callback")?;
//! println!("visit {}", auth.authorize_url(&request)?);
//!
//! // after the user approves, the callback receives `oauth_verifier`
//! let access = auth.access_token(&request, "verifier")?;
//! let client = auth.into_client(access);
//! # Ok::<(), tumblr::TumblrError>(())
//! ```

use crate::client::{create_rest_client, Config};
use crate::credentials::{Credentials, TokenPair};
use crate::error::{Result, TumblrError};
use crate::oauth;
use crate::rest::Tumblr;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

/// Runs the token exchange on behalf of an application
pub struct Authorizer {
    client: Client,
    config: Config,
    credentials: Credentials,
}

impl Authorizer {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Result<Self> {
        Authorizer::with_config(consumer_key, consumer_secret, Config::default())
    }

    pub fn with_config(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        config: Config,
    ) -> Result<Self> {
        Ok(Authorizer {
            client: create_rest_client(&config)?,
            config,
            credentials: Credentials::consumer(consumer_key, consumer_secret),
        })
    }

    /// Step 1: obtain a temporary request token.
    /// `callback` is where the user is sent after approving (or "oob").
    pub fn request_token(&self, callback: &str) -> Result<TokenPair> {
        let url = Url::parse(&self.config.oauth_url("request_token"))?;
        self.token_request(url, &self.credentials, &[("oauth_callback", callback)])
    }

    /// Step 2: the page where the user approves the request token
    pub fn authorize_url(&self, request_token: &TokenPair) -> Result<Url> {
        let mut url = Url::parse(&self.config.oauth_url("authorize"))?;
        url.query_pairs_mut()
            .append_pair("oauth_token", &request_token.token);
        Ok(url)
    }

    /// Step 3: trade the approved request token and its verifier for an access token
    pub fn access_token(&self, request_token: &TokenPair, verifier: &str) -> Result<TokenPair> {
        let url = Url::parse(&self.config.oauth_url("access_token"))?;
        let credentials = self.credentials.clone().with_token(request_token.clone());
        self.token_request(url, &credentials, &[("oauth_verifier", verifier)])
    }

    /// Build an API client signing with the obtained access token
    pub fn into_client(self, access: TokenPair) -> Tumblr {
        Tumblr::from_parts(self.client, self.config, self.credentials.with_token(access))
    }

    fn token_request(
        &self,
        url: Url,
        credentials: &Credentials,
        extra: &[(&str, &str)],
    ) -> Result<TokenPair> {
        let authorization = oauth::authorization_header(credentials, "POST", &url, &[], extra)?;

        let http_response = self
            .client
            .post(url.clone())
            .header(AUTHORIZATION, authorization)
            .send()?;
        let status = http_response.status();
        let body = http_response.text()?;

        debug!(path = url.path(), status = status.as_u16(), "oauth token request");

        if !status.is_success() {
            warn!(status = status.as_u16(), path = url.path(), "oauth token request rejected");
            return Err(TumblrError::http(status.as_u16(), body));
        }

        parse_token_response(&body)
    }
}

impl std::fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorizer")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Parse a form-encoded `oauth_token=..&oauth_token_secret=..` body
pub(crate) fn parse_token_response(body: &str) -> Result<TokenPair> {
    let mut token = None;
    let mut secret = None;

    for (key, value) in form_urlencoded::parse(body.trim().as_bytes()) {
        match key.as_ref() {
            "oauth_token" => token = Some(value.into_owned()),
            "oauth_token_secret" => secret = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(TokenPair {
        token: token.ok_or(TumblrError::MissingField("oauth_token"))?,
        secret: secret.ok_or(TumblrError::MissingField("oauth_token_secret"))?,
    })
}
