use serde::{Deserialize, Serialize};

/// TokenPair is an OAuth 1.0a token with its secret.
/// Used both for temporary request tokens and for long-lived access tokens.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(rename = "oauth_token")]
    pub token: String,

    #[serde(rename = "oauth_token_secret")]
    pub secret: String,
}

impl TokenPair {
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        TokenPair {
            token: token.into(),
            secret: secret.into(),
        }
    }
}

/// Credentials holds everything needed to sign a request: the application's
/// consumer key pair and the delegated (access) token pair of the user.
///
/// A value is never mutated after construction, so a client holding it can be
/// shared freely between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Consumer key, also sent as `api_key` on public endpoints
    pub consumer_key: String,
    consumer_secret: String,
    /// Delegated access token; empty while running the authorization flow
    access: Option<TokenPair>,
}

impl Credentials {
    /// Create credentials from the consumer pair and an access token pair
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access: Some(TokenPair::new(token, token_secret)),
        }
    }

    /// Credentials carrying only the consumer pair
    pub fn consumer(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access: None,
        }
    }

    /// Replace the token pair used for signing
    pub fn with_token(mut self, token: TokenPair) -> Self {
        self.access = Some(token);
        self
    }

    /// The application's consumer secret
    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    /// The token to send as `oauth_token`, if any
    pub fn token(&self) -> Option<&str> {
        self.access
            .as_ref()
            .map(|t| t.token.as_str())
            .filter(|t| !t.is_empty())
    }

    /// The secret of the token pair; empty when no token is set
    pub fn token_secret(&self) -> &str {
        self.access.as_ref().map(|t| t.secret.as_str()).unwrap_or("")
    }
}

// Implement Debug manually to avoid exposing the secrets
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token())
            .field("token_secret", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("token", &self.token)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_creation() {
        let creds = Credentials::new("ck", "cs", "tk", "ts");

        assert_eq!(creds.consumer_key, "ck");
        assert_eq!(creds.consumer_secret(), "cs");
        assert_eq!(creds.token(), Some("tk"));
        assert_eq!(creds.token_secret(), "ts");
    }

    #[test]
    fn test_consumer_only_has_no_token() {
        let creds = Credentials::consumer("ck", "cs");
        assert_eq!(creds.token(), None);
        assert_eq!(creds.token_secret(), "");

        let creds = creds.with_token(TokenPair::new("req", "reqsecret"));
        assert_eq!(creds.token(), Some("req"));
        assert_eq!(creds.token_secret(), "reqsecret");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("ck", "very-secret", "tk", "also-secret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("ck"));
        assert!(!printed.contains("very-secret"));
        assert!(!printed.contains("also-secret"));
    }
}
