use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;
use url::Url;
use uuid::Uuid;

use crate::credentials::Credentials;
use crate::error::{Result, TumblrError};
use crate::time::Timestamp;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters are the only ones left as-is
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value the way OAuth 1.0a requires
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Build the signature base string for a request
///
/// # Arguments
/// * `method` - HTTP method (GET, POST, etc.)
/// * `url` - Request URL; its query pairs are part of the signed parameters
/// * `params` - Form body pairs and `oauth_*` protocol parameters
pub fn signature_base_string(method: &str, url: &Url, params: &[(String, String)]) -> String {
    let mut base_uri = url.clone();
    base_uri.set_query(None);
    base_uri.set_fragment(None);

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k), encode(&v)))
        .chain(params.iter().map(|(k, v)| (encode(k), encode(v))))
        .collect();
    pairs.sort();

    let normalized = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_uri.as_str()),
        encode(&normalized)
    )
}

/// HMAC-SHA1 over the base string, base64 encoded
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| TumblrError::Signing(e.to_string()))?;
    mac.update(base_string.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Produce the `Authorization` header value for a request.
///
/// `extra` carries additional protocol parameters such as `oauth_callback`
/// or `oauth_verifier`.
pub fn authorization_header(
    credentials: &Credentials,
    method: &str,
    url: &Url,
    form: &[(String, String)],
    extra: &[(&str, &str)],
) -> Result<String> {
    let nonce = Uuid::new_v4().simple().to_string();
    let timestamp = Timestamp::now().unix();
    authorization_header_at(credentials, method, url, form, extra, &nonce, timestamp)
}

/// Same as [`authorization_header`] with a fixed nonce and timestamp
pub(crate) fn authorization_header_at(
    credentials: &Credentials,
    method: &str,
    url: &Url,
    form: &[(String, String)],
    extra: &[(&str, &str)],
    nonce: &str,
    timestamp: i64,
) -> Result<String> {
    let mut protocol: Vec<(String, String)> = vec![
        ("oauth_consumer_key".to_string(), credentials.consumer_key.clone()),
        ("oauth_nonce".to_string(), nonce.to_string()),
        ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
        ("oauth_timestamp".to_string(), timestamp.to_string()),
        ("oauth_version".to_string(), "1.0".to_string()),
    ];
    if let Some(token) = credentials.token() {
        protocol.push(("oauth_token".to_string(), token.to_string()));
    }
    protocol.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    let mut signed: Vec<(String, String)> = form.to_vec();
    signed.extend(protocol.iter().cloned());

    let base_string = signature_base_string(method, url, &signed);
    let signature = sign(
        &base_string,
        credentials.consumer_secret(),
        credentials.token_secret(),
    )?;
    protocol.push(("oauth_signature".to_string(), signature));
    protocol.sort();

    let fields = protocol
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {}", fields))
}
