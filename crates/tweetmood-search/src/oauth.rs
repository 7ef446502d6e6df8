//! OAuth 1.0a request signing (HMAC-SHA1), as required by the v1.1 REST API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distr::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use tweetmood_core::Credentials;

/// Everything except the RFC 3986 unreserved set gets escaped.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const NONCE_LEN: usize = 32;

/// Per-request nonce and Unix timestamp.
pub(crate) struct RequestStamp {
    pub(crate) nonce: String,
    pub(crate) timestamp: i64,
}

impl RequestStamp {
    pub(crate) fn now() -> Self {
        let nonce = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();
        Self {
            nonce,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

pub(crate) fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Builds the `Authorization` header value for one request.
///
/// `url` must not carry a query string; request parameters go in `params`.
pub(crate) fn authorization_header(
    credentials: &Credentials,
    method: &str,
    url: &str,
    params: &[(&str, String)],
    stamp: &RequestStamp,
) -> String {
    let timestamp = stamp.timestamp.to_string();
    let mut oauth_params: Vec<(&str, &str)> = vec![
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", stamp.nonce.as_str()),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    let all_params = params
        .iter()
        .map(|(k, v)| (*k, v.as_str()))
        .chain(oauth_params.iter().copied());
    let base = signature_base_string(method, url, all_params);
    let signature = sign(
        &credentials.consumer_secret,
        &credentials.access_token_secret,
        &base,
    );

    oauth_params.push(("oauth_signature", signature.as_str()));
    let fields: Vec<String> = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect();
    format!("OAuth {}", fields.join(", "))
}

/// `METHOD&enc(url)&enc(sorted, encoded parameter string)`.
pub(crate) fn signature_base_string<'a>(
    method: &str,
    url: &str,
    params: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&param_string)
    )
}

pub(crate) fn sign(consumer_secret: &str, token_secret: &str, base_string: &str) -> String {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac =
        Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
