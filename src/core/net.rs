// src/core/net.rs
// Blocking HTTP GET with a bounded timeout. One synchronous actor, no
// retries; a slow call simply blocks until it returns or times out.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::error::TransportError;

/// Unauthenticated GET. Returns the body on 200, a classified error otherwise.
pub fn http_get(url: &str, timeout: Duration) -> Result<String, TransportError> {
    get_inner(url, None, timeout)
}

/// GET with a bearer token (authenticated API channel).
pub fn http_get_bearer(
    url: &str,
    token: &str,
    timeout: Duration,
) -> Result<String, TransportError> {
    get_inner(url, Some(token), timeout)
}

fn get_inner(
    url: &str,
    token: Option<&str>,
    timeout: Duration,
) -> Result<String, TransportError> {
    logd!("GET {url}");

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(TransportError::from)?;

    let mut req = client.get(url);
    if let Some(t) = token {
        req = req.bearer_auth(t);
    }

    let resp = req.send().map_err(TransportError::from)?;
    let status = resp.status();

    match status {
        StatusCode::UNAUTHORIZED => Err(TransportError::Unauthorized),
        StatusCode::FORBIDDEN => Err(TransportError::Forbidden),
        StatusCode::NOT_FOUND => Err(TransportError::NotFound),
        s if !s.is_success() => Err(TransportError::Status(s.as_u16())),
        _ => resp.text().map_err(TransportError::from),
    }
}
