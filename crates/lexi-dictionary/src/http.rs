use std::time::Duration;

use lexi_core::{ConnectionError, NotFoundReason};
use reqwest::Url;

#[derive(Debug, thiserror::Error)]
pub enum BackendConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Parse a service base URL that path segments can be appended to
pub(crate) fn parse_base_url(url: &str) -> Result<Url, BackendConfigError> {
    let invalid = |reason: String| BackendConfigError::InvalidBaseUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if parsed.cannot_be_a_base() {
        return Err(invalid("cannot be a base".to_string()));
    }
    Ok(parsed)
}

/// Append path segments, percent-encoding each one
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

pub(crate) fn build_client() -> Result<reqwest::Client, BackendConfigError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("lexi/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// GET `url`, handing back the body of a 2xx response.
///
/// Transport failures and timeouts are `ConnectionError`, any other status is a not-found reason.
pub(crate) async fn get_body(
    client: &reqwest::Client,
    url: Url,
    timeout: Duration,
) -> Result<Result<String, NotFoundReason>, ConnectionError> {
    let response = client
        .get(url.clone())
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| connection_error(&url, e))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("GET {} returned {}", url, status);
        return Ok(Err(NotFoundReason::Status(status.as_u16())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| connection_error(&url, e))?;

    Ok(Ok(body))
}

fn connection_error(url: &Url, e: reqwest::Error) -> ConnectionError {
    if e.is_timeout() {
        ConnectionError(format!("GET {url} timed out"))
    } else {
        ConnectionError(format!("GET {url} failed: {e}"))
    }
}
