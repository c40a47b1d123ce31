//! Retrying delivery API requests.
//!
//! Two failures are worth another attempt: a transport error (refused
//! connection, timeout) and `429 Too Many Requests`. A rate-limited response
//! says how many seconds remain until the limit resets in
//! `X-Contentful-RateLimit-Reset`; that wait is honoured up to
//! [`MAX_RESET_WAIT`], with exponential backoff when the header is missing.
//! Every other status goes straight back to the caller.

use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};

use crate::error::ContentfulError;

/// Requests sent in total before giving up.
const ATTEMPTS: u32 = 4;

/// First backoff step; doubles per attempt.
const BACKOFF_BASE: Duration = Duration::from_millis(200);

/// Longest rate-limit reset the client is willing to sleep through.
const MAX_RESET_WAIT: Duration = Duration::from_secs(60);

/// Seconds until the rate limit resets.
pub(crate) const RATE_LIMIT_RESET: &str = "x-contentful-ratelimit-reset";

/// Send a request built by `send`, retrying transport errors and 429s.
///
/// A 429 that persists through the last attempt is returned as a response,
/// so the caller reports it like any other status.
pub(crate) async fn send_with_retry<F, Fut>(
    endpoint: &str,
    send: F,
) -> Result<Response, ContentfulError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Response, reqwest::Error>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        let wait = match send().await {
            Ok(resp) if resp.status() != StatusCode::TOO_MANY_REQUESTS => return Ok(resp),
            Ok(resp) if attempt == ATTEMPTS => return Ok(resp),
            Ok(resp) => {
                let wait = rate_limit_reset(resp.headers()).unwrap_or_else(|| backoff(attempt));
                tracing::warn!(attempt, "{endpoint} is rate limited, retrying in {wait:?}");
                wait
            }
            Err(source) if attempt == ATTEMPTS => {
                return Err(ContentfulError::Http {
                    endpoint: endpoint.to_string(),
                    source,
                })
            }
            Err(e) => {
                let wait = backoff(attempt);
                tracing::warn!(attempt, "request to {endpoint} failed, retrying in {wait:?}: {e}");
                wait
            }
        };
        tokio::time::sleep(wait).await;
    }
}

fn backoff(attempt: u32) -> Duration {
    BACKOFF_BASE * 2u32.pow(attempt.saturating_sub(1))
}

/// Wait announced by a rate-limited response, capped at [`MAX_RESET_WAIT`].
fn rate_limit_reset(headers: &HeaderMap) -> Option<Duration> {
    let seconds: u64 = headers.get(RATE_LIMIT_RESET)?.to_str().ok()?.trim().parse().ok()?;
    Some(Duration::from_secs(seconds).min(MAX_RESET_WAIT))
}
