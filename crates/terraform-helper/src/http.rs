//! Async HTTP client wrapping reqwest.
//!
//! One GET per call, a fixed timeout, no retries. Non-success statuses are
//! turned into [`DocsError::RemoteStatus`] with a short body snippet.

use std::time::Duration;

use crate::types::{DocsError, DocsResult};

/// User-agent sent with every request.
pub const USER_AGENT: &str = "terraform-helper";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest body excerpt kept in a status error.
const BODY_SNIPPET_LEN: usize = 200;

/// HTTP client shared by the fetchers.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> DocsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the body, failing on any non-2xx status.
    pub async fn get(&self, url: &str, accept: Option<&str>) -> DocsResult<String> {
        tracing::debug!(url, "GET");

        let mut builder = self.client.get(url);
        if let Some(accept) = accept {
            builder = builder.header(reqwest::header::ACCEPT, accept);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "non-success status");
            return Err(DocsError::RemoteStatus {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        Ok(body)
    }
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(client.is_ok());
    }

    #[test]
    fn test_snippet_short_body_untouched() {
        assert_eq!(snippet("  Not Found \n"), "Not Found");
    }

    #[test]
    fn test_snippet_truncates_long_body() {
        let body = "x".repeat(BODY_SNIPPET_LEN + 50);
        let s = snippet(&body);
        assert_eq!(s.len(), BODY_SNIPPET_LEN + 3);
        assert!(s.ends_with("..."));
    }
}
