//! Shared HTTP client for source fetches.
//!
//! One client is built at startup and handed to every source: browser-like
//! User-Agent and headers to avoid trivial bot detection, a fixed per-request
//! timeout bounding worst-case latency per source, and limited redirects.

use std::time::Duration;

use anyhow::{Context, Result};

/// Per-request timeout; no source fetch may take longer than this.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn build_client() -> Result<reqwest::Client> {
    let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,application/json;q=0.9,*/*;q=0.8",
        ),
    );
    headers.insert(
        reqwest::header::ACCEPT_LANGUAGE,
        reqwest::header::HeaderValue::from_static("fr-FR,fr;q=0.8,en;q=0.5"),
    );

    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(user_agent)
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .context("Failed to create HTTP client")
}

/// Fetch a page body, treating any non-success status as an error.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("HTTP request failed for {url}"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("HTTP {} for {}", status, url);
    }

    response.text().await.context("Failed to read response body")
}
