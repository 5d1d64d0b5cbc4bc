//! Fetching the pool's public page and extracting the occupancy figure.
//!
//! The pattern matches the exact markup the page publishes; a change in the
//! surrounding text or the `font-size` attribute makes extraction fail.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use ureq::Agent;

use crate::error::{Error, Result};
use crate::http::USER_AGENT;
use crate::models::Percentage;

pub const DEFAULT_SOURCE_URL: &str = "https://www.lazdynubaseinas.eu/";

/// Upper bound on the page body; anything larger is a read failure.
pub const MAX_PAGE_BYTES: u64 = 2 * 1024 * 1024;

static USAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"Šiuo metu esantis Lazdynų baseino ir sporto klubo užimtumas: <span style="font-size:\d+\.\d+rem;">(\d+)%</span>"#,
    )
    .unwrap()
});

/// Extract the occupancy percentage from the page HTML.
pub fn extract_usage(html: &str) -> Result<Percentage> {
    let caps = USAGE_RE
        .captures(html)
        .ok_or_else(|| Error::Parse("usage fragment not found".to_string()))?;
    let raw = caps
        .get(1)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse("usage pattern matched without a value".to_string()))?;
    raw.parse()
}

/// GET `url` and return the full body as text.
///
/// The status code is only logged: an error page falls through to
/// extraction, which then fails.
pub fn fetch_page(agent: &Agent, url: &str) -> Result<String> {
    let mut response = agent
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;
    debug!(status = response.status().as_u16(), url, "fetched source page");
    response
        .body_mut()
        .with_config()
        .limit(MAX_PAGE_BYTES)
        .read_to_string()
        .map_err(|source| Error::Read { source })
}

/// Fetch the page once and extract the current usage.
pub fn fetch_pool_usage(agent: &Agent, url: &str) -> Result<Percentage> {
    let html = fetch_page(agent, url)?;
    extract_usage(&html)
}
