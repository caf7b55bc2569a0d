use reqwest::{Client, StatusCode};

use crate::{info_time, Result, PAGE_OFFSETS};

/// What a single page request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// The server answered `200 OK` with this body.
    Html(String),
    /// Any other status. The body is not read.
    Status(StatusCode),
}

/// Builds the listing URL for a page offset.
pub fn page_url(base: &str, offset: usize) -> String {
    format!("{}/?skip={offset}", base.trim_end_matches('/'))
}

/// URLs of every listing page, in offset order.
pub fn page_urls(base: &str) -> Vec<String> {
    PAGE_OFFSETS.iter().map(|&offset| page_url(base, offset)).collect()
}

/// Requests a page and returns its HTML, or the status code if it wasn't `200`.
/// Transport errors are returned as `Err`.
pub async fn request_page_html(client: &Client, url: &str) -> Result<Fetched> {
    info_time!("Requesting page: {url}");

    let res = client.get(url).send().await?;
    let status = res.status();
    if status != StatusCode::OK {
        return Ok(Fetched::Status(status));
    }

    let html = res.text().await?;
    Ok(Fetched::Html(html))
}
