use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use tracing::info;

use crate::models::RawFeedResponse;

pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent("spacetraveling/0.1")
        .timeout(std::time::Duration::from_secs(30))
        .build()?;
    Ok(client)
}

/// Follows a listing's `next_page` link and decodes the raw page.
/// Returns an error if the request fails or the status is not a success
pub async fn fetch_next_page(client: &Client, url: &str) -> Result<RawFeedResponse> {
    info!(url, "fetching next page");

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to request {}", url))?;

    if !response.status().is_success() {
        return Err(anyhow!("Failed to fetch page: {}", response.status()));
    }

    let page = response
        .json::<RawFeedResponse>()
        .await
        .context("Invalid listing response")?;

    Ok(page)
}
