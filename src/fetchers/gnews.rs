//! [GNews](https://gnews.io) search client.
//!
//! The API key travels as the `apikey` query parameter, so the request URL
//! is never logged.

use super::QUERY;
use crate::models::{ArticleFeed, RawArticle};
use crate::utils::decode_json;
use reqwest::Client;
use std::error::Error;
use tracing::{info, instrument};
use url::Url;

/// Search GNews for English articles matching [`QUERY`].
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `endpoint` - The search endpoint, normally [`crate::config::GNEWS_URL`]
/// * `api_key` - GNews API key
///
/// # Returns
///
/// The provider's articles in response order. An error payload from GNews
/// yields an empty list.
///
/// # Errors
///
/// Fails on transport errors or when the body is not valid JSON.
#[instrument(level = "info", skip_all, fields(%endpoint))]
pub async fn fetch_articles(
    client: &Client,
    endpoint: &str,
    api_key: &str,
) -> Result<Vec<RawArticle>, Box<dyn Error>> {
    let url = Url::parse_with_params(
        endpoint,
        &[("q", QUERY), ("lang", "en"), ("apikey", api_key)],
    )?;

    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    let feed: ArticleFeed = decode_json(&body, "gnews")?;

    info!(%status, count = feed.articles.len(), "Fetched GNews articles");
    Ok(feed.articles)
}
