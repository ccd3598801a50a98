//! [NewsAPI](https://newsapi.org) "everything" search client.

use super::QUERY;
use crate::models::{ArticleFeed, RawArticle};
use crate::utils::decode_json;
use reqwest::Client;
use std::error::Error;
use tracing::{info, instrument};
use url::Url;

/// Number of articles requested from NewsAPI.
pub const PAGE_SIZE: &str = "20";

/// Fetch the newest English articles matching [`QUERY`] from NewsAPI.
///
/// The key is sent in the `X-Api-Key` header and results are sorted by
/// publication time, newest first.
///
/// # Errors
///
/// Fails on transport errors or when the body is not valid JSON. An error
/// payload (`{"status": "error", ...}`) yields an empty list.
#[instrument(level = "info", skip_all, fields(%endpoint))]
pub async fn fetch_articles(
    client: &Client,
    endpoint: &str,
    api_key: &str,
) -> Result<Vec<RawArticle>, Box<dyn Error>> {
    let url = Url::parse_with_params(
        endpoint,
        &[
            ("q", QUERY),
            ("language", "en"),
            ("pageSize", PAGE_SIZE),
            ("sortBy", "publishedAt"),
        ],
    )?;

    let response = client.get(url).header("X-Api-Key", api_key).send().await?;
    let status = response.status();
    let body = response.text().await?;
    let feed: ArticleFeed = decode_json(&body, "newsapi")?;

    info!(%status, count = feed.articles.len(), "Fetched NewsAPI articles");
    Ok(feed.articles)
}
