//! Data models for news articles as they move through the pipeline.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleFeed`]: The response envelope shared by GNews and NewsAPI
//! - [`RawArticle`]: A single article record as returned by a news provider
//! - [`Article`]: A cleaned, deduplicated article produced by the merge step
//! - [`RunReport`]: What a single pipeline run produced

use crate::outputs::DeliveryStatus;
use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope of both news search APIs.
///
/// Providers answer errors with a different JSON shape (`{"errors": [...]}`
/// for GNews, `{"status": "error", ...}` for NewsAPI). Those decode to an
/// empty article list rather than failing.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleFeed {
    /// The articles returned by the provider.
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// An article record as returned by a news provider.
///
/// Only the title and URL are kept; every other field of the provider
/// payload (description, source, publishedAt, ...) is ignored. A missing
/// or `null` value decodes as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawArticle {
    /// The headline, untrimmed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Link to the full story.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl RawArticle {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A deduplicated article with a non-empty, trimmed title.
///
/// Serialized into the LLM prompt, so the field names are part of what
/// the model sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
}

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct RunReport {
    /// The merged, deduplicated articles that were summarized.
    pub articles: Vec<Article>,
    /// The digest text handed to delivery.
    pub digest: String,
    /// What happened when the digest was delivered.
    pub delivery: DeliveryStatus,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
