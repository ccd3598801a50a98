//! Merging and deduplication of the two provider feeds.

use crate::models::{Article, RawArticle};
use itertools::Itertools;
use tracing::{debug, instrument};

/// Merge two article lists into one list of unique articles.
///
/// Articles are visited in the order `first ++ second`. Titles are trimmed;
/// an article whose trimmed title is empty, or equal to a title already
/// kept, is dropped. The surviving articles keep their first-seen order.
///
/// Title equality is exact after trimming. Case or punctuation
/// differences produce distinct articles.
#[instrument(level = "debug", skip_all, fields(first = first.len(), second = second.len()))]
pub fn merge_articles(first: &[RawArticle], second: &[RawArticle]) -> Vec<Article> {
    let merged: Vec<Article> = first
        .iter()
        .chain(second)
        .map(|raw| Article {
            title: raw.title.trim().to_string(),
            url: raw.url.clone(),
        })
        .filter(|article| !article.title.is_empty())
        .unique_by(|article| article.title.clone())
        .collect();

    debug!(merged = merged.len(), "Merged article feeds");
    merged
}
