//! Fixed articles used when the run has no credentials.

use crate::models::RawArticle;

/// The two canned articles returned by every fetcher in canned mode.
pub fn articles() -> Vec<RawArticle> {
    vec![
        RawArticle::new("AI beats humans at chess again", "https://example.com/ai1"),
        RawArticle::new("New GPT model released by OpenAI", "https://example.com/ai2"),
    ]
}
