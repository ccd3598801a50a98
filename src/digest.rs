//! Digest text: the date header, the LLM prompt and the canned rendering.

use crate::models::Article;
use chrono::{Local, NaiveDate};
use std::error::Error;
use std::fmt::Write;

/// How many stories the model is asked to keep.
pub const TOP_STORIES: usize = 15;

/// System message of the summarize-and-translate request.
pub const SYSTEM_PROMPT: &str = "You are a multilingual AI news summarizer.";

/// Greeting line that opens every digest, for the given date.
///
/// The header is followed by one blank line.
pub fn header(date: NaiveDate) -> String {
    format!("早安，這是 {} 的 AI 新聞：\n\n", date.format("%Y/%m/%d"))
}

/// [`header`] for today's local date.
pub fn today_header() -> String {
    header(Local::now().date_naive())
}

/// User message asking the model to pick, translate and link the stories.
///
/// The whole article list is embedded as JSON; nothing is truncated.
pub fn user_prompt(articles: &[Article]) -> Result<String, Box<dyn Error>> {
    let listing = serde_json::to_string(articles)?;
    Ok(format!(
        "You are an AI news assistant. Your tasks:\n\
         1. Select the {TOP_STORIES} most relevant AI technology news items from the list below.\n\
         2. Translate them into Traditional Chinese but do not translate technical English terms.\n\
         3. Include URLs.\n\
         Articles: {listing}"
    ))
}

/// One line per article in the form `• <title> (<url>)`.
pub fn bullet_lines(articles: &[Article]) -> String {
    let mut text = String::new();
    for article in articles {
        // Writing into a String cannot fail.
        let _ = writeln!(text, "• {} ({})", article.title, article.url);
    }
    text
}
