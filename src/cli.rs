//! Command-line interface definitions for Daily AI News.
//!
//! The program is meant to be run with no arguments from a scheduler. Every
//! option is backed by an environment variable, which is the normal way to
//! configure it; the flags exist for one-off overrides.

use clap::Parser;

/// Command-line arguments for the Daily AI News pipeline.
///
/// An empty credential counts as missing. If any of the five credentials
/// is missing the whole run falls back to canned data (see
/// [`crate::config::Config::from_cli`]).
///
/// # Examples
///
/// ```sh
/// # Normal scheduled run, credentials taken from the environment or .env
/// daily_ai_news
///
/// # Use a different chat model
/// OPENAI_MODEL=gpt-4o daily_ai_news
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// GNews API key
    #[arg(long, env = "GNEWS_API_KEY", default_value = "", hide_env_values = true)]
    pub gnews_api_key: String,

    /// NewsAPI key
    #[arg(long, env = "NEWSAPI_KEY", default_value = "", hide_env_values = true)]
    pub newsapi_key: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", default_value = "", hide_env_values = true)]
    pub telegram_bot_token: String,

    /// Telegram chat the digest is posted to; group and channel ids are negative
    #[arg(
        long,
        env = "TELEGRAM_CHAT_ID",
        default_value = "",
        hide_env_values = true,
        allow_hyphen_values = true
    )]
    pub telegram_chat_id: String,

    /// Chat model used to summarize and translate the news
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,
}
