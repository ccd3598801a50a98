//! Run configuration, built once at startup and passed down by reference.
//!
//! The only decision made here is the run [`Mode`]: a live run needs all
//! five credentials, anything less switches the whole run to canned data.

use crate::cli::Cli;

pub const GNEWS_URL: &str = "https://gnews.io/api/v4/search";
pub const NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";
pub const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const TELEGRAM_URL: &str = "https://api.telegram.org";

/// The complete credential set required for a live run.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub gnews_api_key: String,
    pub newsapi_key: String,
    pub openai_api_key: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Returns `Some` only if every value is non-empty.
    pub fn complete(
        gnews_api_key: &str,
        newsapi_key: &str,
        openai_api_key: &str,
        telegram_bot_token: &str,
        telegram_chat_id: &str,
    ) -> Option<Self> {
        let all = [
            gnews_api_key,
            newsapi_key,
            openai_api_key,
            telegram_bot_token,
            telegram_chat_id,
        ];
        if all.iter().any(|value| value.is_empty()) {
            return None;
        }
        Some(Self {
            gnews_api_key: gnews_api_key.to_string(),
            newsapi_key: newsapi_key.to_string(),
            openai_api_key: openai_api_key.to_string(),
            telegram_bot_token: telegram_bot_token.to_string(),
            telegram_chat_id: telegram_chat_id.to_string(),
        })
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish_non_exhaustive()
    }
}

/// Whether this run talks to the real APIs or uses canned data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Live(Credentials),
    Canned,
}

/// Base URLs of the four remote APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// GNews search endpoint.
    pub gnews: String,
    /// NewsAPI "everything" endpoint.
    pub newsapi: String,
    /// OpenAI-compatible chat completions endpoint.
    pub openai: String,
    /// Telegram Bot API root; `/bot<token>/sendMessage` is appended.
    pub telegram: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gnews: GNEWS_URL.to_string(),
            newsapi: NEWSAPI_URL.to_string(),
            openai: OPENAI_URL.to_string(),
            telegram: TELEGRAM_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub model: String,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let mode = match Credentials::complete(
            &cli.gnews_api_key,
            &cli.newsapi_key,
            &cli.openai_api_key,
            &cli.telegram_bot_token,
            &cli.telegram_chat_id,
        ) {
            Some(credentials) => Mode::Live(credentials),
            None => Mode::Canned,
        };

        Self {
            mode,
            model: cli.model.clone(),
            endpoints: Endpoints::default(),
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.mode, Mode::Canned)
    }
}
