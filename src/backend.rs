//! The data source behind the pipeline.
//!
//! The pipeline is generic over [`NewsBackend`] and never asks whether it
//! is running against real services. `main` picks the implementation once:
//!
//! - [`LiveBackend`]: GNews, NewsAPI, OpenAI and Telegram over HTTP
//! - [`CannedBackend`]: fixed articles, a concatenated digest, log-only delivery

use crate::api::ChatClient;
use crate::config::{Credentials, Endpoints};
use crate::digest;
use crate::fetchers::{canned, gnews, newsapi};
use crate::models::{Article, RawArticle};
use crate::outputs::{DeliveryStatus, telegram};
use reqwest::Client;
use std::error::Error;
use tracing::info;

/// Everything the pipeline needs from the outside world.
pub trait NewsBackend {
    /// Articles from the first provider.
    async fn fetch_gnews(&self) -> Result<Vec<RawArticle>, Box<dyn Error>>;

    /// Articles from the second provider.
    async fn fetch_newsapi(&self) -> Result<Vec<RawArticle>, Box<dyn Error>>;

    /// Turn the merged articles into the final digest, date header included.
    async fn summarize(&self, articles: &[Article]) -> Result<String, Box<dyn Error>>;

    /// Hand the digest to its reader. Never fails the run.
    async fn deliver(&self, digest: &str) -> DeliveryStatus;
}

/// Talks to the real services.
#[derive(Debug)]
pub struct LiveBackend {
    client: Client,
    credentials: Credentials,
    model: String,
    endpoints: Endpoints,
}

impl LiveBackend {
    pub fn new(client: Client, credentials: Credentials, model: impl Into<String>, endpoints: Endpoints) -> Self {
        Self {
            client,
            credentials,
            model: model.into(),
            endpoints,
        }
    }
}

impl NewsBackend for LiveBackend {
    async fn fetch_gnews(&self) -> Result<Vec<RawArticle>, Box<dyn Error>> {
        gnews::fetch_articles(&self.client, &self.endpoints.gnews, &self.credentials.gnews_api_key).await
    }

    async fn fetch_newsapi(&self) -> Result<Vec<RawArticle>, Box<dyn Error>> {
        newsapi::fetch_articles(&self.client, &self.endpoints.newsapi, &self.credentials.newsapi_key).await
    }

    async fn summarize(&self, articles: &[Article]) -> Result<String, Box<dyn Error>> {
        let header = digest::today_header();
        let prompt = digest::user_prompt(articles)?;
        let chat = ChatClient {
            client: &self.client,
            endpoint: &self.endpoints.openai,
            api_key: &self.credentials.openai_api_key,
            model: &self.model,
        };
        let body = chat.complete(digest::SYSTEM_PROMPT, &prompt).await?;
        Ok(header + &body)
    }

    async fn deliver(&self, digest: &str) -> DeliveryStatus {
        telegram::send_message(
            &self.client,
            &self.endpoints.telegram,
            &self.credentials.telegram_bot_token,
            &self.credentials.telegram_chat_id,
            digest,
        )
        .await
    }
}

/// Runs the pipeline without credentials or network access.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedBackend;

impl NewsBackend for CannedBackend {
    async fn fetch_gnews(&self) -> Result<Vec<RawArticle>, Box<dyn Error>> {
        info!("[MOCK] Fetching GNews articles");
        Ok(canned::articles())
    }

    async fn fetch_newsapi(&self) -> Result<Vec<RawArticle>, Box<dyn Error>> {
        info!("[MOCK] Fetching NewsAPI articles");
        Ok(canned::articles())
    }

    async fn summarize(&self, articles: &[Article]) -> Result<String, Box<dyn Error>> {
        info!("[MOCK] Summarizing and translating articles");
        Ok(digest::today_header() + &digest::bullet_lines(articles))
    }

    async fn deliver(&self, digest: &str) -> DeliveryStatus {
        info!("[MOCK] Telegram message:\n{digest}");
        DeliveryStatus::Logged
    }
}
