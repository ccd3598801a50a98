//! # Daily AI News
//!
//! A once-a-day batch job that collects AI news from two search APIs,
//! merges and deduplicates the headlines, has an LLM pick, summarize and
//! translate them into Traditional Chinese, and posts the digest to a
//! Telegram chat.
//!
//! ## Usage
//!
//! ```sh
//! export GNEWS_API_KEY=... NEWSAPI_KEY=... OPENAI_API_KEY=...
//! export TELEGRAM_BOT_TOKEN=... TELEGRAM_CHAT_ID=...
//! daily_ai_news
//! ```
//!
//! Variables may also come from a `.env` file in the working directory. If
//! any of the five is missing, the run uses canned articles and logs the
//! digest instead of sending it.
//!
//! ## Architecture
//!
//! 1. **Fetching**: GNews and NewsAPI, one request each
//! 2. **Merging**: exact-title deduplication in first-seen order
//! 3. **Summarizing**: a single chat completion over the merged list
//! 4. **Delivery**: one Telegram `sendMessage`; failures are logged only

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod backend;
mod cli;
mod config;
mod digest;
mod fetchers;
mod merge;
mod models;
mod outputs;
mod pipeline;
mod utils;

use backend::{CannedBackend, LiveBackend};
use cli::Cli;
use config::{Config, Mode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is normal in production.
    let dotenv_path = dotenvy::dotenv().ok();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    debug!(?dotenv_path, "Environment loaded");

    let args = Cli::parse();
    let config = Config::from_cli(&args);
    info!(mock = config.is_mock(), model = %config.model, "Configuration loaded");

    let report = match config.mode {
        Mode::Live(credentials) => {
            let backend = LiveBackend::new(Client::new(), credentials, config.model, config.endpoints);
            pipeline::run(&backend).await?
        }
        Mode::Canned => {
            info!("Credentials incomplete; running with canned data");
            pipeline::run(&CannedBackend).await?
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = report.articles.len(),
        delivery = report.delivery.label(),
        "Execution complete"
    );

    Ok(())
}
