//! Telegram Bot API delivery.
//!
//! Sends the digest with `parse_mode=Markdown` as a single `sendMessage`
//! call. The bot token is part of the URL path, so the URL is never logged.

use super::DeliveryStatus;
use crate::utils::truncate_for_log;
use reqwest::{Client, StatusCode};
use tracing::{error, info, instrument};

/// Post `text` to `chat_id`.
///
/// Only HTTP 200 counts as success. Any other status, or a transport
/// error, is logged and returned as a [`DeliveryStatus`] instead of an
/// error so the caller always reaches the end of the run.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `api_root` - Bot API root, normally [`crate::config::TELEGRAM_URL`]
/// * `bot_token` - Token issued by BotFather
/// * `chat_id` - Target chat or channel id
/// * `text` - The digest
#[instrument(level = "info", skip_all, fields(%chat_id, chars = text.chars().count()))]
pub async fn send_message(
    client: &Client,
    api_root: &str,
    bot_token: &str,
    chat_id: &str,
    text: &str,
) -> DeliveryStatus {
    let url = format!("{}/bot{}/sendMessage", api_root.trim_end_matches('/'), bot_token);
    let form = [("chat_id", chat_id), ("text", text), ("parse_mode", "Markdown")];

    let response = match client.post(&url).form(&form).send().await {
        Ok(response) => response,
        Err(e) => {
            // reqwest errors include the URL, which carries the token.
            let reason = e.without_url().to_string();
            error!(error = %reason, "Failed to send message");
            return DeliveryStatus::Failed { reason };
        }
    };

    let status = response.status();
    if status == StatusCode::OK {
        info!("Message sent to Telegram successfully");
        return DeliveryStatus::Sent;
    }

    let body = response.text().await.unwrap_or_default();
    error!(
        %status,
        body = %truncate_for_log(&body, 500),
        "Failed to send message"
    );
    DeliveryStatus::Rejected {
        status: status.as_u16(),
        body,
    }
}
