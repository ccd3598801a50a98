//! OpenAI-compatible chat completion client.
//!
//! One request per run, no retries and no client-side timeout: a failure is
//! returned to the caller and ends the run.

use crate::utils::{decode_json, truncate_for_log};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Instant;
use tracing::{error, info, instrument};

/// A chat completion endpoint bound to one model and API key.
pub struct ChatClient<'a> {
    /// Shared HTTP client.
    pub client: &'a Client,
    /// Full URL of the `chat/completions` endpoint.
    pub endpoint: &'a str,
    /// Bearer token.
    pub api_key: &'a str,
    /// Model identifier, e.g. `gpt-4o-mini`.
    pub model: &'a str,
}

impl fmt::Debug for ChatClient<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatClient<'_> {
    /// Send a system/user prompt pair and return the first choice's text, trimmed.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-success HTTP status, a body that is
    /// not a chat completion, or a first choice without text (refusals and
    /// tool calls come back with `content: null`).
    #[instrument(level = "info", skip_all, fields(model = %self.model))]
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let request = ChatRequest {
            model: self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint)
            .bearer_auth(self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(
                %status,
                elapsed_ms = t0.elapsed().as_millis(),
                body_preview = %truncate_for_log(&body, 300),
                "Chat completion request failed"
            );
            return Err(format!("chat completion returned {status}").into());
        }

        let completion: ChatResponse = decode_json(&body, "openai")?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or("chat completion has no choices")?
            .message
            .content
            .ok_or("chat completion has no content")?;

        info!(
            elapsed_ms = t0.elapsed().as_millis(),
            chars = content.chars().count(),
            "Chat completion succeeded"
        );
        Ok(content.trim().to_string())
    }
}
