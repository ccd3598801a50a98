//! The daily run: fetch, merge, summarize, deliver.

use crate::backend::NewsBackend;
use crate::merge::merge_articles;
use crate::models::RunReport;
use std::error::Error;
use tracing::{info, instrument};

/// Run the workflow once against `backend`.
///
/// Steps run strictly in order. A fetch or summarize error aborts the run
/// and is returned; a delivery problem is only recorded in the report, and
/// the completion line is logged either way.
#[instrument(level = "info", skip_all)]
pub async fn run<B: NewsBackend>(backend: &B) -> Result<RunReport, Box<dyn Error>> {
    info!("Starting Daily AI News workflow");

    let gnews = backend.fetch_gnews().await?;
    let newsapi = backend.fetch_newsapi().await?;
    let articles = merge_articles(&gnews, &newsapi);
    info!(
        gnews = gnews.len(),
        newsapi = newsapi.len(),
        merged = articles.len(),
        "Fetched and merged {} articles.",
        articles.len()
    );

    let digest = backend.summarize(&articles).await?;
    // Delivery outcomes are logged where they happen.
    let delivery = backend.deliver(&digest).await;

    info!(delivery = delivery.label(), "Daily news summary completed.");
    Ok(RunReport {
        articles,
        digest,
        delivery,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CannedBackend, LiveBackend};
    use crate::config::{Credentials, Endpoints};
    use crate::models::{Article, RawArticle};
    use crate::outputs::DeliveryStatus;
    use mockito::Matcher;
    use reqwest::Client;

    #[tokio::test]
    async fn test_canned_run_deduplicates_identical_lists() {
        let report = run(&CannedBackend).await.unwrap();

        assert_eq!(report.articles.len(), 2);
        assert_eq!(report.digest.matches("• ").count(), 2);
        assert!(
            report
                .digest
                .contains("• AI beats humans at chess again (https://example.com/ai1)")
        );
        assert!(
            report
                .digest
                .contains("• New GPT model released by OpenAI (https://example.com/ai2)")
        );
        assert_eq!(report.delivery, DeliveryStatus::Logged);
        assert_eq!(report.delivery.label(), "logged");
    }

    /// Canned data with a messaging API that always refuses.
    struct RefusingDelivery;

    impl NewsBackend for RefusingDelivery {
        async fn fetch_gnews(&self) -> Result<Vec<RawArticle>, Box<dyn Error>> {
            CannedBackend.fetch_gnews().await
        }

        async fn fetch_newsapi(&self) -> Result<Vec<RawArticle>, Box<dyn Error>> {
            CannedBackend.fetch_newsapi().await
        }

        async fn summarize(&self, articles: &[Article]) -> Result<String, Box<dyn Error>> {
            CannedBackend.summarize(articles).await
        }

        async fn deliver(&self, _digest: &str) -> DeliveryStatus {
            DeliveryStatus::Rejected {
                status: 500,
                body: "internal error".to_string(),
            }
        }
    }

    #[tokio::test]
    async fn test_delivery_failure_does_not_abort() {
        let report = run(&RefusingDelivery).await.unwrap();

        assert_eq!(report.articles.len(), 2);
        assert!(!report.delivery.is_ok());
        assert_eq!(report.delivery.label(), "rejected");
    }

    /// A backend whose first provider is down.
    struct BrokenFetch;

    impl NewsBackend for BrokenFetch {
        async fn fetch_gnews(&self) -> Result<Vec<RawArticle>, Box<dyn Error>> {
            Err("connection reset".into())
        }

        async fn fetch_newsapi(&self) -> Result<Vec<RawArticle>, Box<dyn Error>> {
            unreachable!("the run stops at the first failed fetch")
        }

        async fn summarize(&self, _articles: &[Article]) -> Result<String, Box<dyn Error>> {
            unreachable!()
        }

        async fn deliver(&self, _digest: &str) -> DeliveryStatus {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_the_run() {
        let err = run(&BrokenFetch).await.unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
    }

    #[tokio::test]
    async fn test_live_run_against_mock_services() {
        let mut server = mockito::Server::new_async().await;
        let gnews = server
            .mock("GET", "/api/v4/search")
            .match_query(Matcher::UrlEncoded("apikey".into(), "g".into()))
            .with_status(200)
            .with_body(
                r#"{"articles": [
                    {"title": "Shared story ", "url": "https://g.example/shared"},
                    {"title": "GNews only", "url": "https://g.example/only"}
                ]}"#,
            )
            .create_async()
            .await;
        let newsapi = server
            .mock("GET", "/v2/everything")
            .match_header("x-api-key", "n")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"status": "ok", "articles": [
                    {"title": "Shared story", "url": "https://n.example/shared"},
                    {"title": "  ", "url": "https://n.example/blank"},
                    {"title": "NewsAPI only", "url": "https://n.example/only"}
                ]}"#,
            )
            .create_async()
            .await;
        let openai = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::Regex("NewsAPI only".to_string()))
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "摘要"}}]}"#)
            .create_async()
            .await;
        let telegram = server
            .mock("POST", "/bott/sendMessage")
            .match_body(Matcher::UrlEncoded("chat_id".into(), "c".into()))
            .with_status(403)
            .with_body(r#"{"ok": false, "description": "Forbidden: bot was blocked by the user"}"#)
            .create_async()
            .await;

        let endpoints = Endpoints {
            gnews: format!("{}/api/v4/search", server.url()),
            newsapi: format!("{}/v2/everything", server.url()),
            openai: format!("{}/v1/chat/completions", server.url()),
            telegram: server.url(),
        };
        let credentials = Credentials::complete("g", "n", "o", "t", "c").unwrap();
        let backend = LiveBackend::new(Client::new(), credentials, "gpt-4o-mini", endpoints);

        let report = run(&backend).await.unwrap();

        let titles: Vec<&str> = report.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Shared story", "GNews only", "NewsAPI only"]);
        assert_eq!(report.articles[0].url, "https://g.example/shared");
        assert!(report.digest.ends_with("摘要"));
        assert!(matches!(report.delivery, DeliveryStatus::Rejected { status: 403, .. }));

        gnews.assert_async().await;
        newsapi.assert_async().await;
        openai.assert_async().await;
        telegram.assert_async().await;
    }
}
