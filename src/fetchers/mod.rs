//! News provider clients.
//!
//! Both providers are queried for the fixed search term [`QUERY`] in
//! English and answer with the same `{"articles": [...]}` envelope, decoded
//! into [`crate::models::ArticleFeed`].
//!
//! # Supported Sources
//!
//! | Source | Module | Auth | Notes |
//! |--------|--------|------|-------|
//! | GNews | [`gnews`] | `apikey` query parameter | Provider default page size |
//! | NewsAPI | [`newsapi`] | `X-Api-Key` header | 20 newest articles |
//! | Canned | [`canned`] | none | Two fixed articles for runs without credentials |
//!
//! The HTTP status is not inspected: whatever JSON the provider returns is
//! decoded, and an error payload simply has no articles. Transport errors
//! and bodies that are not JSON are returned as errors.

pub mod canned;
pub mod gnews;
pub mod newsapi;

/// The search term sent to both providers.
pub const QUERY: &str = "AI";
