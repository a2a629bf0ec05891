//! Sentiment scoring collaborator.
//!
//! The scoring model is external; the engine only sees this trait. An
//! instance is constructed once and injected into request handlers.

pub mod http;

use async_trait::async_trait;

use crate::error::ScoringError;
use crate::models::news::SentimentScore;

pub use http::{HttpSentimentScorer, SENTIMENT_PATH};

#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Score one text. Empty or unprocessable text is a `ScoringError`.
    async fn score(&self, text: &str) -> Result<SentimentScore, ScoringError>;
}
