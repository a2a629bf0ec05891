//! HTTP client for a remote sentiment-scoring service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::SentimentScorer;
use crate::error::ScoringError;
use crate::models::news::{SentimentLabel, SentimentScore};

pub const SENTIMENT_PATH: &str = "/api/v1/sentiment-analysis";

#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    sentiment_score: f64,
    #[serde(default)]
    sentiment_label: Option<SentimentLabel>,
}

pub struct HttpSentimentScorer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSentimentScorer {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ScoringError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScoringError::Transport(e.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SentimentScorer for HttpSentimentScorer {
    async fn score(&self, text: &str) -> Result<SentimentScore, ScoringError> {
        if text.trim().is_empty() {
            return Err(ScoringError::EmptyText);
        }

        let url = format!("{}{}", self.base_url, SENTIMENT_PATH);
        let resp = self
            .client
            .post(&url)
            .json(&ScoreRequest { text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScoringError::Timeout
                } else {
                    ScoringError::Transport(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScoringError::Status(status.as_u16()));
        }

        let body: ScoreResponse = resp
            .json()
            .await
            .map_err(|e| ScoringError::InvalidResponse(e.to_string()))?;

        if !body.sentiment_score.is_finite() {
            return Err(ScoringError::InvalidResponse(
                "sentiment_score is not a finite number".to_string(),
            ));
        }

        let mut score = SentimentScore::new(body.sentiment_score);
        if let Some(label) = body.sentiment_label {
            score.label = label;
        }
        debug!(score = score.score, label = ?score.label, "Scored text");
        Ok(score)
    }
}
