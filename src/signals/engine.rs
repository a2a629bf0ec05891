//! Signal engine: the operations exposed to the transport layer.
//!
//! Every stage is a pure function over values built for one request. The
//! only suspending step is scoring news through the injected scorer.

use futures_util::stream::{self, StreamExt};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{ServiceConfig, DEFAULT_SCORER_CONCURRENCY, DEFAULT_SCORER_TIMEOUT_MS};
use crate::error::{AnalysisError, ScoringError};
use crate::indicators::{self, structure};
use crate::models::news::{NewsItem, ScoredNewsItem, SentimentJudgment};
use crate::models::price::PriceSeries;
use crate::models::signal::{FusedResult, TechnicalJudgment};
use crate::services::sentiment::SentimentScorer;
use crate::signals::{classifier, fusion, sentiment, technical};

/// Limits applied while scoring news items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringOptions {
    pub concurrency: usize,
    pub timeout: Duration,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_SCORER_CONCURRENCY,
            timeout: Duration::from_millis(DEFAULT_SCORER_TIMEOUT_MS),
        }
    }
}

impl From<&ServiceConfig> for ScoringOptions {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            concurrency: config.scorer_concurrency,
            timeout: config.scorer_timeout,
        }
    }
}

/// Scored items in input order plus how many were left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsScoring {
    pub scored: Vec<ScoredNewsItem>,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CombinedAnalysis {
    pub result: FusedResult,
    pub skipped_items: usize,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Indicators → component trends → overall technical judgment.
    pub fn compute_technical_judgment(
        series: &PriceSeries,
    ) -> Result<TechnicalJudgment, AnalysisError> {
        let closes = series.closes();
        let indicators = indicators::calculate_indicator_set(&closes);
        let components = classifier::classify(&indicators)?;

        let levels = structure::calculate_support_resistance_default(&closes)
            .ok_or_else(|| AnalysisError::validation("No price data provided"))?;

        let judgment = technical::aggregate(components, indicators, levels);
        debug!(
            points = series.len(),
            trend = %judgment.trend,
            trend_score = judgment.trend_score,
            confidence = judgment.confidence,
            "Computed technical judgment"
        );
        Ok(judgment)
    }

    pub fn compute_sentiment_judgment(items: &[ScoredNewsItem]) -> SentimentJudgment {
        let judgment = sentiment::aggregate_sentiment(items);
        debug!(
            items = items.len(),
            overall_score = judgment.overall_score,
            "Computed sentiment judgment"
        );
        judgment
    }

    pub fn fuse(technical: &TechnicalJudgment, sentiment: &SentimentJudgment) -> FusedResult {
        let result = fusion::fuse(technical, sentiment);
        debug!(
            combined_score = result.combined_score,
            recommendation = %result.recommendation,
            confidence = result.confidence,
            "Fused judgments"
        );
        result
    }

    /// Score each item through `scorer`, keeping input order.
    ///
    /// Items without usable text, failed calls and timed-out calls are
    /// skipped; they never fail the batch.
    pub async fn score_news(
        scorer: &dyn SentimentScorer,
        items: &[NewsItem],
        options: ScoringOptions,
    ) -> NewsScoring {
        let pending: Vec<_> = items
            .iter()
            .map(|item| score_one(scorer, item, options))
            .collect();
        let outcomes: Vec<Option<ScoredNewsItem>> = stream::iter(pending)
            .buffered(options.concurrency.max(1))
            .collect()
            .await;

        let skipped = outcomes.iter().filter(|o| o.is_none()).count();
        NewsScoring {
            scored: outcomes.into_iter().flatten().collect(),
            skipped,
        }
    }

    /// Technical judgment, news scoring, sentiment aggregation and fusion
    /// composed over in-memory values.
    ///
    /// The technical stage runs first so that a bad series fails before
    /// any scorer call is made.
    pub async fn analyze_combined(
        series: &PriceSeries,
        news: &[NewsItem],
        scorer: &dyn SentimentScorer,
        options: ScoringOptions,
    ) -> Result<CombinedAnalysis, AnalysisError> {
        let technical = Self::compute_technical_judgment(series)?;
        let scoring = Self::score_news(scorer, news, options).await;
        let sentiment = Self::compute_sentiment_judgment(&scoring.scored);

        Ok(CombinedAnalysis {
            result: Self::fuse(&technical, &sentiment),
            skipped_items: scoring.skipped,
        })
    }
}

/// Score one item, `None` when it has no text or the scorer fails.
async fn score_one(
    scorer: &dyn SentimentScorer,
    item: &NewsItem,
    options: ScoringOptions,
) -> Option<ScoredNewsItem> {
    let Some(text) = item.scoring_text() else {
        debug!(title = %item.title, "Skipping news item without text");
        return None;
    };

    let scored = match tokio::time::timeout(options.timeout, scorer.score(text)).await {
        Ok(result) => result,
        Err(_) => Err(ScoringError::Timeout),
    };

    match scored {
        Ok(score) => Some(item.with_score(score)),
        Err(e) => {
            warn!(title = %item.title, url = %item.url, error = %e, "Excluding news item from sentiment");
            None
        }
    }
}
