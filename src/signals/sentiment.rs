//! Reliability-weighted sentiment aggregation.

use crate::models::news::{ScoredNewsItem, SentimentJudgment};

/// Weighted sum of item scores divided by the number of items.
///
/// The divisor is the item count, not the weight sum, so the result is
/// biased towards zero by low-reliability items rather than renormalized.
pub fn aggregate_sentiment(items: &[ScoredNewsItem]) -> SentimentJudgment {
    let overall_score = if items.is_empty() {
        0.0
    } else {
        let weighted: f64 = items
            .iter()
            .map(|item| item.sentiment_score * item.reliability.weight())
            .sum();
        weighted / items.len() as f64
    };

    SentimentJudgment {
        overall_score,
        per_item: items.to_vec(),
    }
}
