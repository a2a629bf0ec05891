//! Fusion of technical and sentiment judgments.

use crate::models::news::SentimentJudgment;
use crate::models::signal::{FusedResult, Recommendation, TechnicalJudgment};

/// Fixed stream weights.
pub struct FusionWeights;

impl FusionWeights {
    pub const TECHNICAL: f64 = 0.7;
    pub const SENTIMENT: f64 = 0.3;

    /// Verify weights sum to 1.0
    pub fn verify() -> bool {
        (Self::TECHNICAL + Self::SENTIMENT - 1.0).abs() < 0.001
    }
}

pub struct FusionConfidence;

impl FusionConfidence {
    pub const BASE: f64 = 0.7;
    pub const ADJUSTMENT: f64 = 0.1;
    pub const CEILING: f64 = 0.9;
    pub const FLOOR: f64 = 0.5;

    /// Agreement requires both scores strictly on the same side of zero.
    pub fn calculate(technical_score: f64, sentiment_score: f64) -> f64 {
        let agree = (technical_score > 0.0 && sentiment_score > 0.0)
            || (technical_score < 0.0 && sentiment_score < 0.0);
        if agree {
            (Self::BASE + Self::ADJUSTMENT).min(Self::CEILING)
        } else {
            (Self::BASE - Self::ADJUSTMENT).max(Self::FLOOR)
        }
    }
}

/// Strict thresholds: a score equal to a cut point falls to the lower band.
pub fn combined_recommendation(score: f64) -> Recommendation {
    if score > 0.7 {
        Recommendation::StrongBuy
    } else if score > 0.3 {
        Recommendation::Buy
    } else if score > -0.3 {
        Recommendation::Hold
    } else if score > -0.7 {
        Recommendation::Sell
    } else {
        Recommendation::StrongSell
    }
}

pub fn fuse(technical: &TechnicalJudgment, sentiment: &SentimentJudgment) -> FusedResult {
    let technical_score = technical.trend.technical_score();
    let sentiment_score = sentiment.overall_score;

    let technical_contribution = technical_score * FusionWeights::TECHNICAL;
    let sentiment_contribution = sentiment_score * FusionWeights::SENTIMENT;
    let combined_score = technical_contribution + sentiment_contribution;

    FusedResult {
        technical: technical.clone(),
        sentiment: sentiment.clone(),
        combined_score,
        recommendation: combined_recommendation(combined_score),
        confidence: FusionConfidence::calculate(technical_score, sentiment_score),
        technical_contribution,
        sentiment_contribution,
    }
}
