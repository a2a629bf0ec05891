//! Unit tests for technical/sentiment fusion

use trendfuse::indicators::structure::SupportResistanceLevels;
use trendfuse::models::indicators::IndicatorSet;
use trendfuse::models::news::SentimentJudgment;
use trendfuse::models::signal::{ComponentTrends, Recommendation, TechnicalJudgment, TrendLabel};
use trendfuse::signals::fusion::{combined_recommendation, fuse};
use trendfuse::signals::technical::aggregate;
use trendfuse::signals::{FusionConfidence, FusionWeights};

use crate::support::approx_eq;

fn technical(label: TrendLabel) -> TechnicalJudgment {
    let components = ComponentTrends {
        ema: label,
        rsi: label,
        macd: label,
    };
    let levels = SupportResistanceLevels {
        support: [0.0; 3],
        resistance: [0.0; 3],
    };
    aggregate(components, IndicatorSet::default(), levels)
}

fn sentiment(score: f64) -> SentimentJudgment {
    SentimentJudgment {
        overall_score: score,
        per_item: Vec::new(),
    }
}

#[test]
fn weights_sum_to_one() {
    assert!(FusionWeights::verify());
}

#[test]
fn strong_agreement_fuses_to_strong_buy() {
    let tech = technical(TrendLabel::StrongBullish);
    assert_eq!(tech.trend, TrendLabel::StrongBullish);

    let result = fuse(&tech, &sentiment(0.5));
    assert!(approx_eq(result.combined_score, 0.85));
    assert_eq!(result.recommendation, Recommendation::StrongBuy);
    assert!(approx_eq(result.confidence, 0.8));
    assert!(approx_eq(result.technical_contribution, 0.7));
    assert!(approx_eq(result.sentiment_contribution, 0.15));
}

#[test]
fn disagreement_lowers_confidence() {
    let result = fuse(&technical(TrendLabel::Bearish), &sentiment(0.4));
    assert!(approx_eq(result.combined_score, -0.35 + 0.12));
    assert_eq!(result.recommendation, Recommendation::Hold);
    assert!(approx_eq(result.confidence, 0.6));
}

#[test]
fn zero_score_counts_as_disagreement() {
    assert!(approx_eq(FusionConfidence::calculate(0.0, 0.5), 0.6));
    assert!(approx_eq(FusionConfidence::calculate(0.0, 0.0), 0.6));
    assert!(approx_eq(FusionConfidence::calculate(-0.5, -0.1), 0.8));
}

#[test]
fn cut_points_fall_to_lower_band() {
    assert_eq!(combined_recommendation(0.7), Recommendation::Buy);
    assert_eq!(combined_recommendation(0.70001), Recommendation::StrongBuy);
    assert_eq!(combined_recommendation(0.3), Recommendation::Hold);
    assert_eq!(combined_recommendation(-0.3), Recommendation::Sell);
    assert_eq!(combined_recommendation(-0.7), Recommendation::StrongSell);
    assert_eq!(combined_recommendation(0.0), Recommendation::Hold);
}

#[test]
fn fused_result_keeps_inputs() {
    let tech = technical(TrendLabel::Neutral);
    let sent = sentiment(-0.9);
    let result = fuse(&tech, &sent);
    assert_eq!(result.technical, tech);
    assert_eq!(result.sentiment, sent);
    assert_eq!(result.recommendation, Recommendation::Hold);
}
