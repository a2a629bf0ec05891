//! Technical judgment aggregation.

use crate::common::math;
use crate::indicators::structure::SupportResistanceLevels;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::{ComponentTrends, Recommendation, TechnicalJudgment, TrendLabel};

/// Confidence rule for the technical judgment.
pub struct TechnicalConfidence;

impl TechnicalConfidence {
    pub const BASE: f64 = 0.7;
    /// Replaces the base for strong trends; not added to it.
    pub const STRONG_TREND: f64 = 0.85;
    pub const DISAGREEMENT_PENALTY: f64 = 0.1;

    /// Not clamped.
    pub fn calculate(trend: TrendLabel, components: &ComponentTrends) -> f64 {
        let mut confidence = if trend.is_strong() {
            Self::STRONG_TREND
        } else {
            Self::BASE
        };
        if !components.all_agree() {
            confidence -= Self::DISAGREEMENT_PENALTY;
        }
        confidence
    }
}

/// Mean of the three component scores.
pub fn trend_score(components: &ComponentTrends) -> f64 {
    math::mean(&[
        components.ema.score(),
        components.rsi.score(),
        components.macd.score(),
    ])
    .unwrap_or(0.0)
}

/// Five-way overall trend from a mean component score.
pub fn overall_trend(score: f64) -> TrendLabel {
    if score > 1.5 {
        TrendLabel::StrongBullish
    } else if score > 0.5 {
        TrendLabel::Bullish
    } else if score > -0.5 {
        TrendLabel::Neutral
    } else if score > -1.5 {
        TrendLabel::Bearish
    } else {
        TrendLabel::StrongBearish
    }
}

pub fn aggregate(
    components: ComponentTrends,
    indicators: IndicatorSet,
    levels: SupportResistanceLevels,
) -> TechnicalJudgment {
    let score = trend_score(&components);
    let trend = overall_trend(score);

    TechnicalJudgment {
        trend,
        recommendation: Recommendation::from(trend),
        confidence: TechnicalConfidence::calculate(trend, &components),
        trend_score: score,
        component_trends: components,
        indicators,
        support_levels: levels.support,
        resistance_levels: levels.resistance,
    }
}
