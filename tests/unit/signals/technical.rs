//! Unit tests for technical judgment aggregation

use trendfuse::indicators::structure::SupportResistanceLevels;
use trendfuse::models::indicators::IndicatorSet;
use trendfuse::models::signal::{ComponentTrends, Recommendation, TrendLabel};
use trendfuse::signals::technical::{aggregate, overall_trend, trend_score};
use trendfuse::signals::TechnicalConfidence;

use crate::support::approx_eq;

fn levels() -> SupportResistanceLevels {
    SupportResistanceLevels {
        support: [90.0, 95.0, 97.0],
        resistance: [110.0, 105.0, 103.0],
    }
}

fn trends(ema: TrendLabel, rsi: TrendLabel, macd: TrendLabel) -> ComponentTrends {
    ComponentTrends { ema, rsi, macd }
}

#[test]
fn mixed_bullish_components() {
    let components = trends(
        TrendLabel::StrongBullish,
        TrendLabel::Overbought,
        TrendLabel::Bullish,
    );
    let judgment = aggregate(components, IndicatorSet::default(), levels());

    assert!(approx_eq(judgment.trend_score, 3.5 / 3.0));
    assert_eq!(judgment.trend, TrendLabel::Bullish);
    assert_eq!(judgment.recommendation, Recommendation::Buy);
    assert!(approx_eq(judgment.confidence, 0.6));
    assert_eq!(judgment.support_levels, [90.0, 95.0, 97.0]);
    assert_eq!(judgment.resistance_levels, [110.0, 105.0, 103.0]);
}

#[test]
fn overall_trend_cut_points() {
    assert_eq!(overall_trend(1.6), TrendLabel::StrongBullish);
    assert_eq!(overall_trend(1.5), TrendLabel::Bullish);
    assert_eq!(overall_trend(0.5), TrendLabel::Neutral);
    assert_eq!(overall_trend(-0.5), TrendLabel::Bearish);
    assert_eq!(overall_trend(-1.5), TrendLabel::StrongBearish);
}

#[test]
fn strong_trend_confidence_replaces_base() {
    let components = trends(
        TrendLabel::StrongBearish,
        TrendLabel::StrongBearish,
        TrendLabel::StrongBearish,
    );
    let judgment = aggregate(components, IndicatorSet::default(), levels());

    assert_eq!(judgment.trend, TrendLabel::StrongBearish);
    assert_eq!(judgment.recommendation, Recommendation::StrongSell);
    assert!(approx_eq(judgment.confidence, 0.85));
}

#[test]
fn agreeing_components_keep_base_confidence() {
    let components = trends(TrendLabel::Bullish, TrendLabel::Bullish, TrendLabel::Bullish);
    assert!(approx_eq(
        TechnicalConfidence::calculate(TrendLabel::Bullish, &components),
        0.7
    ));
    assert!(approx_eq(trend_score(&components), 1.0));
}

#[test]
fn confidence_is_one_of_four_values() {
    let labels = [
        TrendLabel::StrongBullish,
        TrendLabel::Bullish,
        TrendLabel::Neutral,
        TrendLabel::Bearish,
        TrendLabel::StrongBearish,
        TrendLabel::Overbought,
        TrendLabel::Oversold,
    ];
    let allowed = [0.85, 0.75, 0.7, 0.6];

    for &ema in &labels {
        for &rsi in &labels {
            for &macd in &labels {
                let judgment = aggregate(trends(ema, rsi, macd), IndicatorSet::default(), levels());
                assert!(
                    allowed.iter().any(|&c| approx_eq(c, judgment.confidence)),
                    "unexpected confidence {} for {:?}",
                    judgment.confidence,
                    judgment.component_trends
                );
                assert!(!matches!(
                    judgment.trend,
                    TrendLabel::Overbought | TrendLabel::Oversold
                ));
            }
        }
    }
}
