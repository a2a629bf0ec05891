//! Judgment types produced by the engine.

use serde::{Deserialize, Serialize};

use super::indicators::IndicatorSet;
use super::news::SentimentJudgment;

/// Ordinal trend scale. `Overbought`/`Oversold` only come out of the RSI
/// classifier and never appear as an overall trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    StrongBullish,
    Bullish,
    Neutral,
    Bearish,
    StrongBearish,
    Overbought,
    Oversold,
}

impl TrendLabel {
    /// Score used when averaging component trends.
    pub fn score(self) -> f64 {
        match self {
            TrendLabel::StrongBullish => 2.0,
            TrendLabel::Bullish => 1.0,
            TrendLabel::Neutral => 0.0,
            TrendLabel::Bearish => -1.0,
            TrendLabel::StrongBearish => -2.0,
            TrendLabel::Overbought => 0.5,
            TrendLabel::Oversold => -0.5,
        }
    }

    /// Score used by the fusion stage, in [-1, 1].
    pub fn technical_score(self) -> f64 {
        match self {
            TrendLabel::StrongBullish => 1.0,
            TrendLabel::Bullish => 0.5,
            TrendLabel::Bearish => -0.5,
            TrendLabel::StrongBearish => -1.0,
            TrendLabel::Neutral | TrendLabel::Overbought | TrendLabel::Oversold => 0.0,
        }
    }

    pub fn is_strong(self) -> bool {
        matches!(self, TrendLabel::StrongBullish | TrendLabel::StrongBearish)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrendLabel::StrongBullish => "strong_bullish",
            TrendLabel::Bullish => "bullish",
            TrendLabel::Neutral => "neutral",
            TrendLabel::Bearish => "bearish",
            TrendLabel::StrongBearish => "strong_bearish",
            TrendLabel::Overbought => "overbought",
            TrendLabel::Oversold => "oversold",
        }
    }
}

impl std::fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "strong_buy",
            Recommendation::Buy => "buy",
            Recommendation::Hold => "hold",
            Recommendation::Sell => "sell",
            Recommendation::StrongSell => "strong_sell",
        }
    }
}

impl From<TrendLabel> for Recommendation {
    fn from(trend: TrendLabel) -> Self {
        match trend {
            TrendLabel::StrongBullish => Recommendation::StrongBuy,
            TrendLabel::Bullish => Recommendation::Buy,
            TrendLabel::Bearish => Recommendation::Sell,
            TrendLabel::StrongBearish => Recommendation::StrongSell,
            TrendLabel::Neutral | TrendLabel::Overbought | TrendLabel::Oversold => {
                Recommendation::Hold
            }
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-indicator trend labels feeding the overall technical trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTrends {
    pub ema: TrendLabel,
    pub rsi: TrendLabel,
    pub macd: TrendLabel,
}

impl ComponentTrends {
    pub fn all_agree(&self) -> bool {
        self.ema == self.rsi && self.ema == self.macd
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalJudgment {
    pub trend: TrendLabel,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub trend_score: f64,
    pub component_trends: ComponentTrends,
    pub indicators: IndicatorSet,
    pub support_levels: [f64; 3],
    pub resistance_levels: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedResult {
    pub technical: TechnicalJudgment,
    pub sentiment: SentimentJudgment,
    pub combined_score: f64,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub technical_contribution: f64,
    pub sentiment_contribution: f64,
}
