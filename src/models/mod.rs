//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod news;
pub mod price;
pub mod signal;

pub use indicators::{BollingerBandsIndicator, IndicatorSet, MacdIndicator, MovingAverages};
pub use news::{
    NewsItem, Reliability, ScoredNewsItem, SentimentJudgment, SentimentLabel, SentimentScore,
};
pub use price::{PricePoint, PriceSeries, RawPricePoint, RawTimestamp};
pub use signal::{ComponentTrends, FusedResult, Recommendation, TechnicalJudgment, TrendLabel};
