//! Indicator → trend label classification.
//!
//! Rules are evaluated on the latest row only. Missing inputs are an
//! error here: no classification rule falls back to a default.

use crate::error::AnalysisError;
use crate::models::indicators::{IndicatorSet, MacdIndicator};
use crate::models::signal::{ComponentTrends, TrendLabel};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_BULLISH: f64 = 60.0;
pub const RSI_BEARISH: f64 = 40.0;

/// EMA stack alignment. Exactly equal averages fall through to neutral.
pub fn classify_ema(ema20: f64, ema50: f64, ema200: f64) -> TrendLabel {
    if ema20 > ema50 && ema50 > ema200 {
        TrendLabel::StrongBullish
    } else if ema20 > ema50 {
        TrendLabel::Bullish
    } else if ema20 < ema50 && ema50 < ema200 {
        TrendLabel::StrongBearish
    } else if ema20 < ema50 {
        TrendLabel::Bearish
    } else {
        TrendLabel::Neutral
    }
}

/// Overbought/oversold take precedence over the 60/40 bands.
pub fn classify_rsi(rsi: f64) -> TrendLabel {
    if rsi > RSI_OVERBOUGHT {
        TrendLabel::Overbought
    } else if rsi < RSI_OVERSOLD {
        TrendLabel::Oversold
    } else if rsi > RSI_BULLISH {
        TrendLabel::Bullish
    } else if rsi < RSI_BEARISH {
        TrendLabel::Bearish
    } else {
        TrendLabel::Neutral
    }
}

pub fn classify_macd(macd: &MacdIndicator) -> TrendLabel {
    if macd.macd > macd.signal && macd.histogram > 0.0 {
        TrendLabel::Bullish
    } else if macd.macd < macd.signal && macd.histogram < 0.0 {
        TrendLabel::Bearish
    } else {
        TrendLabel::Neutral
    }
}

/// Classify all three components, naming the first missing indicator.
pub fn classify(indicators: &IndicatorSet) -> Result<ComponentTrends, AnalysisError> {
    let ma = &indicators.moving_averages;
    let ema20 = ma.ema20.ok_or_else(|| AnalysisError::missing_indicator("ema20"))?;
    let ema50 = ma.ema50.ok_or_else(|| AnalysisError::missing_indicator("ema50"))?;
    let ema200 = ma.ema200.ok_or_else(|| AnalysisError::missing_indicator("ema200"))?;
    let rsi = indicators
        .rsi
        .ok_or_else(|| AnalysisError::missing_indicator("rsi"))?;
    let macd = indicators
        .macd
        .ok_or_else(|| AnalysisError::missing_indicator("macd"))?;

    Ok(ComponentTrends {
        ema: classify_ema(ema20, ema50, ema200),
        rsi: classify_rsi(rsi),
        macd: classify_macd(&macd),
    })
}
