use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub ema20: Option<f64>,
    pub ema50: Option<f64>,
    pub ema200: Option<f64>,
}

/// Indicator values at the latest point of a price series.
///
/// A `None` means the series was too short for that window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: Option<f64>,
    pub macd: Option<MacdIndicator>,
    pub moving_averages: MovingAverages,
    pub bollinger_bands: Option<BollingerBandsIndicator>,
}

impl IndicatorSet {
    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_emas(mut self, ema20: f64, ema50: f64, ema200: f64) -> Self {
        self.moving_averages.ema20 = Some(ema20);
        self.moving_averages.ema50 = Some(ema50);
        self.moving_averages.ema200 = Some(ema200);
        self
    }

    /// True when every indicator produced a value.
    pub fn is_complete(&self) -> bool {
        let ma = &self.moving_averages;
        self.rsi.is_some()
            && self.macd.is_some()
            && self.bollinger_bands.is_some()
            && [ma.sma20, ma.sma50, ma.sma200, ma.ema20, ma.ema50, ma.ema200]
                .iter()
                .all(Option::is_some)
    }
}
