//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdIndicator;

/// Calculate MACD at the latest point
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD, started at the first defined MACD value
/// Histogram = MACD - Signal
pub fn calculate_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    let fast = math::ema_series(closes, fast_period);
    let slow = math::ema_series(closes, slow_period);

    let macd_line: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let signal_line = math::ema_series_sparse(&macd_line, signal_period);

    let macd = math::latest(&macd_line)?;
    let signal = math::latest(&signal_line)?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> Option<MacdIndicator> {
    calculate_macd(closes, 12, 26, 9)
}
