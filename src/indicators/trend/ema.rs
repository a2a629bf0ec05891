//! Moving average indicators (EMA, SMA)

use crate::common::math;
use crate::models::indicators::MovingAverages;

/// Windows reported in every indicator set.
pub const MOVING_AVERAGE_WINDOWS: [usize; 3] = [20, 50, 200];

/// Latest EMA for a specific period
pub fn calculate_ema(closes: &[f64], period: usize) -> Option<f64> {
    math::latest(&math::ema_series(closes, period))
}

/// Latest SMA for a specific period
pub fn calculate_sma(closes: &[f64], period: usize) -> Option<f64> {
    math::latest(&math::sma_series(closes, period))
}

/// SMA and EMA at 20, 50 and 200 periods
pub fn calculate_moving_averages(closes: &[f64]) -> MovingAverages {
    let [short, mid, long] = MOVING_AVERAGE_WINDOWS;
    MovingAverages {
        sma20: calculate_sma(closes, short),
        sma50: calculate_sma(closes, mid),
        sma200: calculate_sma(closes, long),
        ema20: calculate_ema(closes, short),
        ema50: calculate_ema(closes, mid),
        ema200: calculate_ema(closes, long),
    }
}
