//! Technical indicator calculations over close prices.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

use crate::models::indicators::IndicatorSet;

/// Compute the full indicator set at the latest of `closes`.
///
/// Indicators whose window exceeds the available history are left as
/// `None`; deciding whether that is fatal belongs to the classifier.
pub fn calculate_indicator_set(closes: &[f64]) -> IndicatorSet {
    IndicatorSet {
        rsi: momentum::calculate_rsi_default(closes),
        macd: momentum::calculate_macd_default(closes),
        moving_averages: trend::calculate_moving_averages(closes),
        bollinger_bands: volatility::calculate_bollinger_bands_default(closes),
    }
}
