//! Support and Resistance bands

/// Trailing window used for the band calculation.
pub const SUPPORT_RESISTANCE_LOOKBACK: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportResistanceLevels {
    pub support: [f64; 3],
    pub resistance: [f64; 3],
}

/// Calculate support and resistance bands from recent closes
///
/// Uses the close range over the last `lookback` points:
/// support = [min, current - 5% range, current - 10% range]
/// resistance = [current + 5% range, current + 10% range, max]
///
/// Levels are returned in that order even when the current close lies
/// outside the window's range.
pub fn calculate_support_resistance(
    closes: &[f64],
    lookback: usize,
) -> Option<SupportResistanceLevels> {
    let current = *closes.last()?;
    let window = &closes[closes.len().saturating_sub(lookback.max(1))..];

    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    Some(SupportResistanceLevels {
        support: [min, current - range * 0.05, current - range * 0.1],
        resistance: [current + range * 0.05, current + range * 0.1, max],
    })
}

/// Calculate support/resistance with default lookback (30)
pub fn calculate_support_resistance_default(closes: &[f64]) -> Option<SupportResistanceLevels> {
    calculate_support_resistance(closes, SUPPORT_RESISTANCE_LOOKBACK)
}
