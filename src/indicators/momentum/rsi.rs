//! RSI (Relative Strength Index) indicator

/// RSI series with Wilder smoothing.
///
/// Average gain/loss start as the simple mean of the first `period`
/// changes, then recurse with `alpha = 1 / period`. The first `period`
/// points are `None`.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return result;
    }

    let changes: Vec<(f64, f64)> = closes
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .collect();

    let period_f = period as f64;
    let mut avg_gain = changes[..period].iter().map(|(g, _)| g).sum::<f64>() / period_f;
    let mut avg_loss = changes[..period].iter().map(|(_, l)| l).sum::<f64>() / period_f;
    result[period] = Some(rsi_value(avg_gain, avg_loss));

    for (i, &(gain, loss)) in changes.iter().enumerate().skip(period) {
        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
        result[i + 1] = Some(rsi_value(avg_gain, avg_loss));
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}

/// Latest RSI value, `None` when history is shorter than `period + 1`.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<f64> {
    rsi_series(closes, period).last().copied().flatten()
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Option<f64> {
    calculate_rsi(closes, 14)
}
