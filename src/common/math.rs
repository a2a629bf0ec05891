//! Rolling-window primitives over close prices.
//!
//! Every series helper returns a vector aligned with its input: `None`
//! until the window has enough history, `Some(value)` afterwards.

/// Simple moving average series.
pub fn sma_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    values
        .iter()
        .enumerate()
        .scan(0.0_f64, move |sum, (i, &v)| {
            *sum += v;
            if i >= window {
                *sum -= values[i - window];
            }

            let out = if i + 1 >= window {
                Some(*sum / window as f64)
            } else {
                None
            };

            Some(out)
        })
        .collect()
}

/// Exponential moving average series with `alpha = 2 / (window + 1)`.
///
/// Seeded with the first value; values before `window - 1` are hidden.
pub fn ema_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if values.is_empty() || window == 0 {
        return vec![None; values.len()];
    }

    let alpha = 2.0 / (window as f64 + 1.0);

    values
        .iter()
        .enumerate()
        .scan(values[0], move |prev, (i, &v)| {
            let next = alpha * v + (1.0 - alpha) * *prev;
            *prev = next;
            Some(if i + 1 >= window { Some(next) } else { None })
        })
        .collect()
}

/// EMA over a partially defined series. The average starts at the first
/// defined value and keeps the leading gap.
pub fn ema_series_sparse(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let Some(start) = values.iter().position(Option::is_some) else {
        return vec![None; values.len()];
    };

    let defined: Vec<f64> = values[start..].iter().map(|v| v.unwrap_or(f64::NAN)).collect();
    let mut out = vec![None; start];
    out.extend(ema_series(&defined, window));
    out
}

/// Population standard deviation over a rolling window.
pub fn rolling_std_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            let slice = &values[i + 1 - window..=i];
            let mean = slice.iter().sum::<f64>() / window as f64;
            let variance = slice.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window as f64;
            Some(variance.sqrt())
        })
        .collect()
}

/// Latest defined value of an aligned series.
pub fn latest(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
