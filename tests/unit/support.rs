//! Shared fixtures for unit tests

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use trendfuse::models::price::{PricePoint, PriceSeries};

pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn points_from_closes(closes: &[f64]) -> Vec<PricePoint> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::new(start + Duration::days(i as i64), close))
        .collect()
}

pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    PriceSeries::new(points_from_closes(closes)).expect("valid series")
}

pub fn uptrend(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64 * 0.5).collect()
}

pub fn downtrend(count: usize) -> Vec<f64> {
    (0..count).map(|i| 300.0 - i as f64 * 0.5).collect()
}

pub fn choppy(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + (i as f64 * 0.13).cos() * 3.0)
        .collect()
}
