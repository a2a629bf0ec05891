//! Price history snapshot consumed by the indicator calculator.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume: Option<f64>,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self {
            timestamp,
            close,
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }
}

/// Timestamp as it arrives on the wire: epoch milliseconds or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl RawTimestamp {
    pub fn parse(&self) -> Result<DateTime<Utc>, AnalysisError> {
        match self {
            RawTimestamp::Millis(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .ok_or_else(|| AnalysisError::validation(format!("Timestamp out of range: {}", ms))),
            RawTimestamp::Text(text) => parse_timestamp_text(text.trim()),
        }
    }
}

fn parse_timestamp_text(text: &str) -> Result<DateTime<Utc>, AnalysisError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Some(naive) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }
    Err(AnalysisError::validation(format!("Unparseable timestamp: '{}'", text)))
}

/// Loosely typed price point used at the API boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPricePoint {
    #[serde(default)]
    pub timestamp: Option<RawTimestamp>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl TryFrom<RawPricePoint> for PricePoint {
    type Error = AnalysisError;

    fn try_from(raw: RawPricePoint) -> Result<Self, Self::Error> {
        let timestamp = raw
            .timestamp
            .ok_or_else(|| AnalysisError::validation("Price data must include timestamp and close columns"))?
            .parse()?;
        let close = raw
            .close
            .ok_or_else(|| AnalysisError::validation("Price data must include timestamp and close columns"))?;

        Ok(Self {
            timestamp,
            close,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            volume: raw.volume,
        })
    }
}

/// Chronologically ordered price history.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub const MIN_POINTS: usize = 2;

    /// Build a series, sorting by timestamp. Unsorted input is accepted.
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self, AnalysisError> {
        if points.is_empty() {
            return Err(AnalysisError::validation("No price data provided"));
        }
        if points.len() < Self::MIN_POINTS {
            return Err(AnalysisError::validation(format!(
                "Price series needs at least {} points, got {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|p| !p.close.is_finite()) {
            return Err(AnalysisError::validation(format!(
                "Close price at {} is not a finite number",
                bad.timestamp
            )));
        }

        points.sort_by_key(|p| p.timestamp);
        Ok(Self { points })
    }

    pub fn from_raw(raw: Vec<RawPricePoint>) -> Result<Self, AnalysisError> {
        let points = raw
            .into_iter()
            .map(PricePoint::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
