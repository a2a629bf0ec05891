//! Error taxonomy for the signal fusion engine.

use thiserror::Error;

/// Errors that terminate a single analysis request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Malformed or missing input; reported to the caller as-is.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An indicator needed for classification could not be computed.
    #[error("Indicator '{indicator}' unavailable: {reason}")]
    Computation {
        indicator: &'static str,
        reason: String,
    },
}

impl AnalysisError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AnalysisError::Validation(msg.into())
    }

    pub fn missing_indicator(indicator: &'static str) -> Self {
        AnalysisError::Computation {
            indicator,
            reason: "insufficient price history for the latest point".to_string(),
        }
    }
}

/// Failure of the external sentiment scorer for one piece of text.
///
/// Recovered during aggregation by excluding the affected item.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("No text provided")]
    EmptyText,
    #[error("Sentiment scorer unreachable: {0}")]
    Transport(String),
    #[error("Sentiment scorer returned status {0}")]
    Status(u16),
    #[error("Invalid sentiment scorer response: {0}")]
    InvalidResponse(String),
    #[error("Sentiment scorer timed out")]
    Timeout,
}
