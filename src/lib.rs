//! Trendfuse signal fusion engine.
//!
//! Derives a technical judgment from a price series, aggregates news
//! sentiment, and fuses both into one recommendation.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{AnalysisError, ScoringError};
