//! Signal evaluation: classification, aggregation and fusion.

pub mod classifier;
pub mod engine;
pub mod fusion;
pub mod sentiment;
pub mod technical;

pub use engine::{CombinedAnalysis, NewsScoring, ScoringOptions, SignalEngine};
pub use fusion::{FusionConfidence, FusionWeights};
pub use technical::TechnicalConfidence;
