//! External collaborators.

pub mod sentiment;

pub use sentiment::{HttpSentimentScorer, SentimentScorer};
