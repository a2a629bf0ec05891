//! Integration tests for the HTTP sentiment scorer client

use serde_json::json;
use std::time::Duration;
use trendfuse::error::ScoringError;
use trendfuse::models::news::SentimentLabel;
use trendfuse::services::sentiment::{HttpSentimentScorer, SentimentScorer, SENTIMENT_PATH};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn scorer_for(server: &MockServer) -> HttpSentimentScorer {
    HttpSentimentScorer::new(server.uri(), Duration::from_secs(2)).expect("scorer client")
}

#[tokio::test]
async fn posts_text_and_uses_returned_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .and(body_json(json!({ "text": "steady inflows" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentiment_score": 0.4,
            "sentiment_label": "neutral",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let score = scorer_for(&server).score("steady inflows").await.unwrap();
    assert_eq!(score.score, 0.4);
    assert_eq!(score.label, SentimentLabel::Neutral);
}

#[tokio::test]
async fn derives_label_and_clamps_score() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sentiment_score": -1.7 })))
        .mount(&server)
        .await;

    let score = scorer_for(&server).score("exchange insolvent").await.unwrap();
    assert_eq!(score.score, -1.0);
    assert_eq!(score.label, SentimentLabel::VeryBearish);
}

#[tokio::test]
async fn empty_text_never_reaches_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = scorer_for(&server).score("   ").await.unwrap_err();
    assert_eq!(err, ScoringError::EmptyText);
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = scorer_for(&server).score("anything").await.unwrap_err();
    assert_eq!(err, ScoringError::Status(503));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = scorer_for(&server).score("anything").await.unwrap_err();
    assert!(matches!(err, ScoringError::InvalidResponse(_)));
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "sentiment_score": 0.1 }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let scorer = HttpSentimentScorer::new(server.uri(), Duration::from_millis(50)).unwrap();
    let err = scorer.score("anything").await.unwrap_err();
    assert_eq!(err, ScoringError::Timeout);
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let scorer = HttpSentimentScorer::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
    let err = scorer.score("anything").await.unwrap_err();
    assert!(matches!(err, ScoringError::Transport(_)));
}
