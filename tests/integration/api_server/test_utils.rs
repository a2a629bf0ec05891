//! Test utilities for API server integration tests

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use trendfuse::core::http::{create_router, AppState};
use trendfuse::metrics::Metrics;
use trendfuse::services::sentiment::{HttpSentimentScorer, SENTIMENT_PATH};
use trendfuse::signals::ScoringOptions;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Router under test plus the mocked upstream scorer.
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub scorer_service: MockServer,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let scorer_service = MockServer::start().await;
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let scorer = HttpSentimentScorer::new(scorer_service.uri(), Duration::from_secs(2))
            .expect("scorer client");
        let scoring = ScoringOptions {
            concurrency: 2,
            timeout: Duration::from_secs(2),
        };

        let state = AppState::new(metrics.clone(), Arc::new(scorer), scoring);
        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            scorer_service,
        }
    }
}

/// Respond with `score` to any scoring request whose body mentions `fragment`.
pub async fn mount_score(server: &MockServer, fragment: &str, score: f64) {
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .and(body_string_contains(fragment))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentiment_score": score,
        })))
        .mount(server)
        .await;
}

pub async fn mount_failure(server: &MockServer, fragment: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .and(body_string_contains(fragment))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Daily closes rising by 0.5 from 100, as wire price points.
pub fn rising_prices(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                + chrono::Duration::days(i as i64);
            json!({
                "timestamp": date.format("%Y-%m-%d").to_string(),
                "close": 100.0 + i as f64 * 0.5,
            })
        })
        .collect()
}
