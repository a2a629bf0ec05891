//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::ServiceConfig;
use crate::error::{AnalysisError, ScoringError};
use crate::metrics::Metrics;
use crate::models::news::{NewsItem, SentimentJudgment, SentimentScore};
use crate::models::price::{PriceSeries, RawPricePoint};
use crate::models::signal::{FusedResult, Recommendation, TechnicalJudgment};
use crate::services::sentiment::{HttpSentimentScorer, SentimentScorer};
use crate::signals::{ScoringOptions, SignalEngine};

pub const SERVICE_NAME: &str = "trendfuse-signal-engine";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub scorer: Arc<dyn SentimentScorer>,
    pub scoring: ScoringOptions,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>, scorer: Arc<dyn SentimentScorer>, scoring: ScoringOptions) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            scorer,
            scoring,
        }
    }
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        match &self {
            AnalysisError::Validation(msg) => error_body(StatusCode::BAD_REQUEST, msg.clone()),
            AnalysisError::Computation { .. } => {
                error_body(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        }
    }
}

impl IntoResponse for ScoringError {
    fn into_response(self) -> Response {
        match self {
            ScoringError::EmptyText => error_body(StatusCode::BAD_REQUEST, self.to_string()),
            other => error_body(StatusCode::BAD_GATEWAY, other.to_string()),
        }
    }
}

/// JSON body whose rejections are reported as validation errors.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AnalysisError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(|rejection| AnalysisError::validation(rejection.body_text()))
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
pub struct TechnicalAnalysisRequest {
    #[serde(default)]
    prices: Option<Vec<RawPricePoint>>,
}

#[derive(Debug, Deserialize)]
pub struct SentimentAnalysisRequest {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CombinedAnalysisRequest {
    #[serde(default)]
    prices: Option<Vec<RawPricePoint>>,
    #[serde(default)]
    news: Option<Vec<NewsItem>>,
}

#[derive(Debug, Serialize)]
pub struct TechnicalAnalysisResponse {
    #[serde(flatten)]
    pub judgment: TechnicalJudgment,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CombinedSummary {
    pub score: f64,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub technical_contribution: f64,
    pub sentiment_contribution: f64,
}

#[derive(Debug, Serialize)]
pub struct CombinedAnalysisResponse {
    pub technical_analysis: TechnicalAnalysisResponse,
    pub sentiment_analysis: SentimentJudgment,
    pub combined_analysis: CombinedSummary,
    pub timestamp: DateTime<Utc>,
}

impl From<FusedResult> for CombinedAnalysisResponse {
    fn from(result: FusedResult) -> Self {
        let timestamp = Utc::now();
        Self {
            technical_analysis: TechnicalAnalysisResponse {
                judgment: result.technical,
                timestamp,
            },
            sentiment_analysis: result.sentiment,
            combined_analysis: CombinedSummary {
                score: result.combined_score,
                recommendation: result.recommendation,
                confidence: result.confidence,
                technical_contribution: result.technical_contribution,
                sentiment_contribution: result.sentiment_contribution,
            },
            timestamp,
        }
    }
}

/// Technical judgment for a posted price series
async fn technical_analysis(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TechnicalAnalysisRequest>,
) -> Result<Json<TechnicalAnalysisResponse>, AnalysisError> {
    let raw = request
        .prices
        .ok_or_else(|| AnalysisError::validation("No price data provided"))?;
    let series = PriceSeries::from_raw(raw)?;

    let judgment = SignalEngine::compute_technical_judgment(&series)?;
    state.metrics.record_analysis("technical");

    Ok(Json(TechnicalAnalysisResponse {
        judgment,
        timestamp: Utc::now(),
    }))
}

/// Score a single text through the configured scorer
async fn sentiment_analysis(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SentimentAnalysisRequest>,
) -> Result<Json<SentimentScore>, ScoringError> {
    let text = request.text.ok_or(ScoringError::EmptyText)?;
    let score = state.scorer.score(&text).await.map_err(|e| {
        if e != ScoringError::EmptyText {
            error!(error = %e, "Sentiment scorer failed");
        }
        e
    })?;
    state.metrics.record_analysis("sentiment");
    Ok(Json(score))
}

/// Technical and sentiment judgments fused into one recommendation
async fn combined_analysis(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CombinedAnalysisRequest>,
) -> Result<Json<CombinedAnalysisResponse>, AnalysisError> {
    let (raw, news) = match (request.prices, request.news) {
        (Some(raw), Some(news)) => (raw, news),
        _ => return Err(AnalysisError::validation("Missing required data")),
    };
    let series = PriceSeries::from_raw(raw)?;

    let analysis =
        SignalEngine::analyze_combined(&series, &news, state.scorer.as_ref(), state.scoring).await?;

    state.metrics.record_analysis("combined");
    state
        .metrics
        .news_items_skipped_total
        .inc_by(analysis.skipped_items as u64);

    Ok(Json(analysis.result.into()))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/v1/technical-analysis", post(technical_analysis))
        .route("/api/v1/sentiment-analysis", post(sentiment_analysis))
        .route("/api/v1/combined-analysis", post(combined_analysis))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let scorer = HttpSentimentScorer::new(config.scorer_url.clone(), config.scorer_timeout)?;
    info!(scorer_url = %scorer.base_url(), "Sentiment scorer configured");

    let state = AppState::new(metrics, Arc::new(scorer), ScoringOptions::from(&config));
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
