//! Prometheus metrics for the API server.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub analysis_requests_total: IntCounterVec,
    pub news_items_skipped_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Number of HTTP requests currently being served",
        )?;
        let analysis_requests_total = IntCounterVec::new(
            Opts::new("analysis_requests_total", "Analyses performed, by kind"),
            &["kind"],
        )?;
        let news_items_skipped_total = IntCounter::new(
            "news_items_skipped_total",
            "News items excluded from sentiment aggregation",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(analysis_requests_total.clone()))?;
        registry.register(Box::new(news_items_skipped_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            analysis_requests_total,
            news_items_skipped_total,
        })
    }

    pub fn record_analysis(&self, kind: &str) {
        self.analysis_requests_total.with_label_values(&[kind]).inc();
    }

    /// Render all registered metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
