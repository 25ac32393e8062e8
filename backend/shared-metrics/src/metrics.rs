use std::time::Instant;

use error_stack::ResultExt;
use lazy_static::lazy_static;
use prometheus::{
    self, register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

// Define latency buckets for histograms
const LATENCY_BUCKETS: &[f64] = &[0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0];

lazy_static! {
    #[allow(clippy::expect_used)]
    pub static ref PAYMENT_MODEL_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "payment_model_requests_total",
        "Total number of admin payment models requested",
        &["model", "outcome"]
    )
    .expect("failed to register payment_model_requests_total");

    #[allow(clippy::expect_used)]
    pub static ref PAYMENT_MODEL_BUILD_LATENCY: HistogramVec = register_histogram_vec!(
        "payment_model_build_latency_seconds",
        "Time taken to prepare an admin payment model",
        &["model"],
        LATENCY_BUCKETS.to_vec()
    )
    .expect("failed to register payment_model_build_latency_seconds");
}

/// Run `build` and record its outcome and latency under `model`.
pub fn track_model_build<T, E>(model: &str, build: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    let started = Instant::now();
    let result = build();

    PAYMENT_MODEL_BUILD_LATENCY
        .with_label_values(&[model])
        .observe(started.elapsed().as_secs_f64());

    let outcome = if result.is_ok() { "success" } else { "failure" };
    PAYMENT_MODEL_REQUESTS_TOTAL
        .with_label_values(&[model, outcome])
        .inc();

    result
}

pub async fn metrics_handler() -> error_stack::Result<String, MetricsError> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .change_context(MetricsError::EncodingError)?;
    String::from_utf8(buffer).change_context(MetricsError::Utf8Error)
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Error encoding metrics")]
    EncodingError,
    #[error("Error converting metrics to utf8")]
    Utf8Error,
}
