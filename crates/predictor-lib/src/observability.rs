//! Observability for the prediction service
//!
//! Provides:
//! - Prometheus metrics (prediction latency, request counters, model info)
//! - Structured logging for training and prediction events

use crate::models::{DatasetSource, PredictionRequest, PredictionResult, TrainingReport};
use prometheus::{
    register_gauge, register_gauge_vec, register_histogram, register_int_gauge, Gauge, GaugeVec,
    Histogram, IntGauge,
};
use std::sync::OnceLock;
use tracing::{error, info};

/// Default histogram buckets for latency measurements (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<ServiceMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct ServiceMetricsInner {
    prediction_latency_seconds: Histogram,
    predictions_total: IntGauge,
    prediction_errors_total: IntGauge,
    validation_errors_total: IntGauge,
    model_r_squared: Gauge,
    model_info: GaugeVec,
    training_rows: IntGauge,
}

impl ServiceMetricsInner {
    fn new() -> Self {
        Self {
            prediction_latency_seconds: register_histogram!(
                "student_predictor_prediction_latency_seconds",
                "Time spent computing one prediction",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register prediction_latency_seconds"),

            predictions_total: register_int_gauge!(
                "student_predictor_predictions_total",
                "Total number of predictions served"
            )
            .expect("Failed to register predictions_total"),

            prediction_errors_total: register_int_gauge!(
                "student_predictor_prediction_errors_total",
                "Total number of prediction requests that failed in the core"
            )
            .expect("Failed to register prediction_errors_total"),

            validation_errors_total: register_int_gauge!(
                "student_predictor_validation_errors_total",
                "Total number of requests rejected at the validation boundary"
            )
            .expect("Failed to register validation_errors_total"),

            model_r_squared: register_gauge!(
                "student_predictor_model_r_squared",
                "Holdout R-squared of the fitted model"
            )
            .expect("Failed to register model_r_squared"),

            model_info: register_gauge_vec!(
                "student_predictor_model_info",
                "Information about the trained model",
                &["source"]
            )
            .expect("Failed to register model_info"),

            training_rows: register_int_gauge!(
                "student_predictor_training_rows",
                "Number of rows the model was fitted on"
            )
            .expect("Failed to register training_rows"),
        }
    }
}

/// Service metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct ServiceMetrics {
    _private: (),
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ServiceMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ServiceMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record a prediction latency observation
    pub fn observe_prediction_latency(&self, duration_secs: f64) {
        self.inner().prediction_latency_seconds.observe(duration_secs);
    }

    /// Increment the served-predictions counter
    pub fn inc_predictions(&self) {
        self.inner().predictions_total.inc();
    }

    /// Increment the core prediction error counter
    pub fn inc_prediction_errors(&self) {
        self.inner().prediction_errors_total.inc();
    }

    /// Increment the boundary validation error counter
    pub fn inc_validation_errors(&self) {
        self.inner().validation_errors_total.inc();
    }

    /// Record the training outcome
    pub fn set_model_trained(&self, report: &TrainingReport, source: &DatasetSource) {
        self.inner().model_r_squared.set(report.r_squared);
        self.inner()
            .training_rows
            .set(report.train_rows as i64);

        let source_label = match source {
            DatasetSource::File(_) => "file",
            DatasetSource::Synthetic => "synthetic",
        };
        self.inner().model_info.reset();
        self.inner()
            .model_info
            .with_label_values(&[source_label])
            .set(1.0);
    }
}

/// Structured logger for service events
///
/// Provides consistent logging for training outcomes and served
/// predictions.
#[derive(Clone)]
pub struct StructuredLogger {
    service: String,
}

impl StructuredLogger {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Log service startup
    pub fn log_startup(&self, version: &str) {
        info!(
            event = "service_started",
            service = %self.service,
            version = %version,
            "Performance predictor started"
        );
    }

    /// Log a completed training run with its holdout metrics
    pub fn log_training_complete(&self, report: &TrainingReport, source: &DatasetSource) {
        info!(
            event = "model_trained",
            service = %self.service,
            train_rows = report.train_rows,
            holdout_rows = report.holdout_rows,
            r_squared = report.r_squared,
            mae = report.mae,
            rmse = report.rmse,
            synthetic = matches!(source, DatasetSource::Synthetic),
            "Model trained"
        );
    }

    /// Log a training failure that leaves the service untrained
    pub fn log_training_failed(&self, reason: &str) {
        error!(
            event = "training_failed",
            service = %self.service,
            reason = %reason,
            "Training failed, predictions disabled for this process"
        );
    }

    /// Log a served prediction
    pub fn log_prediction(&self, request: &PredictionRequest, result: &PredictionResult) {
        info!(
            event = "prediction_served",
            service = %self.service,
            study_hours = request.study_hours,
            attendance = request.attendance,
            participation = request.participation,
            predicted_score = result.predicted_score,
            predicted_grade = %result.predicted_grade,
            "Prediction served"
        );
    }

    /// Log service shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "service_shutdown",
            service = %self.service,
            reason = %reason,
            "Performance predictor shutting down"
        );
    }
}
