//! HTTP API for predictions, health checks, and Prometheus metrics

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use predictor_lib::{
    DatasetSource, GradePredictor, HealthResponse, PredictionRequest, ReadinessResponse,
    ServiceMetrics, StructuredLogger,
};
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: GradePredictor,
    pub dataset_source: DatasetSource,
    pub metrics: ServiceMetrics,
    pub logger: StructuredLogger,
}

/// Error body returned for rejected or failed requests
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Prediction endpoint - validates the request at the boundary, then
/// invokes the core predictor
async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Response {
    if let Err(err) = request.validate() {
        state.metrics.inc_validation_errors();
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response();
    }

    let start = Instant::now();
    match state.predictor.predict(&request) {
        Ok(result) => {
            state
                .metrics
                .observe_prediction_latency(start.elapsed().as_secs_f64());
            state.metrics.inc_predictions();
            state.logger.log_prediction(&request, &result);
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            state.metrics.inc_prediction_errors();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Health check response - returns 200 while the model can serve, 503 if
/// training failed
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = HealthResponse::evaluate(&state.predictor, &state.dataset_source);

    let status_code = if health.status.is_operational() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(health))
}

/// Readiness check response - returns 200 if ready, 503 if not ready
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = ReadinessResponse::evaluate(&state.predictor);

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
