//! Health reporting for the prediction service
//!
//! The service has no background components: health is a pure derivation
//! from the one startup training outcome. A model trained from the
//! synthetic fallback is degraded but operational; an untrained model is
//! unhealthy.

use crate::models::DatasetSource;
use crate::predictor::GradePredictor;
use serde::{Deserialize, Serialize};

/// Health status of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    /// Model trained from the configured dataset
    Healthy,
    /// Model trained, but from the synthetic fallback
    Degraded,
    /// Training failed; predictions are permanently unavailable
    Unhealthy,
}

impl ComponentStatus {
    /// Returns true if predictions can be served
    pub fn is_operational(&self) -> bool {
        matches!(self, ComponentStatus::Healthy | ComponentStatus::Degraded)
    }
}

/// Model details included in the health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelHealth {
    pub trained: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_squared: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<i64>,
}

/// Overall health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: ComponentStatus,
    pub model: ModelHealth,
    pub dataset: DatasetSource,
}

impl HealthResponse {
    /// Derive health from the training outcome and dataset source
    pub fn evaluate(predictor: &GradePredictor, dataset: &DatasetSource) -> Self {
        let (status, model) = match predictor.report() {
            Some(report) => {
                let status = match dataset {
                    DatasetSource::File(_) => ComponentStatus::Healthy,
                    DatasetSource::Synthetic => ComponentStatus::Degraded,
                };
                let message = match dataset {
                    DatasetSource::File(_) => None,
                    DatasetSource::Synthetic => {
                        Some("trained from synthetic fallback data".to_string())
                    }
                };
                (
                    status,
                    ModelHealth {
                        trained: true,
                        message,
                        r_squared: Some(report.r_squared),
                        trained_at: Some(report.trained_at),
                    },
                )
            }
            None => (
                ComponentStatus::Unhealthy,
                ModelHealth {
                    trained: false,
                    message: predictor.untrained_reason().map(str::to_string),
                    r_squared: None,
                    trained_at: None,
                },
            ),
        };

        Self {
            status,
            model,
            dataset: dataset.clone(),
        }
    }
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ReadinessResponse {
    /// A service is ready once it holds a trained model
    pub fn evaluate(predictor: &GradePredictor) -> Self {
        if predictor.is_trained() {
            Self {
                ready: true,
                reason: None,
            }
        } else {
            Self {
                ready: false,
                reason: Some("model not trained".to_string()),
            }
        }
    }
}
