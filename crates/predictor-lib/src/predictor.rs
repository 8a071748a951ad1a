//! Score and grade prediction
//!
//! `GradePredictor` is the one model instance the service holds for its
//! whole lifetime. The training outcome is an explicit state: an
//! untrained model fails every prediction fast, with the reason training
//! failed.

use crate::models::{Grade, PredictionRequest, PredictionResult, TrainingReport};
use crate::trainer::TrainedModel;
use thiserror::Error;

/// Outcome of the one startup training attempt
#[derive(Debug, Clone)]
pub enum ModelState {
    Trained(TrainedModel),
    Untrained { reason: String },
}

/// Prediction failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error("model not trained: {reason}")]
    ModelUnavailable { reason: String },
}

/// Prediction facade over the fitted model
#[derive(Debug, Clone)]
pub struct GradePredictor {
    state: ModelState,
}

impl GradePredictor {
    pub fn trained(model: TrainedModel) -> Self {
        Self {
            state: ModelState::Trained(model),
        }
    }

    pub fn untrained(reason: impl Into<String>) -> Self {
        Self {
            state: ModelState::Untrained {
                reason: reason.into(),
            },
        }
    }

    pub fn is_trained(&self) -> bool {
        matches!(self.state, ModelState::Trained(_))
    }

    /// Why the model is unavailable, if it is
    pub fn untrained_reason(&self) -> Option<&str> {
        match &self.state {
            ModelState::Trained(_) => None,
            ModelState::Untrained { reason } => Some(reason),
        }
    }

    /// Holdout evaluation of the fitted model, if trained
    pub fn report(&self) -> Option<&TrainingReport> {
        match &self.state {
            ModelState::Trained(model) => Some(&model.report),
            ModelState::Untrained { .. } => None,
        }
    }

    /// Predict a score and grade for one validated request
    ///
    /// Pure function of the fitted parameters and the input: the raw
    /// linear score is clamped to [0,100], rounded to 2 decimals, and the
    /// grade is derived from the rounded value so the returned pair is
    /// always consistent with the band table.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError> {
        let model = match &self.state {
            ModelState::Trained(model) => model,
            ModelState::Untrained { reason } => {
                return Err(PredictError::ModelUnavailable {
                    reason: reason.clone(),
                })
            }
        };

        let raw = model.params.raw_score(
            request.study_hours,
            request.attendance,
            request.participation,
        );
        let predicted_score = round2(raw.clamp(0.0, 100.0));

        Ok(PredictionResult {
            predicted_score,
            predicted_grade: Grade::from_score(predicted_score),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
