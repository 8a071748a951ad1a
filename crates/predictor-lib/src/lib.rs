//! Core library for the student performance predictor
//!
//! This crate provides the core functionality for:
//! - Dataset loading from CSV with a deterministic synthetic fallback
//! - Ordinary-least-squares training with holdout evaluation
//! - Score and grade prediction
//! - Health reporting and observability

pub mod dataset;
pub mod health;
pub mod models;
pub mod observability;
pub mod predictor;
pub mod trainer;

pub use health::{ComponentStatus, HealthResponse, ModelHealth, ReadinessResponse};
pub use models::*;
pub use observability::{ServiceMetrics, StructuredLogger};
pub use predictor::{GradePredictor, ModelState, PredictError};
pub use trainer::{TrainError, TrainedModel};
