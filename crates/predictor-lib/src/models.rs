//! Core data models for the performance predictor

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Maximum study hours accepted at the request boundary (hours in a week)
pub const MAX_STUDY_HOURS: f64 = 168.0;

/// Minimum attendance percentage accepted at the request boundary
pub const MIN_ATTENDANCE: f64 = 50.0;

/// Maximum attendance percentage accepted at the request boundary
pub const MAX_ATTENDANCE: f64 = 100.0;

/// Maximum class participation count accepted at the request boundary
pub const MAX_PARTICIPATION: u32 = 10;

/// One row of the training dataset
///
/// Serde renames match the CSV header names, so rows are resolved by
/// column name rather than position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "weekly_self_study_hours")]
    pub study_hours: f64,
    #[serde(rename = "attendance_percentage")]
    pub attendance: f64,
    #[serde(rename = "class_participation")]
    pub participation: u32,
    #[serde(rename = "total_score")]
    pub score: f64,
}

/// Fitted ordinary-least-squares coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Weights for [study_hours, attendance, participation]
    pub weights: [f64; 3],
    pub bias: f64,
}

impl ModelParameters {
    /// Apply the linear model to one feature triple, without clamping
    pub fn raw_score(&self, study_hours: f64, attendance: f64, participation: u32) -> f64 {
        self.weights[0] * study_hours
            + self.weights[1] * attendance
            + self.weights[2] * f64::from(participation)
            + self.bias
    }
}

/// Diagnostic metrics from the holdout evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub r_squared: f64,
    pub mae: f64,
    pub rmse: f64,
    pub train_rows: usize,
    pub holdout_rows: usize,
    pub trained_at: i64,
}

/// Which branch of the load-or-generate strategy produced the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "path")]
pub enum DatasetSource {
    File(PathBuf),
    Synthetic,
}

/// A single prediction request, validated at the boundary before the
/// core is invoked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub study_hours: f64,
    pub attendance: f64,
    pub participation: u32,
}

/// Request field out of the allowed range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Study hours must be between 0 and 168")]
    StudyHours,
    #[error("Attendance must be between 50 and 100")]
    Attendance,
    #[error("Participation must be between 0 and 10")]
    Participation,
}

impl PredictionRequest {
    /// Check the request against the boundary ranges
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.study_hours.is_finite()
            || self.study_hours < 0.0
            || self.study_hours > MAX_STUDY_HOURS
        {
            return Err(ValidationError::StudyHours);
        }
        if !self.attendance.is_finite()
            || self.attendance < MIN_ATTENDANCE
            || self.attendance > MAX_ATTENDANCE
        {
            return Err(ValidationError::Attendance);
        }
        if self.participation > MAX_PARTICIPATION {
            return Err(ValidationError::Participation);
        }
        Ok(())
    }
}

/// Letter grade bands, evaluated highest-first with inclusive lower bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a score in [0,100] to its letter grade
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Prediction output returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted score, clamped to [0,100] and rounded to 2 decimals
    pub predicted_score: f64,
    pub predicted_grade: Grade,
}
