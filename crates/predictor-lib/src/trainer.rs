//! Ordinary-least-squares training
//!
//! Splits the dataset 80/20 with a fixed shuffle seed, fits weights and
//! bias by solving the normal equations, and evaluates R², MAE, and RMSE
//! on the holdout. Metrics are diagnostic only and never gate training.

use crate::models::{ModelParameters, Record, TrainingReport};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use thiserror::Error;
use tracing::info;

/// Fixed seed for the train/holdout shuffle
pub const SPLIT_SEED: u64 = 42;

/// Minimum number of records required to fit
pub const MIN_RECORDS: usize = 10;

/// Fraction of rows withheld for evaluation
const HOLDOUT_FRACTION: f64 = 0.2;

/// Relative pivot tolerance for the normal-equation solve
const PIVOT_EPSILON: f64 = 1e-12;

/// Number of unknowns: three weights plus the bias
const DIM: usize = 4;

/// Training failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainError {
    #[error("dataset has {got} records, need at least {need}")]
    NotEnoughData { got: usize, need: usize },

    #[error("feature matrix is singular, cannot solve normal equations")]
    SingularSystem,
}

/// A fitted model with its holdout evaluation
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub params: ModelParameters,
    pub report: TrainingReport,
}

/// Fit an ordinary-least-squares model on 80% of `records` and evaluate
/// on the remaining 20%
pub fn fit(records: &[Record]) -> Result<TrainedModel, TrainError> {
    if records.len() < MIN_RECORDS {
        return Err(TrainError::NotEnoughData {
            got: records.len(),
            need: MIN_RECORDS,
        });
    }

    let mut indices: Vec<usize> = (0..records.len()).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(SPLIT_SEED));

    let holdout_len = ((records.len() as f64 * HOLDOUT_FRACTION).round() as usize)
        .clamp(1, records.len() - 1);
    let (holdout_idx, train_idx) = indices.split_at(holdout_len);

    let params = solve_least_squares(records, train_idx)?;
    let (r_squared, mae, rmse) = evaluate(&params, records, holdout_idx);

    info!(
        train_rows = train_idx.len(),
        holdout_rows = holdout_idx.len(),
        r_squared,
        mae,
        rmse,
        "Model fitted"
    );

    Ok(TrainedModel {
        params,
        report: TrainingReport {
            r_squared,
            mae,
            rmse,
            train_rows: train_idx.len(),
            holdout_rows: holdout_idx.len(),
            trained_at: chrono::Utc::now().timestamp(),
        },
    })
}

/// Build and solve the normal equations `XᵀX c = Xᵀy` over the training
/// rows, where the feature vector is [study_hours, attendance,
/// participation, 1]
fn solve_least_squares(records: &[Record], train_idx: &[usize]) -> Result<ModelParameters, TrainError> {
    let mut xtx = [[0.0f64; DIM]; DIM];
    let mut xty = [0.0f64; DIM];

    for &idx in train_idx {
        let record = &records[idx];
        let row = [
            record.study_hours,
            record.attendance,
            f64::from(record.participation),
            1.0,
        ];
        for i in 0..DIM {
            for j in 0..DIM {
                xtx[i][j] += row[i] * row[j];
            }
            xty[i] += row[i] * record.score;
        }
    }

    let solution = solve_linear_system(xtx, xty)?;

    Ok(ModelParameters {
        weights: [solution[0], solution[1], solution[2]],
        bias: solution[3],
    })
}

/// Gaussian elimination with partial pivoting
fn solve_linear_system(mut a: [[f64; DIM]; DIM], mut b: [f64; DIM]) -> Result<[f64; DIM], TrainError> {
    let scale = a
        .iter()
        .flatten()
        .fold(1.0f64, |acc, v| acc.max(v.abs()));
    let tolerance = PIVOT_EPSILON * scale;

    for col in 0..DIM {
        let mut pivot = col;
        for row in col + 1..DIM {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < tolerance {
            return Err(TrainError::SingularSystem);
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..DIM {
            let factor = a[row][col] / a[col][col];
            for k in col..DIM {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; DIM];
    for col in (0..DIM).rev() {
        let mut sum = b[col];
        for k in col + 1..DIM {
            sum -= a[col][k] * x[k];
        }
        x[col] = sum / a[col][col];
    }

    Ok(x)
}

/// Compute R², MAE, and RMSE over the holdout rows
///
/// A zero-variance holdout makes R² undefined; it is reported as 0.
fn evaluate(params: &ModelParameters, records: &[Record], holdout_idx: &[usize]) -> (f64, f64, f64) {
    let n = holdout_idx.len() as f64;
    let mean: f64 = holdout_idx.iter().map(|&i| records[i].score).sum::<f64>() / n;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    let mut abs_sum = 0.0;

    for &idx in holdout_idx {
        let record = &records[idx];
        let predicted = params.raw_score(record.study_hours, record.attendance, record.participation);
        let residual = record.score - predicted;
        ss_res += residual * residual;
        ss_tot += (record.score - mean) * (record.score - mean);
        abs_sum += residual.abs();
    }

    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };
    let mae = abs_sum / n;
    let rmse = (ss_res / n).sqrt();

    (r_squared, mae, rmse)
}
