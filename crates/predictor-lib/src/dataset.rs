//! Dataset loading and synthetic generation
//!
//! Loads training records from a CSV file by header name. A file that
//! cannot be opened is not an error: the loader falls back to a
//! deterministically generated synthetic dataset so the service can still
//! train. Malformed rows and header-only files do fail loading.

use crate::models::{DatasetSource, Record};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Number of synthetic records generated for the fallback dataset
pub const SAMPLE_COUNT: usize = 10_000;

/// Fixed seed for synthetic generation, load-bearing for reproducibility
pub const DATA_SEED: u64 = 42;

/// Standard deviation of the Gaussian noise added to synthetic scores
const NOISE_STD_DEV: f64 = 5.0;

/// Dataset loading error
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed row {row}: {source}")]
    Malformed { row: usize, source: csv::Error },

    #[error("dataset {path} contains no records")]
    Empty { path: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] csv::Error),
}

/// Load records from `path`, or generate the synthetic fallback dataset
/// if the file cannot be opened
///
/// Returns which branch was taken alongside the records. Parse failures
/// inside an openable file are real errors and propagate.
pub fn load_or_generate(path: &Path) -> Result<(Vec<Record>, DatasetSource), DatasetError> {
    match File::open(path) {
        Ok(file) => {
            let records = read_records(file, path)?;
            info!(path = %path.display(), rows = records.len(), "Loaded dataset from CSV");
            Ok((records, DatasetSource::File(path.to_path_buf())))
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Dataset file unavailable, generating synthetic data"
            );
            let records = generate_synthetic(SAMPLE_COUNT, DATA_SEED);
            Ok((records, DatasetSource::Synthetic))
        }
    }
}

fn read_records(file: File, path: &Path) -> Result<Vec<Record>, DatasetError> {
    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize::<Record>().enumerate() {
        // Row numbers are 1-based and exclude the header
        let record = result.map_err(|source| DatasetError::Malformed {
            row: idx + 1,
            source,
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(records)
}

/// Generate `count` synthetic records from a fixed seed
///
/// Scores follow `1.2*study_hours + 0.8*attendance + 3*participation`
/// plus zero-mean Gaussian noise, clamped to [30,100].
pub fn generate_synthetic(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, NOISE_STD_DEV).expect("noise std dev is positive");

    (0..count)
        .map(|_| {
            let study_hours: f64 = rng.random_range(0.0..40.0);
            let attendance: f64 = rng.random_range(50.0..100.0);
            let participation: u32 = rng.random_range(0..=10);

            let score = 1.2 * study_hours
                + 0.8 * attendance
                + 3.0 * f64::from(participation)
                + noise.sample(&mut rng);

            Record {
                study_hours,
                attendance,
                participation,
                score: score.clamp(30.0, 100.0),
            }
        })
        .collect()
}

/// Write records to a CSV file with the standard header row
pub fn write_csv(path: &Path, records: &[Record]) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|source| DatasetError::Write {
        path: path.display().to_string(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| DatasetError::Write {
        path: path.display().to_string(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_synthetic_generation_is_deterministic() {
        let first = generate_synthetic(100, DATA_SEED);
        let second = generate_synthetic(100, DATA_SEED);
        assert_eq!(first.len(), 100);
        assert_eq!(first, second);
    }

    #[test]
    fn test_synthetic_records_within_ranges() {
        let records = generate_synthetic(500, DATA_SEED);
        for record in &records {
            assert!((0.0..40.0).contains(&record.study_hours));
            assert!((50.0..100.0).contains(&record.attendance));
            assert!(record.participation <= 10);
            assert!((30.0..=100.0).contains(&record.score));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = generate_synthetic(50, 1);
        let second = generate_synthetic(50, 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_missing_file_falls_back_to_synthetic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.csv");

        let (records, source) = load_or_generate(&path).unwrap();
        assert_eq!(source, DatasetSource::Synthetic);
        assert_eq!(records.len(), SAMPLE_COUNT);
    }

    #[test]
    fn test_loads_csv_by_header_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "weekly_self_study_hours,attendance_percentage,class_participation,total_score"
        )
        .unwrap();
        writeln!(file, "15.5,85.0,6,82.25").unwrap();
        writeln!(file, "2.0,60.0,1,55.0").unwrap();

        let (records, source) = load_or_generate(&path).unwrap();
        assert_eq!(source, DatasetSource::File(path));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].study_hours, 15.5);
        assert_eq!(records[0].participation, 6);
        assert_eq!(records[1].score, 55.0);
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "weekly_self_study_hours,attendance_percentage,class_participation,total_score"
        )
        .unwrap();
        writeln!(file, "15.5,85.0,6,82.25").unwrap();
        writeln!(file, "oops,85.0,6,82.25").unwrap();

        let err = load_or_generate(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { row: 2, .. }));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "weekly_self_study_hours,attendance_percentage,class_participation,total_score"
        )
        .unwrap();

        let err = load_or_generate(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Empty { .. }));
    }

    #[test]
    fn test_write_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = generate_synthetic(25, 7);

        write_csv(&path, &records).unwrap();
        let (loaded, source) = load_or_generate(&path).unwrap();

        assert_eq!(source, DatasetSource::File(path));
        assert_eq!(loaded.len(), records.len());
        for (a, b) in loaded.iter().zip(&records) {
            assert!((a.score - b.score).abs() < 1e-9);
            assert_eq!(a.participation, b.participation);
        }
    }
}
