//! Sample dataset generation command

use anyhow::Result;
use predictor_lib::dataset;
use std::path::Path;

use crate::output::print_success;

/// Generate a synthetic dataset and write it as CSV
pub fn generate_dataset(output: &Path, count: usize, seed: u64) -> Result<()> {
    let records = dataset::generate_synthetic(count, seed);
    dataset::write_csv(output, &records)?;

    print_success(&format!(
        "Generated {} sample records to {}",
        records.len(),
        output.display()
    ));

    Ok(())
}
