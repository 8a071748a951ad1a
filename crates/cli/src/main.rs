//! Student Performance Predictor CLI
//!
//! A command-line tool for generating sample datasets and querying a
//! running prediction server.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate, predict, status};
use predictor_lib::dataset;
use std::path::PathBuf;

/// Student Performance Predictor CLI
#[derive(Parser)]
#[command(name = "spp")]
#[command(author, version, about = "CLI for the Student Performance Predictor", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via SPP_API_URL env var)
    #[arg(long, env = "SPP_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic sample dataset CSV
    Generate {
        /// Output file path
        #[arg(long, short, default_value = "student_performance.csv")]
        output: PathBuf,

        /// Number of records to generate
        #[arg(long, short, default_value_t = dataset::SAMPLE_COUNT)]
        count: usize,

        /// Generation seed
        #[arg(long, default_value_t = dataset::DATA_SEED)]
        seed: u64,
    },

    /// Request a prediction from a running server
    Predict {
        /// Weekly self-study hours
        study_hours: f64,

        /// Attendance percentage
        attendance: f64,

        /// Class participation count
        participation: u32,
    },

    /// Show server health and readiness
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            count,
            seed,
        } => {
            generate::generate_dataset(&output, count, seed)?;
        }
        Commands::Predict {
            study_hours,
            attendance,
            participation,
        } => {
            let client = client::ApiClient::new(&cli.api_url)?;
            predict::request_prediction(&client, study_hours, attendance, participation, cli.format)
                .await?;
        }
        Commands::Status => {
            let client = client::ApiClient::new(&cli.api_url)?;
            status::show_status(&client, cli.format).await?;
        }
    }

    Ok(())
}
