//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use predictor_lib::{ComponentStatus, Grade};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a table from a list of items
pub fn print_table<T: Tabled + Serialize>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No items found".yellow());
                return;
            }
            let table = Table::new(items).with(Style::rounded()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Color a letter grade for terminal output
pub fn color_grade(grade: Grade) -> String {
    let letter = grade.to_string();
    match grade {
        Grade::A | Grade::B => letter.green().bold().to_string(),
        Grade::C => letter.yellow().bold().to_string(),
        Grade::D | Grade::F => letter.red().bold().to_string(),
    }
}

/// Color a health status for terminal output
pub fn color_status(status: ComponentStatus) -> String {
    match status {
        ComponentStatus::Healthy => "healthy".green().to_string(),
        ComponentStatus::Degraded => "degraded".yellow().to_string(),
        ComponentStatus::Unhealthy => "unhealthy".red().to_string(),
    }
}

/// Format a predicted score for display
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}
