//! Server configuration

use anyhow::Result;
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Path to the training dataset CSV
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
}

fn default_api_port() -> u16 {
    8080
}

fn default_dataset_path() -> String {
    "student_performance.csv".to_string()
}

impl ServerConfig {
    /// Load configuration from SPP-prefixed environment variables
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("SPP"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| ServerConfig {
            api_port: default_api_port(),
            dataset_path: default_dataset_path(),
        }))
    }
}
