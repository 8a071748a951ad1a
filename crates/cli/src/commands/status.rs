//! Server status command

use anyhow::Result;
use predictor_lib::{HealthResponse, ReadinessResponse};

use crate::client::ApiClient;
use crate::output::{color_status, OutputFormat};

/// Query and display server health and readiness
pub async fn show_status(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let health: HealthResponse = client.get_unchecked("healthz").await?;
    let readiness: ReadinessResponse = client.get_unchecked("readyz").await?;

    match format {
        OutputFormat::Table => {
            println!("Status:    {}", color_status(health.status));
            println!("Ready:     {}", readiness.ready);
            if let Some(reason) = &readiness.reason {
                println!("Reason:    {}", reason);
            }
            if let Some(r_squared) = health.model.r_squared {
                println!("Model R²:  {:.4}", r_squared);
            }
            if let Some(message) = &health.model.message {
                println!("Note:      {}", message);
            }
        }
        OutputFormat::Json => {
            let combined = serde_json::json!({
                "health": health,
                "readiness": readiness,
            });
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
    }

    Ok(())
}
