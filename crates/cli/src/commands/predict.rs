//! Prediction command

use anyhow::Result;
use predictor_lib::{PredictionRequest, PredictionResult};
use tabled::Tabled;

use crate::client::ApiClient;
use crate::output::{color_grade, format_score, print_table, OutputFormat};

/// Row for the prediction table
#[derive(Tabled, serde::Serialize)]
struct PredictionRow {
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Grade")]
    grade: String,
}

/// Request one prediction from the server and display it
pub async fn request_prediction(
    client: &ApiClient,
    study_hours: f64,
    attendance: f64,
    participation: u32,
    format: OutputFormat,
) -> Result<()> {
    let request = PredictionRequest {
        study_hours,
        attendance,
        participation,
    };

    let result: PredictionResult = client.post("predict", &request).await?;

    match format {
        OutputFormat::Table => {
            let rows = vec![PredictionRow {
                score: format_score(result.predicted_score),
                grade: color_grade(result.predicted_grade),
            }];
            print_table(&rows, format);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
