// src/output/json.rs
//! JSON rendering of a batch, failures included.

use crate::batch::{BatchReport, WellProduction};
use crate::error::AppError;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    wells: &'a [WellProduction],
    failures: Vec<JsonFailure<'a>>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    input: &'a str,
    error: String,
}

/// Pretty-printed JSON with a `wells` array and a `failures` array.
pub fn render_json(report: &BatchReport) -> Result<String, AppError> {
    let json = JsonReport {
        wells: &report.successes,
        failures: report
            .failures
            .iter()
            .map(|f| JsonFailure {
                input: &f.input,
                error: f.error.to_string(),
            })
            .collect(),
    };

    let mut rendered = serde_json::to_string_pretty(&json)?;
    rendered.push('\n');
    Ok(rendered)
}
