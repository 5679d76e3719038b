// src/output/mod.rs
//! Output handling with rendering kept apart from delivery.
//!
//! Rendering turns a batch into text (tab-delimited table or JSON) without
//! touching the outside world; the writer then puts that text somewhere.

mod json;
mod table;
mod writer;

use crate::batch::BatchReport;
use crate::error::AppError;
use clap::ValueEnum;

pub use json::render_json;
pub use table::{render_table, table_columns};
pub use writer::{deliver, DeliveryTarget};

/// How a batch is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-delimited table, one line per well and month
    #[default]
    Tsv,
    /// JSON document including failures
    Json,
}

/// Renders `report` in `format`.
pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Tsv => Ok(render_table(&report.successes)),
        OutputFormat::Json => render_json(report),
    }
}
