// src/batch.rs
//! The batch driver: runs every identifier through the pipeline and keeps
//! going when one of them fails.
//!
//! This is the only place pipeline errors are caught. Each identifier is
//! processed on its own, so a failure is recorded next to its input and the
//! rest of the batch is unaffected.

use crate::error::AppError;
use crate::model::MonthlyRecord;
use crate::pipeline::ProductionSource;
use crate::types::WellIdentifier;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

/// Production history for one identifier.
#[derive(Debug, Clone, Serialize)]
pub struct WellProduction {
    pub api: WellIdentifier,
    pub records: Vec<MonthlyRecord>,
}

/// An identifier that could not be processed, and why.
#[derive(Debug)]
pub struct BatchFailure {
    pub input: String,
    pub error: AppError,
}

impl fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": {}", self.input, self.error)
    }
}

/// Outcome of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub successes: Vec<WellProduction>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// One line per failed input, in input order.
    pub fn failure_lines(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    fn record(mut self, input: &str, outcome: Result<WellProduction, AppError>) -> Self {
        match outcome {
            Ok(production) => self.successes.push(production),
            Err(error) => self.failures.push(BatchFailure {
                input: input.to_string(),
                error,
            }),
        }
        self
    }
}

/// Runs each raw identifier through `source`, `jobs` at a time.
///
/// Results keep input order whatever the parallelism. Failures never abort
/// the batch; only failing to start the worker pool does.
pub fn run_batch<S, I>(source: &S, inputs: &[I], jobs: usize) -> Result<BatchReport, AppError>
where
    S: ProductionSource + ?Sized,
    I: AsRef<str> + Sync,
{
    let outcomes: Vec<Result<WellProduction, AppError>> = if jobs <= 1 {
        inputs.iter().map(|input| process(source, input.as_ref())).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
        pool.install(|| {
            inputs
                .par_iter()
                .map(|input| process(source, input.as_ref()))
                .collect()
        })
    };

    let report = inputs
        .iter()
        .zip(outcomes)
        .fold(BatchReport::default(), |report, (input, outcome)| {
            report.record(input.as_ref(), outcome)
        });

    log::info!(
        "Batch complete: {} succeeded, {} failed",
        report.successes.len(),
        report.failures.len()
    );
    Ok(report)
}

fn process<S: ProductionSource + ?Sized>(
    source: &S,
    input: &str,
) -> Result<WellProduction, AppError> {
    let api = WellIdentifier::normalize(input)?;
    log::info!("Processing {}", api);

    match source.production(&api) {
        Ok(records) => Ok(WellProduction { api, records }),
        Err(e) => {
            log::debug!("{} failed: {}", api, e);
            Err(e)
        }
    }
}
