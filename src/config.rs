// src/config.rs
use crate::constants::{DEFAULT_EWA_BASE_URL, DEFAULT_PDQ_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::AppError;
use crate::output::{DeliveryTarget, OutputFormat};
use crate::portal::{PortalEndpoints, ReportWindow};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the wellbore query application base.
pub const EWA_BASE_URL_ENV: &str = "RRC_EWA_BASE_URL";

/// Environment variable overriding the production query application base.
pub const PDQ_BASE_URL_ENV: &str = "RRC_PDQ_BASE_URL";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// API numbers to look up; separators are ignored (e.g. "42-501-20130")
    #[arg(required = true, num_args = 1..)]
    pub api_numbers: Vec<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Number of API numbers processed at once
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Seconds to wait for each portal request
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration, validated and ready to drive a batch.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub api_numbers: Vec<String>,
    pub endpoints: PortalEndpoints,
    pub window: ReportWindow,
    pub request_timeout: Duration,
    pub jobs: usize,
    pub format: OutputFormat,
    pub target: DeliveryTarget,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Same as [`resolve`](Self::resolve) with an explicit environment lookup.
    pub fn resolve_with(
        cli: CommandLineInput,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        if cli.jobs == 0 {
            return Err(AppError::InvalidConfiguration(
                "--jobs must be at least 1".to_string(),
            ));
        }
        if cli.timeout == 0 {
            return Err(AppError::InvalidConfiguration(
                "--timeout must be at least 1 second".to_string(),
            ));
        }

        let ewa_base = env(EWA_BASE_URL_ENV).unwrap_or_else(|| DEFAULT_EWA_BASE_URL.to_string());
        let pdq_base = env(PDQ_BASE_URL_ENV).unwrap_or_else(|| DEFAULT_PDQ_BASE_URL.to_string());
        let endpoints = PortalEndpoints::new(&ewa_base, &pdq_base)?;

        let target = match cli.output_file {
            Some(path) => DeliveryTarget::WriteFile { path },
            None => DeliveryTarget::PrintToStdout,
        };

        Ok(PipelineConfig {
            api_numbers: cli.api_numbers,
            endpoints,
            window: ReportWindow::through_current_year(),
            request_timeout: Duration::from_secs(cli.timeout),
            jobs: cli.jobs,
            format: cli.format,
            target,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let cli = CommandLineInput::parse_from(["rrc-production", "42-501-20130", "4200301234"]);
        let config = PipelineConfig::resolve_with(cli, no_env).unwrap();

        assert_eq!(config.api_numbers, vec!["42-501-20130", "4200301234"]);
        assert_eq!(config.jobs, 1);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.format, OutputFormat::Tsv);
        assert_eq!(config.target, DeliveryTarget::PrintToStdout);
        assert_eq!(
            config.endpoints.wellbore_search().as_str(),
            "http://webapps2.rrc.state.tx.us/EWA/wellboreQueryAction.do"
        );
    }

    #[test]
    fn test_options_and_env_overrides() {
        let cli = CommandLineInput::parse_from([
            "rrc-production",
            "--format",
            "json",
            "-j",
            "4",
            "--timeout",
            "5",
            "-o",
            "out/production.json",
            "42-501-20130",
        ]);
        let config = PipelineConfig::resolve_with(cli, |name| match name {
            EWA_BASE_URL_ENV => Some("http://localhost:8080/EWA".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.jobs, 4);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(
            config.target,
            DeliveryTarget::WriteFile {
                path: PathBuf::from("out/production.json")
            }
        );
        assert_eq!(
            config.endpoints.wellbore_search().as_str(),
            "http://localhost:8080/EWA/wellboreQueryAction.do"
        );
    }

    #[test]
    fn test_rejects_zero_jobs() {
        let cli = CommandLineInput::parse_from(["rrc-production", "-j", "0", "4250120130"]);
        assert!(matches!(
            PipelineConfig::resolve_with(cli, no_env),
            Err(AppError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_requires_an_api_number() {
        assert!(CommandLineInput::try_parse_from(["rrc-production"]).is_err());
    }
}
