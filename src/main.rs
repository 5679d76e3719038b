// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use rrc_production::{
    deliver, render, run_batch, BatchReport, CommandLineInput, PipelineConfig, PortalHttpClient,
    WellPipeline,
};
use std::fs;

/// Sets up logging. The console appender writes to stderr because stdout
/// carries the table.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("rrc_production.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs the batch and delivers whatever succeeded. Individual API numbers
/// failing is reported, not fatal.
fn execute_batch(config: &PipelineConfig) -> anyhow::Result<()> {
    let client = PortalHttpClient::new(config.request_timeout)?;
    let pipeline = WellPipeline::new(client, config.endpoints.clone(), config.window);

    let report = run_batch(&pipeline, config.api_numbers.as_slice(), config.jobs)?;
    report_failures(&report);

    let rendered = render(&report, config.format)?;
    if !rendered.is_empty() {
        deliver(&config.target, &rendered)?;
    }
    Ok(())
}

fn report_failures(report: &BatchReport) {
    for line in report.failure_lines() {
        eprintln!("{}", line);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_batch(&config)
}
