// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod language_utils;
mod providers;
mod table;
mod translation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

impl From<&app_config::LogLevel> for LevelFilter {
    fn from(level: &app_config::LogLevel) -> Self {
        match level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// colingo - translate CSV columns with a retrying chunked engine
///
/// Reads a CSV file, translates the selected columns cell by cell into the
/// target language, appends the translations as new `<column>_<LANG>`
/// columns, and writes the result out. Requests are sequential with a
/// configurable delay; transient provider failures are retried, and cells
/// that still fail carry an inline failure marker instead of aborting the run.
#[derive(Parser, Debug)]
#[command(name = "colingo")]
#[command(version = "0.1.0")]
#[command(about = "CSV column translation tool")]
#[command(long_about = "colingo translates selected CSV columns into a target language.

EXAMPLES:
    colingo data.csv -C description                # Translate one column (default: Japanese)
    colingo data.csv -C title -C body -t fr        # Translate two columns to French
    colingo data.csv -C title -o out.csv -f        # Explicit output path, overwrite
    colingo data.csv -C title --delay 2.0          # Slower request pacing
    colingo --log-level debug data.csv -C title    # Verbose logging

CONFIGURATION:
    Settings are read from conf.json by default (see --config). Command line
    flags override values from the config file.")]
struct CommandLineOptions {
    /// Input CSV file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output CSV file (default: <input>.<lang>.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column to translate (repeatable, processed in order)
    #[arg(short = 'C', long = "column")]
    columns: Vec<String>,

    /// Target language code (e.g. 'ja', 'en', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Maximum characters per translation request
    #[arg(long)]
    segment_length: Option<usize>,

    /// Attempts per segment, including the first
    #[arg(long)]
    retries: Option<u32>,

    /// Delay in seconds between requests (recommended 0.5 to 5.0)
    #[arg(long)]
    delay: Option<f64>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Filter on the global max level so late config changes apply
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default.
    // The level is updated after the config and CLI flags are merged.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let mut config = Config::from_file_or_default(&cli.config_path)?;

    // Command line flags override the config file
    if !cli.columns.is_empty() {
        config.columns = cli.columns.clone();
    }
    if let Some(target_language) = &cli.target_language {
        config.target_language = target_language.clone();
    }
    if let Some(segment_length) = cli.segment_length {
        config.translation.max_segment_length = segment_length;
    }
    if let Some(retries) = cli.retries {
        config.translation.retry_count = retries;
    }
    if let Some(delay) = cli.delay {
        config.translation.request_delay_secs = delay;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level((&config.log_level).into());

    info!(
        "Translating columns {:?} of {:?} to '{}'",
        config.columns, cli.input_path, config.target_language
    );

    let controller = Controller::with_config(config)?;
    controller
        .run(cli.input_path, cli.output, cli.force_overwrite)
        .await
}
