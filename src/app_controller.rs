use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::app_config::Config;
use crate::errors::ConfigError;
use crate::providers::TranslateProvider;
use crate::providers::google::GoogleTranslate;
use crate::table::{Table, output_column_name};
use crate::translation::{BatchResult, TranslationPipeline};

// @module: Application controller for table translation

/// Main application controller for column translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Derive the default output path: `<stem>.<lang>.csv` next to the input
    pub fn default_output_path(&self, input_file: &Path) -> PathBuf {
        let stem = input_file.file_stem().unwrap_or_default();
        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(&self.config.target_language);
        output_filename.push_str(".csv");
        input_file.with_file_name(output_filename)
    }

    /// Run the main workflow with an input CSV file and optional output path
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_file: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        let provider = GoogleTranslate::with_config(
            &self.config.provider.endpoint,
            self.config.provider.timeout_secs,
        );
        self.run_with_provider(&provider, input_file, output_file, force_overwrite)
            .await
    }

    /// Run the workflow against an injected provider
    pub async fn run_with_provider(
        &self,
        provider: &dyn TranslateProvider,
        input_file: PathBuf,
        output_file: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = output_file.unwrap_or_else(|| self.default_output_path(&input_file));
        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping file, output already exists (use -f to force overwrite): {:?}",
                output_path
            );
            return Ok(());
        }

        let mut table = Table::from_csv_path(&input_file)
            .with_context(|| format!("Failed to read input table: {:?}", input_file))?;
        info!(
            "Loaded {:?}: {} columns, {} rows",
            input_file,
            table.headers().len(),
            table.row_count()
        );

        if self.config.columns.is_empty() {
            return Err(ConfigError::EmptyColumnSelection.into());
        }
        let columns = table.select_columns(&self.config.columns)?;
        let request = self.config.translation_request()?;

        let total: usize = columns.iter().map(|c| c.values.len()).sum();
        let progress_bar = ProgressBar::new(total as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result);
        progress_bar.set_message(format!(
            "Translating {} columns to '{}' via {}",
            columns.len(),
            request.target_language,
            provider.name()
        ));

        // Ctrl-C requests cooperative cancellation between values
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_flag = Arc::clone(&cancel);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel_flag.store(true, Ordering::SeqCst);
            }
        });

        let pipeline = TranslationPipeline::new(provider);
        let result = pipeline
            .translate_batch(&columns, &request, &cancel, |completed, _total| {
                progress_bar.set_position(completed as u64);
            })
            .await?;

        progress_bar.finish_and_clear();
        self.report(&result, start_time.elapsed());

        for column_outcome in &result.columns {
            let output_name = output_column_name(&column_outcome.name, &request.target_language);
            let mut values: Vec<String> = column_outcome
                .outcomes
                .iter()
                .map(|o| o.text.clone())
                .collect();
            // A cancelled run may have stopped mid-column; pad so the
            // completed translations still line up with their rows.
            values.resize(table.row_count(), String::new());
            table.append_column(&output_name, values)?;
        }

        table
            .write_csv_path(&output_path)
            .with_context(|| format!("Failed to write output table: {:?}", output_path))?;
        info!("Wrote translated table to {:?}", output_path);

        Ok(())
    }

    fn report(&self, result: &BatchResult, elapsed: std::time::Duration) {
        let translated: usize = result.columns.iter().map(|c| c.outcomes.len()).sum();
        if result.cancelled {
            warn!(
                "Translation cancelled after {} values ({:.1}s); completed outcomes are kept",
                translated,
                elapsed.as_secs_f64()
            );
        } else {
            info!(
                "Translation completed: {} values in {:.1}s",
                translated,
                elapsed.as_secs_f64()
            );
        }
        if result.failure_count > 0 {
            warn!(
                "{} values contain failure markers after exhausted retries",
                result.failure_count
            );
        }
    }
}
