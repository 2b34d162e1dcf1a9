pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod report;
pub mod ui;
pub mod username;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, ExtractionConfig, InputConfig, OutputConfig};
pub use error::{FollowBackError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{Anchor, ExtractionStrategy, UsernameExtractor};
pub use report::{not_reciprocating, AnalysisReport, ReportWriter};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};
pub use username::{Username, UsernameSet};

use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Main library interface for FollowBack functionality
pub struct FollowBack {
    config: Config,
    extractor: UsernameExtractor,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl FollowBack {
    /// Create a new FollowBack instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        let extractor = UsernameExtractor::new(&config.extraction)?;
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Ok(Self {
            config,
            extractor,
            output_formatter,
            progress_manager,
        })
    }

    /// Create FollowBack instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(config, output_mode, cli_args.verbose, cli_args.quiet)
    }

    /// Reads both exports, prints the accounts that don't follow back and
    /// saves them.
    ///
    /// Stops with `SourceUnavailable` before printing anything if either
    /// export cannot be read. A failed save is returned as
    /// `OutputWriteFailure` after the results have been printed.
    pub fn analyze(&self) -> Result<AnalysisReport> {
        let start_time = Instant::now();
        let input = &self.config.input;

        self.output_formatter
            .start_operation("Analyzing followers and following data");
        self.output_formatter.debug(&format!(
            "Extraction strategy: {} (profile host: {})",
            self.extractor.strategy(),
            self.config.extraction.profile_host
        ));

        let followers = self.load_document(&input.followers, "followers")?;
        let following = self.load_document(&input.following, "accounts you follow")?;

        let mut report = AnalysisReport::new(&input.followers, &input.following, &followers, &following);
        info!(
            followers = report.followers_count,
            following = report.following_count,
            not_reciprocating = report.not_reciprocating_count(),
            "Analysis complete"
        );

        // `saved_to` must be set before the JSON report is printed. A failed
        // save is returned after the results.
        let saved = if self.config.output.save_report {
            ReportWriter::new(&self.config.output.report_path).write(&report)
        } else {
            Ok(None)
        };
        if let Ok(Some(path)) = &saved {
            report.saved_to = Some(path.clone());
        }

        self.output_formatter.print_analysis_summary(&report);
        self.output_formatter.print_not_reciprocating(&report);

        match saved? {
            Some(path) => self.output_formatter.print_saved(&path),
            None if !self.config.output.save_report && !report.is_fully_reciprocal() => {
                self.output_formatter.info("Saving skipped (--no-save)");
            }
            None => {}
        }

        self.output_formatter.debug(&format!(
            "Finished in {}",
            ui::progress::format_duration(start_time.elapsed())
        ));

        Ok(report)
    }

    fn load_document(&self, path: &Path, label: &str) -> Result<UsernameSet> {
        self.output_formatter
            .info(&format!("Reading {}...", path.display()));

        let spinner = self
            .progress_manager
            .create_parse_spinner(&path.display().to_string());
        let loaded = self.extractor.load(path);
        ui::progress::finish_spinner(&spinner);

        let usernames = loaded?;
        if usernames.is_empty() {
            warn!(path = %path.display(), "No usernames found");
            self.output_formatter.warning(&format!(
                "No usernames found in {}. Check the file and --strategy.",
                path.display()
            ));
        } else {
            self.output_formatter
                .info(&format!("Found {} {}", usernames.len(), label));
        }

        Ok(usernames)
    }

    /// Checks that both exports are present without parsing them.
    pub fn check_sources(&self) -> Result<()> {
        for path in [&self.config.input.followers, &self.config.input.following] {
            std::fs::metadata(path).map_err(|source| FollowBackError::SourceUnavailable {
                path: path.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        Config::default().save_to_file(output_path)
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &FollowBackError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Computes the accounts in `following_markup` that are missing from
/// `followers_markup` using the default extraction settings.
pub fn analyze_markup(followers_markup: &str, following_markup: &str) -> Result<Vec<Username>> {
    let extractor = UsernameExtractor::new(&ExtractionConfig::default())?;
    let followers = extractor.extract(followers_markup);
    let following = extractor.extract(following_markup);
    Ok(not_reciprocating(&following, &followers))
}
