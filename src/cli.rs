use crate::config::{validate_profile_host, CliOverrides, Config};
use crate::error::Result;
use crate::extractor::ExtractionStrategy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "followback")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find accounts you follow that don't follow you back")]
#[command(
    long_about = "FollowBack reads the followers and following pages of a social media data \
                  export, lists the accounts you follow that do not follow you back, and saves \
                  the list to a text file."
)]
#[command(after_help = "EXAMPLES:\n  \
    followback\n  \
    followback --followers export/followers_1.html --following export/following.html\n  \
    followback --strategy anchor-text --output unfollowers.txt\n  \
    followback --profile-host threads.net --no-save --output-format json")]
pub struct Cli {
    /// Followers export document
    #[arg(long, value_name = "PATH")]
    pub followers: Option<PathBuf>,

    /// Following export document
    #[arg(long, value_name = "PATH")]
    pub following: Option<PathBuf>,

    /// How usernames are read from links
    #[arg(short, long, value_enum)]
    pub strategy: Option<ExtractionStrategy>,

    /// Host whose profile links identify accounts
    #[arg(long, value_name = "HOST", value_parser = parse_profile_host)]
    pub profile_host: Option<String>,

    /// Regular expressions for usernames to ignore
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Where to save the report
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show results without saving the report
    #[arg(long)]
    pub no_save: bool,

    /// Configuration file path
    #[arg(short, long, env = "FOLLOWBACK_CONFIG", help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only print the results)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be analyzed without reading the exports)
    #[arg(long)]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_followers(self.followers.clone())
            .with_following(self.following.clone())
            .with_strategy(self.strategy)
            .with_profile_host(self.profile_host.clone())
            .with_exclude(self.exclude.clone())
            .with_report_path(self.output.clone())
            .with_no_save(self.no_save)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Default `tracing` directive for this verbosity, used when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity_level() {
            0 => "followback=warn",
            1 => "followback=info",
            2 => "followback=debug",
            _ => "followback=trace",
        }
    }
}

pub fn parse_profile_host(s: &str) -> std::result::Result<String, String> {
    let host = s.trim().to_lowercase();
    validate_profile_host(&host)
        .map(|_| host)
        .map_err(|_| "Expected a bare host name such as instagram.com".to_string())
}
