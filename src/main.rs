use clap::Parser;
use followback::{Cli, FollowBack, FollowBackError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();
    setup_logging(&cli);

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let followback = match FollowBack::from_cli(&cli) {
        Ok(followback) => followback,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    if cli.dry_run {
        return handle_dry_run(&followback);
    }

    match followback.analyze() {
        Ok(_) => 0,
        Err(e) => {
            followback.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &FollowBackError) -> i32 {
    match error {
        FollowBackError::Config { .. }
        | FollowBackError::InvalidProfileHost { .. }
        | FollowBackError::InvalidPattern { .. } => 2,
        FollowBackError::SourceUnavailable { .. } => 3,
        FollowBackError::OutputWriteFailure { .. } => 4,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "followback.toml".to_string());

    match FollowBack::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  followback --config {}", config_path);
            println!("\nEdit the file to point at your export and adjust extraction settings.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(followback: &FollowBack) -> i32 {
    let formatter = followback.output_formatter();
    let config = followback.config();

    formatter.start_operation("DRY RUN MODE - exports will not be parsed");
    formatter.print_separator();

    println!("  Followers export: {}", config.input.followers.display());
    println!("  Following export: {}", config.input.following.display());
    println!("  Strategy: {}", config.extraction.strategy);
    println!("  Profile host: {}", config.extraction.profile_host);
    if !config.extraction.exclude_patterns.is_empty() {
        println!(
            "  Exclusion patterns: {}",
            config.extraction.exclude_patterns.join(", ")
        );
    }
    if config.output.save_report {
        println!("  Report path: {}", config.output.report_path.display());
    } else {
        println!("  Report path: (not saved)");
    }

    formatter.print_separator();

    match followback.check_sources() {
        Ok(()) => {
            formatter.success("Both export documents are present");
            0
        }
        Err(e) => {
            followback.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn print_startup_error(error: &FollowBackError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

fn setup_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));

    // Diagnostics go to stderr so stdout stays clean for the results.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
