use crate::error::{FollowBackError, Result};
use crate::extractor::ExtractionStrategy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_PROFILE_HOST: &str = "instagram.com";
pub const DEFAULT_REPORT_FILE: &str = "not_following_back.txt";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub followers: PathBuf,
    pub following: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub strategy: ExtractionStrategy,
    pub profile_host: String,
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub report_path: PathBuf,
    pub save_report: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        let export_dir = Path::new("connections").join("followers_and_following");
        Self {
            followers: export_dir.join("followers_1.html"),
            following: export_dir.join("following.html"),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strategy: ExtractionStrategy::ProfileUrl,
            profile_host: DEFAULT_PROFILE_HOST.to_string(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            save_report: true,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(FollowBackError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| FollowBackError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| FollowBackError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["followback.toml", ".followback.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref followers) = cli_args.followers {
            self.input.followers = followers.clone();
        }

        if let Some(ref following) = cli_args.following {
            self.input.following = following.clone();
        }

        if let Some(strategy) = cli_args.strategy {
            self.extraction.strategy = strategy;
        }

        if let Some(ref host) = cli_args.profile_host {
            self.extraction.profile_host = host.trim().to_lowercase();
        }

        if let Some(ref exclude) = cli_args.exclude {
            self.extraction.exclude_patterns.extend(exclude.clone());
        }

        if let Some(ref report_path) = cli_args.report_path {
            self.output.report_path = report_path.clone();
        }

        if cli_args.no_save {
            self.output.save_report = false;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| FollowBackError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| FollowBackError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_profile_host(&self.extraction.profile_host)?;
        compile_patterns(&self.extraction.exclude_patterns)?;

        if self.output.report_path.as_os_str().is_empty() {
            return Err(FollowBackError::Config {
                message: "Report path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Accepts a bare host such as `instagram.com`; rejects schemes, paths and ports.
pub fn validate_profile_host(host: &str) -> Result<()> {
    let invalid = || FollowBackError::InvalidProfileHost {
        host: host.to_string(),
    };

    if host.is_empty() || host.contains(['/', ':', '?', '#', '@']) {
        return Err(invalid());
    }

    let url = Url::parse(&format!("https://{}/", host)).map_err(|_| invalid())?;
    match url.host_str() {
        Some(parsed) if parsed.eq_ignore_ascii_case(host) && parsed.contains('.') => Ok(()),
        _ => Err(invalid()),
    }
}

pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| FollowBackError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub followers: Option<PathBuf>,
    pub following: Option<PathBuf>,
    pub strategy: Option<ExtractionStrategy>,
    pub profile_host: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub report_path: Option<PathBuf>,
    pub no_save: bool,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_followers(mut self, followers: Option<PathBuf>) -> Self {
        self.followers = followers;
        self
    }

    pub fn with_following(mut self, following: Option<PathBuf>) -> Self {
        self.following = following;
        self
    }

    pub fn with_strategy(mut self, strategy: Option<ExtractionStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_profile_host(mut self, host: Option<String>) -> Self {
        self.profile_host = host;
        self
    }

    pub fn with_exclude(mut self, exclude: Option<Vec<String>>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_report_path(mut self, report_path: Option<PathBuf>) -> Self {
        self.report_path = report_path;
        self
    }

    pub fn with_no_save(mut self, no_save: bool) -> Self {
        self.no_save = no_save;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extraction.strategy, ExtractionStrategy::ProfileUrl);
        assert_eq!(config.extraction.profile_host, "instagram.com");
        assert!(config.output.save_report);
        assert!(config.input.followers.ends_with("followers_1.html"));
        assert!(config.input.following.ends_with("following.html"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.extraction.profile_host = "https://instagram.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_same_file_for_both_exports_is_allowed() {
        let mut config = Config::default();
        config.input.following = config.input.followers.clone();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let mut config = Config::default();
        config.extraction.exclude_patterns = vec!["(unclosed".to_string()];
        match config.validate() {
            Err(FollowBackError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_host_validation() {
        assert!(validate_profile_host("instagram.com").is_ok());
        assert!(validate_profile_host("platform.com").is_ok());
        assert!(validate_profile_host("www.threads.net").is_ok());

        assert!(validate_profile_host("").is_err());
        assert!(validate_profile_host("localhost").is_err());
        assert!(validate_profile_host("instagram.com/").is_err());
        assert!(validate_profile_host("instagram.com:443").is_err());
        assert!(validate_profile_host("bad host.com").is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let mut config = Config::default();
        config.extraction.strategy = ExtractionStrategy::AnchorText;
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();

        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded_config.extraction.strategy, ExtractionStrategy::AnchorText);
        assert_eq!(loaded_config.output.report_path, config.output.report_path);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[extraction]\nprofile_host = \"threads.net\"").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.extraction.profile_host, "threads.net");
        assert_eq!(config.extraction.strategy, ExtractionStrategy::ProfileUrl);
        assert!(config.output.save_report);
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("does/not/exist.toml");
        assert!(matches!(result, Err(FollowBackError::Config { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        let overrides = CliOverrides::new()
            .with_followers(Some(PathBuf::from("a.html")))
            .with_strategy(Some(ExtractionStrategy::AnchorText))
            .with_profile_host(Some(" Platform.COM ".to_string()))
            .with_exclude(Some(vec!["^_".to_string()]))
            .with_no_save(true);

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.input.followers, PathBuf::from("a.html"));
        assert_eq!(config.extraction.strategy, ExtractionStrategy::AnchorText);
        assert_eq!(config.extraction.profile_host, "platform.com");
        assert_eq!(config.extraction.exclude_patterns, vec!["^_"]);
        assert!(!config.output.save_report);
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_file = NamedTempFile::new().unwrap();
        Config::default().save_to_file(temp_file.path()).unwrap();

        let sample = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(sample.contains("[input]"));
        assert!(sample.contains("[extraction]"));
        assert!(sample.contains("[output]"));
        assert!(sample.contains("profile-url"));
    }
}
