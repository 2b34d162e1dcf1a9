use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FollowBackError {
    #[error("Input document not available: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid profile host: {host}")]
    InvalidProfileHost { host: String },

    #[error("Invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for FollowBackError {
    fn user_message(&self) -> String {
        match self {
            FollowBackError::SourceUnavailable { path, source } => {
                format!("Could not read {}: {}", path.display(), source)
            }
            FollowBackError::OutputWriteFailure { path, source } => {
                format!("Could not save results to {}: {}", path.display(), source)
            }
            FollowBackError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            FollowBackError::InvalidProfileHost { host } => {
                format!("'{}' is not a valid profile host", host)
            }
            FollowBackError::InvalidPattern { pattern, message } => {
                format!("Exclusion pattern '{}' is invalid: {}", pattern, message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            FollowBackError::SourceUnavailable { .. } => Some(
                "Download your data export and point --followers and --following at the extracted HTML files.".to_string()
            ),
            FollowBackError::OutputWriteFailure { .. } => Some(
                "Choose a writable location with --output, or skip saving with --no-save. The results above are complete.".to_string()
            ),
            FollowBackError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            FollowBackError::InvalidProfileHost { .. } => Some(
                "Pass a bare host name such as instagram.com, without scheme or path.".to_string()
            ),
            FollowBackError::InvalidPattern { .. } => Some(
                "Exclusion patterns use regular expression syntax; escape special characters such as '.'.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for FollowBackError {
    fn from(error: toml::de::Error) -> Self {
        FollowBackError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FollowBackError>;
