use crate::username::{Username, UsernameSet};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Accounts in `following` that are missing from `followers`, sorted ascending.
pub fn not_reciprocating(following: &UsernameSet, followers: &UsernameSet) -> Vec<Username> {
    following.difference(followers)
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub followers_source: PathBuf,
    pub following_source: PathBuf,
    pub followers_count: usize,
    pub following_count: usize,
    pub not_reciprocating: Vec<Username>,
    pub generated_at: DateTime<Utc>,
    pub saved_to: Option<PathBuf>,
}

impl AnalysisReport {
    pub fn new(
        followers_source: &Path,
        following_source: &Path,
        followers: &UsernameSet,
        following: &UsernameSet,
    ) -> Self {
        Self {
            followers_source: followers_source.to_path_buf(),
            following_source: following_source.to_path_buf(),
            followers_count: followers.len(),
            following_count: following.len(),
            not_reciprocating: not_reciprocating(following, followers),
            generated_at: Utc::now(),
            saved_to: None,
        }
    }

    pub fn is_fully_reciprocal(&self) -> bool {
        self.not_reciprocating.is_empty()
    }

    pub fn not_reciprocating_count(&self) -> usize {
        self.not_reciprocating.len()
    }
}
