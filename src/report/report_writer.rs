use crate::error::{FollowBackError, Result};
use crate::report::AnalysisReport;
use crate::username::Username;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub const REPORT_HEADER: &str = "Accounts that don't follow you back:";

/// One numbered line per account: `  1. @carol`.
pub fn numbered_entries(usernames: &[Username]) -> impl Iterator<Item = String> + '_ {
    usernames
        .iter()
        .enumerate()
        .map(|(i, username)| format!("{:3}. @{}", i + 1, username))
}

pub fn render_report(report: &AnalysisReport) -> String {
    let entries: String = numbered_entries(&report.not_reciprocating)
        .map(|line| line + "\n")
        .collect();

    format!(
        "{}\n{}\n\n{}\nTotal: {} accounts\n",
        REPORT_HEADER,
        "=".repeat(40),
        entries,
        report.not_reciprocating_count()
    )
}

pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Saves the rendered report and returns where it went.
    ///
    /// Nothing is written for a fully reciprocal result; `Ok(None)` is
    /// returned and any existing file at the path is left untouched.
    pub fn write(&self, report: &AnalysisReport) -> Result<Option<PathBuf>> {
        if report.is_fully_reciprocal() {
            debug!(path = %self.path.display(), "Nothing to save");
            return Ok(None);
        }

        fs::write(&self.path, render_report(report)).map_err(|source| {
            FollowBackError::OutputWriteFailure {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            path = %self.path.display(),
            accounts = report.not_reciprocating_count(),
            "Saved report"
        );

        Ok(Some(self.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::username::UsernameSet;
    use std::path::Path;
    use tempfile::TempDir;

    fn report(followers: &[&str], following: &[&str]) -> AnalysisReport {
        let followers: UsernameSet = followers.iter().filter_map(Username::parse).collect();
        let following: UsernameSet = following.iter().filter_map(Username::parse).collect();
        AnalysisReport::new(
            Path::new("followers_1.html"),
            Path::new("following.html"),
            &followers,
            &following,
        )
    }

    #[test]
    fn test_numbered_entries() {
        let report = report(&[], &["bob", "alice"]);
        let lines: Vec<String> = numbered_entries(&report.not_reciprocating).collect();
        assert_eq!(lines, vec!["  1. @alice", "  2. @bob"]);
    }

    #[test]
    fn test_render_report_layout() {
        let rendered = render_report(&report(&["alice", "bob"], &["alice", "carol"]));
        let expected = format!(
            "{}\n{}\n\n  1. @carol\n\nTotal: 1 accounts\n",
            REPORT_HEADER,
            "=".repeat(40)
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render_report(&report(&["x"], &["zoe", "amy", "kim"]));
        let second = render_report(&report(&["x"], &["kim", "zoe", "amy"]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("not_following_back.txt");
        let writer = ReportWriter::new(&path);

        let saved = writer.write(&report(&["alice"], &["alice", "carol"])).unwrap();
        assert_eq!(saved.as_deref(), Some(path.as_path()));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(REPORT_HEADER));
        assert!(content.contains("  1. @carol"));
        assert!(content.ends_with("Total: 1 accounts\n"));
    }

    #[test]
    fn test_write_skips_fully_reciprocal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("not_following_back.txt");
        let writer = ReportWriter::new(&path);

        let saved = writer.write(&report(&["alice", "bob"], &["alice", "bob"])).unwrap();
        assert!(saved.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing_dir").join("report.txt");
        let writer = ReportWriter::new(&path);

        match writer.write(&report(&[], &["carol"])) {
            Err(FollowBackError::OutputWriteFailure { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected OutputWriteFailure, got {:?}", other),
        }
    }
}
