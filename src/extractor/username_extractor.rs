use crate::config::{compile_patterns, ExtractionConfig};
use crate::error::{FollowBackError, Result};
use crate::extractor::anchor::{self, Anchor};
use crate::username::{Username, UsernameSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// How a username is read from a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionStrategy {
    /// Use the visible link text, whatever the link points at
    AnchorText,
    /// Use the path segment of links to the profile host
    ProfileUrl,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::AnchorText => f.write_str("anchor-text"),
            ExtractionStrategy::ProfileUrl => f.write_str("profile-url"),
        }
    }
}

pub struct UsernameExtractor {
    strategy: ExtractionStrategy,
    marker: String,
    exclude_patterns: Vec<Regex>,
}

impl UsernameExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            strategy: config.strategy,
            marker: format!("{}/", config.profile_host.trim().to_lowercase()),
            exclude_patterns: compile_patterns(&config.exclude_patterns)?,
        })
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        self.strategy
    }

    /// The username carried by one link, if it carries one.
    pub fn candidate<A: Anchor>(&self, link: &A) -> Option<Username> {
        let username = match self.strategy {
            ExtractionStrategy::AnchorText => Username::parse(link.text()),
            ExtractionStrategy::ProfileUrl => {
                link.href().and_then(|href| username_from_profile_url(href, &self.marker))
            }
        }?;

        if self.is_excluded(&username) {
            trace!(username = %username, "Excluded by pattern");
            return None;
        }

        Some(username)
    }

    pub fn collect<I, A>(&self, links: I) -> UsernameSet
    where
        I: IntoIterator<Item = A>,
        A: Anchor,
    {
        links
            .into_iter()
            .filter_map(|link| self.candidate(&link))
            .collect()
    }

    /// Extracts every username in `markup`. Never fails: unrecognised or
    /// broken markup just contributes nothing.
    pub fn extract(&self, markup: &str) -> UsernameSet {
        let document = anchor::parse_document(markup);
        let usernames = self.collect(anchor::anchors(&document));

        debug!(
            strategy = %self.strategy,
            count = usernames.len(),
            "Extracted usernames"
        );

        usernames
    }

    /// Reads and extracts one export file.
    ///
    /// A file that cannot be read yields `SourceUnavailable`; the caller
    /// decides whether that ends the run.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<UsernameSet> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FollowBackError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "Read export document");

        Ok(self.extract(&String::from_utf8_lossy(&bytes)))
    }

    fn is_excluded(&self, username: &Username) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(username.as_str()))
    }
}

/// Reads the account name out of a profile link such as
/// `https://www.instagram.com/_u/dave/?hl=en`.
///
/// The text after the last occurrence of `marker` (`"<host>/"`) is taken,
/// then its query string and fragment are dropped and the first path segment
/// is kept. Results that still look like a URL are rejected.
pub fn username_from_profile_url(href: &str, marker: &str) -> Option<Username> {
    let (_, tail) = href.rsplit_once(marker)?;
    let tail = tail.split(['?', '#']).next().unwrap_or_default();
    let tail = tail.strip_prefix("_u/").unwrap_or(tail);
    let segment = tail.split('/').next().unwrap_or_default();

    if segment.starts_with("http") {
        return None;
    }

    Username::parse(segment)
}
