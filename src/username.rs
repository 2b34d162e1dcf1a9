use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A normalized account name: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Trims surrounding whitespace and rejects what is left if it is empty.
    pub fn parse<S: AsRef<str>>(raw: S) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The usernames found in one export document.
///
/// Backed by a `BTreeSet`, so iteration is always in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsernameSet {
    names: BTreeSet<Username>,
}

impl UsernameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the name was already present.
    pub fn insert(&mut self, username: Username) -> bool {
        self.names.insert(username)
    }

    pub fn contains(&self, username: &Username) -> bool {
        self.names.contains(username)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Username> {
        self.names.iter()
    }

    /// Members of `self` that are absent from `other`, in ascending order.
    pub fn difference(&self, other: &UsernameSet) -> Vec<Username> {
        self.names.difference(&other.names).cloned().collect()
    }
}

impl FromIterator<Username> for UsernameSet {
    fn from_iter<I: IntoIterator<Item = Username>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a UsernameSet {
    type Item = &'a Username;
    type IntoIter = std::collections::btree_set::Iter<'a, Username>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> UsernameSet {
        names.iter().filter_map(Username::parse).collect()
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let username = Username::parse("  alice\n").unwrap();
        assert_eq!(username.as_str(), "alice");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(Username::parse("").is_none());
        assert!(Username::parse(" \t\n").is_none());
    }

    #[test]
    fn test_set_rejects_duplicates() {
        let mut names = UsernameSet::new();
        assert!(names.insert(Username::parse("alice").unwrap()));
        assert!(!names.insert(Username::parse(" alice ").unwrap()));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let names = set(&["carol", "alice", "bob"]);
        let ordered: Vec<&str> = names.iter().map(Username::as_str).collect();
        assert_eq!(ordered, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_difference_is_sorted_and_asymmetric() {
        let following = set(&["zed", "alice", "carol", "bob"]);
        let followers = set(&["alice", "bob", "dave"]);

        let diff: Vec<String> = following
            .difference(&followers)
            .into_iter()
            .map(|u| u.to_string())
            .collect();
        assert_eq!(diff, vec!["carol", "zed"]);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let names = set(&["Alice"]);
        assert!(!names.contains(&Username::parse("alice").unwrap()));
    }
}
