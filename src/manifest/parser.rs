//! Locate the version assignment inside manifest text.

use regex_lite::Regex;

/// Result of searching manifest text for a `version = "..."` assignment.
///
/// Extraction is modeled explicitly so a missing assignment is a branch the
/// caller handles, not a panic on an absent capture group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionMatch<'a> {
    /// The captured value of the first assignment in the document.
    Found(&'a str),
    NotFound,
}

/// Find the first `version = "..."` assignment and capture its value.
pub fn extract_version(content: &str) -> VersionMatch<'_> {
    let re = Regex::new(r#"version = "(.*?)""#).expect("Invalid regex");

    match re.captures(content).and_then(|caps| caps.get(1)) {
        Some(m) => VersionMatch::Found(m.as_str()),
        None => VersionMatch::NotFound,
    }
}
