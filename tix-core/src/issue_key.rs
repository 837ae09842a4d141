//! # Issue Key Parsing
//!
//! Normalizes what users type for a ticket (`proj-12`, `PROJ12`) into the
//! canonical `PROJ-12` form Jira expects in URLs.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Errors that can occur while parsing an issue key
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueKeyError {
  #[error("Invalid issue key: '{0}' (expected something like PROJ-123)")]
  InvalidFormat(String),
}

static KEY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
  vec![
    // PROJ-123, proj-123, P2P-123, MY_PROJ-123
    Regex::new(r"^([A-Za-z][A-Za-z0-9_]+)-(\d+)$").expect("Failed to compile issue key regex with hyphen"),
    // PROJ123, proj123 (letters only, otherwise the split is ambiguous)
    Regex::new(r"^([A-Za-z]{2,})(\d+)$").expect("Failed to compile issue key regex without hyphen"),
  ]
});

/// Parse an issue key from user input into `PROJECT-NUMBER` form.
pub fn parse_issue_key(input: &str) -> Result<String, IssueKeyError> {
  let input = input.trim();

  for pattern in KEY_PATTERNS.iter() {
    if let Some(captures) = pattern.captures(input)
      && let (Some(project), Some(number)) = (captures.get(1), captures.get(2))
    {
      return Ok(format!("{}-{}", project.as_str().to_uppercase(), number.as_str()));
    }
  }

  Err(IssueKeyError::InvalidFormat(input.to_string()))
}
