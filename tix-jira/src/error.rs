//! # Jira Errors
//!
//! Every failure the client can report, classified so the CLI can print an
//! actionable next step. Nothing here is retried.

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tix_core::consts::{API_TOKEN_URL, ENV_ATLASSIAN_SITE};

/// What a name was being matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
  Transition,
  LinkType,
  Link,
}

impl SelectionKind {
  /// Flag that lists the valid choices for this kind.
  pub const fn list_flag(self) -> &'static str {
    match self {
      SelectionKind::Transition | SelectionKind::Link => "--list",
      SelectionKind::LinkType => "--list-types",
    }
  }
}

impl fmt::Display for SelectionKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SelectionKind::Transition => write!(f, "transition"),
      SelectionKind::LinkType => write!(f, "link type"),
      SelectionKind::Link => write!(f, "link"),
    }
  }
}

/// Errors returned by the Jira client.
#[derive(Debug, Error)]
pub enum JiraError {
  #[error("Missing credentials: {} not set", .missing.join(", "))]
  MissingCredentials { missing: Vec<&'static str> },

  #[error("Invalid site: {0}")]
  InvalidSite(String),

  #[error("Authentication failed (HTTP 401): {message}")]
  AuthenticationFailed { message: String },

  #[error("Permission denied (HTTP 403): {message}")]
  PermissionDenied { message: String },

  #[error("{resource} not found (HTTP 404): {message}")]
  NotFound { resource: String, message: String },

  #[error("'{query}' matches more than one {kind}: {}", .candidates.join(", "))]
  AmbiguousMatch {
    kind: SelectionKind,
    query: String,
    candidates: Vec<String>,
  },

  #[error("No {kind} matches '{query}'. Available: {}", available_list(.available))]
  InvalidSelection {
    kind: SelectionKind,
    query: String,
    available: Vec<String>,
  },

  #[error("HTTP {status}: {message}")]
  Remote { status: u16, message: String },

  #[error("Failed to reach Jira")]
  Transport(#[source] reqwest::Error),

  #[error("Unexpected response from Jira: {0}")]
  Decode(String),
}

fn available_list(available: &[String]) -> String {
  if available.is_empty() {
    "(none)".to_string()
  } else {
    available.join(", ")
  }
}

impl JiraError {
  /// Classify a non-2xx response.
  pub fn from_response(status: StatusCode, body: &str, resource: &str) -> Self {
    let message = extract_error_message(body)
      .or_else(|| status.canonical_reason().map(str::to_string))
      .unwrap_or_else(|| "no details provided".to_string());

    match status {
      StatusCode::UNAUTHORIZED => JiraError::AuthenticationFailed { message },
      StatusCode::FORBIDDEN => JiraError::PermissionDenied { message },
      StatusCode::NOT_FOUND => JiraError::NotFound {
        resource: resource.to_string(),
        message,
      },
      _ => JiraError::Remote {
        status: status.as_u16(),
        message,
      },
    }
  }

  /// A next step the user can take to get past this error.
  pub fn hint(&self) -> Option<String> {
    match self {
      JiraError::MissingCredentials { .. } => Some(format!(
        "Create an API token at {API_TOKEN_URL}, then export ATLASSIAN_EMAIL and ATLASSIAN_API_TOKEN (optionally ATLASSIAN_SITE)"
      )),
      JiraError::InvalidSite(_) => Some(format!(
        "Pass --site or set {ENV_ATLASSIAN_SITE} to a host such as yoursite.atlassian.net"
      )),
      JiraError::AuthenticationFailed { .. } => Some(format!(
        "Check that the API token is correct and not expired or revoked, and that ATLASSIAN_EMAIL matches the account that created it. Regenerate one at {API_TOKEN_URL}"
      )),
      JiraError::PermissionDenied { .. } => {
        Some("Your account lacks permission for this action; ask a Jira admin to check the project permissions".to_string())
      }
      JiraError::NotFound { .. } => Some(format!(
        "Check the key, that your account can see it, and that the site ({ENV_ATLASSIAN_SITE} or --site) is correct"
      )),
      JiraError::AmbiguousMatch { kind, .. } => Some(format!(
        "Use a more specific name, or run with {} to see the exact {kind} names",
        kind.list_flag()
      )),
      JiraError::InvalidSelection { kind, .. } => Some(format!("Run with {} to see the valid {kind}s", kind.list_flag())),
      JiraError::Remote { status, .. } if *status == 400 => Some(
        "Jira rejected the request; the ticket may have changed state. Re-run with --list to see what is valid now"
          .to_string(),
      ),
      JiraError::Remote { status, .. } if *status >= 500 => {
        Some("Jira reported a server error; try again shortly".to_string())
      }
      JiraError::Remote { .. } => None,
      JiraError::Transport(_) => Some("Check your network connection and that the site is reachable".to_string()),
      JiraError::Decode(_) => Some("Re-run with -vv to log the request that produced this response".to_string()),
    }
  }
}

/// Pull a human-readable message out of a Jira error body.
///
/// Jira answers with `{"errorMessages": [...], "errors": {...}}`; the first
/// error message wins, then the field errors, then the raw body.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
  let trimmed = body.trim();
  if trimmed.is_empty() {
    return None;
  }

  let Ok(json) = serde_json::from_str::<Value>(trimmed) else {
    return Some(trimmed.to_string());
  };

  if let Some(first) = json
    .get("errorMessages")
    .and_then(Value::as_array)
    .and_then(|messages| messages.iter().find_map(Value::as_str))
  {
    return Some(first.to_string());
  }

  if let Some(errors) = json.get("errors").and_then(Value::as_object)
    && !errors.is_empty()
  {
    let joined = errors
      .iter()
      .map(|(field, message)| match message.as_str() {
        Some(text) => format!("{field}: {text}"),
        None => format!("{field}: {message}"),
      })
      .collect::<Vec<_>>()
      .join("; ");
    return Some(joined);
  }

  json
    .get("message")
    .and_then(Value::as_str)
    .map(str::to_string)
    .or_else(|| Some(trimmed.to_string()))
}
