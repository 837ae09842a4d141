//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the Jira resources tix touches:
//! issues, workflow transitions, and issue links.

pub mod issues;
pub mod links;
pub mod transitions;

/// Whether a mutating operation should reach Jira.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
  /// Resolve and report what would happen without sending the change
  DryRun,
  Execute,
}

impl RunMode {
  pub fn from_dry_run(dry_run: bool) -> Self {
    if dry_run { RunMode::DryRun } else { RunMode::Execute }
  }
}
