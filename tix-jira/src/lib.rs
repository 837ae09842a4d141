//! # Jira API Client
//!
//! Provides Jira Cloud REST API v3 integration for tix: credential lookup,
//! an authenticated HTTP client with classified errors, issue views, workflow
//! transitions resolved by name, and issue link management.

pub mod adf;
pub mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod error;
pub mod matching;
pub mod models;

// Re-export the client
pub use auth::{AtlassianCredentials, create_jira_client_from_env, create_jira_runtime_and_client};
pub use client::{JiraClient, create_jira_client};
pub use endpoints::RunMode;
pub use endpoints::links::{LinkOutcome, LinkPlan};
pub use endpoints::transitions::{TransitionChoice, TransitionOutcome};
pub use error::{JiraError, SelectionKind};
// Re-export models
pub use models::{
  JiraAuth, JiraComment, JiraIssue, JiraIssueFields, JiraIssueLink, JiraIssueLinkType, JiraIssueRef, JiraIssueStatus,
  JiraTransition, JiraUser,
};
