//! Authentication helpers for the Jira client.
//!
//! Credentials come from the environment (`ATLASSIAN_EMAIL`,
//! `ATLASSIAN_API_TOKEN`, `ATLASSIAN_SITE`), which the binary may have
//! populated from a `.env` file before anything here runs. Lookups go through
//! a closure so tests never need to touch the real process environment.

use std::env;
use std::fmt;

use anyhow::{Context, Result};
use tix_core::consts::{DEFAULT_SITE, ENV_ATLASSIAN_API_TOKEN, ENV_ATLASSIAN_EMAIL, ENV_ATLASSIAN_SITE};
use tix_core::url::site_base_url;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::client::{JiraClient, create_jira_client};
use crate::error::JiraError;

/// Everything needed to authenticate against one Jira Cloud site.
#[derive(Clone)]
pub struct AtlassianCredentials {
  pub email: String,
  pub api_token: String,
  /// Site as given by the user, before normalization
  pub site: String,
}

impl fmt::Debug for AtlassianCredentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AtlassianCredentials")
      .field("email", &self.email)
      .field("api_token", &"<redacted>")
      .field("site", &self.site)
      .finish()
  }
}

impl AtlassianCredentials {
  /// Base URL the REST client talks to.
  pub fn base_url(&self) -> Result<String, JiraError> {
    site_base_url(&self.site).map_err(|e| JiraError::InvalidSite(e.to_string()))
  }
}

/// Whether one of the credential variables is set, for `tix whoami`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStatus {
  pub name: &'static str,
  pub is_set: bool,
  /// Value safe to print; never populated for the token
  pub shown: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
  value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn process_env(name: &str) -> Option<String> {
  env::var(name).ok()
}

/// Resolve credentials from the process environment.
pub fn resolve_credentials(site_override: Option<&str>) -> Result<AtlassianCredentials, JiraError> {
  resolve_credentials_with(process_env, site_override)
}

/// Resolve credentials through `lookup`.
///
/// Blank values count as missing. The site comes from `site_override`, then
/// `ATLASSIAN_SITE`, then the default placeholder site.
pub fn resolve_credentials_with<F>(lookup: F, site_override: Option<&str>) -> Result<AtlassianCredentials, JiraError>
where
  F: Fn(&str) -> Option<String>,
{
  let email = non_blank(lookup(ENV_ATLASSIAN_EMAIL));
  let api_token = non_blank(lookup(ENV_ATLASSIAN_API_TOKEN));

  let (email, api_token) = match (email, api_token) {
    (Some(email), Some(api_token)) => (email, api_token),
    (email, api_token) => {
      let mut missing = Vec::new();
      if email.is_none() {
        missing.push(ENV_ATLASSIAN_EMAIL);
      }
      if api_token.is_none() {
        missing.push(ENV_ATLASSIAN_API_TOKEN);
      }
      return Err(JiraError::MissingCredentials { missing });
    }
  };

  let site = non_blank(site_override.map(str::to_string))
    .or_else(|| non_blank(lookup(ENV_ATLASSIAN_SITE)))
    .unwrap_or_else(|| DEFAULT_SITE.to_string());
  debug!(%email, %site, "Resolved Atlassian credentials");

  Ok(AtlassianCredentials { email, api_token, site })
}

/// Report which credential variables are set in the process environment.
pub fn credential_status() -> Vec<CredentialStatus> {
  credential_status_with(process_env)
}

/// Report which credential variables `lookup` can see.
pub fn credential_status_with<F>(lookup: F) -> Vec<CredentialStatus>
where
  F: Fn(&str) -> Option<String>,
{
  [ENV_ATLASSIAN_EMAIL, ENV_ATLASSIAN_API_TOKEN, ENV_ATLASSIAN_SITE]
    .into_iter()
    .map(|name| {
      let value = non_blank(lookup(name));
      let is_set = value.is_some();
      let shown = if name == ENV_ATLASSIAN_API_TOKEN { None } else { value };
      CredentialStatus { name, is_set, shown }
    })
    .collect()
}

/// Creates an authenticated Jira client from resolved credentials.
pub fn create_jira_client_from_credentials(creds: &AtlassianCredentials) -> Result<JiraClient, JiraError> {
  let base_url = creds.base_url()?;
  Ok(create_jira_client(&base_url, &creds.email, &creds.api_token))
}

/// Creates an authenticated Jira client using credentials from the environment.
pub fn create_jira_client_from_env(site_override: Option<&str>) -> Result<JiraClient, JiraError> {
  let creds = resolve_credentials(site_override)?;
  create_jira_client_from_credentials(&creds)
}

/// Creates a single-threaded tokio runtime and an authenticated Jira client.
///
/// Credentials are checked first so a misconfigured environment fails before
/// any runtime or connection is set up.
pub fn create_jira_runtime_and_client(site_override: Option<&str>) -> Result<(Runtime, JiraClient)> {
  let client = create_jira_client_from_env(site_override)?;
  let rt = Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;
  Ok((rt, client))
}
