//! # Whoami Command
//!
//! Connection check: shows which credential variables are set, then asks
//! Jira which account they authenticate as.

use anyhow::Result;
use owo_colors::OwoColorize;
use tix_core::output::{get_emoji_or_default, print_info, print_success};
use tix_core::url::site_host;
use tix_jira::auth::{CredentialStatus, credential_status};
use tix_jira::create_jira_runtime_and_client;

/// Handle the whoami command
pub(crate) fn handle_whoami_command(site: Option<&str>) -> Result<()> {
  print_info("Testing Jira API connection...");
  for status in credential_status() {
    println!("  {}", describe_status(&status));
  }

  let (rt, jira_client) = create_jira_runtime_and_client(site)?;
  println!("  Site: {}\n", site_host(jira_client.base_url()));

  let user = rt.block_on(jira_client.get_myself())?;

  print_success("Connection successful!");
  println!("  User: {}", user.display_name.bold());
  println!("  Account ID: {}", user.account_id.as_deref().unwrap_or("Unknown"));
  println!("  Email: {}", user.email_address.as_deref().unwrap_or("Unknown"));
  println!("  Active: {}", user.active);
  Ok(())
}

fn describe_status(status: &CredentialStatus) -> String {
  let value = match (&status.shown, status.is_set) {
    (Some(shown), _) => shown.clone(),
    (None, true) => format!("{} set", get_emoji_or_default("white_check_mark", "✓")),
    (None, false) => format!("{} not set", get_emoji_or_default("x", "✗")).red().to_string(),
  };
  format!("{}: {value}", status.name)
}
