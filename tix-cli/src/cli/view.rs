//! # View Command
//!
//! Fetches one ticket and prints it as a summary, with comments, or as raw
//! JSON.

use anyhow::{Context, Result};
use clap::Args;
use tix_core::issue_key::parse_issue_key;
use tix_jira::{JiraClient, JiraIssue, create_jira_runtime_and_client};

use crate::render::issue::{ViewMode, render_issue, render_json};

/// Arguments for `tix view`
#[derive(Args)]
pub struct ViewArgs {
  /// The Jira issue key (e.g., PROJ-123, proj123)
  #[arg(index = 1, value_parser = parse_issue_key)]
  pub issue_key: String,

  /// Include the five most recent comments
  #[arg(long, short = 'f')]
  pub full: bool,

  /// Print the raw API response as JSON
  #[arg(long, short = 'j')]
  pub json: bool,
}

/// Handle the view command
pub(crate) fn handle_view_command(args: ViewArgs, site: Option<&str>) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client(site)?;
  let mode = if args.full { ViewMode::Full } else { ViewMode::Summary };

  rt.block_on(show_issue(&jira_client, &args.issue_key, args.json, mode))
}

async fn show_issue(jira_client: &JiraClient, issue_key: &str, json: bool, mode: ViewMode) -> Result<()> {
  let body = jira_client
    .get_issue_details(issue_key, mode == ViewMode::Full)
    .await?;

  if json {
    let pretty = render_json(&body).context("Failed to format issue JSON")?;
    println!("{pretty}");
    return Ok(());
  }

  let issue = JiraIssue::from_json(body)?;
  println!("{}", render_issue(&issue, jira_client.base_url(), mode));
  Ok(())
}
