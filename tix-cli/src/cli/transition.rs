//! # Transition Command
//!
//! Lists a ticket's available transitions or moves it to a new status picked
//! by name.

use anyhow::Result;
use clap::Args;
use tix_core::issue_key::parse_issue_key;
use tix_core::output::print_success;
use tix_jira::{JiraClient, RunMode, TransitionOutcome, create_jira_runtime_and_client};
use tracing::debug;

use crate::render::transitions::{
  render_issue_header, render_status_change, render_transition_list, render_transition_outcome,
};

/// Arguments for `tix transition`
#[derive(Args)]
pub struct TransitionArgs {
  /// The Jira issue key (e.g., PROJ-123, proj123)
  #[arg(index = 1, value_parser = parse_issue_key)]
  pub issue_key: String,

  #[arg(
    index = 2,
    required_unless_present = "list",
    long_help = "Target status or transition name. Matched exactly, then ignoring case,\n\
               then as a partial name; a transition id or resulting status also works"
  )]
  pub status: Option<String>,

  /// List the transitions available from the current status
  #[arg(long, short = 'l', conflicts_with = "status")]
  pub list: bool,

  /// Show which transition would run without changing the ticket
  #[arg(long, short = 'n')]
  pub dry_run: bool,
}

/// Handle the transition command
pub(crate) fn handle_transition_command(args: TransitionArgs, site: Option<&str>) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client(site)?;
  let mode = RunMode::from_dry_run(args.dry_run);
  rt.block_on(run_transition(&jira_client, &args.issue_key, args.status.as_deref(), mode))
}

async fn run_transition(jira_client: &JiraClient, issue_key: &str, status: Option<&str>, mode: RunMode) -> Result<()> {
  let issue = jira_client.get_issue(issue_key).await?;

  let Some(status) = status else {
    let transitions = jira_client.get_transitions(issue_key).await?;
    println!("{}", render_transition_list(&issue, &transitions));
    return Ok(());
  };

  println!("{}", render_issue_header(&issue));

  let choice = jira_client.resolve_transition(issue_key, status).await?;
  let outcome = jira_client.apply_transition(choice, mode).await?;
  println!("{}", render_transition_outcome(&outcome));

  if let TransitionOutcome::Applied(_) = outcome {
    let updated = jira_client.get_issue(issue_key).await?;
    debug!(issue = issue_key, status = updated.status_name(), "Re-fetched issue");
    print_success(&render_status_change(issue.status_name(), updated.status_name()));
  }

  Ok(())
}
