//! # Link Command
//!
//! Creates links between tickets, lists a ticket's links, lists the site's
//! link types, and removes links by id.

use anyhow::{Result, bail};
use clap::Args;
use tix_core::issue_key::parse_issue_key;
use tix_core::output::{print_success, print_warning};
use tix_jira::{JiraClient, LinkOutcome, RunMode, create_jira_runtime_and_client};

use crate::render::links::{render_issue_links, render_link_outcome, render_link_types, render_removed_link};

/// Arguments for `tix link`
#[derive(Args)]
pub struct LinkArgs {
  /// Ticket the link starts from (e.g., PROJ-123)
  #[arg(index = 1, value_parser = parse_issue_key)]
  pub source: Option<String>,

  /// Ticket the link points to
  #[arg(index = 2, value_parser = parse_issue_key)]
  pub target: Option<String>,

  /// Link type name, id, or direction label (e.g., Blocks, "is blocked by")
  #[arg(index = 3)]
  pub link_type: Option<String>,

  /// List the link types configured on the site
  #[arg(long, conflicts_with_all = ["source", "list", "remove"])]
  pub list_types: bool,

  /// List the links on SOURCE with their ids
  #[arg(long, short = 'l', requires = "source", conflicts_with_all = ["target", "remove"])]
  pub list: bool,

  /// Remove the link with this id from SOURCE
  #[arg(long, short = 'r', value_name = "ID", requires = "source", conflicts_with = "target")]
  pub remove: Option<String>,

  /// Comment to add to the target ticket when creating the link
  #[arg(long, short = 'c')]
  pub comment: Option<String>,

  /// Resolve everything and report the change without making it
  #[arg(long, short = 'n')]
  pub dry_run: bool,
}

/// Handle the link command
pub(crate) fn handle_link_command(args: LinkArgs, site: Option<&str>) -> Result<()> {
  let LinkArgs {
    source,
    target,
    link_type,
    list_types,
    list,
    remove,
    comment,
    dry_run,
  } = args;
  let mode = RunMode::from_dry_run(dry_run);

  // Validate the argument shape before any credentials are needed
  let action = match (source, target, link_type, remove) {
    _ if list_types => LinkAction::ListTypes,
    (Some(source), _, _, _) if list => LinkAction::List(source),
    (Some(source), _, _, Some(link_id)) => LinkAction::Remove(source, link_id),
    (Some(source), Some(target), Some(link_type), None) => LinkAction::Create {
      source,
      target,
      link_type,
    },
    _ => bail!(
      "SOURCE, TARGET, and LINK_TYPE are required to create a link \
       (or use --list-types, SOURCE --list, SOURCE --remove ID)"
    ),
  };

  let (rt, jira_client) = create_jira_runtime_and_client(site)?;
  rt.block_on(run_link_action(&jira_client, action, comment.as_deref(), mode))
}

enum LinkAction {
  ListTypes,
  List(String),
  Remove(String, String),
  Create {
    source: String,
    target: String,
    link_type: String,
  },
}

async fn run_link_action(jira_client: &JiraClient, action: LinkAction, comment: Option<&str>, mode: RunMode) -> Result<()> {
  match action {
    LinkAction::ListTypes => {
      let types = jira_client.get_link_types().await?;
      println!("{}", render_link_types(&types));
    }
    LinkAction::List(issue_key) => {
      let issue = jira_client.get_issue_with_links(&issue_key).await?;
      println!("{}", render_issue_links(&issue));
    }
    LinkAction::Remove(issue_key, link_id) => {
      if mode == RunMode::DryRun {
        let link = jira_client.find_issue_link(&issue_key, &link_id).await?;
        println!("{}", render_removed_link(&issue_key, &link));
        print_warning("Dry run: No changes made");
      } else {
        let link = jira_client.remove_link(&issue_key, &link_id).await?;
        println!("{}", render_removed_link(&issue_key, &link));
        print_success("Link removed successfully!");
      }
    }
    LinkAction::Create {
      source,
      target,
      link_type,
    } => {
      let plan = jira_client.plan_link(&source, &target, &link_type, comment).await?;
      let outcome = jira_client.apply_link(plan, mode).await?;
      println!("{}", render_link_outcome(&outcome));
      if let LinkOutcome::Created(_) = outcome {
        print_success("Link created successfully!");
      }
    }
  }
  Ok(())
}
