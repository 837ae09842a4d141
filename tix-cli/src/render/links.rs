//! Link type, link list and link plan rendering for `tix link`.

use owo_colors::OwoColorize;
use tix_core::output::{format_command, format_id, format_issue_key, format_status};
use tix_jira::{JiraIssue, JiraIssueLink, JiraIssueLinkType, LinkOutcome};

use super::rule;

/// Every link type with both of its direction labels.
pub fn render_link_types(types: &[JiraIssueLinkType]) -> String {
  let mut lines = vec![String::new(), "Available Link Types:".bold().to_string(), rule('=')];

  if types.is_empty() {
    lines.push("  (No link types available)".dimmed().to_string());
  }

  for link_type in types {
    lines.push(String::new());
    lines.push(format!("  {} {}", link_type.name.bold(), format_id(&link_type.id)));
    lines.push(format!("    Outward: \"{}\"", link_type.outward));
    lines.push(format!("    Inward:  \"{}\"", link_type.inward));
  }

  lines.push(String::new());
  lines.push(rule('='));
  lines.push(format!("Usage: {}", format_command("tix link SOURCE TARGET \"Link Type Name\"")));
  lines.push(format!("Example: {}", format_command("tix link PROJ-123 PROJ-456 Blocks")));
  lines.push("         (PROJ-123 blocks PROJ-456)".to_string());

  lines.join("\n")
}

/// The links on a ticket, each with the id `--remove` takes.
pub fn render_issue_links(issue: &JiraIssue) -> String {
  let links = &issue.fields.issuelinks;
  let mut lines = vec![
    String::new(),
    format!("{}: {}", format_issue_key(&issue.key), issue.fields.summary.bold()),
    rule('='),
  ];

  if links.is_empty() {
    lines.push("  No links found".dimmed().to_string());
    return lines.join("\n");
  }

  lines.push(String::new());
  lines.push(format!("Links ({}):", links.len()));
  for link in links {
    let Some((direction, other)) = link.counterpart() else {
      continue;
    };
    lines.push(String::new());
    lines.push(format!("  [{}] {direction}:", link.id));
    lines.push(format!("    {}: {}", format_issue_key(&other.key), other.fields.summary));
    lines.push(format!("    Status: {}", format_status(other.status_name())));
  }

  lines.join("\n")
}

/// Both tickets, the resolved type and how the link reads from each end.
pub fn render_link_outcome(outcome: &LinkOutcome) -> String {
  let plan = outcome.plan();
  let (forward, backward) = plan.describe();
  let mut lines = vec![
    String::new(),
    format!(
      "Source: {}: {}",
      format_issue_key(&plan.source().key),
      plan.source().fields.summary
    ),
    format!(
      "Target: {}: {}",
      format_issue_key(&plan.target().key),
      plan.target().fields.summary
    ),
    String::new(),
    format!("Link Type: {}", plan.link_type().name.bold()),
    format!("  {forward}"),
    format!("  {backward}"),
  ];

  if let Some(comment) = plan.comment() {
    lines.push(String::new());
    lines.push(format!("Comment: {comment}"));
  }

  if let LinkOutcome::Planned(_) = outcome {
    lines.push(String::new());
    lines.push("Dry run: No changes made".yellow().to_string());
  }

  lines.join("\n")
}

/// The link that was just removed from `issue_key`.
pub fn render_removed_link(issue_key: &str, link: &JiraIssueLink) -> String {
  let mut lines = vec![
    String::new(),
    format!("Removing link from {}:", format_issue_key(issue_key)),
    format!("  Link ID: {}", link.id),
    format!("  Type: {}", link.link_type.name),
  ];
  if let Some((direction, other)) = link.counterpart() {
    lines.push(format!("  {direction} {}", format_issue_key(&other.key)));
  }
  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use tix_jira::models::JiraIssueLinkTypes;
  use tix_test_utils::jira::{issue_json, issue_with_links_json, link_types_json};

  use super::*;

  #[test]
  fn test_render_link_types() {
    let types: JiraIssueLinkTypes = serde_json::from_value(link_types_json()).unwrap();
    let output = render_link_types(&types.issue_link_types);

    assert!(output.contains("Available Link Types:"));
    assert!(output.contains("(ID: 10000)"));
    assert!(output.contains("Outward: \"blocks\""));
    assert!(output.contains("Inward:  \"is blocked by\""));
    assert!(output.contains("Duplicate"));
  }

  #[test]
  fn test_render_link_types_empty() {
    assert!(render_link_types(&[]).contains("(No link types available)"));
  }

  #[test]
  fn test_render_issue_links() {
    let issue = JiraIssue::from_json(issue_with_links_json("PROJ-1")).unwrap();
    let output = render_issue_links(&issue);

    assert!(output.contains("Links (2):"));
    assert!(output.contains("[20001] blocks:"));
    assert!(output.contains("Release 1.0"));
    assert!(output.contains("[20002] is cloned by:"));
    assert!(output.contains("Importer v2"));
  }

  #[test]
  fn test_render_issue_without_links() {
    let issue = JiraIssue::from_json(issue_json("PROJ-9", "Lonely", "To Do")).unwrap();
    assert!(render_issue_links(&issue).contains("No links found"));
  }

  #[test]
  fn test_render_removed_link() {
    let issue = JiraIssue::from_json(issue_with_links_json("PROJ-1")).unwrap();
    let output = render_removed_link("PROJ-1", &issue.fields.issuelinks[0]);

    assert!(output.contains("Link ID: 20001"));
    assert!(output.contains("Type: Blocks"));
    assert!(output.contains("  blocks "));
    assert!(output.contains("PROJ-2"));
  }
}
