//! Ticket view rendering for `tix view`.

use owo_colors::OwoColorize;
use serde_json::Value;
use tix_core::output::{format_issue_key, format_status, get_emoji_or_default};
use tix_core::text::{format_timestamp, strip_html, truncate_chars};
use tix_core::url::browse_url;
use tix_jira::adf;
use tix_jira::models::{JiraComment, JiraIssue, JiraNamed, JiraUser};

use super::{push_section, rule};

const DESCRIPTION_LIMIT: usize = 500;
const COMMENT_LIMIT: usize = 200;
const RECENT_COMMENTS: usize = 5;

/// How much of a ticket to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
  /// Key fields, description, links, subtasks, parent and attachments
  Summary,
  /// Summary plus the most recent comments
  Full,
}

/// Pretty-print a raw API response.
pub fn render_json(value: &Value) -> Result<String, serde_json::Error> {
  serde_json::to_string_pretty(value)
}

/// Render a ticket fetched with the view field set.
pub fn render_issue(issue: &JiraIssue, base_url: &str, mode: ViewMode) -> String {
  let fields = &issue.fields;
  let mut lines = Vec::new();

  let clipboard = get_emoji_or_default("clipboard", "#");
  lines.push(String::new());
  lines.push(format!("{clipboard} {}: {}", format_issue_key(&issue.key), fields.summary.bold()));
  lines.push(rule('='));

  lines.push(String::new());
  lines.push(format!("Status: {}", format_status(issue.status_name())));
  lines.push(format!("Type: {}", named_or(fields.issuetype.as_ref(), "Unknown")));
  lines.push(format!("Priority: {}", named_or(fields.priority.as_ref(), "None")));
  lines.push(format!("Assignee: {}", user_or(fields.assignee.as_ref(), "Unassigned")));
  lines.push(format!("Reporter: {}", user_or(fields.reporter.as_ref(), "Unknown")));
  lines.push(format!("Created: {}", format_timestamp(fields.created.as_deref().unwrap_or_default())));
  lines.push(format!("Updated: {}", format_timestamp(fields.updated.as_deref().unwrap_or_default())));

  if !fields.labels.is_empty() {
    lines.push(format!("Labels: {}", fields.labels.join(", ")));
  }
  if !fields.fix_versions.is_empty() {
    lines.push(format!("Fix Versions: {}", join_names(&fields.fix_versions)));
  }
  if !fields.components.is_empty() {
    lines.push(format!("Components: {}", join_names(&fields.components)));
  }

  if let Some(description) = description_text(issue) {
    push_section(&mut lines, "Description:");
    let (text, truncated) = truncate_chars(&description, DESCRIPTION_LIMIT);
    lines.push(text);
    if truncated {
      lines.push("... (truncated)".dimmed().to_string());
    }
  }

  if mode == ViewMode::Full {
    push_comments(&mut lines, issue);
  }

  let links: Vec<String> = fields
    .issuelinks
    .iter()
    .filter_map(|link| link.counterpart())
    .map(|(direction, other)| {
      format!(
        "  {direction}: {} - {} ({})",
        format_issue_key(&other.key),
        other.fields.summary,
        other.status_name()
      )
    })
    .collect();
  if !links.is_empty() {
    push_section(&mut lines, "Linked Issues:");
    lines.extend(links);
  }

  if !fields.subtasks.is_empty() {
    push_section(&mut lines, &format!("Subtasks ({}):", fields.subtasks.len()));
    for subtask in &fields.subtasks {
      lines.push(format!(
        "  {}: {} ({})",
        format_issue_key(&subtask.key),
        subtask.fields.summary,
        subtask.status_name()
      ));
    }
  }

  if let Some(parent) = &fields.parent {
    lines.push(String::new());
    lines.push(format!("Parent: {} - {}", format_issue_key(&parent.key), parent.fields.summary));
  }

  if !fields.attachment.is_empty() {
    push_section(&mut lines, &format!("Attachments ({}):", fields.attachment.len()));
    for attachment in &fields.attachment {
      lines.push(format!("  {} ({:.1} KB)", attachment.filename, attachment.size as f64 / 1024.0));
    }
  }

  lines.push(String::new());
  lines.push(rule('='));
  lines.push(format!("View in browser: {}", browse_url(base_url, &issue.key).underline()));

  lines.join("\n")
}

fn named_or(named: Option<&JiraNamed>, fallback: &str) -> String {
  named
    .map(|n| n.name.as_str())
    .filter(|name| !name.is_empty())
    .unwrap_or(fallback)
    .to_string()
}

fn user_or(user: Option<&JiraUser>, fallback: &str) -> String {
  user
    .map(|u| u.display_name.as_str())
    .filter(|name| !name.is_empty())
    .unwrap_or(fallback)
    .to_string()
}

fn join_names(items: &[JiraNamed]) -> String {
  items.iter().map(|item| item.name.as_str()).collect::<Vec<_>>().join(", ")
}

/// Rendered HTML when Jira provided it, otherwise the flattened ADF body.
fn description_text(issue: &JiraIssue) -> Option<String> {
  let rendered = issue
    .rendered_fields
    .as_ref()
    .and_then(|rendered| rendered.description.as_deref())
    .map(strip_html)
    .filter(|text| !text.is_empty());

  rendered.or_else(|| {
    issue
      .fields
      .description
      .as_ref()
      .map(adf::to_plain_text)
      .filter(|text| !text.is_empty())
  })
}

fn push_comments(lines: &mut Vec<String>, issue: &JiraIssue) {
  let comments: &[JiraComment] = issue
    .fields
    .comment
    .as_ref()
    .map(|page| page.comments.as_slice())
    .unwrap_or_default();

  if comments.is_empty() {
    lines.push(String::new());
    lines.push("Comments: None".to_string());
    return;
  }

  let total = issue
    .fields
    .comment
    .as_ref()
    .and_then(|page| page.total)
    .unwrap_or(comments.len() as u64);
  push_section(lines, &format!("Comments ({total} total):"));

  let recent = &comments[comments.len().saturating_sub(RECENT_COMMENTS)..];
  for (i, comment) in recent.iter().enumerate() {
    let author = user_or(comment.author.as_ref(), "Unknown");
    let created = format_timestamp(comment.created.as_deref().unwrap_or_default());
    let body = comment
      .body
      .as_ref()
      .map(adf::to_plain_text)
      .filter(|text| !text.is_empty())
      .unwrap_or_else(|| "(empty)".to_string());

    lines.push(String::new());
    lines.push(format!("{}. {} ({created}):", i + 1, author.bold()));
    let (text, truncated) = truncate_chars(&body, COMMENT_LIMIT);
    lines.push(format!("   {text}"));
    if truncated {
      lines.push(format!("   {}", "... (truncated)".dimmed()));
    }
  }
}
