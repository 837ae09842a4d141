//! Transition listing and outcome rendering for `tix transition`.

use owo_colors::OwoColorize;
use tix_core::output::{format_id, format_issue_key, format_status, get_emoji_or_default};
use tix_jira::{JiraIssue, JiraTransition, TransitionOutcome};

/// Key, summary and current status of a ticket.
pub fn render_issue_header(issue: &JiraIssue) -> String {
  let clipboard = get_emoji_or_default("clipboard", "#");
  format!(
    "\n{clipboard} {}: {}\nCurrent Status: {}",
    format_issue_key(&issue.key),
    issue.fields.summary.bold(),
    format_status(issue.status_name())
  )
}

/// Every transition available from the current status, as
/// `name → resulting status`.
pub fn render_transition_list(issue: &JiraIssue, transitions: &[JiraTransition]) -> String {
  let mut lines = vec![render_issue_header(issue), String::new(), "Available Transitions:".bold().to_string()];

  if transitions.is_empty() {
    lines.push("  (No transitions available)".dimmed().to_string());
  }

  for (i, transition) in transitions.iter().enumerate() {
    lines.push(format!(
      "  {}. {} → {} {}",
      i + 1,
      transition.name,
      format_status(transition.target_status().unwrap_or("?")),
      format_id(&transition.id)
    ));
  }

  lines.join("\n")
}

/// What was (or would be) done for a resolved transition.
pub fn render_transition_outcome(outcome: &TransitionOutcome) -> String {
  let choice = outcome.choice();
  let transition = choice.transition();
  match outcome {
    TransitionOutcome::Planned(_) => {
      let glass = get_emoji_or_default("mag", "?");
      format!(
        "\n{glass} Dry run: Would transition {} to '{}'\n   Using transition: {} {}",
        format_issue_key(choice.issue_key()),
        choice.target_status(),
        transition.name,
        format_id(&transition.id)
      )
    }
    TransitionOutcome::Applied(_) => format!(
      "Transitioned {} using '{}'",
      format_issue_key(choice.issue_key()),
      transition.name
    ),
  }
}

/// `old → new` status line shown after a successful transition.
pub fn render_status_change(old_status: &str, new_status: &str) -> String {
  format!("Status: {} → {}", old_status, format_status(new_status))
}
