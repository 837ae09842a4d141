//! # Rendering
//!
//! Turns Jira payloads into the text tix prints. Every renderer returns a
//! `String` and never touches the network or the terminal, so command handlers
//! decide where output goes and tests can inspect it directly.

pub mod issue;
pub mod links;
pub mod transitions;

use owo_colors::OwoColorize;

/// Width of the horizontal rules between sections
pub const RULE_WIDTH: usize = 80;

/// A full-width rule drawn with `ch`.
pub fn rule(ch: char) -> String {
  ch.to_string().repeat(RULE_WIDTH)
}

/// Push a section title followed by a thin rule.
pub(crate) fn push_section(lines: &mut Vec<String>, title: &str) {
  lines.push(String::new());
  lines.push(format!("{}", title.bold()));
  lines.push(rule('-').dimmed().to_string());
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rule_width() {
    assert_eq!(rule('=').chars().count(), RULE_WIDTH);
  }

  #[test]
  fn test_push_section() {
    let mut lines = Vec::new();
    push_section(&mut lines, "Links (2):");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].is_empty());
    assert!(lines[1].contains("Links (2):"));
  }
}
