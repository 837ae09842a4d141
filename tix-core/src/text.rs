//! Plain-text helpers for terminal rendering of remote content.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("Failed to compile HTML tag regex"));

/// Remove HTML tags and decode the handful of entities Jira's renderer emits.
pub fn strip_html(html: &str) -> String {
  let without_tags = HTML_TAG.replace_all(html, "");
  without_tags
    .replace("&nbsp;", " ")
    .replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&quot;", "\"")
    .replace("&#39;", "'")
    .replace("&amp;", "&")
    .trim()
    .to_string()
}

/// Cut `text` to at most `max_chars` characters.
///
/// Returns the (possibly shortened) text and whether anything was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
  match text.char_indices().nth(max_chars) {
    Some((idx, _)) => (text[..idx].to_string(), true),
    None => (text.to_string(), false),
  }
}

/// Parse a Jira timestamp such as `2024-01-15T10:30:00.000+0000`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
  DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
    .or_else(|_| DateTime::parse_from_rfc3339(raw))
    .ok()
}

/// Render a Jira timestamp as `YYYY-MM-DD HH:MM`, or verbatim if it does not
/// parse. Empty input renders as `Unknown`.
pub fn format_timestamp(raw: &str) -> String {
  if raw.is_empty() {
    return "Unknown".to_string();
  }
  match parse_timestamp(raw) {
    Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
    None => raw.to_string(),
  }
}
