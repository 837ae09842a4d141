//! # Name Matching
//!
//! Turns a user-typed name ("in prog", "blocks") into exactly one of the
//! choices Jira offered. Tiers are tried in order and the first tier with any
//! hit decides: one hit selects it, several hits are an error listing them.
//!
//! 1. exact display name
//! 2. display name, ignoring case
//! 3. query inside the display name, ignoring case
//! 4. display name inside the query, ignoring case
//! 5. exact id
//! 6. alias (resulting status, link direction label), ignoring case
//! 7. query inside an alias, ignoring case
//! 8. alias inside the query, ignoring case

use tracing::{debug, warn};

use crate::error::{JiraError, SelectionKind};
use crate::models::{JiraIssueLinkType, JiraTransition};

/// Something the user can pick by name.
pub trait Selectable {
  fn id(&self) -> &str;

  fn display_name(&self) -> &str;

  /// Secondary labels, consulted only when no display name matches.
  fn aliases(&self) -> Vec<&str> {
    Vec::new()
  }
}

impl Selectable for JiraTransition {
  fn id(&self) -> &str {
    &self.id
  }

  fn display_name(&self) -> &str {
    &self.name
  }

  fn aliases(&self) -> Vec<&str> {
    self.target_status().into_iter().collect()
  }
}

impl Selectable for JiraIssueLinkType {
  fn id(&self) -> &str {
    &self.id
  }

  fn display_name(&self) -> &str {
    &self.name
  }

  fn aliases(&self) -> Vec<&str> {
    vec![self.outward.as_str(), self.inward.as_str()]
  }
}

#[derive(Debug, Clone, Copy)]
enum Tier {
  Exact,
  CaseInsensitive,
  Substring,
  ReverseSubstring,
  Id,
  Alias,
  AliasSubstring,
  ReverseAliasSubstring,
}

impl Tier {
  const ORDER: [Tier; 8] = [
    Tier::Exact,
    Tier::CaseInsensitive,
    Tier::Substring,
    Tier::ReverseSubstring,
    Tier::Id,
    Tier::Alias,
    Tier::AliasSubstring,
    Tier::ReverseAliasSubstring,
  ];

  fn matches<T: Selectable>(self, candidate: &T, query: &str, needle: &str) -> bool {
    match self {
      Tier::Exact => candidate.display_name() == query,
      Tier::CaseInsensitive => candidate.display_name().to_lowercase() == needle,
      Tier::Substring => contains(candidate.display_name(), needle),
      Tier::ReverseSubstring => contained_in(candidate.display_name(), needle),
      Tier::Id => !candidate.id().is_empty() && candidate.id() == query,
      Tier::Alias => candidate.aliases().iter().any(|alias| alias.to_lowercase() == needle),
      Tier::AliasSubstring => candidate.aliases().iter().any(|alias| contains(alias, needle)),
      Tier::ReverseAliasSubstring => candidate.aliases().iter().any(|alias| contained_in(alias, needle)),
    }
  }
}

/// `needle` appears in `label`, ignoring case.
fn contains(label: &str, needle: &str) -> bool {
  label.to_lowercase().contains(needle)
}

/// `label` appears in `needle`, ignoring case.
fn contained_in(label: &str, needle: &str) -> bool {
  let label = label.to_lowercase();
  !label.is_empty() && needle.contains(&label)
}

/// Pick the single candidate `query` refers to.
pub fn select<'a, T: Selectable>(kind: SelectionKind, candidates: &'a [T], query: &str) -> Result<&'a T, JiraError> {
  let query = query.trim();
  let available = || candidates.iter().map(|c| c.display_name().to_string()).collect::<Vec<_>>();

  if query.is_empty() {
    return Err(JiraError::InvalidSelection {
      kind,
      query: query.to_string(),
      available: available(),
    });
  }

  let needle = query.to_lowercase();
  for tier in Tier::ORDER {
    let hits: Vec<&T> = candidates
      .iter()
      .filter(|candidate| tier.matches(*candidate, query, &needle))
      .collect();

    match hits.as_slice() {
      [] => continue,
      [only] => {
        debug!(%kind, query, ?tier, selected = only.display_name(), "Matched {kind}");
        return Ok(*only);
      }
      _ => {
        let names: Vec<String> = hits.iter().map(|hit| hit.display_name().to_string()).collect();
        warn!(%kind, query, ?tier, ?names, "Ambiguous {kind} name");
        return Err(JiraError::AmbiguousMatch {
          kind,
          query: query.to_string(),
          candidates: names,
        });
      }
    }
  }

  Err(JiraError::InvalidSelection {
    kind,
    query: query.to_string(),
    available: available(),
  })
}
