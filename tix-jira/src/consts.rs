//! Constants for the tix-jira client.

/// Path prefix of the Jira Cloud REST API, version 3
pub const API_PATH: &str = "/rest/api/3";

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("tix/", env!("CARGO_PKG_VERSION"));

/// Fields requested when viewing a ticket
pub const VIEW_FIELDS: &[&str] = &[
  "summary",
  "description",
  "status",
  "issuetype",
  "assignee",
  "reporter",
  "priority",
  "created",
  "updated",
  "labels",
  "fixVersions",
  "components",
  "issuelinks",
  "attachment",
  "subtasks",
  "parent",
];
