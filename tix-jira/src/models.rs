use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::JiraError;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub email: String,
  pub api_token: String,
}

impl fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraAuth")
      .field("email", &self.email)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// Represents a Jira issue
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssue {
  #[serde(default)]
  pub id: String,
  pub key: String,
  pub fields: JiraIssueFields,
  #[serde(default)]
  pub rendered_fields: Option<JiraRenderedFields>,
}

impl JiraIssue {
  /// Decode an issue from a raw response body.
  pub fn from_json(value: Value) -> Result<Self, JiraError> {
    serde_json::from_value(value).map_err(|e| JiraError::Decode(format!("issue: {e}")))
  }

  /// Current status name, or `Unknown` when the field was not requested.
  pub fn status_name(&self) -> &str {
    self
      .fields
      .status
      .as_ref()
      .map(|status| status.name.as_str())
      .unwrap_or("Unknown")
  }
}

/// Represents Jira issue fields
///
/// Everything is optional so the same type decodes both the narrow
/// `fields=summary,status` responses and the full view.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: String,
  /// Atlassian Document Format body
  #[serde(default)]
  pub description: Option<Value>,
  #[serde(default)]
  pub status: Option<JiraIssueStatus>,
  #[serde(default)]
  pub issuetype: Option<JiraNamed>,
  #[serde(default)]
  pub priority: Option<JiraNamed>,
  #[serde(default)]
  pub assignee: Option<JiraUser>,
  #[serde(default)]
  pub reporter: Option<JiraUser>,
  #[serde(default)]
  pub created: Option<String>,
  #[serde(default)]
  pub updated: Option<String>,
  #[serde(default)]
  pub labels: Vec<String>,
  #[serde(default)]
  pub fix_versions: Vec<JiraNamed>,
  #[serde(default)]
  pub components: Vec<JiraNamed>,
  #[serde(default)]
  pub issuelinks: Vec<JiraIssueLink>,
  #[serde(default)]
  pub attachment: Vec<JiraAttachment>,
  #[serde(default)]
  pub subtasks: Vec<JiraIssueRef>,
  #[serde(default)]
  pub parent: Option<JiraIssueRef>,
  #[serde(default)]
  pub comment: Option<JiraCommentPage>,
}

/// HTML renderings requested with `expand=renderedFields`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraRenderedFields {
  #[serde(default)]
  pub description: Option<String>,
}

/// Represents a Jira issue status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JiraIssueStatus {
  #[serde(default)]
  pub id: Option<String>,
  pub name: String,
}

/// Any Jira entity that is shown by name: issue types, priorities, versions,
/// components
#[derive(Debug, Clone, Deserialize)]
pub struct JiraNamed {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub name: String,
}

/// Represents a Jira user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  #[serde(default)]
  pub account_id: Option<String>,
  #[serde(default)]
  pub display_name: String,
  #[serde(default)]
  pub email_address: Option<String>,
  #[serde(default)]
  pub active: bool,
}

/// Another issue referenced from this one (subtask, parent, link end)
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssueRef {
  #[serde(default)]
  pub id: Option<String>,
  pub key: String,
  #[serde(default)]
  pub fields: JiraIssueRefFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraIssueRefFields {
  #[serde(default)]
  pub summary: String,
  #[serde(default)]
  pub status: Option<JiraIssueStatus>,
}

impl JiraIssueRef {
  pub fn status_name(&self) -> &str {
    self
      .fields
      .status
      .as_ref()
      .map(|status| status.name.as_str())
      .unwrap_or("")
  }
}

/// Represents a file attached to an issue
#[derive(Debug, Clone, Deserialize)]
pub struct JiraAttachment {
  #[serde(default)]
  pub filename: String,
  /// Size in bytes
  #[serde(default)]
  pub size: u64,
}

/// The `comment` field of an issue
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraCommentPage {
  #[serde(default)]
  pub comments: Vec<JiraComment>,
  #[serde(default)]
  pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraComment {
  #[serde(default)]
  pub author: Option<JiraUser>,
  #[serde(default)]
  pub created: Option<String>,
  /// Atlassian Document Format body
  #[serde(default)]
  pub body: Option<Value>,
}

/// Represents a Jira transition
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JiraTransition {
  pub id: String,
  pub name: String,
  /// Status the issue lands in after the transition
  #[serde(default)]
  pub to: Option<JiraIssueStatus>,
}

impl JiraTransition {
  pub fn target_status(&self) -> Option<&str> {
    self.to.as_ref().map(|status| status.name.as_str())
  }
}

/// Represents a list of Jira transitions
#[derive(Debug, Deserialize)]
pub struct JiraTransitions {
  #[serde(default)]
  pub transitions: Vec<JiraTransition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}

/// A relationship category with its two display directions
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JiraIssueLinkType {
  #[serde(default)]
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub inward: String,
  #[serde(default)]
  pub outward: String,
}

/// Represents the `GET /issueLinkType` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueLinkTypes {
  #[serde(default)]
  pub issue_link_types: Vec<JiraIssueLinkType>,
}

/// A link as listed on one of its two issues.
///
/// Exactly one of `inward_issue` / `outward_issue` is present: the issue at
/// the other end of the link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueLink {
  pub id: String,
  #[serde(rename = "type")]
  pub link_type: JiraIssueLinkType,
  #[serde(default)]
  pub inward_issue: Option<JiraIssueRef>,
  #[serde(default)]
  pub outward_issue: Option<JiraIssueRef>,
}

impl JiraIssueLink {
  /// The label Jira shows for this link and the issue at its other end.
  pub fn counterpart(&self) -> Option<(&str, &JiraIssueRef)> {
    if let Some(issue) = &self.outward_issue {
      Some((self.link_type.outward.as_str(), issue))
    } else {
      self
        .inward_issue
        .as_ref()
        .map(|issue| (self.link_type.inward.as_str(), issue))
    }
  }
}

/// Represents a `POST /issueLink` payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueLinkRequest {
  #[serde(rename = "type")]
  pub link_type: LinkTypeName,
  pub inward_issue: IssueKey,
  pub outward_issue: IssueKey,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<LinkComment>,
}

#[derive(Debug, Serialize)]
pub struct LinkTypeName {
  pub name: String,
}

#[derive(Debug, Serialize)]
pub struct IssueKey {
  pub key: String,
}

/// Comment attached while creating a link, as an ADF document
#[derive(Debug, Serialize)]
pub struct LinkComment {
  pub body: Value,
}
