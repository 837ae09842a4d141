use reqwest::Method;
use tracing::{debug, info, instrument};

use super::RunMode;
use super::issues::issue_resource;
use crate::adf;
use crate::client::JiraClient;
use crate::error::{JiraError, SelectionKind};
use crate::matching::select;
use crate::models::{
  CreateIssueLinkRequest, IssueKey, JiraIssue, JiraIssueLink, JiraIssueLinkType, JiraIssueLinkTypes, LinkComment,
  LinkTypeName,
};

/// A link resolved against live data and ready to be created.
#[derive(Debug, Clone)]
pub struct LinkPlan {
  source: JiraIssue,
  target: JiraIssue,
  link_type: JiraIssueLinkType,
  comment: Option<String>,
}

impl LinkPlan {
  pub fn source(&self) -> &JiraIssue {
    &self.source
  }

  pub fn target(&self) -> &JiraIssue {
    &self.target
  }

  pub fn link_type(&self) -> &JiraIssueLinkType {
    &self.link_type
  }

  pub fn comment(&self) -> Option<&str> {
    self.comment.as_deref()
  }

  /// How the link reads from each end: `SOURCE outward TARGET`, then
  /// `TARGET inward SOURCE`.
  pub fn describe(&self) -> (String, String) {
    (
      format!("{} {} {}", self.source.key, self.link_type.outward, self.target.key),
      format!("{} {} {}", self.target.key, self.link_type.inward, self.source.key),
    )
  }

  /// `POST /issueLink` body. Jira shows the outward label on the issue sent
  /// as `inwardIssue`, so the source goes there.
  pub fn to_request(&self) -> CreateIssueLinkRequest {
    CreateIssueLinkRequest {
      link_type: LinkTypeName {
        name: self.link_type.name.clone(),
      },
      inward_issue: IssueKey {
        key: self.source.key.clone(),
      },
      outward_issue: IssueKey {
        key: self.target.key.clone(),
      },
      comment: self.comment.as_deref().map(|text| LinkComment {
        body: adf::paragraph(text),
      }),
    }
  }
}

/// What [`JiraClient::apply_link`] did.
#[derive(Debug, Clone)]
pub enum LinkOutcome {
  /// Dry run: nothing was sent
  Planned(LinkPlan),
  Created(LinkPlan),
}

impl LinkOutcome {
  pub fn plan(&self) -> &LinkPlan {
    match self {
      LinkOutcome::Planned(plan) | LinkOutcome::Created(plan) => plan,
    }
  }
}

impl JiraClient {
  /// Get every link type configured on the site
  #[instrument(skip(self), level = "debug")]
  pub async fn get_link_types(&self) -> Result<Vec<JiraIssueLinkType>, JiraError> {
    let types: JiraIssueLinkTypes = self.get_json("/issueLinkType", &[], "Issue link types").await?;
    Ok(types.issue_link_types)
  }

  /// Pick the link type `query` names.
  pub async fn resolve_link_type(&self, query: &str) -> Result<JiraIssueLinkType, JiraError> {
    let types = self.get_link_types().await?;
    let link_type = select(SelectionKind::LinkType, &types, query)?.clone();
    info!(query, link_type = %link_type.name, "Resolved link type");
    Ok(link_type)
  }

  /// Get an issue with its summary, status and links
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_with_links(&self, issue_key: &str) -> Result<JiraIssue, JiraError> {
    self
      .get_json(
        &format!("/issue/{issue_key}"),
        &[("fields", "summary,status,issuelinks")],
        &issue_resource(issue_key),
      )
      .await
  }

  /// Resolve the link type and both issues without changing anything.
  pub async fn plan_link(
    &self,
    source_key: &str,
    target_key: &str,
    link_type: &str,
    comment: Option<&str>,
  ) -> Result<LinkPlan, JiraError> {
    let link_type = self.resolve_link_type(link_type).await?;
    let source = self.get_issue(source_key).await?;
    let target = self.get_issue(target_key).await?;

    Ok(LinkPlan {
      source,
      target,
      link_type,
      comment: comment.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string),
    })
  }

  /// Create the planned link, or only report it in dry-run mode.
  pub async fn apply_link(&self, plan: LinkPlan, mode: RunMode) -> Result<LinkOutcome, JiraError> {
    let (forward, _) = plan.describe();
    if mode == RunMode::DryRun {
      info!(link = %forward, "Dry run, not creating link");
      return Ok(LinkOutcome::Planned(plan));
    }

    self
      .execute(
        self.request(Method::POST, "/issueLink").json(&plan.to_request()),
        "Issue link",
      )
      .await?;

    info!(link = %forward, "Created link");
    Ok(LinkOutcome::Created(plan))
  }

  /// Find a link on `issue_key` by its id.
  pub async fn find_issue_link(&self, issue_key: &str, link_id: &str) -> Result<JiraIssueLink, JiraError> {
    let issue = self.get_issue_with_links(issue_key).await?;
    let link_id = link_id.trim();

    let JiraIssue { fields, .. } = issue;
    let available: Vec<String> = fields.issuelinks.iter().map(|link| link.id.clone()).collect();
    fields
      .issuelinks
      .into_iter()
      .find(|link| link.id == link_id)
      .ok_or_else(|| JiraError::InvalidSelection {
        kind: SelectionKind::Link,
        query: link_id.to_string(),
        available,
      })
  }

  /// Delete a link from `issue_key`.
  ///
  /// The id must be one of the issue's current links; anything else fails
  /// before a DELETE is sent.
  pub async fn remove_link(&self, issue_key: &str, link_id: &str) -> Result<JiraIssueLink, JiraError> {
    let link = self.find_issue_link(issue_key, link_id).await?;
    debug!(issue = issue_key, link = %link.id, "Removing link");

    self
      .execute(
        self.request(Method::DELETE, &format!("/issueLink/{}", link.id)),
        &format!("Link {}", link.id),
      )
      .await?;

    info!(issue = issue_key, link = %link.id, "Removed link");
    Ok(link)
  }
}
