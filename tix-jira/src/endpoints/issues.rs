use serde_json::Value;
use tracing::instrument;

use crate::client::{JiraClient, decode};
use crate::consts::VIEW_FIELDS;
use crate::error::JiraError;
use crate::models::JiraIssue;

pub(crate) fn issue_resource(issue_key: &str) -> String {
  format!("Issue {issue_key}")
}

impl JiraClient {
  /// Get summary and status of an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue, JiraError> {
    self
      .get_json(
        &format!("/issue/{issue_key}"),
        &[("fields", "summary,status")],
        &issue_resource(issue_key),
      )
      .await
  }

  /// Get the raw issue payload used by `tix view`.
  ///
  /// Rendered HTML is requested alongside the ADF fields so descriptions can
  /// be shown as text. Comments are only fetched when asked for.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_details(&self, issue_key: &str, with_comments: bool) -> Result<Value, JiraError> {
    let mut fields = VIEW_FIELDS.join(",");
    if with_comments {
      fields.push_str(",comment");
    }

    let resource = issue_resource(issue_key);
    let body = self
      .execute(
        self
          .request(reqwest::Method::GET, &format!("/issue/{issue_key}"))
          .query(&[("fields", fields.as_str()), ("expand", "renderedFields,names")]),
        &resource,
      )
      .await?;
    decode(body, &resource)
  }
}
