use reqwest::Method;
use tracing::{info, instrument};

use super::RunMode;
use super::issues::issue_resource;
use crate::client::JiraClient;
use crate::error::{JiraError, SelectionKind};
use crate::matching::select;
use crate::models::{JiraTransition, JiraTransitions, TransitionId, TransitionRequest};

/// A transition picked from a fresh fetch of an issue's available transitions.
///
/// Only [`JiraClient::resolve_transition`] builds one, so a transition id can
/// never be applied to an issue it was not offered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionChoice {
  issue_key: String,
  transition: JiraTransition,
}

impl TransitionChoice {
  pub fn issue_key(&self) -> &str {
    &self.issue_key
  }

  pub fn transition(&self) -> &JiraTransition {
    &self.transition
  }

  /// Status the issue lands in, falling back to the transition name
  pub fn target_status(&self) -> &str {
    self.transition.target_status().unwrap_or(&self.transition.name)
  }
}

/// What [`JiraClient::apply_transition`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
  /// Dry run: nothing was sent
  Planned(TransitionChoice),
  Applied(TransitionChoice),
}

impl TransitionOutcome {
  pub fn choice(&self) -> &TransitionChoice {
    match self {
      TransitionOutcome::Planned(choice) | TransitionOutcome::Applied(choice) => choice,
    }
  }
}

impl JiraClient {
  /// Get available transitions for an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<JiraTransition>, JiraError> {
    let transitions: JiraTransitions = self
      .get_json(
        &format!("/issue/{issue_key}/transitions"),
        &[],
        &issue_resource(issue_key),
      )
      .await?;
    Ok(transitions.transitions)
  }

  /// Fetch the transitions available right now and pick the one `desired`
  /// names.
  pub async fn resolve_transition(&self, issue_key: &str, desired: &str) -> Result<TransitionChoice, JiraError> {
    let transitions = self.get_transitions(issue_key).await?;
    let transition = select(SelectionKind::Transition, &transitions, desired)?.clone();

    Ok(TransitionChoice {
      issue_key: issue_key.to_string(),
      transition,
    })
  }

  /// Apply a resolved transition, or only report it in dry-run mode.
  pub async fn apply_transition(&self, choice: TransitionChoice, mode: RunMode) -> Result<TransitionOutcome, JiraError> {
    if mode == RunMode::DryRun {
      info!(issue = choice.issue_key(), transition = %choice.transition.name, "Dry run, not transitioning");
      return Ok(TransitionOutcome::Planned(choice));
    }

    let payload = TransitionRequest {
      transition: TransitionId {
        id: choice.transition.id.clone(),
      },
    };

    self
      .execute(
        self
          .request(Method::POST, &format!("/issue/{}/transitions", choice.issue_key))
          .json(&payload),
        &issue_resource(&choice.issue_key),
      )
      .await?;

    info!(issue = choice.issue_key(), transition = %choice.transition.name, "Transitioned issue");
    Ok(TransitionOutcome::Applied(choice))
  }

  /// Resolve and apply in one step
  pub async fn transition_to(&self, issue_key: &str, desired: &str, mode: RunMode) -> Result<TransitionOutcome, JiraError> {
    let choice = self.resolve_transition(issue_key, desired).await?;
    self.apply_transition(choice, mode).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use tix_test_utils::jira::{TEST_EMAIL, TEST_TOKEN, error_json, transitions_json};
  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::client::create_jira_client;

  async fn mount_transitions(server: &MockServer, key: &str, transitions: &[(&str, &str, &str)]) {
    Mock::given(method("GET"))
      .and(path(format!("/rest/api/3/issue/{key}/transitions")))
      .and(basic_auth(TEST_EMAIL, TEST_TOKEN))
      .respond_with(ResponseTemplate::new(200).set_body_json(transitions_json(transitions)))
      .mount(server)
      .await;
  }

  #[tokio::test]
  async fn test_get_transitions() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), TEST_EMAIL, TEST_TOKEN);
    mount_transitions(&mock_server, "PROJ-123", &[("11", "To Do", "To Do"), ("21", "In Progress", "In Progress")]).await;

    let transitions = client.get_transitions("PROJ-123").await?;

    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0].id, "11");
    assert_eq!(transitions[1].name, "In Progress");

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_execute_posts_resolved_id() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), TEST_EMAIL, TEST_TOKEN);
    mount_transitions(&mock_server, "PROJ-1", &[("11", "To Do", "To Do"), ("21", "In Progress", "In Progress")]).await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/PROJ-1/transitions"))
      .and(basic_auth(TEST_EMAIL, TEST_TOKEN))
      .and(body_json(json!({ "transition": { "id": "21" } })))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let outcome = client.transition_to("PROJ-1", "in prog", RunMode::Execute).await?;

    assert!(matches!(outcome, TransitionOutcome::Applied(_)));
    assert_eq!(outcome.choice().transition().id, "21");
    assert_eq!(outcome.choice().target_status(), "In Progress");

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_dry_run_sends_nothing() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), TEST_EMAIL, TEST_TOKEN);
    mount_transitions(&mock_server, "PROJ-1", &[("31", "Done", "Done")]).await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/PROJ-1/transitions"))
      .respond_with(ResponseTemplate::new(204))
      .expect(0)
      .mount(&mock_server)
      .await;

    let outcome = client.transition_to("PROJ-1", "done", RunMode::DryRun).await?;

    match outcome {
      TransitionOutcome::Planned(choice) => {
        assert_eq!(choice.issue_key(), "PROJ-1");
        assert_eq!(choice.transition().name, "Done");
      }
      other => panic!("expected Planned, got {other:?}"),
    }

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_ambiguous_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), TEST_EMAIL, TEST_TOKEN);
    mount_transitions(&mock_server, "PROJ-1", &[("31", "In Review", "In Review"), ("21", "In Progress", "In Progress")]).await;

    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(204))
      .expect(0)
      .mount(&mock_server)
      .await;

    let err = client.transition_to("PROJ-1", "in", RunMode::Execute).await.unwrap_err();
    assert!(matches!(err, JiraError::AmbiguousMatch { ref candidates, .. } if candidates.len() == 2));
  }

  #[tokio::test]
  async fn test_transition_unknown_name_lists_available() {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), TEST_EMAIL, TEST_TOKEN);
    mount_transitions(&mock_server, "PROJ-1", &[("11", "To Do", "To Do"), ("31", "Done", "Done")]).await;

    let err = client.resolve_transition("PROJ-1", "Deploy").await.unwrap_err();
    match err {
      JiraError::InvalidSelection { available, .. } => assert_eq!(available, vec!["To Do", "Done"]),
      other => panic!("expected InvalidSelection, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn test_transition_rejected_by_jira_surfaces_message() {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), TEST_EMAIL, TEST_TOKEN);
    mount_transitions(&mock_server, "PROJ-1", &[("31", "Done", "Done")]).await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/PROJ-1/transitions"))
      .respond_with(ResponseTemplate::new(400).set_body_json(error_json("Resolution is required.")))
      .mount(&mock_server)
      .await;

    let err = client.transition_to("PROJ-1", "Done", RunMode::Execute).await.unwrap_err();
    match err {
      JiraError::Remote { status, message } => {
        assert_eq!(status, 400);
        assert_eq!(message, "Resolution is required.");
      }
      other => panic!("expected Remote, got {other:?}"),
    }
  }

  #[test]
  fn test_run_mode_from_flag() {
    assert_eq!(RunMode::from_dry_run(true), RunMode::DryRun);
    assert_eq!(RunMode::from_dry_run(false), RunMode::Execute);
  }
}
