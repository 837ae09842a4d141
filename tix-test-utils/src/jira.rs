//! JSON payloads shaped like Jira REST API v3 responses.
//!
//! Shared by the client tests and the binary tests so both talk to mock
//! servers that answer the same way.

use serde_json::{Value, json};

/// Basic credentials the fixtures expect.
pub const TEST_EMAIL: &str = "dev@example.com";
pub const TEST_TOKEN: &str = "test-token";

/// A minimal issue with summary and status.
pub fn issue_json(key: &str, summary: &str, status: &str) -> Value {
  json!({
      "id": "10000",
      "key": key,
      "fields": {
          "summary": summary,
          "status": {
              "id": "3",
              "name": status
          }
      }
  })
}

/// A `GET /issue/{key}/transitions` body from `(id, name, to_status)` tuples.
pub fn transitions_json(transitions: &[(&str, &str, &str)]) -> Value {
  let items: Vec<Value> = transitions
    .iter()
    .map(|(id, name, to)| {
      json!({
          "id": id,
          "name": name,
          "to": { "id": format!("{id}0"), "name": to }
      })
    })
    .collect();
  json!({ "transitions": items })
}

/// The link types a stock Jira Cloud site ships with.
pub fn link_types_json() -> Value {
  json!({
      "issueLinkTypes": [
          { "id": "10000", "name": "Blocks", "inward": "is blocked by", "outward": "blocks" },
          { "id": "10001", "name": "Cloners", "inward": "is cloned by", "outward": "clones" },
          { "id": "10002", "name": "Duplicate", "inward": "is duplicated by", "outward": "duplicates" },
          { "id": "10003", "name": "Relates", "inward": "relates to", "outward": "relates to" }
      ]
  })
}

/// An issue carrying one outward "blocks" link and one inward "is cloned by" link.
pub fn issue_with_links_json(key: &str) -> Value {
  json!({
      "id": "10001",
      "key": key,
      "fields": {
          "summary": "Ship the importer",
          "status": { "id": "3", "name": "In Progress" },
          "issuelinks": [
              {
                  "id": "20001",
                  "type": { "id": "10000", "name": "Blocks", "inward": "is blocked by", "outward": "blocks" },
                  "outwardIssue": {
                      "id": "10010",
                      "key": "PROJ-2",
                      "fields": { "summary": "Release 1.0", "status": { "name": "To Do" } }
                  }
              },
              {
                  "id": "20002",
                  "type": { "id": "10001", "name": "Cloners", "inward": "is cloned by", "outward": "clones" },
                  "inwardIssue": {
                      "id": "10011",
                      "key": "PROJ-3",
                      "fields": { "summary": "Importer v2", "status": { "name": "Done" } }
                  }
              }
          ]
      }
  })
}

/// A `GET /myself` body.
pub fn myself_json() -> Value {
  json!({
      "accountId": "5b10a2844c20165700ede21g",
      "displayName": "Dana Developer",
      "emailAddress": TEST_EMAIL,
      "active": true
  })
}

/// A Jira error body as returned with 4xx statuses.
pub fn error_json(message: &str) -> Value {
  json!({
      "errorMessages": [message],
      "errors": {}
  })
}
