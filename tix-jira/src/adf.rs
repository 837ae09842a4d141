//! Atlassian Document Format helpers.
//!
//! REST API v3 exchanges rich text (descriptions, comments) as ADF JSON
//! trees. The terminal only needs the text, and outgoing comments only need a
//! single paragraph.

use serde_json::{Value, json};

const BLOCK_NODES: &[&str] = &[
  "paragraph",
  "heading",
  "blockquote",
  "codeBlock",
  "listItem",
  "rule",
  "panel",
  "tableRow",
];

/// Flatten an ADF document (or a plain string body) into text.
pub fn to_plain_text(value: &Value) -> String {
  let mut out = String::new();
  collect_text(value, &mut out);
  out.trim().to_string()
}

fn collect_text(node: &Value, out: &mut String) {
  match node {
    Value::String(text) => out.push_str(text),
    Value::Array(items) => items.iter().for_each(|item| collect_text(item, out)),
    Value::Object(map) => {
      let node_type = map.get("type").and_then(Value::as_str).unwrap_or_default();
      match node_type {
        "text" => {
          if let Some(text) = map.get("text").and_then(Value::as_str) {
            out.push_str(text);
          }
        }
        "hardBreak" => out.push('\n'),
        "mention" | "emoji" | "status" => {
          if let Some(text) = map
            .get("attrs")
            .and_then(|attrs| attrs.get("text").or_else(|| attrs.get("shortName")))
            .and_then(Value::as_str)
          {
            out.push_str(text);
          }
        }
        "inlineCard" | "blockCard" => {
          if let Some(url) = map.get("attrs").and_then(|attrs| attrs.get("url")).and_then(Value::as_str) {
            out.push_str(url);
          }
        }
        _ => {
          if let Some(content) = map.get("content") {
            collect_text(content, out);
          }
          if BLOCK_NODES.contains(&node_type) && !out.ends_with('\n') {
            out.push('\n');
          }
        }
      }
    }
    _ => {}
  }
}

/// A one-paragraph ADF document holding `text`.
pub fn paragraph(text: &str) -> Value {
  json!({
      "type": "doc",
      "version": 1,
      "content": [
          {
              "type": "paragraph",
              "content": [
                  { "type": "text", "text": text }
              ]
          }
      ]
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_to_plain_text_paragraphs() {
    let doc = json!({
        "type": "doc",
        "version": 1,
        "content": [
            { "type": "paragraph", "content": [
                { "type": "text", "text": "Steps to " },
                { "type": "text", "text": "reproduce", "marks": [{ "type": "strong" }] }
            ]},
            { "type": "paragraph", "content": [
                { "type": "mention", "attrs": { "id": "1", "text": "@Dana" } },
                { "type": "text", "text": " please look" }
            ]}
        ]
    });

    assert_eq!(to_plain_text(&doc), "Steps to reproduce\n@Dana please look");
  }

  #[test]
  fn test_to_plain_text_lists_and_breaks() {
    let doc = json!({
        "type": "doc",
        "content": [
            { "type": "bulletList", "content": [
                { "type": "listItem", "content": [
                    { "type": "paragraph", "content": [{ "type": "text", "text": "one" }] }
                ]},
                { "type": "listItem", "content": [
                    { "type": "paragraph", "content": [
                        { "type": "text", "text": "two" },
                        { "type": "hardBreak" },
                        { "type": "text", "text": "lines" }
                    ]}
                ]}
            ]}
        ]
    });

    assert_eq!(to_plain_text(&doc), "one\ntwo\nlines");
  }

  #[test]
  fn test_to_plain_text_plain_string() {
    assert_eq!(to_plain_text(&json!("  legacy body  ")), "legacy body");
  }

  #[test]
  fn test_paragraph_round_trips_text() {
    let doc = paragraph("Blocked until the API ships");
    assert_eq!(doc["type"], "doc");
    assert_eq!(to_plain_text(&doc), "Blocked until the API ships");
  }
}
