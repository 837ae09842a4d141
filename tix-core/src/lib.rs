//! # Tix Core Library
//!
//! Shared building blocks for the tix workspace: terminal output helpers,
//! issue key parsing, site URL normalization, and plain-text formatting used
//! when rendering Jira payloads.

pub mod consts;
pub mod issue_key;
pub mod output;
pub mod text;
pub mod url;

pub use output::{ColorMode, print_error, print_hint, print_info, print_success, print_warning};
