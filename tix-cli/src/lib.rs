//! # Tix CLI Library
//!
//! Command definitions and terminal rendering for the `tix` binary, exposed
//! as a library so the binary stays a thin entry point.

pub mod cli;
pub mod render;
