//! tagquiz-core — Tagging engine, data model, and evaluation.
//!
//! This crate implements the state machine behind a drag-and-drop tag
//! classification question: a pool of tags, an answer area, submission
//! against a correctness map, and per-tag feedback. Hosts (a web view, a
//! terminal) translate gestures into engine commands and re-render from
//! snapshots.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
