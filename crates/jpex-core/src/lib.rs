//! jpex core - reactive JMESPath evaluation
//!
//! This crate holds everything about the tool that is not a terminal: the
//! loaded document, the query engine adapter, the controller that re-runs
//! the compile and evaluate cycle on every edit, and the view model the
//! terminal layer renders from.
//!
//! # Evaluation Cycle
//!
//! Each edit of the expression text flows through one synchronous cycle:
//!
//! 1. [`Controller::text_changed`] compiles the text with the active
//!    [`QueryEngine`]
//! 2. A compiled query runs against the [`Document`]
//! 3. The controller publishes [`Status`] and, for value outcomes, the new
//!    result
//! 4. [`ViewModel::project`] snapshots the published state for rendering
//!
//! Failures never clear the last good result, so the result pane always
//! shows the output of the last expression that produced a value.

pub mod controller;
pub mod document;
pub mod engine;
pub mod view;

pub use controller::{Controller, Status};
pub use document::{to_pretty_string, Document, DocumentError, DEFAULT_INDENT, SAMPLE_DOCUMENT};
pub use engine::{CompiledQuery, JmespathEngine, Outcome, QueryEngine, QueryError};
pub use view::ViewModel;
