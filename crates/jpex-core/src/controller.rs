//! Reactive evaluation controller
//!
//! Owns the loaded document, the current expression text, and the published
//! state the view renders from. Every edit runs the full compile and
//! evaluate cycle synchronously, so the published state always reflects the
//! latest edit by the time the next frame draws.

use serde_json::Value;

use crate::document::Document;
use crate::engine::{Outcome, QueryEngine};

/// Status of the most recent edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// No edits processed yet
    #[default]
    Idle,
    /// The last edit compiled and evaluated cleanly
    Success,
    /// The last edit failed to compile or evaluate
    Failure {
        /// Diagnostic shown in the status line
        message: String,
    },
}

impl Status {
    /// Create a failure status
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// True when the most recent edit failed
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Drives the edit, compile, evaluate, publish cycle.
///
/// The last good result is sticky: compile failures, runtime failures, and
/// evaluations that match nothing all leave it untouched. Only an evaluation
/// that produces a value replaces it.
#[derive(Debug)]
pub struct Controller<E: QueryEngine> {
    engine: E,
    document: Document,
    expression: String,
    status: Status,
    result: Option<Value>,
}

impl<E: QueryEngine> Controller<E> {
    /// Create a controller over a loaded document.
    pub fn new(engine: E, document: Document) -> Self {
        Self {
            engine,
            document,
            expression: String::new(),
            status: Status::Idle,
            result: None,
        }
    }

    /// Process one edit of the expression text.
    ///
    /// Compile errors and runtime errors set [`Status::Failure`] with the
    /// engine diagnostic. An evaluation that matches nothing reports
    /// [`Status::Success`] without touching the result, so the result pane
    /// keeps showing the last expression that produced a value.
    pub fn text_changed(&mut self, text: &str) {
        self.expression.clear();
        self.expression.push_str(text);

        let query = match self.engine.compile(text) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!(expression = text, error = %err, "compile failed");
                self.status = Status::failure(err.message());
                return;
            }
        };

        match self.engine.evaluate(&query, &self.document) {
            Ok(Outcome::Value(value)) => {
                tracing::debug!(expression = text, "evaluation produced a value");
                self.status = Status::Success;
                self.result = Some(value);
            }
            Ok(Outcome::Absent) => {
                tracing::debug!(expression = text, "expression matched nothing");
                self.status = Status::Success;
            }
            Err(err) => {
                tracing::debug!(expression = text, error = %err, "evaluation failed");
                self.status = Status::failure(err.message());
            }
        }
    }

    /// Current expression text
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Status of the most recent edit
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Last good result, if any edit has produced one
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// The loaded document
    pub fn document(&self) -> &Document {
        &self.document
    }
}
