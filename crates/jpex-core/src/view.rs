//! Projection of controller state into renderable text
//!
//! The view model is a plain-data snapshot recomputed after each edit, never
//! per frame. Rendering it is the terminal layer's job; nothing here knows
//! about widgets or styling.

use crate::controller::{Controller, Status};
use crate::document::to_pretty_string;
use crate::engine::QueryEngine;

/// Renderable snapshot of the controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Expression text for the input line
    pub input_line: String,
    /// Pretty-printed document for the left pane
    pub document_pane: String,
    /// Pretty-printed last good result for the right pane, empty until the
    /// first edit produces a value
    pub result_pane: String,
    /// Status of the most recent edit
    pub status: Status,
}

impl ViewModel {
    /// Project the controller state into renderable text.
    pub fn project<E: QueryEngine>(controller: &Controller<E>) -> Self {
        let document = controller.document();
        let result_pane = controller
            .result()
            .map(|value| to_pretty_string(value, document.indent()))
            .unwrap_or_default();
        Self {
            input_line: controller.expression().to_owned(),
            document_pane: document.pretty().to_owned(),
            result_pane,
            status: controller.status().clone(),
        }
    }

    /// One-line status summary for the footer.
    pub fn status_line(&self) -> &str {
        match &self.status {
            Status::Idle => "",
            Status::Success => "success",
            Status::Failure { message } => message.lines().next().unwrap_or(message),
        }
    }
}
