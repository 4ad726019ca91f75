//! Terminal user interface
//!
//! Ratatui front end for the evaluation cycle: banner, expression line,
//! document and result panes, and the status bar.

pub mod app;
pub mod input;
pub mod styles;

pub use app::App;
