//! Terminal front end for jpex
//!
//! This crate hosts everything that touches the terminal:
//! - Command-line parsing and configuration loading
//! - The ratatui session loop and pane layout
//! - The expression input widget and theme palettes
//!
//! Evaluation itself lives in `jpex-core`; this crate only feeds it
//! keystrokes and renders the projected view.

pub mod config;
pub mod tui;

pub use config::{Config, ConfigError, Theme};
pub use tui::App;
