//! End-to-end evaluation cycle tests
//!
//! Drives a controller over the sample document with the real engine and
//! checks the published state after scripted keystroke sequences.

use jpex_core::{
    Controller, Document, JmespathEngine, Status, ViewModel, DEFAULT_INDENT, SAMPLE_DOCUMENT,
};
use serde_json::json;

fn session() -> Controller<JmespathEngine> {
    let document = Document::from_text(SAMPLE_DOCUMENT, DEFAULT_INDENT).unwrap();
    Controller::new(JmespathEngine::new(), document)
}

/// Feed the expression one character at a time, like an interactive session
fn type_expression(controller: &mut Controller<JmespathEngine>, text: &str) {
    let mut typed = String::new();
    for ch in text.chars() {
        typed.push(ch);
        controller.text_changed(&typed);
    }
}

mod startup_tests {
    use super::*;

    #[test]
    fn test_startup_publishes_document_and_idle_status() {
        let controller = session();
        let view = ViewModel::project(&controller);

        assert_eq!(controller.status(), &Status::Idle);
        assert_eq!(controller.result(), None);
        assert!(view.document_pane.contains("\"a\": \"foo\""));
        assert!(view.result_pane.is_empty());
        assert_eq!(view.status_line(), "");
    }
}

mod keystroke_tests {
    use super::*;

    #[test]
    fn test_single_key_resolves_to_string() {
        let mut controller = session();
        controller.text_changed("a");

        assert_eq!(controller.status(), &Status::Success);
        assert_eq!(controller.result(), Some(&json!("foo")));
    }

    #[test]
    fn test_half_typed_bracket_fails_and_keeps_result() {
        let mut controller = session();
        controller.text_changed("a");
        controller.text_changed("a[");

        assert!(controller.status().is_failure());
        assert_eq!(controller.result(), Some(&json!("foo")));
        assert_eq!(controller.expression(), "a[");
    }

    #[test]
    fn test_unknown_key_succeeds_and_keeps_result() {
        let mut controller = session();
        controller.text_changed("a");
        controller.text_changed("z");

        assert_eq!(controller.status(), &Status::Success);
        assert_eq!(controller.result(), Some(&json!("foo")));
    }

    #[test]
    fn test_runtime_failure_keeps_result() {
        let mut controller = session();
        controller.text_changed("a");
        controller.text_changed("avg(@)");

        assert!(controller.status().is_failure());
        assert_eq!(controller.result(), Some(&json!("foo")));
    }

    #[test]
    fn test_backspace_to_empty_is_compile_failure() {
        let mut controller = session();
        controller.text_changed("a");
        controller.text_changed("");

        assert!(controller.status().is_failure());
        assert_eq!(controller.result(), Some(&json!("foo")));
    }

    #[test]
    fn test_trailing_dot_fails_and_keeps_result() {
        let mut controller = session();
        controller.text_changed("c.e[1]");
        assert_eq!(controller.result(), Some(&json!(2)));

        controller.text_changed("c.");
        assert!(controller.status().is_failure());
        assert_eq!(controller.result(), Some(&json!(2)));
        assert_eq!(controller.expression(), "c.");
    }

    #[test]
    fn test_typing_nested_index_character_by_character() {
        let mut controller = session();
        type_expression(&mut controller, "c.e[1]");

        // intermediate keystrokes fail to compile, the final one lands
        assert_eq!(controller.status(), &Status::Success);
        assert_eq!(controller.result(), Some(&json!(2)));
        assert_eq!(controller.expression(), "c.e[1]");
    }

    #[test]
    fn test_session_walkthrough() {
        let mut controller = session();

        controller.text_changed("a");
        assert_eq!(controller.result(), Some(&json!("foo")));

        controller.text_changed("a[");
        assert!(controller.status().is_failure());
        assert_eq!(controller.result(), Some(&json!("foo")));

        controller.text_changed("z");
        assert_eq!(controller.status(), &Status::Success);
        assert_eq!(controller.result(), Some(&json!("foo")));

        controller.text_changed("avg(@)");
        assert!(controller.status().is_failure());
        assert_eq!(controller.result(), Some(&json!("foo")));

        controller.text_changed("c.d");
        assert_eq!(controller.status(), &Status::Success);
        assert_eq!(controller.result(), Some(&json!("baz")));
    }
}

mod view_tests {
    use super::*;

    #[test]
    fn test_failure_view_keeps_result_pane_and_reports_error() {
        let mut controller = session();
        controller.text_changed("c.e");
        controller.text_changed("c.e[");
        let view = ViewModel::project(&controller);

        assert_eq!(view.input_line, "c.e[");
        assert_eq!(view.result_pane, "[\n  1,\n  2,\n  3\n]");
        assert!(view.status.is_failure());
        assert!(!view.status_line().is_empty());
    }

    #[test]
    fn test_successive_projections_are_stable_without_edits() {
        let mut controller = session();
        controller.text_changed("b");

        let first = ViewModel::project(&controller);
        let second = ViewModel::project(&controller);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_document_renders_in_both_panes() {
        let document = Document::from_text(r#"{"users": [{"name": "ada"}]}"#, 2).unwrap();
        let mut controller = Controller::new(JmespathEngine::new(), document);
        controller.text_changed("users[0].name");
        let view = ViewModel::project(&controller);

        assert!(view.document_pane.contains("\"users\""));
        assert_eq!(view.result_pane, "\"ada\"");
        assert_eq!(view.status_line(), "success");
    }
}
