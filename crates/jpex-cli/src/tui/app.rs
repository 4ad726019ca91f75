//! Main terminal application
//!
//! Owns the controller, the expression input, and the rendered layout. The
//! session loop polls for input on a 100ms tick and re-runs the evaluation
//! cycle only when a key press edits the expression.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use jpex_core::{Controller, JmespathEngine, Status, ViewModel};

use super::input::{ExpressionInput, InputAction};
use super::styles::Styles;
use crate::config::Theme;

/// Name plate rendered above the expression line
const BANNER: &str = r"   _
  (_)  _ __     ___  __  __
  | | | '_ \   / _ \ \ \/ /
  | | | |_) | |  __/  >  <
 _/ | | .__/   \___| /_/\_\
|__/  |_|";

/// Height of [`BANNER`] in rows
const BANNER_HEIGHT: u16 = 6;

/// Pane that receives scroll keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Document,
    Result,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Self::Document => Self::Result,
            Self::Result => Self::Document,
        }
    }
}

/// Interactive session over a loaded document.
pub struct App {
    /// Evaluation state machine
    controller: Controller<JmespathEngine>,
    /// Expression editor
    input: ExpressionInput,
    /// Snapshot rendered by the current frame
    view: ViewModel,
    /// Theme-derived styles
    styles: Styles,
    /// Pane that receives scroll keys
    focused: Pane,
    /// Scroll offset of the document pane
    document_scroll: u16,
    /// Scroll offset of the result pane
    result_scroll: u16,
    /// Should quit application
    should_quit: bool,
}

impl App {
    /// Create the session over a prepared controller.
    pub fn new(controller: Controller<JmespathEngine>, theme: Theme) -> Self {
        let view = ViewModel::project(&controller);
        Self {
            controller,
            input: ExpressionInput::new(),
            view,
            styles: Styles::for_theme(theme),
            focused: Pane::Document,
            document_scroll: 0,
            result_scroll: 0,
            should_quit: false,
        }
    }

    /// Run the session until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_app(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    /// Main application loop
    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.ui(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Dispatch one key press
    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::F(5)
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            tracing::info!("quit requested");
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => self.focused = self.focused.next(),
            KeyCode::Up => self.scroll(-1),
            KeyCode::Down => self.scroll(1),
            KeyCode::PageUp => self.scroll(-10),
            KeyCode::PageDown => self.scroll(10),
            _ => {
                if self.input.handle_key(key) == InputAction::Edited {
                    self.expression_edited();
                }
            }
        }
    }

    /// Re-run the evaluation cycle after an edit and refresh the view
    fn expression_edited(&mut self) {
        self.controller.text_changed(self.input.text());
        let previous = std::mem::replace(&mut self.view, ViewModel::project(&self.controller));
        if previous.result_pane != self.view.result_pane {
            self.result_scroll = 0;
        }
    }

    /// Scroll the focused pane, clamped to its content
    fn scroll(&mut self, delta: i32) {
        let (scroll, text) = match self.focused {
            Pane::Document => (&mut self.document_scroll, &self.view.document_pane),
            Pane::Result => (&mut self.result_scroll, &self.view.result_pane),
        };
        let max = u16::try_from(text.lines().count().saturating_sub(1)).unwrap_or(u16::MAX);
        let next = (i32::from(*scroll) + delta).clamp(0, i32::from(max));
        *scroll = next as u16;
    }

    /// Render the UI
    fn ui(&self, f: &mut Frame<'_>) {
        let banner_height = if f.size().height >= 20 { BANNER_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(
                [
                    Constraint::Length(banner_height),
                    Constraint::Length(3),
                    Constraint::Min(3),
                    Constraint::Length(3),
                ]
                .as_ref(),
            )
            .split(f.size());

        if banner_height > 0 {
            self.render_banner(f, chunks[0]);
        }
        self.input.render(f, chunks[1], &self.styles);
        self.render_panes(f, chunks[2]);
        self.render_status_bar(f, chunks[3]);
    }

    /// Render the name plate
    fn render_banner(&self, f: &mut Frame<'_>, area: Rect) {
        let banner = Paragraph::new(BANNER).style(self.styles.text_highlight());
        f.render_widget(banner, area);
    }

    /// Render the document and result panes side by side
    fn render_panes(&self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
            .split(area);

        self.render_pane(f, chunks[0], Pane::Document);
        self.render_pane(f, chunks[1], Pane::Result);
    }

    /// Render one scrollable JSON pane
    fn render_pane(&self, f: &mut Frame<'_>, area: Rect, pane: Pane) {
        let (title, text, scroll) = match pane {
            Pane::Document => ("Input JSON", &self.view.document_pane, self.document_scroll),
            Pane::Result => (
                "JMESPath Result",
                &self.view.result_pane,
                self.result_scroll,
            ),
        };

        let border_style = if self.focused == pane {
            self.styles.border_focused()
        } else {
            self.styles.border()
        };

        let paragraph = Paragraph::new(text.as_str())
            .style(self.styles.text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            )
            .scroll((scroll, 0));

        f.render_widget(paragraph, area);
    }

    /// Render the status bar
    fn render_status_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let status_style = match self.view.status {
            Status::Idle => self.styles.text_muted(),
            Status::Success => self.styles.text_success(),
            Status::Failure { .. } => self.styles.text_error(),
        };

        let text = vec![Line::from(vec![
            Span::styled("Status: ", self.styles.text()),
            Span::styled(self.view.status_line(), status_style),
            Span::raw(" | "),
            Span::styled(
                "Tab: Switch pane | Up/Down: Scroll | F5: Quit",
                self.styles.text_muted(),
            ),
        ])];

        let status = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

        f.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jpex_core::{Document, DEFAULT_INDENT, SAMPLE_DOCUMENT};

    fn app() -> App {
        let document = Document::from_text(SAMPLE_DOCUMENT, DEFAULT_INDENT).unwrap();
        App::new(
            Controller::new(JmespathEngine::new(), document),
            Theme::Dark,
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_f5_quits() {
        let mut app = app();
        app.handle_key(press(KeyCode::F(5)));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_keys_do_not_quit() {
        let mut app = app();
        type_text(&mut app, "abc");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_toggles_focused_pane() {
        let mut app = app();
        assert_eq!(app.focused, Pane::Document);

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focused, Pane::Result);

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focused, Pane::Document);
    }

    #[test]
    fn test_typing_updates_view() {
        let mut app = app();
        type_text(&mut app, "a");

        assert_eq!(app.view.input_line, "a");
        assert_eq!(app.view.result_pane, "\"foo\"");
        assert_eq!(app.view.status, Status::Success);
    }

    #[test]
    fn test_failed_edit_keeps_result_pane() {
        let mut app = app();
        type_text(&mut app, "a");
        app.handle_key(press(KeyCode::Char('[')));

        assert!(app.view.status.is_failure());
        assert_eq!(app.view.result_pane, "\"foo\"");
        assert_eq!(app.view.input_line, "a[");
    }

    #[test]
    fn test_scroll_clamps_at_bounds() {
        let mut app = app();

        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.document_scroll, 0);

        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.document_scroll, 1);

        app.handle_key(press(KeyCode::PageDown));
        let lines = app.view.document_pane.lines().count() as u16;
        assert!(app.document_scroll < lines);

        app.handle_key(press(KeyCode::PageUp));
        app.handle_key(press(KeyCode::PageUp));
        assert_eq!(app.document_scroll, 0);
    }

    #[test]
    fn test_new_result_resets_result_scroll() {
        let mut app = app();
        type_text(&mut app, "c");
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.result_scroll, 1);

        type_text(&mut app, ".d");
        assert_eq!(app.view.result_pane, "\"baz\"");
        assert_eq!(app.result_scroll, 0);
    }

    #[test]
    fn test_scroll_ignores_unfocused_pane() {
        let mut app = app();
        app.handle_key(press(KeyCode::Down));

        assert_eq!(app.document_scroll, 1);
        assert_eq!(app.result_scroll, 0);
    }
}
