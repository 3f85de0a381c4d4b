//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user input.
//! Every call runs one frame, the same way the real loop does.

use crate::config::ResolvedConfig;
use crate::model::Document;
use crate::source::{load_document, DocumentSource};
use crate::state::AppState;
use crate::view::{FrameStatus, TuiApp, TuiError};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Trailing whitespace on each row and trailing empty rows are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a document from text with a custom terminal size.
    pub fn from_text(text: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        Self::with_config(Document::from_text(text), width, height, test_config())
    }

    /// Load a fixture file with a custom terminal size.
    pub fn from_fixture_with_size(path: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        let document = load_document(&DocumentSource::File(PathBuf::from(path)))?;
        Self::with_config(document, width, height, test_config())
    }

    /// Load a document with an explicit configuration.
    pub fn with_config(
        document: Document,
        width: u16,
        height: u16,
        config: ResolvedConfig,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::with_terminal(terminal, document, &config)?;
        Ok(Self { app, running: true })
    }

    /// Send a single key event as its own frame.
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        self.send_events(vec![Event::Key(KeyEvent::new(key, mods))])
    }

    /// Deliver the same key `count` times within one frame, as a held key
    /// would.
    pub fn hold_key(&mut self, key: KeyCode, count: usize) -> bool {
        let event = Event::Key(KeyEvent::new(key, KeyModifiers::NONE));
        self.send_events(vec![event; count])
    }

    /// Send wheel notches within one frame. Positive scrolls down.
    pub fn scroll_wheel(&mut self, notches: i32) -> bool {
        let kind = if notches >= 0 {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        let event = Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        self.send_events(vec![event; notches.unsigned_abs() as usize])
    }

    /// Deliver a resize notification.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        self.app
            .terminal_mut()
            .backend_mut()
            .resize(width, height);
        self.send_events(vec![Event::Resize(width, height)])
    }

    fn send_events(&mut self, events: Vec<Event>) -> bool {
        if !self.running {
            return true; // Already quit
        }
        let status = self
            .app
            .handle_events_test(events)
            .expect("frame should succeed with TestBackend");
        if status == FrameStatus::Quit {
            self.running = false;
        }
        !self.running
    }

    /// Run idle frames until no further layout pass is pending.
    ///
    /// Returns the number of frames that ran a layout pass.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.app.app_state().scheduler.is_dirty() {
            self.app
                .idle_frame_test()
                .expect("frame should succeed with TestBackend");
            frames += 1;
            assert!(frames < 10_000, "view never settled");
        }
        frames
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Settle the view and return the screen contents.
    pub fn render_to_string(&mut self) -> String {
        self.settle();
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}

fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        no_color: true,
        ..ResolvedConfig::default()
    }
}
