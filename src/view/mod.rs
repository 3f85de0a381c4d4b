//! TUI rendering and terminal management (impure shell)

pub mod painter;
pub mod styles;

pub use painter::DocumentPainter;
pub use styles::{BlockStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::{AppError, Document};
use crate::source::{load_document, DocumentSource};
use crate::state::{AppState, FrameInput};
use crate::view_state::{CellGrid, LayoutResult, MonospaceMeasurer};
use crossterm::{
    event::{self, Event, KeyEventKind, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Whether the loop should keep going after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Keep running.
    Continue,
    /// The user asked to quit.
    Quit,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    measurer: MonospaceMeasurer,
    styles: BlockStyles,
    grid: CellGrid,
    frame_interval: Duration,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    /// (for wheel scrolling).
    pub fn new(document: Document, config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, document, config)
    }

    /// Run the main frame loop
    ///
    /// Each frame waits up to one frame interval for input, then applies it
    /// and runs a layout pass if the view is dirty. Returns when the user
    /// quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            let frame_start = Instant::now();
            let mut input = FrameInput::new();

            loop {
                let remaining = self.frame_interval.saturating_sub(frame_start.elapsed());
                if !event::poll(remaining)? {
                    break;
                }
                self.record_event(event::read()?, &mut input);
                if input.quit_requested() {
                    break;
                }
            }

            if self.frame(&input)? == FrameStatus::Quit {
                return Ok(());
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create an application drawing to an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        document: Document,
        config: &ResolvedConfig,
    ) -> Result<Self, TuiError> {
        let grid = CellGrid::for_font_size(config.font_size);
        let size = terminal.size()?;
        let viewport = grid.viewport(size.width, size.height);
        let app_state = AppState::new(document, viewport, config);

        info!(
            columns = size.width,
            rows = size.height,
            lines = app_state.document().len(),
            "Starting viewer"
        );

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            measurer: MonospaceMeasurer,
            styles: BlockStyles::with_color_config(ColorConfig::from_env_and_args(
                config.no_color,
            )),
            grid,
            frame_interval: config.frame_interval(),
        })
    }

    /// Translate one terminal event into frame input.
    fn record_event(&self, event: Event, input: &mut FrameInput) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if let Some(action) = self.key_bindings.get(key) {
                    input.press(action);
                }
            }
            Event::Mouse(MouseEvent { kind, .. }) => match kind {
                MouseEventKind::ScrollDown => input.wheel(1),
                MouseEventKind::ScrollUp => input.wheel(-1),
                _ => {}
            },
            Event::Resize(columns, rows) => input.resize(columns, rows),
            _ => {}
        }
    }

    /// Apply a frame's input and repaint if anything changed.
    fn frame(&mut self, input: &FrameInput) -> Result<FrameStatus, TuiError> {
        if !input.is_empty() {
            debug!(?input, "Frame input");
        }
        let viewport = input
            .resized()
            .map(|(columns, rows)| self.grid.viewport(columns, rows));
        self.app_state.apply_input(input, viewport);

        if self.app_state.should_quit {
            debug!("Quit requested");
            return Ok(FrameStatus::Quit);
        }

        if let Some(layout) = self.app_state.layout_pass(&self.measurer) {
            self.draw(&layout)?;
        }
        Ok(FrameStatus::Continue)
    }

    /// Paint a layout pass.
    fn draw(&mut self, layout: &LayoutResult) -> Result<(), TuiError> {
        let painter = DocumentPainter::new(
            layout,
            &self.app_state.metrics,
            &self.app_state.fonts,
            &self.styles,
        );
        self.terminal.draw(|frame| {
            frame.render_widget(painter, frame.area());
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Feed one terminal event and run a frame (test-only accessor)
    pub(crate) fn handle_event_test(&mut self, event: Event) -> Result<FrameStatus, TuiError> {
        let mut input = FrameInput::new();
        self.record_event(event, &mut input);
        self.frame(&input)
    }

    /// Feed several events into a single frame (test-only accessor)
    pub(crate) fn handle_events_test(
        &mut self,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<FrameStatus, TuiError> {
        let mut input = FrameInput::new();
        for event in events {
            self.record_event(event, &mut input);
        }
        self.frame(&input)
    }

    /// Run an idle frame (test-only accessor)
    pub(crate) fn idle_frame_test(&mut self) -> Result<FrameStatus, TuiError> {
        self.frame(&FrameInput::new())
    }

    /// Get reference to the terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to the terminal (test-only accessor)
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Load the document from `source` and run the viewer until the user quits.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(source: &DocumentSource, config: &ResolvedConfig) -> Result<(), TuiError> {
    let document = load_document(source)?;
    run_with_document(document, config)
}

/// Run the viewer on an already loaded document.
///
/// Handles terminal setup and always restores the terminal on exit.
pub fn run_with_document(document: Document, config: &ResolvedConfig) -> Result<(), TuiError> {
    let result = TuiApp::new(document, config).and_then(|mut app| app.run());
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
