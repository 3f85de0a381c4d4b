//! Per-frame input accumulation.
//!
//! Terminal events arrive faster than frames. They are collected here while
//! the loop waits for the next frame and applied together, so a held key
//! moves the view once per frame no matter how fast the terminal repeats it.

use crate::model::KeyAction;

/// Input gathered during one frame interval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    held: Vec<KeyAction>,
    wheel_notches: i32,
    quit: bool,
    refresh: bool,
    resize: Option<(u16, u16)>,
}

impl FrameInput {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key action.
    ///
    /// Repeated presses of the same action collapse into one.
    pub fn press(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit = true,
            KeyAction::Refresh => self.refresh = true,
            action if action.is_scroll() && !self.held.contains(&action) => {
                self.held.push(action);
            }
            _ => {}
        }
    }

    /// Record wheel movement. Positive notches scroll towards the end.
    pub fn wheel(&mut self, notches: i32) {
        self.wheel_notches = self.wheel_notches.saturating_add(notches);
    }

    /// Record a terminal resize to `columns` x `rows`. Only the last one counts.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.resize = Some((columns, rows));
    }

    /// Scroll actions in the order first pressed.
    pub fn held(&self) -> &[KeyAction] {
        &self.held
    }

    /// Net wheel notches.
    pub fn wheel_notches(&self) -> i32 {
        self.wheel_notches
    }

    /// Whether quit was requested.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Whether a forced repaint was requested.
    pub fn refresh_requested(&self) -> bool {
        self.refresh
    }

    /// Latest terminal size, if it changed.
    pub fn resized(&self) -> Option<(u16, u16)> {
        self.resize
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
