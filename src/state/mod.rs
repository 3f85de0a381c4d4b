//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod input;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::AppState;
pub use input::FrameInput;
pub use scroll_handler::{handle_scroll_action, handle_wheel};
