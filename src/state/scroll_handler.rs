//! Vertical scrolling action handler.
//!
//! Pure transitions of AppState in response to scroll actions.
//! Deltas are in layout units; one line unit is the base font size.

use crate::model::KeyAction;
use crate::state::AppState;
use tracing::debug;

/// Handle a scroll keyboard action.
///
/// - `ScrollUp`/`ScrollDown`: one line unit
/// - `PageUp`/`PageDown`: viewport height minus margin, at least one line unit
/// - `ScrollToTop`: back to offset 0
///
/// Any change to the offset marks the state dirty. Non-scroll actions leave
/// the state untouched.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) {
    let line = state.line_unit();
    let page = state.page_unit();

    let changed = match action {
        KeyAction::ScrollUp => state.scroll.apply_delta(-line),
        KeyAction::ScrollDown => state.scroll.apply_delta(line),
        KeyAction::PageUp => state.scroll.apply_delta(-page),
        KeyAction::PageDown => state.scroll.apply_delta(page),
        KeyAction::ScrollToTop => state.scroll.scroll_to_top(),
        KeyAction::Refresh | KeyAction::Quit => return,
    };

    if changed {
        debug!(?action, offset = state.scroll.offset(), "Scrolled");
        state.scheduler.mark_dirty();
    }
}

/// Handle mouse wheel movement. Positive notches scroll towards the end.
pub fn handle_wheel(state: &mut AppState, notches: i32) {
    if notches == 0 {
        return;
    }
    let delta = notches.saturating_mul(state.line_unit());
    if state.scroll.apply_delta(delta) {
        state.scheduler.mark_dirty();
    }
}
