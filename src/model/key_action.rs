//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Scroll back by one line unit. Default: k/↑
    ScrollUp,
    /// Scroll forward by one line unit. Default: j/↓
    ScrollDown,
    /// Scroll back by one viewport. Default: Page Up/Ctrl+u
    PageUp,
    /// Scroll forward by one viewport. Default: Page Down/Space/Ctrl+d
    PageDown,
    /// Jump back to the top of the document. Default: g/Home
    ScrollToTop,
    /// Force a full relayout and repaint. Default: r
    Refresh,
    /// Exit the application. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action moves the scroll offset.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_actions_are_scroll() {
        for action in [
            KeyAction::ScrollUp,
            KeyAction::ScrollDown,
            KeyAction::PageUp,
            KeyAction::PageDown,
            KeyAction::ScrollToTop,
        ] {
            assert!(action.is_scroll(), "{:?} should be a scroll action", action);
        }
    }

    #[test]
    fn quit_and_refresh_are_not_scroll() {
        assert!(!KeyAction::Quit.is_scroll());
        assert!(!KeyAction::Refresh.is_scroll());
    }
}
