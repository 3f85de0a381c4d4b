//! Application state and transitions.
//!
//! AppState is the root state type for the viewer. Transitions are pure:
//! the shell feeds in input and a measurer, and gets back blocks to paint.

use crate::config::ResolvedConfig;
use crate::integration::run_layout_pass;
use crate::model::Document;
use crate::state::input::FrameInput;
use crate::state::scroll_handler::{handle_scroll_action, handle_wheel};
use crate::view_state::{
    FontSet, LayoutMetrics, LayoutResult, RenderScheduler, ScrollController, TextMeasurer,
    ViewportDimensions,
};
use tracing::debug;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Frame cycle
///
/// 1. [`AppState::apply_input`] folds the frame's input into scroll and
///    viewport changes, marking the scheduler dirty when the view moved.
/// 2. [`AppState::layout_pass`] runs layout and settle if dirty, leaving the
///    scheduler dirty while the view is still settling.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Source lines. Loaded once, never mutated.
    document: Document,

    /// Viewport size in layout units. Updated on resize.
    pub viewport: ViewportDimensions,

    /// Scroll offset and settle policy.
    pub scroll: ScrollController,

    /// Dirty flag gating layout passes.
    pub scheduler: RenderScheduler,

    /// Margins and gaps.
    pub metrics: LayoutMetrics,

    /// Fonts and base size.
    pub fonts: FontSet,

    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create state for `document` shown in `viewport`.
    pub fn new(document: Document, viewport: ViewportDimensions, config: &ResolvedConfig) -> Self {
        Self {
            document,
            viewport,
            scroll: ScrollController::new(config.settle_policy()),
            scheduler: RenderScheduler::new(),
            metrics: config.layout_metrics(),
            fonts: config.font_set(),
            should_quit: false,
        }
    }

    /// The loaded document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Scroll distance of one line.
    pub fn line_unit(&self) -> i32 {
        self.fonts.base_size
    }

    /// Scroll distance of one page.
    pub fn page_unit(&self) -> i32 {
        (self.viewport.height - self.metrics.margin).max(self.line_unit())
    }

    /// Update the viewport. Marks dirty when the size changed.
    pub fn resize(&mut self, viewport: ViewportDimensions) {
        if self.viewport != viewport {
            debug!(width = viewport.width, height = viewport.height, "Viewport resized");
            self.viewport = viewport;
            self.scheduler.mark_dirty();
        }
    }

    /// Apply one frame's worth of input.
    ///
    /// Resize is applied first so page steps use the new height. Each held
    /// action is applied once.
    pub fn apply_input(&mut self, input: &FrameInput, viewport: Option<ViewportDimensions>) {
        if input.quit_requested() {
            self.should_quit = true;
            return;
        }
        if let Some(viewport) = viewport {
            self.resize(viewport);
        }
        if input.refresh_requested() {
            self.scheduler.mark_dirty();
        }
        for &action in input.held() {
            handle_scroll_action(self, action);
        }
        handle_wheel(self, input.wheel_notches());
    }

    /// Run a layout pass if one is pending.
    ///
    /// Returns the positioned blocks to paint, or `None` when nothing changed
    /// since the last pass.
    pub fn layout_pass<M: TextMeasurer + ?Sized>(&mut self, measurer: &M) -> Option<LayoutResult> {
        if !self.scheduler.is_dirty() {
            return None;
        }
        let pass = run_layout_pass(
            &self.document,
            &mut self.scroll,
            self.viewport,
            &self.metrics,
            &self.fonts,
            measurer,
        );
        self.scheduler.finish_pass(pass.settle);
        debug!(
            blocks = pass.layout.blocks.len(),
            document_bottom = pass.layout.document_bottom,
            offset = self.scroll.offset(),
            settle = ?pass.settle,
            "Layout pass"
        );
        Some(pass.layout)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
