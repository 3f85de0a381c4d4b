//! Pure core integration functions.
//!
//! Glue between the document, the layout engine and the scroll controller
//! for the main frame loop. Nothing here touches the terminal, so every
//! function is testable without I/O.

use crate::model::Document;
use crate::view_state::{
    BlockLayoutEngine, FontSet, LayoutMetrics, LayoutResult, ScrollController, SettleOutcome,
    SettlePolicy, TextMeasurer, ViewportDimensions,
};
use tracing::warn;

/// Passes [`settle_fully`] runs under the caller's policy before it removes
/// the remaining overshoot in one step.
const MAX_SETTLE_PASSES: usize = 100_000;

/// Outcome of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPass {
    /// Blocks positioned for the offset in effect when the pass started.
    pub layout: LayoutResult,
    /// Whether the settle step changed the offset afterwards.
    pub settle: SettleOutcome,
}

/// Run one layout pass and its settle step.
///
/// Layout uses the offset in effect on entry; any settle correction applies
/// to the next pass. Callers keep rendering passes until the result is
/// [`SettleOutcome::Settled`].
pub fn run_layout_pass<M: TextMeasurer + ?Sized>(
    document: &Document,
    scroll: &mut ScrollController,
    viewport: ViewportDimensions,
    metrics: &LayoutMetrics,
    fonts: &FontSet,
    measurer: &M,
) -> LayoutPass {
    let engine = BlockLayoutEngine::new(measurer, *fonts, *metrics);
    let layout = engine.layout(
        document.lines(),
        scroll.origin_y(metrics.margin),
        metrics.content_width(viewport.width),
    );
    let settle = scroll.settle(layout.document_bottom, viewport.height, metrics.margin);
    LayoutPass { layout, settle }
}

/// Repeat passes until the view settles, returning the final layout.
///
/// Used by headless output, where there are no frames to spread the settle
/// loop over. An incremental policy that has not converged after
/// `MAX_SETTLE_PASSES` passes is finished with an immediate correction, so
/// the returned layout is always settled. The caller's policy is restored
/// before returning.
pub fn settle_fully<M: TextMeasurer + ?Sized>(
    document: &Document,
    scroll: &mut ScrollController,
    viewport: ViewportDimensions,
    metrics: &LayoutMetrics,
    fonts: &FontSet,
    measurer: &M,
) -> LayoutResult {
    let mut pass = run_layout_pass(document, scroll, viewport, metrics, fonts, measurer);
    let mut count = 1;
    while pass.settle == SettleOutcome::Unsettled && count < MAX_SETTLE_PASSES {
        pass = run_layout_pass(document, scroll, viewport, metrics, fonts, measurer);
        count += 1;
    }

    if pass.settle == SettleOutcome::Unsettled {
        warn!(
            passes = count,
            offset = scroll.offset(),
            "Settle loop did not converge, correcting immediately"
        );
        let policy = scroll.policy();
        scroll.set_policy(SettlePolicy::Immediate);
        while pass.settle == SettleOutcome::Unsettled {
            pass = run_layout_pass(document, scroll, viewport, metrics, fonts, measurer);
        }
        scroll.set_policy(policy);
    }
    pass.layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::MonospaceMeasurer;

    const BASE: i32 = 18;
    const MARGIN: i32 = 10;

    fn pass(document: &Document, scroll: &mut ScrollController, viewport: ViewportDimensions) -> LayoutPass {
        run_layout_pass(
            document,
            scroll,
            viewport,
            &LayoutMetrics::new(BASE, MARGIN),
            &FontSet::new(BASE),
            &MonospaceMeasurer,
        )
    }

    fn long_document(paragraphs: usize) -> Document {
        Document::from_lines(
            (0..paragraphs)
                .map(|i| format!("paragraph {}", i))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn first_pass_starts_at_margin() {
        let document = Document::from_text("# Hello\n\nWorld");
        let mut scroll = ScrollController::default();
        let result = pass(&document, &mut scroll, ViewportDimensions::new(720, 432));
        assert_eq!(result.layout.blocks[0].top_y, MARGIN);
        assert_eq!(result.settle, SettleOutcome::Settled);
    }

    #[test]
    fn content_width_excludes_margins() {
        // 110 wide viewport leaves 90 units = 10 columns of text.
        let document = Document::from_text("World wraps here if width is small");
        let mut scroll = ScrollController::default();
        let result = pass(&document, &mut scroll, ViewportDimensions::new(110, 432));
        assert_eq!(result.layout.blocks[0].height, 4 * BASE);
    }

    #[test]
    fn scrolled_pass_shifts_origin() {
        let document = long_document(100);
        let mut scroll = ScrollController::default();
        scroll.apply_delta(36);
        let result = pass(&document, &mut scroll, ViewportDimensions::new(720, 432));
        assert_eq!(result.layout.blocks[0].top_y, MARGIN - 36);
        assert_eq!(result.settle, SettleOutcome::Settled);
        assert_eq!(scroll.offset(), 36);
    }

    #[test]
    fn overscroll_reports_unsettled_and_layout_uses_old_offset() {
        let document = long_document(3);
        let mut scroll = ScrollController::new(SettlePolicy::Incremental { step: BASE });
        scroll.apply_delta(90);
        let result = pass(&document, &mut scroll, ViewportDimensions::new(720, 432));
        assert_eq!(result.layout.blocks[0].top_y, MARGIN - 90);
        assert_eq!(result.settle, SettleOutcome::Unsettled);
        assert_eq!(scroll.offset(), 72);
    }

    #[test]
    fn settle_fully_returns_to_top_for_short_document() {
        let document = long_document(3);
        let mut scroll = ScrollController::default();
        scroll.apply_delta(5_000);
        let layout = settle_fully(
            &document,
            &mut scroll,
            ViewportDimensions::new(720, 432),
            &LayoutMetrics::new(BASE, MARGIN),
            &FontSet::new(BASE),
            &MonospaceMeasurer,
        );
        assert_eq!(scroll.offset(), 0);
        assert_eq!(layout.blocks[0].top_y, MARGIN);
    }

    #[test]
    fn settle_fully_keeps_bottom_on_viewport_edge_for_long_document() {
        // 100 paragraphs of 18 units: bottom at offset 0 is 1810.
        let document = long_document(100);
        let mut scroll = ScrollController::new(SettlePolicy::Immediate);
        scroll.apply_delta(10_000);
        let layout = settle_fully(
            &document,
            &mut scroll,
            ViewportDimensions::new(720, 432),
            &LayoutMetrics::new(BASE, MARGIN),
            &FontSet::new(BASE),
            &MonospaceMeasurer,
        );
        assert_eq!(layout.document_bottom, 432 - MARGIN);
        assert_eq!(scroll.offset(), 1810 - 422);
    }

    fn settle_with_defaults(document: &Document, scroll: &mut ScrollController) -> LayoutResult {
        settle_fully(
            document,
            scroll,
            ViewportDimensions::new(720, 432),
            &LayoutMetrics::new(BASE, MARGIN),
            &FontSet::new(BASE),
            &MonospaceMeasurer,
        )
    }

    #[test]
    fn settle_fully_finishes_incremental_settle_past_pass_limit() {
        // 100_000_000 / 18 passes would be needed at one line per pass.
        let document = Document::from_text("x");
        let mut scroll = ScrollController::new(SettlePolicy::Incremental { step: BASE });
        scroll.apply_delta(100_000_000);
        let layout = settle_with_defaults(&document, &mut scroll);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(layout.blocks[0].top_y, MARGIN);
        assert_eq!(layout.document_bottom, MARGIN + BASE);
        assert_eq!(
            scroll.policy(),
            SettlePolicy::Incremental { step: BASE },
            "caller's policy is restored"
        );
    }

    #[test]
    fn settle_fully_handles_maximum_offset() {
        let document = Document::from_text("x");
        let mut scroll = ScrollController::new(SettlePolicy::Immediate);
        scroll.apply_delta(i32::MAX);
        let layout = settle_with_defaults(&document, &mut scroll);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(layout.blocks[0].top_y, MARGIN);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        let document = Document::from_lines(Vec::<String>::new());
        let mut scroll = ScrollController::default();
        let result = pass(&document, &mut scroll, ViewportDimensions::new(720, 432));
        assert!(result.layout.blocks.is_empty());
        assert_eq!(result.layout.document_bottom, MARGIN);
    }
}
