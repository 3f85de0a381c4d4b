//! Block layout engine.
//!
//! Turns the classified block stream into positioned, sized blocks in one
//! left-to-right pass. Nothing is cached between passes: every call
//! reclassifies and remeasures from the source lines.

use super::layout_params::LayoutMetrics;
use super::measure::{FontSet, MeasureError, TextMeasurer};
use crate::model::{BlockKind, PositionedBlock};
use crate::parser::classify_document;
use serde::Serialize;
use tracing::warn;

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LayoutResult {
    /// Positioned blocks in source order.
    pub blocks: Vec<PositionedBlock>,
    /// Final cursor position: the bottom edge of the document.
    pub document_bottom: i32,
}

/// Computes block positions using a host-supplied [`TextMeasurer`].
///
/// # Height policy
/// - `Separator`: `2 * separator_margin`, rule at `top + separator_margin`
/// - `Empty`: nothing emitted, zero height
/// - `Header`: `heading_margin + text + heading_margin`, plus
///   `rule_thickness + base_size` for ruled levels
/// - `SetextTitle`: `heading_margin + title`, followed by a `SetextRule`
///   block of `title + base_size + heading_margin`
/// - `Blockquote`: `base_size + 2 * block_margin`
/// - `CodeBlock`: `paragraph_margin + sum(line + code_line_gap)`, unwrapped
/// - `Paragraph`: wrapped height at content width + `paragraph_margin`
///
/// A block whose text cannot be measured is dropped with a warning and
/// takes no space; the rest of the pass continues.
#[derive(Debug, Clone, Copy)]
pub struct BlockLayoutEngine<'a, M: ?Sized> {
    measurer: &'a M,
    fonts: FontSet,
    metrics: LayoutMetrics,
}

impl<'a, M: TextMeasurer + ?Sized> BlockLayoutEngine<'a, M> {
    /// Create an engine bound to a measurer and font set.
    pub fn new(measurer: &'a M, fonts: FontSet, metrics: LayoutMetrics) -> Self {
        Self {
            measurer,
            fonts,
            metrics,
        }
    }

    /// Lay out `lines` starting at `origin_y`.
    pub fn layout<S: AsRef<str>>(
        &self,
        lines: &[S],
        origin_y: i32,
        content_width: i32,
    ) -> LayoutResult {
        let mut blocks = Vec::new();
        let mut y = origin_y;

        for (index, classified) in classify_document(lines) {
            let kind_name = classified.kind.name();
            let emitted_from = blocks.len();
            match self.place(classified.kind, y, content_width, &mut blocks) {
                Ok(advance) => y = y.saturating_add(advance),
                Err(err) => {
                    blocks.truncate(emitted_from);
                    warn!(
                        line = index + 1,
                        kind = kind_name,
                        error = %err,
                        "Skipping block that cannot be measured"
                    );
                }
            }
        }

        LayoutResult {
            blocks,
            document_bottom: y,
        }
    }

    /// Emit the block(s) for `kind` at `y` and return the height consumed.
    fn place(
        &self,
        kind: BlockKind,
        y: i32,
        content_width: i32,
        out: &mut Vec<PositionedBlock>,
    ) -> Result<i32, MeasureError> {
        let m = &self.metrics;
        let base = self.fonts.base_size;

        let kind = match kind {
            BlockKind::SetextTitle { text } => return self.place_setext(text, y, out),
            // A rule is only produced together with its title above.
            BlockKind::Empty | BlockKind::SetextRule => return Ok(0),
            other => other,
        };

        let (height, rule_y) = match &kind {
            BlockKind::Empty | BlockKind::SetextTitle { .. } | BlockKind::SetextRule => (0, None),
            BlockKind::Separator => (2 * m.separator_margin, Some(y + m.separator_margin)),
            BlockKind::Header { level, text } => {
                let size = self.fonts.heading_size(*level);
                let text_height = self.measurer.measure_line(text, self.fonts.bold, size)?.height;
                let below_text = y + m.heading_margin + text_height;
                if level.is_ruled() {
                    let allowance = m.rule_thickness + base;
                    (
                        2 * m.heading_margin + text_height + allowance,
                        Some(below_text + allowance / 2),
                    )
                } else {
                    (2 * m.heading_margin + text_height, None)
                }
            }
            BlockKind::Blockquote { text } => {
                self.measurer.measure_line(text, self.fonts.regular, base)?;
                (base + 2 * m.block_margin, None)
            }
            BlockKind::CodeBlock { lines } => {
                let mut height = m.paragraph_margin;
                for line in lines {
                    let line_height = self.measurer.measure_line(line, self.fonts.regular, base)?.height;
                    height += line_height + m.code_line_gap;
                }
                (height, None)
            }
            BlockKind::Paragraph { text } => {
                let text_height =
                    self.measurer
                        .measure_wrapped(text, self.fonts.regular, base, content_width)?;
                (text_height + m.paragraph_margin, None)
            }
        };

        out.push(PositionedBlock {
            kind,
            top_y: y,
            height,
            rule_y,
        });
        Ok(height)
    }

    /// Emit a setext title and the rule block beneath it.
    fn place_setext(
        &self,
        text: String,
        y: i32,
        out: &mut Vec<PositionedBlock>,
    ) -> Result<i32, MeasureError> {
        let m = &self.metrics;
        let title_height = self
            .measurer
            .measure_line(&text, self.fonts.bold, self.fonts.title_size())?
            .height;

        let title_block = m.heading_margin + title_height;
        out.push(PositionedBlock {
            kind: BlockKind::SetextTitle { text },
            top_y: y,
            height: title_block,
            rule_y: None,
        });

        let rule_top = y + title_block;
        let rule_block = title_height + self.fonts.base_size + m.heading_margin;
        out.push(PositionedBlock {
            kind: BlockKind::SetextRule,
            top_y: rule_top,
            height: rule_block,
            rule_y: Some(rule_top + m.rule_thickness),
        });
        Ok(title_block + rule_block)
    }
}
