//! Projection of positioned blocks onto the terminal cell grid.
//!
//! Layout works in virtual pixels; this widget converts block positions to
//! rows and columns with [`CellGrid`] and draws whatever falls inside the
//! area. Blocks partly above or below the viewport are clipped row by row.

use super::styles::{font_modifier, BlockStyles};
use crate::model::{BlockKind, PositionedBlock};
use crate::view_state::measure::{expand_tabs, wrap_text};
use crate::view_state::{CellGrid, FontSet, LayoutMetrics, LayoutResult};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

const SEPARATOR_GLYPH: &str = "─";
const HEADING_RULE_GLYPH: &str = "━";
const SETEXT_RULE_GLYPH: &str = "═";

/// Widget drawing one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct DocumentPainter<'a> {
    layout: &'a LayoutResult,
    metrics: &'a LayoutMetrics,
    fonts: &'a FontSet,
    styles: &'a BlockStyles,
}

impl<'a> DocumentPainter<'a> {
    /// Painter for `layout`, which must have been computed with the same
    /// metrics and fonts.
    pub fn new(
        layout: &'a LayoutResult,
        metrics: &'a LayoutMetrics,
        fonts: &'a FontSet,
        styles: &'a BlockStyles,
    ) -> Self {
        Self {
            layout,
            metrics,
            fonts,
            styles,
        }
    }
}

impl Widget for DocumentPainter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = CellGrid::for_font_size(self.fonts.base_size);
        let content_width = self
            .metrics
            .content_width(i32::from(area.width) * grid.cell_width);
        let canvas = Canvas {
            area,
            grid,
            left: grid.column_of(self.metrics.margin),
            columns: (content_width / grid.cell_width).max(1),
        };

        for block in &self.layout.blocks {
            if canvas.row(block.bottom_y()) < 0 || canvas.row(block.top_y) >= i32::from(area.height) {
                continue;
            }
            self.paint_block(block, &canvas, buf);
        }
    }
}

impl DocumentPainter<'_> {
    fn paint_block(&self, block: &PositionedBlock, canvas: &Canvas, buf: &mut Buffer) {
        let m = self.metrics;
        let styles = self.styles;
        let top = block.top_y;

        match &block.kind {
            BlockKind::Empty => {}
            BlockKind::Separator => {
                if let Some(rule_y) = block.rule_y {
                    canvas.rule(buf, canvas.row(rule_y), SEPARATOR_GLYPH, styles.rule());
                }
            }
            BlockKind::Header { level, text } => {
                let style = styles
                    .heading(*level)
                    .add_modifier(font_modifier(self.fonts.bold));
                canvas.text(buf, canvas.row(top + m.heading_margin), 0, text, style);
                if let Some(rule_y) = block.rule_y {
                    canvas.rule(buf, canvas.row(rule_y), HEADING_RULE_GLYPH, styles.rule());
                }
            }
            BlockKind::SetextTitle { text } => {
                let style = styles.title().add_modifier(font_modifier(self.fonts.bold));
                canvas.text(buf, canvas.row(top + m.heading_margin), 0, text, style);
            }
            BlockKind::SetextRule => {
                if let Some(rule_y) = block.rule_y {
                    canvas.rule(buf, canvas.row(rule_y), SETEXT_RULE_GLYPH, styles.rule());
                }
            }
            BlockKind::Blockquote { text } => {
                let first = canvas.row(top);
                let last = canvas.row(block.bottom_y()).max(first + 1);
                for row in first..last {
                    canvas.fill(buf, row, styles.quote_fill());
                }
                canvas.text(buf, canvas.row(top + m.block_margin), 1, text, styles.quote_text());
            }
            BlockKind::CodeBlock { lines } => {
                let step = self.fonts.base_size + m.code_line_gap;
                for (i, line) in lines.iter().enumerate() {
                    let y = top + m.paragraph_margin + step * i as i32;
                    canvas.text(buf, canvas.row(y), 0, &expand_tabs(line), styles.code());
                }
            }
            BlockKind::Paragraph { text } => {
                let style = styles
                    .paragraph()
                    .add_modifier(font_modifier(self.fonts.regular));
                for (i, line) in wrap_text(text, canvas.columns as usize).iter().enumerate() {
                    let y = top + self.fonts.base_size * i as i32;
                    canvas.text(buf, canvas.row(y), 0, line, style);
                }
            }
        }
    }
}

/// Drawing area in cell coordinates.
struct Canvas {
    area: Rect,
    grid: CellGrid,
    left: i32,
    columns: i32,
}

impl Canvas {
    fn row(&self, y: i32) -> i32 {
        self.grid.row_of(y)
    }

    /// Screen position of `row`/`column` relative to the content box, if visible.
    fn cell(&self, row: i32, column: i32) -> Option<(u16, u16)> {
        let x = self.left + column;
        if row < 0 || row >= i32::from(self.area.height) || x >= i32::from(self.area.width) {
            return None;
        }
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(row).ok()?;
        Some((self.area.x + x, self.area.y + y))
    }

    fn remaining_columns(&self, column: i32) -> usize {
        let right_edge = (self.left + self.columns).min(i32::from(self.area.width));
        usize::try_from(right_edge - self.left - column).unwrap_or(0)
    }

    fn text(&self, buf: &mut Buffer, row: i32, indent: i32, text: &str, style: Style) {
        if let Some((x, y)) = self.cell(row, indent) {
            buf.set_stringn(x, y, text, self.remaining_columns(indent), style);
        }
    }

    fn rule(&self, buf: &mut Buffer, row: i32, glyph: &str, style: Style) {
        let width = self.remaining_columns(0);
        self.text(buf, row, 0, &glyph.repeat(width), style);
    }

    fn fill(&self, buf: &mut Buffer, row: i32, style: Style) {
        if let Some((x, y)) = self.cell(row, 0) {
            let width = u16::try_from(self.remaining_columns(0)).unwrap_or(u16::MAX);
            buf.set_style(Rect::new(x, y, width, 1).intersection(self.area), style);
        }
    }
}
