//! Spacing constants for one layout pass.

/// Margins and gaps used by the block layout engine, in layout units.
///
/// Derived from the base font size and the outer margin so that every
/// spacing scales together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Outer margin. Layout origin is `margin - scroll_offset`.
    pub margin: i32,
    /// Space above and below heading text.
    pub heading_margin: i32,
    /// Half the height of a separator; the rule sits this far below its top.
    pub separator_margin: i32,
    /// Padding above and below blockquote text.
    pub block_margin: i32,
    /// Space after a paragraph and before a code block.
    pub paragraph_margin: i32,
    /// Gap between consecutive code lines.
    pub code_line_gap: i32,
    /// Allowance for decorative rule thickness.
    pub rule_thickness: i32,
}

impl LayoutMetrics {
    /// Metrics for `base_size` text inside a `margin` frame.
    ///
    /// Paragraph and code spacing start at zero; see
    /// [`LayoutMetrics::with_spacing`].
    pub fn new(base_size: i32, margin: i32) -> Self {
        Self {
            margin,
            heading_margin: margin,
            separator_margin: base_size / 2,
            block_margin: margin,
            paragraph_margin: 0,
            code_line_gap: 0,
            rule_thickness: 2,
        }
    }

    /// Override paragraph margin and code line gap.
    pub fn with_spacing(mut self, paragraph_margin: i32, code_line_gap: i32) -> Self {
        self.paragraph_margin = paragraph_margin;
        self.code_line_gap = code_line_gap;
        self
    }

    /// Width available to text inside the outer margins.
    pub fn content_width(&self, viewport_width: i32) -> i32 {
        (viewport_width - 2 * self.margin).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_spans_one_base_line() {
        let metrics = LayoutMetrics::new(18, 10);
        assert_eq!(metrics.separator_margin * 2, 18);
    }

    #[test]
    fn with_spacing_only_touches_spacing() {
        let base = LayoutMetrics::new(18, 10);
        let spaced = base.with_spacing(5, 3);
        assert_eq!(spaced.paragraph_margin, 5);
        assert_eq!(spaced.code_line_gap, 3);
        assert_eq!(spaced.heading_margin, base.heading_margin);
        assert_eq!(spaced.margin, base.margin);
    }

    #[test]
    fn content_width_subtracts_both_margins() {
        let metrics = LayoutMetrics::new(18, 10);
        assert_eq!(metrics.content_width(720), 700);
    }

    #[test]
    fn content_width_never_negative() {
        let metrics = LayoutMetrics::new(18, 10);
        assert_eq!(metrics.content_width(5), 0);
    }
}
