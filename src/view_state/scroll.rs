//! Scroll offset and the settle step that follows each layout pass.

/// How an overscrolled view is pulled back towards the document end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePolicy {
    /// Reduce the offset by a fixed step per pass. Produces a visible
    /// "bounce back" spread over several frames.
    Incremental {
        /// Layout units removed per pass. Values below 1 are treated as 1.
        step: i32,
    },
    /// Remove the whole overshoot in a single pass.
    Immediate,
}

impl SettlePolicy {
    /// Incremental settling at one base line per pass.
    pub fn incremental(base_size: i32) -> Self {
        Self::Incremental {
            step: base_size.max(1),
        }
    }
}

/// Result of one settle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// No correction was needed; the view is stable.
    Settled,
    /// The offset changed and the view needs another layout pass.
    Unsettled,
}

/// Owner of the vertical scroll offset.
///
/// # Invariants
/// - `offset >= 0` after every operation
/// - Layout origin is `margin - offset`
///
/// The upper bound is not known until layout has run, so downward scrolling
/// is unclamped and [`ScrollController::settle`] pulls the view back when
/// the document bottom rises above the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollController {
    offset: i32,
    policy: SettlePolicy,
}

impl ScrollController {
    /// Controller at offset 0.
    pub fn new(policy: SettlePolicy) -> Self {
        Self { offset: 0, policy }
    }

    /// Current offset in layout units.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Active settle policy.
    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }

    /// Replace the settle policy. The offset is kept.
    pub fn set_policy(&mut self, policy: SettlePolicy) {
        self.policy = policy;
    }

    /// Apply a scroll request. Positive deltas scroll towards the document
    /// end. Returns whether the offset changed.
    pub fn apply_delta(&mut self, delta: i32) -> bool {
        let previous = self.offset;
        self.offset = self.offset.saturating_add(delta).max(0);
        self.offset != previous
    }

    /// Jump to the top. Returns whether the offset changed.
    pub fn scroll_to_top(&mut self) -> bool {
        let changed = self.offset != 0;
        self.offset = 0;
        changed
    }

    /// Top of the document for the next layout pass.
    pub fn origin_y(&self, margin: i32) -> i32 {
        margin.saturating_sub(self.offset)
    }

    /// Correct overscroll after a layout pass.
    ///
    /// The view is overscrolled when it is scrolled at all and the document
    /// bottom sits above `viewport_height - margin`. Short documents therefore
    /// always settle back to offset 0.
    pub fn settle(&mut self, document_bottom: i32, viewport_height: i32, margin: i32) -> SettleOutcome {
        let limit = viewport_height.saturating_sub(margin);
        if self.offset == 0 || document_bottom >= limit {
            return SettleOutcome::Settled;
        }

        // The overshoot can exceed i32 when the offset is near its maximum.
        let reduction = match self.policy {
            SettlePolicy::Incremental { step } => i64::from(step.max(1)),
            SettlePolicy::Immediate => i64::from(limit) - i64::from(document_bottom),
        };
        let remaining = (i64::from(self.offset) - reduction).max(0);
        self.offset = i32::try_from(remaining).unwrap_or(0);
        SettleOutcome::Unsettled
    }
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new(SettlePolicy::Incremental { step: 18 })
    }
}
