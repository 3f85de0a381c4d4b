//! Dirty-flag render scheduling.

use super::scroll::SettleOutcome;

/// Decides whether the next frame needs a layout-and-paint pass.
///
/// Starts dirty so the first frame always paints. Input that moves the view
/// marks it dirty; a pass that leaves the view unsettled keeps it dirty so
/// the settle loop continues on the following frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderScheduler {
    dirty: bool,
    passes: u64,
}

impl RenderScheduler {
    /// New scheduler requesting an initial pass.
    pub fn new() -> Self {
        Self {
            dirty: true,
            passes: 0,
        }
    }

    /// Request a pass on the next frame.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether a pass is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record a completed pass and its settle outcome.
    pub fn finish_pass(&mut self, outcome: SettleOutcome) {
        self.passes += 1;
        self.dirty = outcome == SettleOutcome::Unsettled;
    }

    /// Number of passes completed so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}
