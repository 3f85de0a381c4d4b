//! View-state layer - Measurement, layout, scrolling and render scheduling
//!
//! Everything here is pure: no terminal access, no I/O. The host supplies a
//! [`measure::TextMeasurer`] and viewport size; this layer answers where each
//! block goes and whether another frame is needed.
//!
//! # Module Structure
//!
//! - `types`: ViewportDimensions and the terminal CellGrid projection
//! - `measure`: TextMeasurer capability, FontSet, MonospaceMeasurer
//! - `layout_params`: LayoutMetrics - margins and gaps
//! - `layout`: BlockLayoutEngine - positioned blocks for one pass
//! - `scroll`: ScrollController - offset and settle step
//! - `scheduler`: RenderScheduler - dirty flag driving the frame loop

pub mod layout;
pub mod layout_params;
pub mod measure;
pub mod scheduler;
pub mod scroll;
pub mod types;

pub use layout::{BlockLayoutEngine, LayoutResult};
pub use layout_params::LayoutMetrics;
pub use measure::{FontKey, FontSet, MeasureError, MonospaceMeasurer, TextMeasurer, TextSize};
pub use scheduler::RenderScheduler;
pub use scroll::{ScrollController, SettleOutcome, SettlePolicy};
pub use types::{CellGrid, ViewportDimensions};
