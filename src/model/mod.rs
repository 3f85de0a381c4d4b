//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod block;
pub mod document;
pub mod error;
pub mod key_action;

pub use block::{BlockKind, HeaderLevel, PositionedBlock};
pub use document::Document;
pub use error::{AppError, InputError};
pub use key_action::KeyAction;
