//! Error types for mdscroll.
//!
//! The layout core itself is total: classification, layout and settling never
//! fail. Errors only arise at the edges of the program.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InputError`] - Document loading failures (missing file, I/O)
//!   - [`ConfigError`] - Config file read/parse/validation failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal failures
//!
//! Text measurement failures ([`crate::view_state::measure::MeasureError`])
//! are handled inside the layout engine and never surface here.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All of these are fatal: the binary reports them on stderr and exits.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the source document.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Layout could not be serialized for `--dump-layout`.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors encountered when loading the document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use mdscroll::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.md")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.md"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// No file was given, stdin is a terminal, and the default document is missing.
    #[error("No input source: provide a file path, pipe data to stdin, or create TEST.md")]
    NoInput,

    /// Generic I/O error reading the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
