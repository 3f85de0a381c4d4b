//! Document input sources.
//!
//! The document is read once at startup from one of:
//! - a file named on the command line
//! - piped stdin
//! - `TEST.md` in the working directory when neither is given

use crate::model::error::InputError;
use crate::model::Document;
use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::info;

/// Document read when no file is given and stdin is a terminal.
pub const DEFAULT_DOCUMENT: &str = "TEST.md";

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file on disk.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

/// Pick a source without reading anything.
///
/// # Logic:
/// 1. If a file path is given: that file (must exist)
/// 2. If stdin is piped: stdin
/// 3. Else: [`DEFAULT_DOCUMENT`] if it exists
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the named file does not exist.
/// Returns `InputError::NoInput` if nothing else applies and the default
/// document is missing.
pub fn detect_document_source(file: Option<PathBuf>) -> Result<DocumentSource, InputError> {
    select_source(file, std::io::stdin().is_terminal(), Path::new(DEFAULT_DOCUMENT))
}

fn select_source(
    file: Option<PathBuf>,
    stdin_is_terminal: bool,
    default_document: &Path,
) -> Result<DocumentSource, InputError> {
    match file {
        Some(path) if path.exists() => Ok(DocumentSource::File(path)),
        Some(path) => Err(InputError::FileNotFound { path }),
        None if !stdin_is_terminal => Ok(DocumentSource::Stdin),
        None if default_document.exists() => {
            Ok(DocumentSource::File(default_document.to_path_buf()))
        }
        None => Err(InputError::NoInput),
    }
}

/// Read the whole document from `source`.
///
/// Line endings (`\n` or `\r\n`) are stripped and invalid UTF-8 is
/// replaced with U+FFFD.
///
/// # Errors
///
/// Returns `InputError::Io` for read failures and `InputError::FileNotFound`
/// if the file disappeared since detection.
pub fn load_document(source: &DocumentSource) -> Result<Document, InputError> {
    let document = match source {
        DocumentSource::File(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => InputError::FileNotFound { path: path.clone() },
                _ => InputError::Io(e),
            })?;
            Document::from_reader(BufReader::new(file))?
        }
        DocumentSource::Stdin => Document::from_reader(std::io::stdin().lock())?,
    };

    info!(source = ?source, lines = document.len(), "Document loaded");
    Ok(document)
}
