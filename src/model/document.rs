//! Session-scoped document buffer.

use std::io::BufRead;
use std::sync::Arc;

/// Immutable ordered list of source lines.
///
/// Loaded once before the first layout pass and never mutated afterwards.
/// Cloning is cheap: the lines are shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Arc<[String]>,
}

impl Document {
    /// Build a document from already split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split `text` into lines. `\n` and `\r\n` endings are both accepted.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Read every line from `reader`, stripping line endings.
    ///
    /// Invalid UTF-8 is decoded lossily, line by line, with U+FFFD.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the reader.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let lines = reader
            .split(b'\n')
            .map(|line| line.map(|bytes| decode_line(&bytes)))
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::from_lines(lines))
    }

    /// All source lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of source lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
