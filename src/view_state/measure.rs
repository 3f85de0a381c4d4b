//! Text measurement capability used by the layout engine.
//!
//! The core never touches glyphs. It asks a [`TextMeasurer`] for heights and
//! widths, addressing fonts through a [`FontSet`] value instead of global
//! state. [`MonospaceMeasurer`] is the terminal host's implementation.

use crate::model::HeaderLevel;
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

/// Columns a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// Failure to size a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// The text contains a character the font cannot map.
    #[error("unmappable character {ch:?}")]
    Unmappable {
        /// Offending character.
        ch: char,
    },
}

/// Stable identifier of a font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontKey(&'static str);

impl FontKey {
    /// Regular weight.
    pub const REGULAR: Self = Self("regular");

    /// Bold/heavy weight.
    pub const BOLD: Self = Self("bold");

    /// Create a key for a named face.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Identifier string.
    pub fn id(self) -> &'static str {
        self.0
    }
}

/// Fonts and sizes used by one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSet {
    /// Face for body text, quotes and code.
    pub regular: FontKey,
    /// Face for headings and titles.
    pub bold: FontKey,
    /// Base font size in layout units.
    pub base_size: i32,
}

impl FontSet {
    /// Regular/bold pair at the given base size.
    pub fn new(base_size: i32) -> Self {
        Self {
            regular: FontKey::REGULAR,
            bold: FontKey::BOLD,
            base_size,
        }
    }

    /// Font size for a heading level.
    pub fn heading_size(&self, level: HeaderLevel) -> i32 {
        level.font_size(self.base_size)
    }

    /// Font size for setext titles: the largest heading size.
    pub fn title_size(&self) -> i32 {
        self.heading_size(HeaderLevel::MAX)
    }
}

/// Measured extent of a single unwrapped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    /// Horizontal advance.
    pub width: i32,
    /// Line height.
    pub height: i32,
}

/// Text measurement supplied by the host.
pub trait TextMeasurer {
    /// Height of `text` word-wrapped to `max_width`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError`] when the text cannot be sized.
    fn measure_wrapped(
        &self,
        text: &str,
        font: FontKey,
        size: i32,
        max_width: i32,
    ) -> Result<i32, MeasureError>;

    /// Size of `text` laid out on one line without wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError`] when the text cannot be sized.
    fn measure_line(&self, text: &str, font: FontKey, size: i32) -> Result<TextSize, MeasureError>;
}

/// Measurer for fixed-pitch faces such as terminal cells.
///
/// Every column advances `size / 2` units and every line is `size` units
/// tall, regardless of face. Control characters other than tab are
/// unmappable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasurer;

impl MonospaceMeasurer {
    /// Horizontal advance of one column at `size`.
    pub fn advance(size: i32) -> i32 {
        (size / 2).max(1)
    }

    fn line_height(size: i32) -> i32 {
        size.max(1)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure_wrapped(
        &self,
        text: &str,
        _font: FontKey,
        size: i32,
        max_width: i32,
    ) -> Result<i32, MeasureError> {
        display_width(text)?;
        let columns = (max_width / Self::advance(size)).max(1) as usize;
        let lines = wrap_text(text, columns).len() as i32;
        Ok(lines * Self::line_height(size))
    }

    fn measure_line(&self, text: &str, _font: FontKey, size: i32) -> Result<TextSize, MeasureError> {
        let columns = display_width(text)? as i32;
        Ok(TextSize {
            width: columns * Self::advance(size),
            height: Self::line_height(size),
        })
    }
}

/// Display width of one character in columns.
pub fn char_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Display width of `text` in columns.
///
/// # Errors
///
/// Returns [`MeasureError::Unmappable`] for control characters other than tab.
pub fn display_width(text: &str) -> Result<usize, MeasureError> {
    text.chars().try_fold(0, |acc, ch| {
        if ch.is_control() && ch != '\t' {
            Err(MeasureError::Unmappable { ch })
        } else {
            Ok(acc + char_width(ch))
        }
    })
}

/// Replace tabs with spaces.
pub fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Greedy word wrap at `max_columns`.
///
/// Runs of whitespace collapse to one space; words wider than a line are
/// broken at the column limit. Always returns at least one line.
pub fn wrap_text(text: &str, max_columns: usize) -> Vec<String> {
    let max_columns = max_columns.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().map(char_width).sum();

        if !current.is_empty() && current_width + 1 + word_width <= max_columns {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_columns {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let width = char_width(ch);
            if !current.is_empty() && current_width + width > max_columns {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
