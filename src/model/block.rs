//! Block constructs produced by the line classifier and the layout engine.
//!
//! Both types are derived data: they are recomputed from the source lines on
//! every layout pass and never patched in place.

use serde::Serialize;

/// Heading level on the six-step scale.
///
/// The scale runs from the smallest heading (`######`, level 1) to the
/// largest (`#`, level 6). Levels 5 and 6 carry a decorative rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HeaderLevel(u8);

impl HeaderLevel {
    /// Smallest heading level (`######`).
    pub const MIN: Self = Self(1);

    /// Largest heading level (`#`).
    pub const MAX: Self = Self(6);

    /// Smart constructor. Returns `None` outside `1..=6`.
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0).contains(&level).then_some(Self(level))
    }

    /// Level for an ATX prefix made of `hashes` hash characters.
    ///
    /// Returns `None` unless `hashes` is in `1..=6`.
    pub fn from_hash_count(hashes: usize) -> Option<Self> {
        match hashes {
            1..=6 => Some(Self(7 - hashes as u8)),
            _ => None,
        }
    }

    /// Raw level value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether a decorative rule is drawn below headings of this level.
    pub fn is_ruled(self) -> bool {
        self.0 >= 5
    }

    /// Font size for this level: the base size scaled by `1 + 0.2 * level`,
    /// truncated toward zero.
    pub fn font_size(self, base: i32) -> i32 {
        base * (5 + i32::from(self.0)) / 5
    }
}

/// Typed block construct for one or more source lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    /// Horizontal rule (`---`, `___`, `***`).
    Separator,
    /// Zero-length line. Produces no visual block.
    Empty,
    /// ATX heading.
    Header {
        /// Level on the six-step scale.
        level: HeaderLevel,
        /// Heading text with hashes and leading blanks stripped.
        text: String,
    },
    /// Single-line blockquote.
    Blockquote {
        /// Quote text with the marker stripped.
        text: String,
    },
    /// Title line of a setext heading.
    SetextTitle {
        /// Trimmed title text.
        text: String,
    },
    /// `=` underline of a setext heading, emitted directly below its title.
    SetextRule,
    /// Plain text, word-wrapped at layout time.
    Paragraph {
        /// Raw line text.
        text: String,
    },
    /// Fenced code block.
    CodeBlock {
        /// Lines between the fences, verbatim.
        lines: Vec<String>,
    },
}

impl BlockKind {
    /// Short lowercase name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Separator => "separator",
            BlockKind::Empty => "empty",
            BlockKind::Header { .. } => "header",
            BlockKind::Blockquote { .. } => "blockquote",
            BlockKind::SetextTitle { .. } => "setext_title",
            BlockKind::SetextRule => "setext_rule",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::CodeBlock { .. } => "code_block",
        }
    }
}

/// A block placed in document coordinates.
///
/// # Invariants
/// - `height >= 0`
/// - Within one layout pass, `top_y + height <= next.top_y`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionedBlock {
    /// What to paint.
    pub kind: BlockKind,
    /// Top edge, already shifted by the scroll origin.
    pub top_y: i32,
    /// Vertical extent including margins.
    pub height: i32,
    /// Y of the decorative rule, when this block draws one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_y: Option<i32>,
}

impl PositionedBlock {
    /// Y of the first unit below this block.
    pub fn bottom_y(&self) -> i32 {
        self.top_y + self.height
    }
}
