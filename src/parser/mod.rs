//! Line classifier for markdown-ish source lines.
//!
//! Pure, stateless functions mapping a line (plus lookahead) to a
//! [`BlockKind`] and the number of source lines it consumes. Every line has
//! exactly one classification; nothing here can fail.

use crate::model::{BlockKind, HeaderLevel};

/// Literal lines rendered as horizontal rules.
const RULE_LITERALS: [&str; 3] = ["---", "___", "***"];

/// ATX prefixes, longest first. Checked top to bottom; first match wins.
const HEADER_PREFIXES: [&str; 6] = ["######", "#####", "####", "###", "##", "#"];

const BLOCKQUOTE_MARKER: char = '>';
const CODE_FENCE: &str = "```";
const SETEXT_UNDERLINE: char = '=';

/// Result of classifying the line at the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Block construct starting at this line.
    pub kind: BlockKind,
    /// Number of source lines the construct spans. Always >= 1.
    pub consumed: usize,
}

impl Classified {
    fn single(kind: BlockKind) -> Self {
        Self { kind, consumed: 1 }
    }
}

/// Classify `line` given the lines that follow it.
///
/// Only fenced code blocks look further than `following[0]`; an unterminated
/// fence swallows everything up to the end of the document.
///
/// Rules in priority order:
/// 1. rule literal → `Separator`
/// 2. empty line → `Empty`
/// 3. leading `#` → `Header` (longest prefix wins)
/// 4. next line made only of `=` → `SetextTitle`, consumes 2
/// 5. leading `>` → `Blockquote`
/// 6. leading fence → `CodeBlock`, consumes through the closing fence
/// 7. anything else → `Paragraph`
pub fn classify<S: AsRef<str>>(line: &str, following: &[S]) -> Classified {
    if RULE_LITERALS.contains(&line) {
        return Classified::single(BlockKind::Separator);
    }

    if line.is_empty() {
        return Classified::single(BlockKind::Empty);
    }

    if let Some(kind) = classify_header(line) {
        return Classified::single(kind);
    }

    if following.first().is_some_and(|next| is_setext_underline(next.as_ref())) {
        return Classified {
            kind: BlockKind::SetextTitle {
                text: line.trim().to_string(),
            },
            consumed: 2,
        };
    }

    if let Some(text) = line.strip_prefix(BLOCKQUOTE_MARKER) {
        return Classified::single(BlockKind::Blockquote {
            text: strip_blanks(text).to_string(),
        });
    }

    if line.starts_with(CODE_FENCE) {
        return classify_code_block(following);
    }

    Classified::single(BlockKind::Paragraph {
        text: line.to_string(),
    })
}

/// Header kind for a line starting with `#`, `None` otherwise.
fn classify_header(line: &str) -> Option<BlockKind> {
    let prefix = HEADER_PREFIXES.iter().find(|p| line.starts_with(*p))?;
    let level = HeaderLevel::from_hash_count(prefix.len())?;
    let text = strip_blanks(line.trim_start_matches('#'));
    Some(BlockKind::Header {
        level,
        text: text.to_string(),
    })
}

fn is_setext_underline(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == SETEXT_UNDERLINE)
}

fn classify_code_block<S: AsRef<str>>(following: &[S]) -> Classified {
    let body_len = following
        .iter()
        .position(|l| l.as_ref() == CODE_FENCE)
        .unwrap_or(following.len());
    let closed = body_len < following.len();

    Classified {
        kind: BlockKind::CodeBlock {
            lines: following[..body_len]
                .iter()
                .map(|l| l.as_ref().to_string())
                .collect(),
        },
        consumed: 1 + body_len + usize::from(closed),
    }
}

/// Strip one leading run of spaces and tabs.
fn strip_blanks(text: &str) -> &str {
    text.trim_start_matches([' ', '\t'])
}

/// Iterator over the classified blocks of a whole document.
///
/// Yields `(source_index, Classified)` pairs, advancing by each block's
/// `consumed` count.
#[derive(Debug, Clone)]
pub struct ClassifiedBlocks<'a, S> {
    lines: &'a [S],
    index: usize,
}

impl<'a, S: AsRef<str>> Iterator for ClassifiedBlocks<'a, S> {
    type Item = (usize, Classified);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.get(self.index)?;
        let start = self.index;
        let classified = classify(line.as_ref(), &self.lines[start + 1..]);
        self.index = start + classified.consumed;
        Some((start, classified))
    }
}

/// Classify every line of `lines` in a single left-to-right scan.
pub fn classify_document<S: AsRef<str>>(lines: &[S]) -> ClassifiedBlocks<'_, S> {
    ClassifiedBlocks { lines, index: 0 }
}
