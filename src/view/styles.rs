//! Block kind styling configuration.
//!
//! Maps block kinds and font keys onto terminal styles. Heading sizes cannot
//! be shown in a terminal, so levels are told apart by color instead.

use crate::model::HeaderLevel;
use crate::view_state::FontKey;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag or `no_color` config setting
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors explicitly on or off, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== BlockStyles =====

/// Styles for each block kind.
///
/// With colors disabled every style falls back to modifiers only, so
/// headings stay bold and quotes stay italic on monochrome terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStyles {
    headings: [Style; 6],
    title: Style,
    rule: Style,
    quote_text: Style,
    quote_fill: Style,
    code: Style,
    paragraph: Style,
}

impl BlockStyles {
    /// Create styles with the specified color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                // Index 0 is level 1 (smallest), index 5 is level 6 (largest).
                headings: [
                    bold.fg(Color::Gray),
                    bold.fg(Color::Blue),
                    bold.fg(Color::Green),
                    bold.fg(Color::Yellow),
                    bold.fg(Color::Cyan),
                    bold.fg(Color::Magenta),
                ],
                title: bold.fg(Color::Magenta),
                rule: Style::default().fg(Color::DarkGray),
                quote_text: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::ITALIC),
                quote_fill: Style::default().bg(Color::Blue),
                code: Style::default().fg(Color::LightGreen),
                paragraph: Style::default(),
            }
        } else {
            Self {
                headings: [bold; 6],
                title: bold.add_modifier(Modifier::UNDERLINED),
                rule: Style::default(),
                quote_text: Style::default().add_modifier(Modifier::ITALIC),
                quote_fill: Style::default(),
                code: Style::default().add_modifier(Modifier::DIM),
                paragraph: Style::default(),
            }
        }
    }

    /// Style for heading text at `level`.
    pub fn heading(&self, level: HeaderLevel) -> Style {
        self.headings[usize::from(level.get() - HeaderLevel::MIN.get())]
    }

    /// Style for setext titles.
    pub fn title(&self) -> Style {
        self.title
    }

    /// Style for separator and heading rules.
    pub fn rule(&self) -> Style {
        self.rule
    }

    /// Style for blockquote text.
    pub fn quote_text(&self) -> Style {
        self.quote_text
    }

    /// Background filling the blockquote rectangle.
    pub fn quote_fill(&self) -> Style {
        self.quote_fill
    }

    /// Style for code block lines.
    pub fn code(&self) -> Style {
        self.code
    }

    /// Style for paragraph text.
    pub fn paragraph(&self) -> Style {
        self.paragraph
    }
}

impl Default for BlockStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

/// Modifier standing in for a font face.
pub fn font_modifier(font: FontKey) -> Modifier {
    if font == FontKey::BOLD {
        Modifier::BOLD
    } else {
        Modifier::empty()
    }
}

// ===== Tests =====
