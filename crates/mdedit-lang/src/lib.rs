#![warn(missing_docs)]
//! `mdedit-lang` - data tables for the Markdown inline syntax understood by `mdedit-core`.
//!
//! This crate intentionally stays dependency-free. It only knows which inline styles exist and
//! which literal markers denote them; detection and editing live in `mdedit-core`.

use std::fmt;
use std::str::FromStr;

/// An inline Markdown style that can be toggled around a span of text.
///
/// Each style is toggled independently using only its own marker pair; combined markers such as
/// `***bold italic***` are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InlineStyle {
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `~~text~~`
    Strikethrough,
    /// `` `text` ``
    InlineCode,
}

impl InlineStyle {
    /// Every supported style, in toolbar order.
    pub const ALL: [InlineStyle; 4] = [
        InlineStyle::Bold,
        InlineStyle::Italic,
        InlineStyle::Strikethrough,
        InlineStyle::InlineCode,
    ];

    /// The literal marker placed on each side of the styled text.
    pub fn marker(self) -> &'static str {
        match self {
            InlineStyle::Bold => "**",
            InlineStyle::Italic => "*",
            InlineStyle::Strikethrough => "~~",
            InlineStyle::InlineCode => "`",
        }
    }

    /// The single character the marker is made of.
    pub fn marker_char(self) -> char {
        match self {
            InlineStyle::Bold | InlineStyle::Italic => '*',
            InlineStyle::Strikethrough => '~',
            InlineStyle::InlineCode => '`',
        }
    }

    /// Marker length in characters (markers are ASCII, so this is also the byte length).
    pub fn marker_len(self) -> usize {
        self.marker().len()
    }

    /// Stable lowercase name, used by keymap configuration.
    pub fn name(self) -> &'static str {
        match self {
            InlineStyle::Bold => "bold",
            InlineStyle::Italic => "italic",
            InlineStyle::Strikethrough => "strikethrough",
            InlineStyle::InlineCode => "inline-code",
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a style name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown inline style '{}'", self.0)
    }
}

impl std::error::Error for UnknownStyle {}

impl FromStr for InlineStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" | "strong" => Ok(InlineStyle::Bold),
            "italic" | "emphasis" => Ok(InlineStyle::Italic),
            "strikethrough" | "strike" => Ok(InlineStyle::Strikethrough),
            "code" | "inline-code" | "inline_code" => Ok(InlineStyle::InlineCode),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

/// Marker tokens offered as completions by the editing widget.
pub const COMPLETION_TOKENS: [&str; 4] = ["*", "**", "~~", "`"];

/// Returns `true` if `token` is one of [`COMPLETION_TOKENS`].
pub fn is_completion_token(token: &str) -> bool {
    COMPLETION_TOKENS.contains(&token)
}
