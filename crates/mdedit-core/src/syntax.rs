//! Inline syntax rules: style markers and formatted-span detection.
//!
//! Detection is deliberately exclusive between styles that share a marker character:
//! `**Hello**` is bold and **not** italic, and `***Hello***` is neither (combined markers are not
//! modelled). A formatted span is
//!
//! ```text
//! marker + content + marker
//! ```
//!
//! where `content` is non-empty, does not contain the marker itself, and does not start or end
//! with the marker character.
//!
//! [`contains_formatting`] also recognises `__bold__`. Toggling and [`find_formatted`] only use
//! the canonical markers from [`InlineStyle::marker`].

use crate::span::TextSpan;
use crate::text::CharIndex;
use mdedit_lang::{InlineStyle, is_completion_token};
use regex::Regex;
use std::sync::LazyLock;

/// One marker and its candidate pattern (lazy, single line). Candidates are validated with
/// [`MarkerRule::is_valid_content`] and the surrounding characters, which the `regex` crate
/// cannot express as lookaround.
struct MarkerRule {
    marker: &'static str,
    marker_char: char,
    regex: Regex,
}

impl MarkerRule {
    fn new(marker: &'static str) -> Self {
        let escaped = regex::escape(marker);
        let pattern = format!("{escaped}([^\\n]+?){escaped}");
        Self {
            marker,
            marker_char: marker.chars().next().unwrap_or_default(),
            regex: Regex::new(&pattern).expect("inline marker pattern is valid"),
        }
    }

    fn is_valid_content(&self, content: &str) -> bool {
        !content.is_empty()
            && !content.contains(self.marker)
            && !content.starts_with(self.marker_char)
            && !content.ends_with(self.marker_char)
    }

    fn first_byte_range(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        let marker_len = self.marker.len();
        let mut pos = from;
        while pos <= text.len() {
            let m = self.regex.find_at(text, pos)?;
            let content = &text[m.start() + marker_len..m.end() - marker_len];
            let before_ok = !text[..m.start()].ends_with(self.marker_char);
            let after_ok = !text[m.end()..].starts_with(self.marker_char);
            if before_ok && after_ok && self.is_valid_content(content) {
                return Some((m.start(), m.end()));
            }
            // Markers are ASCII, so one byte past the match start is a char boundary.
            pos = m.start() + 1;
        }
        None
    }
}

/// Canonical rules, in [`InlineStyle::ALL`] order.
static CANONICAL: LazyLock<Vec<MarkerRule>> = LazyLock::new(|| {
    InlineStyle::ALL
        .iter()
        .map(|style| MarkerRule::new(style.marker()))
        .collect()
});

/// Markers that are detected but never written.
static ALTERNATE: LazyLock<Vec<MarkerRule>> = LazyLock::new(|| vec![MarkerRule::new("__")]);

fn rule_for(style: InlineStyle) -> Option<&'static MarkerRule> {
    let position = InlineStyle::ALL.iter().position(|&s| s == style)?;
    CANONICAL.get(position)
}

/// The literal marker for `style`.
pub fn marker_for(style: InlineStyle) -> &'static str {
    style.marker()
}

/// Returns `true` if the whole of `text` is wrapped in exactly one `style` marker pair.
///
/// ```rust
/// use mdedit_core::{InlineStyle, syntax::is_formatted};
///
/// assert!(is_formatted("**Hello**", InlineStyle::Bold));
/// assert!(!is_formatted("**Hello**", InlineStyle::Italic));
/// assert!(is_formatted("*Hello*", InlineStyle::Italic));
/// ```
pub fn is_formatted(text: &str, style: InlineStyle) -> bool {
    unwrap(text, style).is_some()
}

/// Returns `true` if any supported style occurs anywhere in `text`, including `__bold__`.
pub fn contains_formatting(text: &str) -> bool {
    CANONICAL
        .iter()
        .chain(ALTERNATE.iter())
        .any(|rule| rule.first_byte_range(text, 0).is_some())
}

/// All non-overlapping occurrences of `style` in `text`, as character spans (markers included).
pub fn find_formatted(text: &str, style: InlineStyle) -> Vec<TextSpan> {
    let Some(rule) = rule_for(style) else {
        return Vec::new();
    };
    let index = CharIndex::new(text);
    let mut spans = Vec::new();
    let mut from = 0;
    while let Some((start, end)) = rule.first_byte_range(text, from) {
        spans.push(TextSpan::new(
            index.byte_to_char(start),
            index.byte_to_char(end),
        ));
        from = end;
    }
    spans
}

/// `marker + text + marker`.
pub fn wrap(text: &str, style: InlineStyle) -> String {
    let marker = style.marker();
    let mut out = String::with_capacity(text.len() + marker.len() * 2);
    out.push_str(marker);
    out.push_str(text);
    out.push_str(marker);
    out
}

/// Strip exactly one leading and one trailing marker, if `text` is formatted as `style`.
pub fn unwrap(text: &str, style: InlineStyle) -> Option<&str> {
    let marker = style.marker();
    let content = text.strip_prefix(marker)?.strip_suffix(marker)?;
    rule_for(style)?.is_valid_content(content).then_some(content)
}

/// Completion filter for the editing widget: `words` are kept only when at least one of them is
/// a supported marker token.
pub fn syntax_completions(words: &[String]) -> Vec<String> {
    if words.iter().any(|w| is_completion_token(w)) {
        words.to_vec()
    } else {
        Vec::new()
    }
}
