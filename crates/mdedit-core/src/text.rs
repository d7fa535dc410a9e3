//! Character-offset helpers over UTF-8 `&str` buffers.
//!
//! The engine addresses text in **character offsets** (Unicode scalar values). Widgets that
//! speak UTF-16 (e.g. Cocoa text views) convert at the boundary with
//! [`utf16_to_char_offset`] / [`char_offset_to_utf16`].

use crate::span::TextSpan;

/// Maps character offsets to byte offsets for one immutable buffer.
#[derive(Debug)]
pub(crate) struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    pub(crate) fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .cloned()
            .unwrap_or(self.text_len)
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }

    pub(crate) fn char_at(&self, text: &str, char_offset: usize) -> Option<char> {
        if char_offset >= self.char_count() {
            return None;
        }
        let start = self.char_to_byte[char_offset];
        let end = self.char_to_byte[char_offset + 1];
        text.get(start..end)?.chars().next()
    }

    /// Borrow the text covered by `span` (clamped to the buffer).
    pub(crate) fn slice<'a>(&self, text: &'a str, span: TextSpan) -> &'a str {
        let start = self.char_to_byte(span.start);
        let end = self.char_to_byte(span.end);
        text.get(start..end).unwrap_or("")
    }
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Replace the characters covered by `span` with `replacement`, returning the new buffer.
///
/// `span` is clamped to the buffer first.
pub fn replace_chars(text: &str, span: TextSpan, replacement: &str) -> String {
    let span = TextSpan::new(span.start, span.end);
    let index = CharIndex::new(text);
    let start = index.char_to_byte(span.start);
    let end = index.char_to_byte(span.end);

    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    out
}

/// Convert a character offset to a UTF-16 code unit offset.
pub fn char_offset_to_utf16(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(|c| c.len_utf16()).sum()
}

/// Convert a UTF-16 code unit offset to a character offset.
///
/// An offset that falls inside a surrogate pair rounds up to the next character.
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut current_utf16 = 0;
    let mut char_count = 0;

    for ch in text.chars() {
        if current_utf16 >= utf16_offset {
            break;
        }
        current_utf16 += ch.len_utf16();
        char_count += 1;
    }

    char_count
}
