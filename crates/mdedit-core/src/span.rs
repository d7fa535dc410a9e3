//! Selection spans expressed in character offsets.

use crate::text::{char_offset_to_utf16, utf16_to_char_offset};

/// A half-open `[start, end)` range of character offsets into a buffer.
///
/// An empty span (`start == end`) is a caret. Spans are always stored normalised, so a backward
/// selection handed in by a widget ends up with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSpan {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl TextSpan {
    /// Create a span, swapping the bounds if they are given backwards.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A zero-length span at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for a caret.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `offset` lies within the span (both ends inclusive).
    pub fn contains_inclusive(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Clamp both ends to `[0, len]`.
    pub fn clamped(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    /// Move both ends by `delta`, saturating at zero.
    pub fn shifted(&self, delta: isize) -> Self {
        Self {
            start: self.start.saturating_add_signed(delta),
            end: self.end.saturating_add_signed(delta),
        }
    }

    /// Build a span from UTF-16 code unit offsets into `text`.
    pub fn from_utf16(text: &str, start: usize, end: usize) -> Self {
        Self::new(
            utf16_to_char_offset(text, start),
            utf16_to_char_offset(text, end),
        )
    }

    /// Convert to `(start, end)` UTF-16 code unit offsets into `text`.
    pub fn to_utf16(&self, text: &str) -> (usize, usize) {
        (
            char_offset_to_utf16(text, self.start),
            char_offset_to_utf16(text, self.end),
        )
    }
}

impl From<std::ops::Range<usize>> for TextSpan {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Sort spans and merge the ones that overlap.
///
/// Spans that merely touch (`next.start == prev.end`) are kept apart; exact duplicates are
/// dropped.
pub fn normalize_spans(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut spans: Vec<TextSpan> = spans
        .into_iter()
        .map(|s| TextSpan::new(s.start, s.end))
        .collect();
    spans.sort_by_key(|s| (s.start, s.end));

    let mut merged: Vec<TextSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        if let Some(last) = merged.last_mut() {
            if span.start < last.end {
                last.end = last.end.max(span.end);
                continue;
            }
            if *last == span {
                continue;
            }
        }
        merged.push(span);
    }
    merged
}

/// Indices of `spans` ordered by start offset (ties keep input order).
pub(crate) fn ascending_order(spans: &[TextSpan]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by_key(|&idx| (spans[idx].start, spans[idx].end));
    order
}
