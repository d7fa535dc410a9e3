//! Shared "replace range(s) in a buffer, recompute selections" machinery.
//!
//! Both the toggle engine and the snippet helpers decide, per span, on at most one replacement.
//! [`apply_per_span`] walks the spans left to right, shifting each later span by the net length
//! change of the edits before it, and collects the results.
//!
//! The input is indexed once and the output is built in a single pass: a planner sees the buffer
//! as it stands after the earlier edits through [`SpanContext`], which reads replaced text from
//! the output built so far and everything else from the input.

use crate::delta::{TextDelta, TextDeltaEdit};
use crate::span::{TextSpan, ascending_order};
use crate::text::{CharIndex, char_len};

/// What happened to one input span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanOutcome {
    /// Markers were added around the span.
    Wrapped,
    /// Markers were removed.
    Unwrapped,
    /// A snippet replaced the span.
    Inserted,
    /// The span was valid but nothing had to change.
    Unchanged,
    /// The span started past the end of the buffer and was left alone.
    Skipped,
}

/// Output of one engine call: the new buffer plus one span per input span, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// The full replacement buffer.
    pub text: String,
    /// Where each input span's text lives in [`EditResult::text`].
    pub spans: Vec<TextSpan>,
    /// Per-span outcome, parallel to `spans`.
    pub outcomes: Vec<SpanOutcome>,
    /// The change as ordered edits (one atomic undo entry for hosts).
    pub delta: TextDelta,
}

impl EditResult {
    /// Returns `true` if the buffer was modified.
    pub fn is_modified(&self) -> bool {
        !self.delta.is_empty()
    }
}

/// The state a planner sees for one span.
///
/// Offsets are in the working buffer: the input with every earlier span's edit applied.
pub(crate) struct SpanContext<'a> {
    source: &'a str,
    index: &'a CharIndex,
    /// Working text below `floor`.
    prefix: &'a str,
    /// Working offset minus input offset, for offsets at or above `floor`.
    shift: isize,
    char_count: usize,
    /// The span, shifted and clamped into the working buffer.
    pub span: TextSpan,
    /// Offset before which the buffer holds earlier replacements; plans must not reach below it.
    pub floor: usize,
}

impl<'a> SpanContext<'a> {
    /// Length of the working buffer in characters.
    pub(crate) fn char_count(&self) -> usize {
        self.char_count
    }

    /// Borrow the working text covered by `span`. The part of `span` below `floor` is dropped.
    pub(crate) fn slice(&self, span: TextSpan) -> &'a str {
        let start = span.start.max(self.floor);
        let end = span.end.max(start);
        self.index.slice(
            self.source,
            TextSpan::new(self.to_source(start), self.to_source(end)),
        )
    }

    /// The working character at `offset`.
    pub(crate) fn char_at(&self, offset: usize) -> Option<char> {
        if offset < self.floor {
            // `prefix` holds exactly `floor` characters.
            return self.prefix.chars().rev().nth(self.floor - 1 - offset);
        }
        self.index.char_at(self.source, self.to_source(offset))
    }

    fn to_source(&self, offset: usize) -> usize {
        (offset as isize - self.shift).max(0) as usize
    }
}

/// A planner's decision for one span.
pub(crate) struct SpanPlan {
    pub replace: Option<(TextSpan, String)>,
    /// Resulting selection, in the working buffer *after* `replace` is applied.
    pub selection: TextSpan,
    pub outcome: SpanOutcome,
}

impl SpanPlan {
    pub(crate) fn unchanged(span: TextSpan) -> Self {
        Self {
            replace: None,
            selection: span,
            outcome: SpanOutcome::Unchanged,
        }
    }
}

pub(crate) fn apply_per_span<F>(text: &str, spans: &[TextSpan], mut plan: F) -> EditResult
where
    F: FnMut(&SpanContext<'_>) -> SpanPlan,
{
    let index = CharIndex::new(text);
    let before_char_count = index.char_count();
    let mut working_len = before_char_count;

    let mut out = String::with_capacity(text.len());
    // Input characters before this offset are already in `out` (copied or replaced).
    let mut source_cursor = 0usize;

    let mut out_spans = vec![TextSpan::default(); spans.len()];
    let mut outcomes = vec![SpanOutcome::Unchanged; spans.len()];
    let mut edits: Vec<TextDeltaEdit> = Vec::new();

    let mut shift: isize = 0;
    let mut floor = 0usize;

    for idx in ascending_order(spans) {
        let original = TextSpan::new(spans[idx].start, spans[idx].end);
        let shifted = original.shifted(shift);

        if shifted.start > working_len {
            tracing::debug!(
                start = original.start,
                end = original.end,
                len = before_char_count,
                "span starts past the end of the buffer; skipping"
            );
            out_spans[idx] = TextSpan::caret(working_len);
            outcomes[idx] = SpanOutcome::Skipped;
            continue;
        }

        let start = shifted.start.max(floor);
        let span = TextSpan::new(start, shifted.end.max(start)).clamped(working_len);

        let decision = plan(&SpanContext {
            source: text,
            index: &index,
            prefix: &out,
            shift,
            char_count: working_len,
            span,
            floor,
        });

        if let Some((range, replacement)) = decision.replace {
            let range_start = range.start.max(floor);
            let range = TextSpan::new(range_start, range.end.max(range_start)).clamped(working_len);

            let source_start = (range.start as isize - shift) as usize;
            let source_end = (range.end as isize - shift) as usize;
            out.push_str(index.slice(text, TextSpan::new(source_cursor, source_start)));
            out.push_str(&replacement);
            source_cursor = source_end;

            let deleted_text = index
                .slice(text, TextSpan::new(source_start, source_end))
                .to_string();
            let deleted_len = source_end - source_start;
            let inserted_len = char_len(&replacement);

            working_len = working_len - deleted_len + inserted_len;
            shift += inserted_len as isize - deleted_len as isize;
            floor = range.start + inserted_len;

            edits.push(TextDeltaEdit {
                start: range.start,
                deleted_text,
                inserted_text: replacement,
            });
        }

        out_spans[idx] = decision.selection;
        outcomes[idx] = decision.outcome;
    }

    out.push_str(index.slice(text, TextSpan::new(source_cursor, before_char_count)));

    EditResult {
        text: out,
        spans: out_spans,
        outcomes,
        delta: TextDelta {
            before_char_count,
            after_char_count: working_len,
            edits,
        },
    }
}
