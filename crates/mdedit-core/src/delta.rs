//! Structured text change deltas.
//!
//! Every [`EditResult`](crate::EditResult) carries a [`TextDelta`] describing the change as an
//! ordered list of edits, so a host can record one atomic entry on its own undo stack (or forward
//! the change to anything that tracks the document incrementally) without diffing buffers.
//!
//! Offsets are **character offsets** (Unicode scalar values).

use crate::span::TextSpan;
use crate::text::{char_len, replace_chars};

/// A single text edit expressed in character offsets.
///
/// Semantics:
/// - `start` is a character offset in the document **at the time this edit is applied**.
/// - The deleted range is defined by the length (in `char`s) of `deleted_text`.
/// - Edits inside a [`TextDelta`] must be applied **in order** to transform the "before" document
///   into the "after" document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDeltaEdit {
    /// Start character offset of the edit.
    pub start: usize,
    /// Exact deleted text (may be empty).
    pub deleted_text: String,
    /// Exact inserted text (may be empty).
    pub inserted_text: String,
}

impl TextDeltaEdit {
    /// Length of `deleted_text` in characters.
    pub fn deleted_len(&self) -> usize {
        char_len(&self.deleted_text)
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_len(&self) -> usize {
        char_len(&self.inserted_text)
    }

    /// Exclusive end character offset in the pre-edit document.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.deleted_len())
    }
}

/// A structured description of a document text change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDelta {
    /// Character count before applying `edits`.
    pub before_char_count: usize,
    /// Character count after applying `edits`.
    pub after_char_count: usize,
    /// Ordered list of edits that transforms the "before" document into the "after" document.
    pub edits: Vec<TextDeltaEdit>,
}

impl TextDelta {
    /// Returns `true` if this delta contains no edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Replay the edits on `text` (which should be the "before" document).
    pub fn apply_to(&self, text: &str) -> String {
        self.edits.iter().fold(text.to_string(), |acc, edit| {
            replace_chars(
                &acc,
                TextSpan::new(edit.start, edit.end()),
                &edit.inserted_text,
            )
        })
    }

    /// The delta that turns the "after" document back into the "before" document.
    pub fn inverted(&self) -> TextDelta {
        TextDelta {
            before_char_count: self.after_char_count,
            after_char_count: self.before_char_count,
            edits: self
                .edits
                .iter()
                .rev()
                .map(|edit| TextDeltaEdit {
                    start: edit.start,
                    deleted_text: edit.inserted_text.clone(),
                    inserted_text: edit.deleted_text.clone(),
                })
                .collect(),
        }
    }
}
