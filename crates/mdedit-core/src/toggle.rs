//! Inline style toggling over one or more selections.
//!
//! For each span, in order of position:
//!
//! 1. If the span grown by one marker on each side is exactly one `style` marker pair (and is not
//!    itself part of a longer run of marker characters), the markers outside the selection are
//!    removed.
//! 2. Otherwise, if the selected text itself is wrapped in the markers, they are removed.
//! 3. Otherwise the selection is wrapped.
//!
//! The resulting span always covers the replacement text, so toggling twice with the returned
//! spans restores the original buffer.
//!
//! A caret (empty span) either inserts an empty marker pair and lands between the markers, or,
//! when it already sits inside an empty pair, removes that pair.

use crate::edit::{EditResult, SpanContext, SpanOutcome, SpanPlan, apply_per_span};
use crate::span::TextSpan;
use crate::syntax::{unwrap, wrap};
use crate::text::char_len;
use mdedit_lang::InlineStyle;

/// What toggling does at a caret (empty selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySelectionBehavior {
    /// Insert an empty marker pair and put the caret between the markers.
    #[default]
    InsertMarkers,
    /// Leave the buffer untouched.
    Ignore,
}

/// Toggle engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleOptions {
    /// Behaviour for carets that are not inside an empty marker pair.
    pub empty_selection: EmptySelectionBehavior,
}

/// Toggle `style` on every span of `text` using [`ToggleOptions::default`].
///
/// ```rust
/// use mdedit_core::{InlineStyle, TextSpan, toggle_style};
///
/// let result = toggle_style("Hello World", &[TextSpan::new(6, 11)], InlineStyle::Bold);
/// assert_eq!(result.text, "Hello **World**");
/// assert_eq!(result.spans, vec![TextSpan::new(6, 15)]);
///
/// let back = toggle_style(&result.text, &result.spans, InlineStyle::Bold);
/// assert_eq!(back.text, "Hello World");
/// ```
pub fn toggle_style(text: &str, spans: &[TextSpan], style: InlineStyle) -> EditResult {
    toggle_style_with(text, spans, style, ToggleOptions::default())
}

/// Toggle `style` on every span of `text`.
///
/// Spans must not overlap. Output spans are returned in input order.
pub fn toggle_style_with(
    text: &str,
    spans: &[TextSpan],
    style: InlineStyle,
    options: ToggleOptions,
) -> EditResult {
    apply_per_span(text, spans, |ctx| plan_toggle(ctx, style, options))
}

fn plan_toggle(ctx: &SpanContext<'_>, style: InlineStyle, options: ToggleOptions) -> SpanPlan {
    let span = ctx.span;
    if span.is_empty() {
        return plan_caret(ctx, style, options);
    }

    let marker_len = style.marker_len();
    let char_count = ctx.char_count();

    if span.start >= ctx.floor + marker_len && span.end + marker_len <= char_count {
        let expanded = TextSpan::new(span.start - marker_len, span.end + marker_len);
        if is_isolated(ctx, expanded, style) {
            let expanded_text = ctx.slice(expanded);
            if let Some(content) = unwrap(expanded_text, style) {
                return unwrap_plan(expanded, content);
            }
        }
    }

    let selected = ctx.slice(span);
    if let Some(content) = unwrap(selected, style) {
        return unwrap_plan(span, content);
    }

    let wrapped = wrap(selected, style);
    let wrapped_len = char_len(&wrapped);
    SpanPlan {
        replace: Some((span, wrapped)),
        selection: TextSpan::new(span.start, span.start + wrapped_len),
        outcome: SpanOutcome::Wrapped,
    }
}

fn plan_caret(ctx: &SpanContext<'_>, style: InlineStyle, options: ToggleOptions) -> SpanPlan {
    let caret = ctx.span.start;
    let marker_len = style.marker_len();

    if caret >= ctx.floor + marker_len && caret + marker_len <= ctx.char_count() {
        let pair = TextSpan::new(caret - marker_len, caret + marker_len);
        let pair_text = ctx.slice(pair);
        if pair_text == wrap("", style) && is_isolated(ctx, pair, style) {
            return SpanPlan {
                replace: Some((pair, String::new())),
                selection: TextSpan::caret(pair.start),
                outcome: SpanOutcome::Unwrapped,
            };
        }
    }

    match options.empty_selection {
        EmptySelectionBehavior::InsertMarkers => SpanPlan {
            replace: Some((ctx.span, wrap("", style))),
            selection: TextSpan::caret(caret + marker_len),
            outcome: SpanOutcome::Wrapped,
        },
        EmptySelectionBehavior::Ignore => {
            tracing::trace!(caret, %style, "empty selection ignored");
            SpanPlan::unchanged(ctx.span)
        }
    }
}

/// `true` if the characters just outside `span` are not the style's marker character.
fn is_isolated(ctx: &SpanContext<'_>, span: TextSpan, style: InlineStyle) -> bool {
    let marker_char = style.marker_char();
    let before = span
        .start
        .checked_sub(1)
        .and_then(|offset| ctx.char_at(offset));
    let after = ctx.char_at(span.end);
    before != Some(marker_char) && after != Some(marker_char)
}

fn unwrap_plan(range: TextSpan, content: &str) -> SpanPlan {
    let content_len = char_len(content);
    SpanPlan {
        replace: Some((range, content.to_string())),
        selection: TextSpan::new(range.start, range.start + content_len),
        outcome: SpanOutcome::Unwrapped,
    }
}
