//! Link, image and table snippets, and splicing a snippet into every selection.
//!
//! Unlike style toggling, inserting a snippet discards the selected text.

use crate::edit::{EditResult, SpanOutcome, SpanPlan, apply_per_span};
use crate::span::TextSpan;
use crate::text::char_len;

/// Placeholder text for table header cells.
pub const TABLE_HEADER_CELL: &str = "Header";
/// Placeholder text for table body cells.
pub const TABLE_BODY_CELL: &str = "Cell";

/// `[title](url)`
pub fn build_link(title: &str, url: &str) -> String {
    format!("[{title}]({url})")
}

/// `![alt](url)`
pub fn build_image(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

/// A pipe table with one header row, one separator row and `rows` body rows.
///
/// Every row is newline-terminated:
///
/// ```rust
/// use mdedit_core::snippets::build_table;
///
/// assert_eq!(
///     build_table(2, 1),
///     "| Header | Header |\n| --- | --- |\n| Cell | Cell |\n"
/// );
/// ```
///
/// `rows` counts body rows only; the header row is always present.
pub fn build_table(columns: usize, rows: usize) -> String {
    let mut table = String::new();
    push_row(&mut table, columns, TABLE_HEADER_CELL);
    push_row(&mut table, columns, "---");
    for _ in 0..rows {
        push_row(&mut table, columns, TABLE_BODY_CELL);
    }
    table
}

fn push_row(out: &mut String, columns: usize, cell: &str) {
    for _ in 0..columns {
        out.push_str("| ");
        out.push_str(cell);
        out.push(' ');
    }
    out.push_str("|\n");
}

/// Replace every span with `snippet`; each resulting span is a caret right after its snippet.
pub fn insert_snippet(text: &str, spans: &[TextSpan], snippet: &str) -> EditResult {
    let snippet_len = char_len(snippet);
    apply_per_span(text, spans, |ctx| {
        if ctx.span.is_empty() && snippet.is_empty() {
            return SpanPlan::unchanged(ctx.span);
        }
        SpanPlan {
            replace: Some((ctx.span, snippet.to_string())),
            selection: TextSpan::caret(ctx.span.start + snippet_len),
            outcome: SpanOutcome::Inserted,
        }
    })
}
