use mdedit_core::syntax::{contains_formatting, find_formatted, is_formatted, wrap};
use mdedit_core::{
    EmptySelectionBehavior, InlineStyle, SpanOutcome, TextSpan, ToggleOptions, toggle_style,
    toggle_style_with,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_wrap_then_unwrap_round_trips_for_every_style() {
    for style in InlineStyle::ALL {
        let wrapped = toggle_style("Hello World", &[TextSpan::new(6, 11)], style);
        assert_eq!(wrapped.text, format!("Hello {}", wrap("World", style)));
        assert!(is_formatted(&wrapped.text[6..], style));

        let restored = toggle_style(&wrapped.text, &wrapped.spans, style);
        assert_eq!(restored.text, "Hello World", "{style}");
        assert_eq!(restored.spans, vec![TextSpan::new(6, 11)], "{style}");
    }
}

#[test]
fn test_unwrap_then_wrap_round_trips_for_every_style() {
    for style in InlineStyle::ALL {
        let marker_len = style.marker_len();
        let text = format!("say {} now", wrap("hi", style));
        let inner = TextSpan::new(4 + marker_len, 6 + marker_len);

        let unwrapped = toggle_style(&text, &[inner], style);
        assert_eq!(unwrapped.text, "say hi now", "{style}");
        assert_eq!(unwrapped.outcomes, vec![SpanOutcome::Unwrapped]);

        let rewrapped = toggle_style(&unwrapped.text, &unwrapped.spans, style);
        assert_eq!(rewrapped.text, text, "{style}");
    }
}

#[test]
fn test_hello_world_bold_scenario() {
    let result = toggle_style("Hello World", &[TextSpan::new(6, 11)], InlineStyle::Bold);
    assert_eq!(result.text, "Hello **World**");
    // The new span covers the whole replacement "**World**".
    assert_eq!(result.spans, vec![TextSpan::new(6, 15)]);
    assert_eq!(result.delta.edits.len(), 1);
    assert_eq!(result.delta.edits[0].start, 6);
    assert_eq!(result.delta.edits[0].deleted_text, "World");
    assert_eq!(result.delta.edits[0].inserted_text, "**World**");
}

#[test]
fn test_markers_outside_selection_scenario() {
    let result = toggle_style("**World**", &[TextSpan::new(2, 7)], InlineStyle::Bold);
    assert_eq!(result.text, "World");
    assert_eq!(result.spans, vec![TextSpan::new(0, 5)]);
    assert_eq!(result.delta.edits[0].deleted_text, "**World**");
}

#[test]
fn test_bold_is_never_detected_as_italic() {
    assert!(is_formatted("*Hello*", InlineStyle::Italic));
    assert!(!is_formatted("**Hello**", InlineStyle::Italic));
    assert!(!is_formatted("***Hello***", InlineStyle::Bold));
    assert!(!is_formatted("***Hello***", InlineStyle::Italic));

    // Italic toggled on the inside of a bold span adds a marker instead of eating one.
    let result = toggle_style("a **b** c", &[TextSpan::new(4, 5)], InlineStyle::Italic);
    assert_eq!(result.text, "a ***b*** c");
}

#[test]
fn test_marker_runs_are_wrapped_not_unwrapped() {
    // The pair around the selection touches a third '*', so it is not taken as the bold markers.
    let on = toggle_style("***World**", &[TextSpan::new(3, 8)], InlineStyle::Bold);
    assert_eq!(on.text, "*****World****");
    assert_eq!(on.spans, vec![TextSpan::new(3, 12)]);

    let off = toggle_style(&on.text, &on.spans, InlineStyle::Bold);
    assert_eq!(off.text, "***World**");
    assert_eq!(off.spans, vec![TextSpan::new(3, 8)]);
}

#[test]
fn test_contains_formatting_anywhere_in_text() {
    assert!(contains_formatting("plain then `code` here"));
    assert!(contains_formatting("an __underscore__ bold"));
    assert!(contains_formatting("~~gone~~"));
    assert!(!contains_formatting("no markers at all"));
    assert!(!contains_formatting("a ** b"));
    assert!(!contains_formatting("``"));

    assert_eq!(
        find_formatted("**a** and **b**", InlineStyle::Bold),
        vec![TextSpan::new(0, 5), TextSpan::new(10, 15)]
    );
}

#[test]
fn test_multiple_spans_shift_later_offsets() {
    let text = "alpha beta gamma";
    let spans = [
        TextSpan::new(11, 16),
        TextSpan::new(0, 5),
        TextSpan::new(6, 10),
    ];

    let result = toggle_style(text, &spans, InlineStyle::Bold);
    assert_eq!(result.text, "**alpha** **beta** **gamma**");
    // Input order is preserved.
    assert_eq!(
        result.spans,
        vec![
            TextSpan::new(19, 28),
            TextSpan::new(0, 9),
            TextSpan::new(10, 18),
        ]
    );
    assert_eq!(result.delta.apply_to(text), result.text);
    assert_eq!(result.delta.inverted().apply_to(&result.text), text);

    let restored = toggle_style(&result.text, &result.spans, InlineStyle::Bold);
    assert_eq!(restored.text, text);
    assert_eq!(restored.spans, spans.to_vec());
}

#[test]
fn test_mixed_outcomes_in_one_call() {
    let result = toggle_style(
        "**one** two",
        &[TextSpan::new(2, 5), TextSpan::new(8, 11)],
        InlineStyle::Bold,
    );
    assert_eq!(result.text, "one **two**");
    assert_eq!(result.spans, vec![TextSpan::new(0, 3), TextSpan::new(4, 11)]);
    assert_eq!(
        result.outcomes,
        vec![SpanOutcome::Unwrapped, SpanOutcome::Wrapped]
    );
}

#[test]
fn test_caret_between_markers() {
    let result = toggle_style("ab", &[TextSpan::caret(2)], InlineStyle::Strikethrough);
    assert_eq!(result.text, "ab~~~~");
    assert_eq!(result.spans, vec![TextSpan::caret(4)]);

    let ignored = toggle_style_with(
        "ab",
        &[TextSpan::caret(2)],
        InlineStyle::Strikethrough,
        ToggleOptions {
            empty_selection: EmptySelectionBehavior::Ignore,
        },
    );
    assert_eq!(ignored.text, "ab");
    assert!(!ignored.is_modified());
}

#[test]
fn test_out_of_range_spans_do_not_fail_the_batch() {
    let result = toggle_style(
        "abc",
        &[TextSpan::new(0, 1), TextSpan::new(2, 99), TextSpan::new(50, 60)],
        InlineStyle::InlineCode,
    );
    assert_eq!(result.text, "`a`b`c`");
    assert_eq!(
        result.outcomes,
        vec![
            SpanOutcome::Wrapped,
            SpanOutcome::Wrapped,
            SpanOutcome::Skipped
        ]
    );
    assert_eq!(result.spans[2], TextSpan::caret(7));
}

#[test]
fn test_utf16_offsets_from_host() {
    let text = "😀 smile";
    let span = TextSpan::from_utf16(text, 3, 8);
    assert_eq!(span, TextSpan::new(2, 7));

    let result = toggle_style(text, &[span], InlineStyle::Italic);
    assert_eq!(result.text, "😀 *smile*");
    assert_eq!(result.spans[0].to_utf16(&result.text), (3, 10));
}

#[test]
fn test_random_word_selections_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x6d64);

    for _ in 0..200 {
        let word_count = rng.gen_range(1..12);
        let mut text = String::new();
        let mut spans = Vec::new();
        for i in 0..word_count {
            if i > 0 {
                text.push(' ');
            }
            let start = text.chars().count();
            for _ in 0..rng.gen_range(1..6) {
                text.push(rng.gen_range(b'a'..=b'z') as char);
            }
            if rng.gen_bool(0.5) {
                spans.push(TextSpan::new(start, text.chars().count()));
            }
        }

        for style in InlineStyle::ALL {
            let on = toggle_style(&text, &spans, style);
            assert!(on.outcomes.iter().all(|o| *o == SpanOutcome::Wrapped));

            let off = toggle_style(&on.text, &on.spans, style);
            assert_eq!(off.text, text, "{style} on {spans:?}");
            assert_eq!(off.spans, spans);
        }
    }
}
