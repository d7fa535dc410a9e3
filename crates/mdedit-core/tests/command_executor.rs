use mdedit_core::templates::{self, TemplateCategory};
use mdedit_core::{
    Command, CommandError, CommandExecutor, CommandResult, EmptySelectionBehavior, InlineStyle,
    Keymap, Shortcut, ShortcutAction, SpanOutcome, TextSpan, ToggleOptions,
};
use pretty_assertions::assert_eq;

fn shortcut(s: &str) -> Shortcut {
    s.parse().unwrap()
}

#[test]
fn test_new_executor_has_caret_at_end() {
    let ex = CommandExecutor::new("héllo");
    assert_eq!(ex.text(), "héllo");
    assert_eq!(ex.spans(), &[TextSpan::caret(5)]);
    assert!(ex.last_text_delta().is_none());

    let ex = CommandExecutor::empty();
    assert_eq!(ex.spans(), &[TextSpan::caret(0)]);
}

#[test]
fn test_toolbar_toggle_round_trip() {
    let mut ex = CommandExecutor::new("Hello World");
    ex.execute(Command::SetSpans {
        spans: vec![TextSpan::new(6, 11)],
    })
    .unwrap();

    ex.execute(Command::Format(InlineStyle::Bold)).unwrap();
    assert_eq!(ex.text(), "Hello **World**");
    assert_eq!(ex.spans(), &[TextSpan::new(6, 15)]);

    ex.execute(Command::Format(InlineStyle::Bold)).unwrap();
    assert_eq!(ex.text(), "Hello World");
    assert_eq!(ex.spans(), &[TextSpan::new(6, 11)]);
}

#[test]
fn test_set_spans_merges_overlaps() {
    let mut ex = CommandExecutor::new("0123456789");
    ex.execute(Command::SetSpans {
        spans: vec![TextSpan::new(6, 8), TextSpan::new(0, 3), TextSpan::new(2, 4)],
    })
    .unwrap();
    assert_eq!(ex.spans(), &[TextSpan::new(0, 4), TextSpan::new(6, 8)]);

    ex.execute(Command::Format(InlineStyle::InlineCode)).unwrap();
    assert_eq!(ex.text(), "`0123`45`67`89");
}

#[test]
fn test_typing_at_multiple_carets() {
    let mut ex = CommandExecutor::new("a\nb\nc");
    ex.execute(Command::SetSpans {
        spans: vec![TextSpan::caret(0), TextSpan::caret(2), TextSpan::caret(4)],
    })
    .unwrap();

    ex.execute(Command::InsertText {
        text: "- ".to_string(),
    })
    .unwrap();
    assert_eq!(ex.text(), "- a\n- b\n- c");
    assert_eq!(
        ex.spans(),
        &[TextSpan::caret(2), TextSpan::caret(6), TextSpan::caret(10)]
    );

    let delta = ex.take_last_text_delta().unwrap();
    assert_eq!(delta.edits.len(), 3);
    assert_eq!(delta.inverted().apply_to(ex.text()), "a\nb\nc");
    assert!(ex.last_text_delta().is_none());
}

#[test]
fn test_insert_table_and_image() {
    let mut ex = CommandExecutor::empty();
    let results = ex
        .execute_batch(vec![
            Command::InsertTable {
                columns: 2,
                rows: 1,
            },
            Command::InsertText {
                text: "\n".to_string(),
            },
            Command::InsertImage {
                alt: "chart".to_string(),
                url: "chart.png".to_string(),
            },
        ])
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(
        ex.text(),
        "| Header | Header |\n| --- | --- |\n| Cell | Cell |\n\n![chart](chart.png)"
    );
    assert_eq!(ex.spans(), &[TextSpan::caret(ex.text().chars().count())]);
}

#[test]
fn test_batch_stops_at_first_error() {
    let mut ex = CommandExecutor::new("abc");
    let err = ex
        .execute_batch(vec![
            Command::InsertText {
                text: "!".to_string(),
            },
            Command::InsertImage {
                alt: String::new(),
                url: "a.png".to_string(),
            },
            Command::InsertText {
                text: "?".to_string(),
            },
        ])
        .unwrap_err();

    assert_eq!(err, CommandError::EmptyField("image alt text"));
    assert_eq!(ex.text(), "abc!");
    assert_eq!(ex.command_history().len(), 2);
}

#[test]
fn test_format_shortcut_runs_directly() {
    let mut ex = CommandExecutor::new("x");
    ex.execute(Command::SetSpans {
        spans: vec![TextSpan::new(0, 1)],
    })
    .unwrap();

    let result = ex.execute_shortcut(&shortcut("cmd+k")).unwrap();
    assert_eq!(
        result,
        CommandResult::Edited {
            outcomes: vec![SpanOutcome::Wrapped]
        }
    );
    assert_eq!(ex.text(), "~~x~~");
    assert_eq!(
        ex.command_history(),
        &[
            Command::SetSpans {
                spans: vec![TextSpan::new(0, 1)]
            },
            Command::Format(InlineStyle::Strikethrough),
        ]
    );
}

#[test]
fn test_dialog_shortcuts_are_handed_to_host() {
    let mut ex = CommandExecutor::new("x");
    assert_eq!(
        ex.execute_shortcut(&shortcut("alt+cmd+i")).unwrap(),
        CommandResult::HostAction(ShortcutAction::InsertImage)
    );
    assert_eq!(
        ex.execute_shortcut(&shortcut("ctrl+shift+s")).unwrap(),
        CommandResult::HostAction(ShortcutAction::SaveAsTemplate)
    );
    assert_eq!(ex.text(), "x");

    let unbound = shortcut("cmd+q");
    assert_eq!(
        ex.execute_shortcut(&unbound),
        Err(CommandError::UnboundShortcut(unbound))
    );
}

#[test]
fn test_custom_keymap_and_options() {
    let keymap = Keymap::from_json(r#"{ "format-italic": "ctrl+e" }"#).unwrap();
    let mut ex = CommandExecutor::new("ab")
        .with_keymap(keymap)
        .with_toggle_options(ToggleOptions {
            empty_selection: EmptySelectionBehavior::Ignore,
        });

    assert!(matches!(
        ex.execute_shortcut(&shortcut("cmd+i")),
        Err(CommandError::UnboundShortcut(_))
    ));

    let result = ex.execute_shortcut(&shortcut("ctrl+e")).unwrap();
    assert_eq!(
        result,
        CommandResult::Edited {
            outcomes: vec![SpanOutcome::Unchanged]
        }
    );
    assert_eq!(ex.text(), "ab");

    ex.set_toggle_options(ToggleOptions::default());
    ex.keymap_mut()
        .bind(ShortcutAction::Format(InlineStyle::Italic), shortcut("cmd+i"));
    ex.execute_shortcut(&shortcut("cmd+i")).unwrap();
    assert_eq!(ex.text(), "ab**");
    assert_eq!(ex.spans(), &[TextSpan::caret(3)]);
}

#[test]
fn test_templates_flow() {
    let mut ex = CommandExecutor::new("draft");
    ex.execute(Command::ApplyTemplate {
        name: "Blog Post".to_string(),
    })
    .unwrap();
    assert!(ex.text().starts_with("# Title\n\n## Subtitle"));
    assert_eq!(ex.spans(), &[TextSpan::caret(0)]);

    let saved = ex.save_as_template("My Post").unwrap();
    assert_eq!(saved.category, TemplateCategory::User);
    assert_eq!(saved.document, ex.text());

    let from_saved = CommandExecutor::from_template(&saved);
    assert_eq!(from_saved.text(), ex.text());

    let empty = templates::find("Empty").unwrap();
    ex.execute(Command::ApplyTemplate { name: empty.name }).unwrap();
    assert_eq!(ex.text(), "");
}

#[test]
fn test_invalid_span_error_message() {
    let mut ex = CommandExecutor::new("ab");
    let err = ex
        .execute(Command::SetSpans {
            spans: vec![TextSpan::caret(3)],
        })
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid span 3..3 (document has 2 characters)"
    );
}
