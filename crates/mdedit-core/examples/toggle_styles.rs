use mdedit_core::{InlineStyle, TextSpan, build_table, insert_snippet, toggle_style};

fn main() {
    let text = "one two three";
    let spans = [TextSpan::new(0, 3), TextSpan::new(8, 13)];

    for style in InlineStyle::ALL {
        let on = toggle_style(text, &spans, style);
        let off = toggle_style(&on.text, &on.spans, style);
        assert_eq!(off.text, text);
        println!("{style:>14}: {}", on.text);
    }

    // Caret-only toggle inserts an empty pair and lands between the markers.
    let caret = toggle_style("ab", &[TextSpan::caret(1)], InlineStyle::InlineCode);
    assert_eq!(caret.text, "a``b");
    assert_eq!(caret.spans, vec![TextSpan::caret(2)]);

    let table = insert_snippet("", &[TextSpan::caret(0)], &build_table(3, 2));
    print!("\n{}", table.text);
}
