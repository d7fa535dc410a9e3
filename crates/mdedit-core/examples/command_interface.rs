//! Command interface example
//!
//! Demonstrates how a UI controller drives the engine through `CommandExecutor`.

use mdedit_core::{Command, CommandExecutor, CommandResult, InlineStyle, Shortcut, TextSpan};

fn main() {
    println!("=== mdedit command interface ===\n");

    let mut executor = CommandExecutor::new("Hello World, hello Markdown");
    println!("Initial text: '{}'\n", executor.text());

    // 1. Select two words and make them bold.
    println!("1. Toolbar: bold");
    executor
        .execute(Command::SetSpans {
            spans: vec![TextSpan::new(6, 11), TextSpan::new(19, 27)],
        })
        .unwrap();
    executor.execute(Command::Format(InlineStyle::Bold)).unwrap();
    println!("  text:  '{}'", executor.text());
    println!("  spans: {:?}\n", executor.spans());

    // 2. The same shortcut toggles the style back off.
    println!("2. Shortcut: cmd+b");
    let cmd_b: Shortcut = "cmd+b".parse().unwrap();
    executor.execute_shortcut(&cmd_b).unwrap();
    println!("  text:  '{}'\n", executor.text());

    // 3. Shortcuts that need a dialog are handed back to the host.
    println!("3. Shortcut: alt+cmd+l");
    let link_shortcut: Shortcut = "alt+cmd+l".parse().unwrap();
    if let CommandResult::HostAction(action) = executor.execute_shortcut(&link_shortcut).unwrap() {
        println!("  host must show the '{action}' dialog");
        executor
            .execute(Command::InsertLink {
                title: "Markdown Guide".to_string(),
                url: "https://www.markdownguide.org".to_string(),
            })
            .unwrap();
    }
    println!("  text:  '{}'\n", executor.text());

    // 4. Every edit is available as a delta for the host's undo stack.
    println!("4. Undo through the last delta");
    if let Some(delta) = executor.take_last_text_delta() {
        let undone = delta.inverted().apply_to(executor.text());
        println!("  undone text: '{undone}'");
    }

    println!("\nCommands executed: {}", executor.command_history().len());
}
