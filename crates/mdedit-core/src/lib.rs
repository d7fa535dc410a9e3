#![warn(missing_docs)]
//! mdedit Core - Headless Markdown Editing Engine
//!
//! # Overview
//!
//! `mdedit-core` implements the editing operations of a Markdown editor without any UI: it
//! takes a text buffer plus a set of selections and returns the new buffer plus the new
//! selections. A host (a text view, a TUI, a web editor) feeds it snapshots and writes the
//! results back.
//!
//! # Core Features
//!
//! - **Inline style toggling**: bold, italic, strikethrough and inline code, on any number of
//!   selections at once, with exact round-trips
//! - **Snippet insertion**: links, images and pipe tables spliced into every selection
//! - **Syntax recognition**: detection of marker-delimited spans for each style
//! - **Command dispatch**: a single [`Command`] enum in place of menu/toolbar/shortcut plumbing
//! - **Shortcuts and templates**: a rebindable [`Keymap`] and built-in document [`Template`]s
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface (CommandExecutor)        │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Keymap & Templates                         │  ← Host integration
//! ├─────────────────────────────────────────────┤
//! │  Toggle Engine & Snippets                   │  ← Edit planning
//! ├─────────────────────────────────────────────┤
//! │  Multi-span edit application (TextDelta)    │  ← Offset bookkeeping
//! ├─────────────────────────────────────────────┤
//! │  Syntax recognition (regex)                 │  ← Marker detection
//! ├─────────────────────────────────────────────┤
//! │  Spans & character offsets                  │  ← Coordinates
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Using the engine directly
//!
//! ```rust
//! use mdedit_core::{InlineStyle, TextSpan, toggle_style};
//!
//! let result = toggle_style(
//!     "one two",
//!     &[TextSpan::new(0, 3), TextSpan::new(4, 7)],
//!     InlineStyle::Italic,
//! );
//! assert_eq!(result.text, "*one* *two*");
//! assert_eq!(result.spans, vec![TextSpan::new(0, 5), TextSpan::new(6, 11)]);
//! ```
//!
//! ## Using Command Interface
//!
//! ```rust
//! use mdedit_core::{Command, CommandExecutor, CommandResult, InlineStyle, TextSpan};
//! use mdedit_core::keymap::{ShortcutAction, Shortcut};
//!
//! let mut executor = CommandExecutor::new("see docs");
//! executor
//!     .execute(Command::SetSpans { spans: vec![TextSpan::new(4, 8)] })
//!     .unwrap();
//! executor
//!     .execute(Command::InsertLink {
//!         title: "docs".to_string(),
//!         url: "https://docs.rs".to_string(),
//!     })
//!     .unwrap();
//! assert_eq!(executor.text(), "see [docs](https://docs.rs)");
//!
//! let shortcut: Shortcut = "alt+cmd+l".parse().unwrap();
//! assert_eq!(
//!     executor.execute_shortcut(&shortcut).unwrap(),
//!     CommandResult::HostAction(ShortcutAction::InsertLink)
//! );
//! ```
//!
//! # Module Description
//!
//! - [`span`] - Selection spans in character offsets
//! - [`text`] - Character/byte/UTF-16 offset conversion
//! - [`syntax`] - Marker recognition and wrapping
//! - [`toggle`] - Inline style toggling
//! - [`snippets`] - Link, image and table snippets
//! - [`edit`] - Multi-span edit application
//! - [`delta`] - Structured text change records
//! - [`commands`] - Unified command interface
//! - [`keymap`] - Keyboard shortcut bindings
//! - [`templates`] - Built-in document templates
//!
//! # Unicode Support
//!
//! - All offsets count Unicode scalar values (`char`s), never bytes
//! - [`TextSpan::from_utf16`] / [`TextSpan::to_utf16`] convert to and from UTF-16 code units
//!   for hosts whose text widgets use them

pub mod commands;
pub mod delta;
pub mod edit;
pub mod keymap;
pub mod snippets;
pub mod span;
pub mod syntax;
pub mod templates;
pub mod text;
pub mod toggle;

pub use commands::{Command, CommandError, CommandExecutor, CommandResult};
pub use delta::{TextDelta, TextDeltaEdit};
pub use edit::{EditResult, SpanOutcome};
pub use keymap::{Key, Keymap, KeymapError, Modifiers, Shortcut, ShortcutAction};
pub use mdedit_lang::InlineStyle;
pub use snippets::{build_image, build_link, build_table, insert_snippet};
pub use span::{TextSpan, normalize_spans};
pub use templates::{Template, TemplateCategory};
pub use toggle::{EmptySelectionBehavior, ToggleOptions, toggle_style, toggle_style_with};
