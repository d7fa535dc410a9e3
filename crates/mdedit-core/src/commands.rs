//! Command Interface Layer
//!
//! The engine functions ([`toggle_style`](crate::toggle_style),
//! [`insert_snippet`](crate::insert_snippet)) are pure: text and spans in, text and spans out.
//! [`CommandExecutor`] is the thin adapter a UI controller holds instead of wiring menu items,
//! toolbar buttons and shortcuts to a broadcast bus: it owns one buffer plus the current
//! selections, and every user action becomes a [`Command`].
//!
//! # Example
//!
//! ```rust
//! use mdedit_core::{Command, CommandExecutor, InlineStyle, TextSpan};
//!
//! let mut executor = CommandExecutor::new("Hello World");
//! executor
//!     .execute(Command::SetSpans { spans: vec![TextSpan::new(6, 11)] })
//!     .unwrap();
//! executor.execute(Command::Format(InlineStyle::Bold)).unwrap();
//!
//! assert_eq!(executor.text(), "Hello **World**");
//! assert_eq!(executor.spans(), &[TextSpan::new(6, 15)]);
//! ```

use crate::delta::TextDelta;
use crate::edit::{EditResult, SpanOutcome};
use crate::keymap::{Keymap, Shortcut, ShortcutAction};
use crate::snippets::{build_image, build_link, build_table, insert_snippet};
use crate::span::{TextSpan, normalize_spans};
use crate::templates::{self, Template};
use crate::text::char_len;
use crate::toggle::{ToggleOptions, toggle_style_with};
use mdedit_lang::InlineStyle;
use thiserror::Error;

/// Unified command enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle an inline style on every selection.
    Format(InlineStyle),
    /// Replace every selection with `[title](url)`.
    InsertLink {
        /// Link text.
        title: String,
        /// Link target.
        url: String,
    },
    /// Replace every selection with `![alt](url)`.
    InsertImage {
        /// Alt text.
        alt: String,
        /// Image location.
        url: String,
    },
    /// Replace every selection with a pipe table.
    InsertTable {
        /// Number of columns.
        columns: usize,
        /// Number of body rows (the header row is always added).
        rows: usize,
    },
    /// Typing/paste: replace every selection with `text`.
    InsertText {
        /// Text to insert at each selection/caret.
        text: String,
    },
    /// Replace the selection set. Overlapping spans are merged.
    SetSpans {
        /// New selections, in character offsets.
        spans: Vec<TextSpan>,
    },
    /// Replace the whole document with a preset template's body.
    ApplyTemplate {
        /// Preset name, matched exactly.
        name: String,
    },
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, no return value
    Success,
    /// The buffer was (possibly) edited; one outcome per selection.
    Edited {
        /// Per-selection outcomes, in selection order.
        outcomes: Vec<SpanOutcome>,
    },
    /// The action needs input only the host can collect (a link sheet, a template name...).
    HostAction(ShortcutAction),
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid span {start}..{end} (document has {len} characters)")]
    /// A span given to [`Command::SetSpans`] reaches past the end of the document.
    InvalidSpan {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
        /// Document length in characters.
        len: usize,
    },

    #[error("unknown template '{0}'")]
    /// No preset template has this name.
    UnknownTemplate(String),

    #[error("no action is bound to {0}")]
    /// The keymap has no binding for a shortcut.
    UnboundShortcut(Shortcut),

    #[error("{0} cannot be empty")]
    /// A required field of an insertion command was empty.
    EmptyField(&'static str),
}

/// Owns one document buffer and its selections, and applies [`Command`]s to them.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    text: String,
    spans: Vec<TextSpan>,
    toggle_options: ToggleOptions,
    keymap: Keymap,
    last_text_delta: Option<TextDelta>,
    command_history: Vec<Command>,
}

impl CommandExecutor {
    /// Create an executor for `text` with a caret at the end and the default keymap.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = char_len(&text);
        Self {
            text,
            spans: vec![TextSpan::caret(end)],
            toggle_options: ToggleOptions::default(),
            keymap: Keymap::default(),
            last_text_delta: None,
            command_history: Vec::new(),
        }
    }

    /// Create an executor for an empty document.
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Create an executor starting from a template's body.
    pub fn from_template(template: &Template) -> Self {
        let mut executor = Self::new(template.document.clone());
        executor.spans = vec![TextSpan::caret(0)];
        executor
    }

    /// Use `keymap` for [`CommandExecutor::execute_shortcut`].
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Use `options` for [`Command::Format`].
    pub fn with_toggle_options(mut self, options: ToggleOptions) -> Self {
        self.toggle_options = options;
        self
    }

    /// The current document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current selections, sorted by position.
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// The keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Mutable access to the keymap (for a preferences pane).
    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    /// Options used for [`Command::Format`].
    pub fn toggle_options(&self) -> ToggleOptions {
        self.toggle_options
    }

    /// Replace the options used for [`Command::Format`].
    pub fn set_toggle_options(&mut self, options: ToggleOptions) {
        self.toggle_options = options;
    }

    /// Execute a command
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        tracing::debug!(?command, "executing command");
        self.command_history.push(command.clone());
        self.last_text_delta = None;

        match command {
            Command::Format(style) => {
                let result = toggle_style_with(&self.text, &self.spans, style, self.toggle_options);
                Ok(self.apply(result))
            }
            Command::InsertLink { title, url } => {
                require("link title", &title)?;
                require("link URL", &url)?;
                Ok(self.insert(&build_link(&title, &url)))
            }
            Command::InsertImage { alt, url } => {
                require("image alt text", &alt)?;
                require("image URL", &url)?;
                Ok(self.insert(&build_image(&alt, &url)))
            }
            Command::InsertTable { columns, rows } => Ok(self.insert(&build_table(columns, rows))),
            Command::InsertText { text } => Ok(self.insert(&text)),
            Command::SetSpans { spans } => self.set_spans(spans),
            Command::ApplyTemplate { name } => {
                let template =
                    templates::find(&name).ok_or(CommandError::UnknownTemplate(name))?;
                Ok(self.replace_document(template.document))
            }
        }
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: Vec<Command>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            results.push(self.execute(command)?);
        }
        Ok(results)
    }

    /// Run whatever `shortcut` is bound to.
    ///
    /// Style toggles run directly; actions that need user input come back as
    /// [`CommandResult::HostAction`].
    pub fn execute_shortcut(&mut self, shortcut: &Shortcut) -> Result<CommandResult, CommandError> {
        let action = self
            .keymap
            .action_for(shortcut)
            .ok_or(CommandError::UnboundShortcut(*shortcut))?;

        match action {
            ShortcutAction::Format(style) => self.execute(Command::Format(style)),
            other => {
                tracing::debug!(action = %other, "shortcut handed back to host");
                Ok(CommandResult::HostAction(other))
            }
        }
    }

    /// Snapshot the current document as a user template.
    pub fn save_as_template(&self, name: &str) -> Result<Template, CommandError> {
        require("template name", name)?;
        Ok(Template::user(name, self.text.clone()))
    }

    /// The delta produced by the most recent command, if it changed the text.
    pub fn last_text_delta(&self) -> Option<&TextDelta> {
        self.last_text_delta.as_ref()
    }

    /// Take the delta produced by the most recent command.
    pub fn take_last_text_delta(&mut self) -> Option<TextDelta> {
        self.last_text_delta.take()
    }

    /// All commands executed so far, including failed ones.
    pub fn command_history(&self) -> &[Command] {
        &self.command_history
    }

    fn insert(&mut self, snippet: &str) -> CommandResult {
        let result = insert_snippet(&self.text, &self.spans, snippet);
        self.apply(result)
    }

    fn apply(&mut self, result: EditResult) -> CommandResult {
        let EditResult {
            text,
            spans,
            outcomes,
            delta,
        } = result;

        self.text = text;
        self.spans = spans;
        if !delta.is_empty() {
            self.last_text_delta = Some(delta);
        }
        CommandResult::Edited { outcomes }
    }

    fn set_spans(&mut self, spans: Vec<TextSpan>) -> Result<CommandResult, CommandError> {
        let len = char_len(&self.text);
        if let Some(bad) = spans.iter().find(|s| s.start.max(s.end) > len) {
            return Err(CommandError::InvalidSpan {
                start: bad.start,
                end: bad.end,
                len,
            });
        }
        self.spans = normalize_spans(spans);
        Ok(CommandResult::Success)
    }

    fn replace_document(&mut self, document: String) -> CommandResult {
        let whole = TextSpan::new(0, char_len(&self.text));
        let result = insert_snippet(&self.text, &[whole], &document);
        self.apply(result);
        self.spans = vec![TextSpan::caret(0)];
        CommandResult::Success
    }
}

fn require(field: &'static str, value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        Err(CommandError::EmptyField(field))
    } else {
        Ok(())
    }
}
