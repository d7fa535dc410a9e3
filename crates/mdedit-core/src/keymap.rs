//! Keyboard shortcut configuration.
//!
//! A [`Keymap`] binds [`Shortcut`]s (a key plus modifiers) to [`ShortcutAction`]s. It is plain
//! data: listening for key events belongs to the host, which looks the pressed shortcut up here
//! (or hands it to [`CommandExecutor::execute_shortcut`](crate::CommandExecutor::execute_shortcut)).
//!
//! Shortcuts round-trip through strings such as `"cmd+shift+s"`, which is also how a keymap is
//! stored as JSON:
//!
//! ```rust
//! use mdedit_core::keymap::{Keymap, Shortcut, ShortcutAction};
//! use mdedit_core::InlineStyle;
//!
//! let mut keymap = Keymap::default();
//! keymap.apply_json(r#"{ "format-bold": "ctrl+b" }"#).unwrap();
//!
//! let shortcut: Shortcut = "ctrl+b".parse().unwrap();
//! assert_eq!(keymap.action_for(&shortcut), Some(ShortcutAction::Format(InlineStyle::Bold)));
//! ```

use mdedit_lang::InlineStyle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing shortcuts or loading a keymap.
#[derive(Debug, Error)]
pub enum KeymapError {
    #[error("invalid shortcut '{input}': {reason}")]
    /// A shortcut string could not be parsed.
    InvalidShortcut {
        /// The offending input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    #[error("unknown shortcut action '{0}'")]
    /// An action name is not one of [`ShortcutAction`]'s names.
    UnknownAction(String),

    #[error("keymap JSON error: {0}")]
    /// The keymap document is not a JSON object of strings.
    Json(#[from] serde_json::Error),
}

/// Modifier keys held with a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Control.
    pub control: bool,
    /// Option / Alt.
    pub option: bool,
    /// Shift.
    pub shift: bool,
    /// Command / Super.
    pub command: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Modifiers = Modifiers {
        control: false,
        option: false,
        shift: false,
        command: false,
    };
    /// Command only.
    pub const COMMAND: Modifiers = Modifiers {
        command: true,
        ..Modifiers::NONE
    };

    /// Add Control.
    pub const fn control(mut self) -> Self {
        self.control = true;
        self
    }

    /// Add Option.
    pub const fn option(mut self) -> Self {
        self.option = true;
        self
    }

    /// Add Shift.
    pub const fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Add Command.
    pub const fn command(mut self) -> Self {
        self.command = true;
        self
    }
}

/// A key that can be part of a [`Shortcut`].
///
/// Printable keys are [`Key::Char`] (stored lowercased); everything else has a name. Building a
/// key from a `char` with [`From`] maps whitespace and control characters to their named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key.
    Char(char),
    /// Return / Enter.
    Return,
    /// Tab.
    Tab,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Delete (backspace).
    Delete,
    /// Forward delete.
    ForwardDelete,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Function key `F1`..`F20`.
    F(u8),
}

impl Key {
    /// Keys displayed by name rather than by character, function keys aside.
    pub const NAMED: [Key; 15] = [
        Key::Return,
        Key::Tab,
        Key::Space,
        Key::Escape,
        Key::Delete,
        Key::ForwardDelete,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Home,
        Key::End,
        Key::PageUp,
        Key::PageDown,
        Key::Char('+'),
    ];

    /// Highest function key number.
    pub const MAX_FUNCTION_KEY: u8 = 20;

    fn name(self) -> Option<&'static str> {
        let name = match self {
            Key::Return => "return",
            Key::Tab => "tab",
            Key::Space => "space",
            Key::Escape => "escape",
            Key::Delete => "delete",
            Key::ForwardDelete => "forward-delete",
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Home => "home",
            Key::End => "end",
            Key::PageUp => "page-up",
            Key::PageDown => "page-down",
            Key::Char('+') => "plus",
            Key::Char(_) | Key::F(_) => return None,
        };
        Some(name)
    }

    /// Parse the key component of a shortcut string. Names are case-insensitive.
    fn parse(part: &str) -> Option<Key> {
        let mut chars = part.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::from(c));
        }

        let name = part.to_lowercase();
        let named = match name.as_str() {
            "return" | "enter" => Key::Return,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "escape" | "esc" => Key::Escape,
            "delete" | "backspace" => Key::Delete,
            "forward-delete" | "forwarddelete" => Key::ForwardDelete,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "page-up" | "pageup" => Key::PageUp,
            "page-down" | "pagedown" => Key::PageDown,
            "plus" => Key::Char('+'),
            "slash" => Key::Char('/'),
            other => return Self::parse_coded(other),
        };
        Some(named)
    }

    fn parse_coded(name: &str) -> Option<Key> {
        if let Some(number) = name.strip_prefix('f')
            && let Ok(n) = number.parse::<u8>()
        {
            return (1..=Self::MAX_FUNCTION_KEY).contains(&n).then_some(Key::F(n));
        }

        // `u` + hex code point, for characters that have no printable form.
        let code = name.strip_prefix('u')?;
        if code.len() < 4 {
            return None;
        }
        let c = u32::from_str_radix(code, 16).ok().and_then(char::from_u32)?;
        Some(Key::from(c))
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            '\r' | '\n' => Key::Return,
            '\t' => Key::Tab,
            ' ' => Key::Space,
            '\u{1b}' => Key::Escape,
            '\u{8}' | '\u{7f}' => Key::Delete,
            c => Key::Char(c.to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        match *self {
            Key::F(n) => write!(f, "f{n}"),
            Key::Char(c) if c.is_control() || c.is_whitespace() => write!(f, "u{:04x}", c as u32),
            Key::Char(c) => write!(f, "{c}"),
            _ => Ok(()),
        }
    }
}

/// A key with modifiers, e.g. `cmd+b`.
///
/// Letter keys are stored lowercased; `Shift` is a modifier, not a different key. Every shortcut
/// displays as a string that parses back to the same shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Shortcut {
    key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl Shortcut {
    /// Create a shortcut. A `char` key goes through [`Key::from`].
    pub fn new(key: impl Into<Key>, modifiers: Modifiers) -> Self {
        let key = match key.into() {
            Key::Char(c) => Key::from(c),
            // Function keys outside F1..F20 have no string form.
            Key::F(n) => Key::F(n.clamp(1, Key::MAX_FUNCTION_KEY)),
            key => key,
        };
        Self { key, modifiers }
    }

    /// The key.
    pub fn key(&self) -> Key {
        self.key
    }
}

impl FromStr for Shortcut {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| KeymapError::InvalidShortcut {
            input: s.to_string(),
            reason,
        };

        let mut modifiers = Modifiers::NONE;
        let mut key: Option<Key> = None;

        for part in s.split('+').map(str::trim) {
            if part.is_empty() {
                return Err(invalid("empty component"));
            }
            match part.to_lowercase().as_str() {
                "cmd" | "command" | "super" => modifiers.command = true,
                "ctrl" | "control" => modifiers.control = true,
                "alt" | "option" | "opt" => modifiers.option = true,
                "shift" => modifiers.shift = true,
                _ => {
                    if key.is_some() {
                        return Err(invalid("more than one key"));
                    }
                    key = Some(Key::parse(part).ok_or_else(|| invalid("unknown key"))?);
                }
            }
        }

        let key = key.ok_or_else(|| invalid("missing key"))?;
        Ok(Shortcut::new(key, modifiers))
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (held, name) in [
            (m.control, "ctrl"),
            (m.option, "alt"),
            (m.shift, "shift"),
            (m.command, "cmd"),
        ] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

impl TryFrom<String> for Shortcut {
    type Error = KeymapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shortcut> for String {
    fn from(shortcut: Shortcut) -> Self {
        shortcut.to_string()
    }
}

/// Something a shortcut can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShortcutAction {
    /// Toggle an inline style on the current selections.
    Format(InlineStyle),
    /// Ask the user for a link title and URL.
    InsertLink,
    /// Ask the user for image alt text and URL.
    InsertImage,
    /// Ask the user for a name and save the document as a template.
    SaveAsTemplate,
}

impl ShortcutAction {
    /// Every action, in menu order.
    pub const ALL: [ShortcutAction; 7] = [
        ShortcutAction::SaveAsTemplate,
        ShortcutAction::Format(InlineStyle::Bold),
        ShortcutAction::Format(InlineStyle::Italic),
        ShortcutAction::Format(InlineStyle::Strikethrough),
        ShortcutAction::Format(InlineStyle::InlineCode),
        ShortcutAction::InsertImage,
        ShortcutAction::InsertLink,
    ];

    /// Stable configuration name, e.g. `format-bold`.
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Format(InlineStyle::Bold) => "format-bold",
            ShortcutAction::Format(InlineStyle::Italic) => "format-italic",
            ShortcutAction::Format(InlineStyle::Strikethrough) => "format-strikethrough",
            ShortcutAction::Format(InlineStyle::InlineCode) => "format-inline-code",
            ShortcutAction::InsertLink => "insert-link",
            ShortcutAction::InsertImage => "insert-image",
            ShortcutAction::SaveAsTemplate => "save-as-template",
        }
    }

    /// The binding a fresh keymap starts with.
    pub fn default_shortcut(self) -> Shortcut {
        let cmd = Modifiers::COMMAND;
        match self {
            ShortcutAction::SaveAsTemplate => Shortcut::new('s', Modifiers::NONE.control().shift()),
            ShortcutAction::Format(InlineStyle::Bold) => Shortcut::new('b', cmd),
            ShortcutAction::Format(InlineStyle::Italic) => Shortcut::new('i', cmd),
            ShortcutAction::Format(InlineStyle::Strikethrough) => Shortcut::new('k', cmd),
            ShortcutAction::Format(InlineStyle::InlineCode) => Shortcut::new('/', cmd),
            ShortcutAction::InsertImage => Shortcut::new('i', cmd.option()),
            ShortcutAction::InsertLink => Shortcut::new('l', cmd.option()),
        }
    }
}

impl fmt::Display for ShortcutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShortcutAction {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShortcutAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| KeymapError::UnknownAction(s.to_string()))
    }
}

/// Shortcut bindings. Each action has at most one shortcut and each shortcut at most one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: BTreeMap<ShortcutAction, Shortcut>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: ShortcutAction::ALL
                .into_iter()
                .map(|action| (action, action.default_shortcut()))
                .collect(),
        }
    }
}

impl Keymap {
    /// A keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Bind `shortcut` to `action`, dropping the action's previous shortcut and any other action
    /// that used `shortcut`.
    pub fn bind(&mut self, action: ShortcutAction, shortcut: Shortcut) {
        self.bindings.retain(|_, bound| *bound != shortcut);
        self.bindings.insert(action, shortcut);
    }

    /// Remove the binding for `action`, returning its shortcut.
    pub fn unbind(&mut self, action: ShortcutAction) -> Option<Shortcut> {
        self.bindings.remove(&action)
    }

    /// The shortcut bound to `action`.
    pub fn shortcut_for(&self, action: ShortcutAction) -> Option<Shortcut> {
        self.bindings.get(&action).copied()
    }

    /// The action bound to `shortcut`.
    pub fn action_for(&self, shortcut: &Shortcut) -> Option<ShortcutAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == shortcut)
            .map(|(action, _)| *action)
    }

    /// Iterate bindings in action order.
    pub fn iter(&self) -> impl Iterator<Item = (ShortcutAction, Shortcut)> + '_ {
        self.bindings.iter().map(|(action, shortcut)| (*action, *shortcut))
    }

    /// Build a keymap holding exactly the bindings of a `{ "action-name": "shortcut" }` object.
    pub fn from_json(json: &str) -> Result<Self, KeymapError> {
        let mut keymap = Keymap::empty();
        keymap.apply_json(json)?;
        Ok(keymap)
    }

    /// Overlay the bindings of a `{ "action-name": "shortcut" }` object onto this keymap.
    ///
    /// Nothing is changed if any entry is invalid.
    pub fn apply_json(&mut self, json: &str) -> Result<(), KeymapError> {
        let raw: BTreeMap<String, Shortcut> = serde_json::from_str(json)?;
        let parsed = raw
            .into_iter()
            .map(|(name, shortcut)| Ok((name.parse::<ShortcutAction>()?, shortcut)))
            .collect::<Result<Vec<_>, KeymapError>>()?;

        for (action, shortcut) in parsed {
            tracing::debug!(%action, %shortcut, "keymap binding loaded");
            self.bind(action, shortcut);
        }
        Ok(())
    }

    /// Serialize as a pretty `{ "action-name": "shortcut" }` object.
    pub fn to_json(&self) -> Result<String, KeymapError> {
        let raw: BTreeMap<&str, Shortcut> = self
            .bindings
            .iter()
            .map(|(action, shortcut)| (action.name(), *shortcut))
            .collect();
        Ok(serde_json::to_string_pretty(&raw)?)
    }
}
