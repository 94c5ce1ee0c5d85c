//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use town_core::{Act, Direction};

/// Which key map applies to the next key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Build,
    Play,
    /// A dialogue line is being typed; almost every key is text.
    Editing,
}

/// Keys that drive the inline dialogue editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Insert(char),
    Backspace,
    Commit,
    Cancel,
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    ToggleMode,
    /// Walk the player (play mode).
    Move(Direction),
    /// Palette selection by catalog index.
    SelectType(u8),
    TogglePlacingPlayer,
    ClearAct,
    NextAct,
    SwitchAct(Act),
    RosterUp,
    RosterDown,
    RemoveSelected,
    RandomizeSelected,
    EditSelected,
    Export,
    Import,
    /// Move the keyboard placement cursor on the map (build mode).
    MoveCursor(Direction),
    PlaceAtCursor,
    Edit(EditKey),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into editor commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: InputMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return KeyAction::Quit;
        }

        match mode {
            InputMode::Editing => self.handle_editing(key),
            InputMode::Play => self.handle_play(key),
            InputMode::Build => self.handle_build(key),
        }
    }

    fn handle_play(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Tab => KeyAction::NextAct,
            KeyCode::F(n) => Self::act_key(n),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(raw) => match raw.to_ascii_lowercase() {
                'w' => KeyAction::Move(Direction::Up),
                's' => KeyAction::Move(Direction::Down),
                'a' => KeyAction::Move(Direction::Left),
                'd' => KeyAction::Move(Direction::Right),
                'm' => KeyAction::ToggleMode,
                'q' => KeyAction::Quit,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn handle_build(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Up => KeyAction::MoveCursor(Direction::Up),
            KeyCode::Down => KeyAction::MoveCursor(Direction::Down),
            KeyCode::Left => KeyAction::MoveCursor(Direction::Left),
            KeyCode::Right => KeyAction::MoveCursor(Direction::Right),
            KeyCode::Tab => KeyAction::NextAct,
            KeyCode::F(n) => Self::act_key(n),
            KeyCode::Delete => KeyAction::RemoveSelected,
            KeyCode::Enter => KeyAction::EditSelected,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(raw) => self.handle_build_char(raw),
            _ => KeyAction::None,
        }
    }

    fn act_key(n: u8) -> KeyAction {
        Act::from_number(n)
            .map(KeyAction::SwitchAct)
            .unwrap_or(KeyAction::None)
    }

    fn handle_build_char(&self, raw: char) -> KeyAction {
        if let Some(digit) = raw.to_digit(10).filter(|d| (1..=9).contains(d)) {
            return KeyAction::SelectType(digit as u8 - 1);
        }

        match raw.to_ascii_lowercase() {
            'p' => KeyAction::TogglePlacingPlayer,
            'c' => KeyAction::ClearAct,
            'j' => KeyAction::RosterDown,
            'k' => KeyAction::RosterUp,
            'x' => KeyAction::RemoveSelected,
            'r' => KeyAction::RandomizeSelected,
            'e' => KeyAction::Export,
            'i' => KeyAction::Import,
            'm' => KeyAction::ToggleMode,
            'q' => KeyAction::Quit,
            ' ' => KeyAction::PlaceAtCursor,
            _ => KeyAction::None,
        }
    }

    fn handle_editing(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::Edit(EditKey::Commit),
            KeyCode::Esc => KeyAction::Edit(EditKey::Cancel),
            KeyCode::Backspace => KeyAction::Edit(EditKey::Backspace),
            KeyCode::Char(ch) => KeyAction::Edit(EditKey::Insert(ch)),
            _ => KeyAction::None,
        }
    }
}
