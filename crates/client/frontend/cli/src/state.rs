//! Application state for terminal-only UI context.
//!
//! Everything here is presentation state: the editor itself lives in
//! `town_core::Editor` and is never duplicated.

use ratatui::layout::Rect;
use town_core::{Direction, EntityId, GridDimensions, Mode, Position};

use crate::input::InputMode;
use crate::presentation::widgets::map::MapSurface;

/// Top-level application mode determining input handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Inline dialogue editor open on a roster entry.
    EditingDialogue(DialogueEdit),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueEdit {
    pub id: EntityId,
    pub buffer: String,
}

/// Mutable UI state tracking cursors, edit buffers and the last layout.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Highlighted roster row.
    pub roster_cursor: usize,
    /// Keyboard placement cursor on the map.
    pub map_cursor: Position,
    /// Map panel from the last frame; clicks inside it go to the editor.
    pub map_panel: Option<Rect>,
    /// Drawn grid inside the map panel from the last frame.
    pub map_surface: Option<MapSurface>,
    /// File reads started but not yet applied.
    pub pending_imports: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Normal,
            roster_cursor: 0,
            map_cursor: Position::ORIGIN,
            map_panel: None,
            map_surface: None,
            pending_imports: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_mode(&self, editor_mode: Mode) -> InputMode {
        match (&self.mode, editor_mode) {
            (AppMode::EditingDialogue(_), _) => InputMode::Editing,
            (AppMode::Normal, Mode::Build) => InputMode::Build,
            (AppMode::Normal, Mode::Play) => InputMode::Play,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, AppMode::EditingDialogue(_))
    }

    pub fn editing(&self) -> Option<&DialogueEdit> {
        match &self.mode {
            AppMode::EditingDialogue(edit) => Some(edit),
            AppMode::Normal => None,
        }
    }

    pub fn begin_edit(&mut self, id: EntityId, text: impl Into<String>) {
        self.mode = AppMode::EditingDialogue(DialogueEdit {
            id,
            buffer: text.into(),
        });
    }

    pub fn push_char(&mut self, ch: char) {
        if let AppMode::EditingDialogue(edit) = &mut self.mode {
            edit.buffer.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if let AppMode::EditingDialogue(edit) = &mut self.mode {
            edit.buffer.pop();
        }
    }

    /// Closes the editor, returning what was typed.
    pub fn finish_edit(&mut self) -> Option<DialogueEdit> {
        match std::mem::replace(&mut self.mode, AppMode::Normal) {
            AppMode::EditingDialogue(edit) => Some(edit),
            AppMode::Normal => None,
        }
    }

    pub fn roster_down(&mut self, len: usize) {
        if len > 0 {
            self.roster_cursor = (self.roster_cursor + 1).min(len - 1);
        }
    }

    pub fn roster_up(&mut self) {
        self.roster_cursor = self.roster_cursor.saturating_sub(1);
    }

    /// Keeps the roster cursor on a valid row after the roster shrinks.
    pub fn clamp_roster(&mut self, len: usize) {
        self.roster_cursor = self.roster_cursor.min(len.saturating_sub(1));
    }

    pub fn move_map_cursor(&mut self, direction: Direction, grid: GridDimensions) {
        let (dx, dy) = direction.delta();
        self.map_cursor = grid.clamped_step(self.map_cursor, dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_normal() {
        let state = AppState::new();
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.input_mode(Mode::Build), InputMode::Build);
        assert_eq!(state.input_mode(Mode::Play), InputMode::Play);
    }

    #[test]
    fn editing_collects_text_until_finished() {
        let mut state = AppState::new();
        state.begin_edit(EntityId(4), "Hi");
        state.push_char('!');
        state.pop_char();
        state.push_char('?');
        assert_eq!(state.input_mode(Mode::Build), InputMode::Editing);

        let edit = state.finish_edit().unwrap();
        assert_eq!(edit.id, EntityId(4));
        assert_eq!(edit.buffer, "Hi?");
        assert!(!state.is_editing());
        assert!(state.finish_edit().is_none());
    }

    #[test]
    fn roster_cursor_stays_in_range() {
        let mut state = AppState::new();
        state.roster_up();
        assert_eq!(state.roster_cursor, 0);

        state.roster_down(3);
        state.roster_down(3);
        state.roster_down(3);
        assert_eq!(state.roster_cursor, 2);

        state.clamp_roster(1);
        assert_eq!(state.roster_cursor, 0);
        state.clamp_roster(0);
        assert_eq!(state.roster_cursor, 0);
    }

    #[test]
    fn map_cursor_clamps_to_grid() {
        let mut state = AppState::new();
        state.move_map_cursor(Direction::Left, GridDimensions::TOWN);
        assert_eq!(state.map_cursor, Position::ORIGIN);
        state.move_map_cursor(Direction::Right, GridDimensions::TOWN);
        state.move_map_cursor(Direction::Down, GridDimensions::TOWN);
        assert_eq!(state.map_cursor, Position::new(1, 1));
    }
}
