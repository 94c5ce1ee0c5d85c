//! Input handling (keyboard and mouse) and dispatch onto the editor.

use anyhow::Result;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tokio::time::Duration;
use town_core::{Act, CellOutcome, EditorError, EntityId, StepOutcome};

use super::super::EventLoop;
use crate::{
    input::{EditKey, KeyAction},
    presentation::{terminal::Tui, widgets::map},
};

impl EventLoop {
    /// Poll for terminal input and handle it.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Mouse(mouse) => {
                if self.handle_mouse(mouse) {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to the editor.
    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let mode = self.app_state.input_mode(self.editor.mode());
        let action = self.input.handle_key(key, mode);

        if action == KeyAction::Quit {
            tracing::info!("Quit requested");
            return Ok(true);
        }

        self.dispatch(action).await;
        self.render(terminal)?;
        Ok(false)
    }

    /// Left clicks on the map panel become editor clicks. Returns whether
    /// anything needs redrawing.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.app_state.is_editing() {
            return false;
        }
        let (Some(panel), Some(surface)) = (self.app_state.map_panel, self.app_state.map_surface)
        else {
            return false;
        };
        if !panel_contains(panel, mouse.column, mouse.row) {
            return false;
        }

        let (frac_x, frac_y) = surface.fraction(mouse.column, mouse.row);
        self.click(frac_x, frac_y);
        true
    }

    async fn dispatch(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::None => {}
            KeyAction::ToggleMode => {
                let mode = self.editor.toggle_mode();
                tracing::debug!(%mode, "Mode toggled");
                self.messages.push_text(format!("{mode} mode"));
            }
            KeyAction::Move(direction) => match self.editor.move_player(direction) {
                Ok(StepOutcome::Moved { from, to }) => {
                    tracing::trace!(%from, %to, "Player moved");
                }
                Ok(StepOutcome::Blocked) => {}
                Err(e) => self.ignored(e),
            },
            KeyAction::SelectType(index) => match self.editor.select_type(index) {
                Ok(type_id) => tracing::debug!(%type_id, "Palette selection"),
                Err(e) => self.ignored(e),
            },
            KeyAction::TogglePlacingPlayer => {
                if self.editor.toggle_placing_player() {
                    self.messages
                        .push_text("Click a cell to set the player start");
                }
            }
            KeyAction::ClearAct => {
                let removed = self.editor.clear_act();
                self.app_state.clamp_roster(0);
                self.messages.push_text(format!(
                    "Cleared {removed} townsfolk from {}",
                    self.editor.current_act()
                ));
            }
            KeyAction::NextAct => self.switch_act(self.editor.current_act().next()),
            KeyAction::SwitchAct(act) => self.switch_act(act),
            KeyAction::RosterUp => self.app_state.roster_up(),
            KeyAction::RosterDown => self.app_state.roster_down(self.editor.population()),
            KeyAction::RemoveSelected => {
                if let Some(id) = self.selected_entity()
                    && let Some(removed) = self.editor.remove_entity(id)
                {
                    self.messages
                        .push_text(format!("Removed {} at {}", removed.name(), removed.position));
                    self.app_state.clamp_roster(self.editor.population());
                }
            }
            KeyAction::RandomizeSelected => {
                if let Some(id) = self.selected_entity() {
                    match self.editor.randomize_dialogue(id) {
                        Ok(Some(line)) => tracing::debug!(%id, %line, "Dialogue randomized"),
                        Ok(None) => self.messages.push_warning("No other line to pick"),
                        Err(e) => self.ignored(e),
                    }
                }
            }
            KeyAction::EditSelected => {
                if let Some(entity) = self
                    .selected_entity()
                    .and_then(|id| self.editor.current().get(id))
                {
                    let (id, text) = (entity.id, entity.effective_dialogue().to_string());
                    self.app_state.begin_edit(id, text);
                }
            }
            KeyAction::Export => self.export_current().await,
            KeyAction::Import => self.request_import(),
            KeyAction::MoveCursor(direction) => {
                self.app_state
                    .move_map_cursor(direction, self.editor.grid());
            }
            KeyAction::PlaceAtCursor => {
                let (frac_x, frac_y) = map::cell_centre(self.editor.grid(), self.app_state.map_cursor);
                self.click(frac_x, frac_y);
            }
            KeyAction::Edit(key) => self.handle_edit_key(key),
        }
    }

    fn handle_edit_key(&mut self, key: EditKey) {
        match key {
            EditKey::Insert(ch) => self.app_state.push_char(ch),
            EditKey::Backspace => self.app_state.pop_char(),
            EditKey::Cancel => {
                self.app_state.finish_edit();
            }
            EditKey::Commit => {
                let Some(edit) = self.app_state.finish_edit() else {
                    return;
                };
                match self.editor.set_custom_dialogue(edit.id, edit.buffer) {
                    Ok(()) => tracing::debug!(id = %edit.id, "Dialogue edited"),
                    Err(e) => {
                        self.messages
                            .push_warning("That townsfolk is gone; edit discarded");
                        self.ignored(e);
                    }
                }
            }
        }
    }

    fn click(&mut self, frac_x: f64, frac_y: f64) {
        match self.editor.click(frac_x, frac_y) {
            Ok(CellOutcome::PlayerStartSet(position)) => {
                self.app_state.map_cursor = position;
                self.messages
                    .push_text(format!("Player start set to {position}"));
            }
            Ok(CellOutcome::Placed { id, replaced }) => {
                if let Some(entity) = self.editor.current().get(id) {
                    self.app_state.map_cursor = entity.position;
                    tracing::debug!(
                        %id,
                        kind = entity.name(),
                        position = %entity.position,
                        replaced = ?replaced,
                        "Placed townsfolk"
                    );
                }
            }
            Err(e) => self.ignored(e),
        }
    }

    fn switch_act(&mut self, act: Act) {
        self.editor.switch_act(act);
        self.app_state.clamp_roster(self.editor.population());
        tracing::debug!(%act, "Act switched");
    }

    fn selected_entity(&self) -> Option<EntityId> {
        self.editor
            .current()
            .entities()
            .get(self.app_state.roster_cursor)
            .map(|entity| entity.id)
    }

    /// Rejected editor operations are silent no-ops for the user.
    fn ignored(&self, error: EditorError) {
        tracing::debug!(code = error.error_code(), "Ignored input: {}", error);
    }
}

fn panel_contains(panel: Rect, column: u16, row: u16) -> bool {
    column >= panel.x
        && row >= panel.y
        && column < panel.x.saturating_add(panel.width)
        && row < panel.y.saturating_add(panel.height)
}
