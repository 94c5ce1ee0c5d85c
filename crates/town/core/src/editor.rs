//! Editor session: the single owner of all mutable state.
//!
//! [`Editor`] holds the three acts plus the UI-level state that spans them
//! (current act, build/play mode, palette selection, the "placing player"
//! flag and the runtime player). Every user event maps onto one method here
//! and completes synchronously.
use std::fmt;

use crate::catalog::TypeId;
use crate::codec::{self, DecodeReport, SkippedRow};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::grid::{GridDimensions, GridError, Position};
use crate::play::{Direction, PlayerState, StepOutcome};
use crate::rng::{PcgRng, RngOracle};
use crate::state::{Act, ActData, Acts, EntityId, IdAllocator, PlacedEntity};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum Mode {
    #[default]
    Build,
    Play,
}

impl Mode {
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Build => Mode::Play,
            Mode::Play => Mode::Build,
        }
    }
}

/// What a grid activation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellOutcome {
    PlayerStartSet(Position),
    Placed { id: EntityId, replaced: Option<EntityId> },
}

/// Outcome of loading CSV text into an act.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Accepted rows that landed on a cell an earlier row already used.
    pub replaced: usize,
    pub skipped: Vec<SkippedRow>,
}

pub struct Editor {
    grid: GridDimensions,
    acts: Acts,
    current_act: Act,
    mode: Mode,
    selected_type: TypeId,
    placing_player: bool,
    player: PlayerState,
    ids: IdAllocator,
    rng: Box<dyn RngOracle>,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("current_act", &self.current_act)
            .field("mode", &self.mode)
            .field("selected_type", &self.selected_type)
            .field("placing_player", &self.placing_player)
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_rng(config, Box::new(PcgRng::new(config.seed())))
    }

    pub fn with_rng(config: &EditorConfig, rng: Box<dyn RngOracle>) -> Self {
        Self {
            grid: GridDimensions::TOWN,
            acts: Acts::new(),
            current_act: config.initial_act,
            mode: Mode::Build,
            selected_type: config.initial_type,
            placing_player: false,
            player: PlayerState::default(),
            ids: IdAllocator::new(),
            rng,
        }
    }

    // ===== read access =====

    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_act(&self) -> Act {
        self.current_act
    }

    pub fn act(&self, act: Act) -> &ActData {
        self.acts.get(act)
    }

    pub fn current(&self) -> &ActData {
        self.acts.get(self.current_act)
    }

    pub fn selected_type(&self) -> TypeId {
        self.selected_type
    }

    pub fn is_placing_player(&self) -> bool {
        self.placing_player
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn population(&self) -> usize {
        self.current().len()
    }

    pub fn type_summary(&self) -> Vec<(TypeId, usize)> {
        self.current().type_summary()
    }

    pub fn entity_at(&self, position: Position) -> Option<&PlacedEntity> {
        self.current().entity_at(position)
    }

    // ===== session controls =====

    pub fn select_type(&mut self, index: u8) -> Result<TypeId, EditorError> {
        let type_id = TypeId::new(index).ok_or(EditorError::UnknownType(index))?;
        self.selected_type = type_id;
        Ok(type_id)
    }

    /// Flips the "next grid click sets the player start" flag.
    pub fn toggle_placing_player(&mut self) -> bool {
        self.placing_player = !self.placing_player;
        self.placing_player
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.reset_player();
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Changes the act being edited or played. Act data is left untouched.
    pub fn switch_act(&mut self, act: Act) {
        self.current_act = act;
        self.reset_player();
    }

    fn reset_player(&mut self) {
        self.player = PlayerState::at(self.current().player_start);
    }

    // ===== placement =====

    /// Pointer click on the map, given as fractions of the surface size.
    ///
    /// Ignored outside build mode or outside the grid. When the placing-player
    /// flag is set, a valid click consumes it; an invalid one leaves it set.
    pub fn click(&mut self, frac_x: f64, frac_y: f64) -> Result<CellOutcome, EditorError> {
        self.ensure_build()?;
        let position = self.grid.cell_from_fraction(frac_x, frac_y)?;
        self.activate_cell(position)
    }

    /// Same dispatch as [`Editor::click`], for an already resolved cell.
    pub fn activate_cell(&mut self, position: Position) -> Result<CellOutcome, EditorError> {
        self.ensure_build()?;
        self.ensure_inside(position)?;

        if self.placing_player {
            self.set_player_start(position)?;
            self.placing_player = false;
            return Ok(CellOutcome::PlayerStartSet(position));
        }

        let (id, replaced) = self.place_or_replace(position, self.selected_type)?;
        Ok(CellOutcome::Placed { id, replaced })
    }

    /// Puts a new entity on `position`, evicting any occupant.
    ///
    /// The newcomer always gets a fresh id and no custom dialogue.
    pub fn place_or_replace(
        &mut self,
        position: Position,
        type_id: TypeId,
    ) -> Result<(EntityId, Option<EntityId>), EditorError> {
        self.ensure_build()?;
        self.ensure_inside(position)?;

        let id = self.ids.allocate();
        let entity = PlacedEntity::new(id, position, type_id);
        let replaced = self
            .acts
            .get_mut(self.current_act)
            .insert_or_replace(entity)
            .map(|old| old.id);
        Ok((id, replaced))
    }

    pub fn set_player_start(&mut self, position: Position) -> Result<(), EditorError> {
        self.ensure_build()?;
        self.ensure_inside(position)?;
        self.acts.get_mut(self.current_act).player_start = position;
        self.player = PlayerState::at(position);
        Ok(())
    }

    /// Deletes by id; unknown ids are a no-op that yields `None`.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<PlacedEntity> {
        self.acts.get_mut(self.current_act).remove(id)
    }

    /// Empties the current act. Its player start is kept.
    pub fn clear_act(&mut self) -> usize {
        self.acts.get_mut(self.current_act).clear()
    }

    // ===== dialogue =====

    pub fn set_custom_dialogue(
        &mut self,
        id: EntityId,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        let entity = self.entity_mut(id)?;
        entity.custom_dialogue = Some(text.into());
        Ok(())
    }

    /// Swaps the entity's line for a random different one from its archetype.
    ///
    /// Returns the new line, or `None` when the archetype offers no
    /// alternative (the entity is then left unchanged).
    pub fn randomize_dialogue(&mut self, id: EntityId) -> Result<Option<String>, EditorError> {
        let entity = self
            .acts
            .get(self.current_act)
            .get(id)
            .ok_or(EditorError::EntityNotFound(id))?;
        let current = entity.effective_dialogue();
        let candidates: Vec<&'static str> = entity
            .type_id
            .entity_type()
            .dialogues
            .iter()
            .copied()
            .filter(|option| *option != current)
            .collect();

        let Some(index) = self.rng.pick_index(candidates.len()) else {
            return Ok(None);
        };
        let chosen = candidates[index].to_string();
        self.entity_mut(id)?.custom_dialogue = Some(chosen.clone());
        Ok(Some(chosen))
    }

    fn entity_mut(&mut self, id: EntityId) -> Result<&mut PlacedEntity, EditorError> {
        self.acts
            .get_mut(self.current_act)
            .get_mut(id)
            .ok_or(EditorError::EntityNotFound(id))
    }

    // ===== play mode =====

    pub fn move_player(&mut self, direction: Direction) -> Result<StepOutcome, EditorError> {
        if self.mode != Mode::Play {
            return Err(EditorError::NotInPlayMode);
        }
        let act = self.acts.get(self.current_act);
        Ok(self.player.step(direction, act, self.grid))
    }

    // ===== CSV =====

    /// CSV text for `act`, or `None` when the act has nothing to export.
    pub fn export_act(&self, act: Act) -> Option<String> {
        let data = self.acts.get(act);
        if data.is_empty() {
            return None;
        }
        Some(codec::encode(data.entities()))
    }

    /// Replaces every entity of `act` with the rows decoded from `text`.
    ///
    /// The player start is untouched. Rows that fail to decode are skipped; an
    /// empty or header-only file leaves the act empty.
    pub fn import_act(&mut self, act: Act, text: &str) -> ImportSummary {
        let DecodeReport { rows, skipped } = codec::decode(text, self.grid);

        let mut imported = ActData::new();
        imported.player_start = self.acts.get(act).player_start;
        let mut replaced = 0;
        for row in rows {
            let mut entity = PlacedEntity::new(self.ids.allocate(), row.position, row.type_id);
            entity.custom_dialogue = row.custom_dialogue;
            if imported.insert_or_replace(entity).is_some() {
                replaced += 1;
            }
        }

        let summary = ImportSummary {
            imported: imported.len(),
            replaced,
            skipped,
        };
        *self.acts.get_mut(act) = imported;

        if act == self.current_act {
            self.player.dialogue = None;
        }
        summary
    }

    // ===== guards =====

    fn ensure_build(&self) -> Result<(), EditorError> {
        match self.mode {
            Mode::Build => Ok(()),
            Mode::Play => Err(EditorError::NotInBuildMode),
        }
    }

    fn ensure_inside(&self, position: Position) -> Result<(), EditorError> {
        if self.grid.contains(position) {
            Ok(())
        } else {
            Err(EditorError::Grid(GridError::OutOfBounds {
                x: position.x as i64,
                y: position.y as i64,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_named(name: &str) -> TypeId {
        TypeId::from_name(name).unwrap()
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::Build.to_string(), "Build");
        assert_eq!(Mode::Play.to_string(), "Play");
        assert_eq!(Mode::Build.toggled(), Mode::Play);
    }

    fn editor() -> Editor {
        Editor::new(&EditorConfig::new().with_seed(11))
    }

    #[test]
    fn click_places_selected_type() {
        let mut editor = editor();
        editor.select_type(3).unwrap();

        let outcome = editor.click(0.06, 0.2).unwrap();

        let CellOutcome::Placed { id, replaced } = outcome else {
            panic!("expected placement, got {outcome:?}");
        };
        assert_eq!(replaced, None);
        let entity = editor.current().get(id).unwrap();
        assert_eq!(entity.position, Position::new(2, 3));
        assert_eq!(entity.type_id, type_named("Merchant"));
    }

    #[test]
    fn clicks_are_ignored_in_play_mode() {
        let mut editor = editor();
        editor.set_mode(Mode::Play);
        assert_eq!(editor.click(0.5, 0.5), Err(EditorError::NotInBuildMode));
        assert!(editor.current().is_empty());
    }

    #[test]
    fn out_of_bounds_click_keeps_player_flag() {
        let mut editor = editor();
        editor.toggle_placing_player();

        assert!(editor.click(1.2, 0.5).is_err());
        assert!(editor.is_placing_player());

        let outcome = editor.click(0.1, 0.1).unwrap();
        assert_eq!(outcome, CellOutcome::PlayerStartSet(Position::new(4, 1)));
        assert!(!editor.is_placing_player());
        assert_eq!(editor.current().player_start, Position::new(4, 1));
        assert!(editor.current().is_empty());
    }

    #[test]
    fn placing_flag_is_shared_across_acts() {
        let mut editor = editor();
        editor.toggle_placing_player();
        editor.switch_act(Act::Three);
        editor.activate_cell(Position::new(7, 7)).unwrap();

        assert_eq!(editor.act(Act::Three).player_start, Position::new(7, 7));
        assert_eq!(editor.act(Act::One).player_start, Position::ORIGIN);
    }

    #[test]
    fn clear_keeps_player_start_and_other_acts() {
        let mut editor = editor();
        editor.set_player_start(Position::new(3, 3)).unwrap();
        editor.activate_cell(Position::new(1, 1)).unwrap();
        editor.switch_act(Act::Two);
        editor.activate_cell(Position::new(1, 1)).unwrap();
        editor.switch_act(Act::One);

        assert_eq!(editor.clear_act(), 1);
        assert!(editor.current().is_empty());
        assert_eq!(editor.current().player_start, Position::new(3, 3));
        assert_eq!(editor.act(Act::Two).len(), 1);
    }

    #[test]
    fn custom_dialogue_is_stored_verbatim() {
        let mut editor = editor();
        let (id, _) = editor
            .place_or_replace(Position::new(0, 0), type_named("Queen"))
            .unwrap();

        editor.set_custom_dialogue(id, "").unwrap();
        let entity = editor.current().get(id).unwrap();
        assert_eq!(entity.custom_dialogue.as_deref(), Some(""));

        assert_eq!(
            editor.set_custom_dialogue(EntityId(999), "x"),
            Err(EditorError::EntityNotFound(EntityId(999)))
        );
    }

    #[test]
    fn randomize_uses_injected_rng() {
        struct Fixed(u32);
        impl RngOracle for Fixed {
            fn next_u32(&mut self) -> u32 {
                self.0
            }
        }

        let mut editor = Editor::with_rng(&EditorConfig::default(), Box::new(Fixed(0)));
        let (id, _) = editor
            .place_or_replace(Position::new(0, 0), type_named("Knight"))
            .unwrap();

        let first = editor.randomize_dialogue(id).unwrap();
        assert_eq!(first.as_deref(), Some("The kingdom's safety is my sworn duty."));

        let second = editor.randomize_dialogue(id).unwrap();
        assert_eq!(second.as_deref(), Some("Honor and valor guide my blade!"));
    }

    #[test]
    fn move_requires_play_mode() {
        let mut editor = editor();
        assert_eq!(
            editor.move_player(Direction::Down),
            Err(EditorError::NotInPlayMode)
        );
    }

    #[test]
    fn entering_play_starts_at_player_start() {
        let mut editor = editor();
        editor.set_player_start(Position::new(6, 2)).unwrap();
        editor.set_mode(Mode::Play);
        editor.move_player(Direction::Right).unwrap();
        assert_eq!(editor.player().position, Position::new(7, 2));

        // Start position is configuration, not runtime state.
        assert_eq!(editor.current().player_start, Position::new(6, 2));

        editor.set_mode(Mode::Build);
        editor.set_mode(Mode::Play);
        assert_eq!(editor.player().position, Position::new(6, 2));
    }

    #[test]
    fn export_of_empty_act_is_refused() {
        let editor = editor();
        assert_eq!(editor.export_act(Act::One), None);
    }

    #[test]
    fn import_replaces_act_and_keeps_last_row_per_cell() {
        let mut editor = editor();
        editor.activate_cell(Position::new(9, 9)).unwrap();
        editor.set_player_start(Position::new(2, 2)).unwrap();

        let summary = editor.import_act(
            Act::One,
            "Type,X,Y,Dialogue\n\
             Knight,1,1,\"a\"\n\
             Guard,1,1,\"b\"\n\
             Nobody,2,2,\"c\"",
        );

        assert_eq!(summary.imported, 1);
        assert_eq!(summary.replaced, 1);
        assert_eq!(summary.skipped.len(), 1);
        let only = &editor.current().entities()[0];
        assert_eq!(only.type_id, type_named("Guard"));
        assert_eq!(only.effective_dialogue(), "b");
        assert_eq!(editor.current().player_start, Position::new(2, 2));
    }

    #[test]
    fn import_of_header_only_file_clears_act() {
        let mut editor = editor();
        editor.activate_cell(Position::new(9, 9)).unwrap();
        let summary = editor.import_act(Act::One, "Type,X,Y,Dialogue\n");
        assert_eq!(summary, ImportSummary::default());
        assert!(editor.current().is_empty());
    }
}
