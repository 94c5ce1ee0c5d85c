//! Play-mode movement and proximity dialogue.
//!
//! The player walks one cell per input, clamped to the grid. Every move that
//! actually changes position re-scans the act: the first townsfolk (in
//! insertion order) standing orthogonally next to the player speaks; if none
//! does, the dialogue box closes. A move blocked by the grid edge leaves the
//! current dialogue untouched.
use crate::grid::{GridDimensions, Position};
use crate::state::{ActData, PlacedEntity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Screen-space delta: rows grow downwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Text currently shown in the dialogue box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialogue {
    pub speaker: &'static str,
    pub text: String,
}

impl Dialogue {
    pub fn spoken_by(entity: &PlacedEntity) -> Self {
        Self {
            speaker: entity.name(),
            text: entity.effective_dialogue().to_string(),
        }
    }
}

/// Runtime-only player state; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub position: Position,
    pub dialogue: Option<Dialogue>,
}

/// Result of one movement input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The grid edge absorbed the move; nothing was recomputed.
    Blocked,
    Moved { from: Position, to: Position },
}

impl PlayerState {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            dialogue: None,
        }
    }

    /// Applies one movement input against `act`.
    pub fn step(
        &mut self,
        direction: Direction,
        act: &ActData,
        grid: GridDimensions,
    ) -> StepOutcome {
        let (dx, dy) = direction.delta();
        let from = self.position;
        let to = grid.clamped_step(from, dx, dy);
        if to == from {
            return StepOutcome::Blocked;
        }

        self.position = to;
        self.dialogue = first_adjacent(act, to).map(Dialogue::spoken_by);
        StepOutcome::Moved { from, to }
    }
}

/// First entity, in insertion order, orthogonally adjacent to `position`.
pub fn first_adjacent(act: &ActData, position: Position) -> Option<&PlacedEntity> {
    act.entities()
        .iter()
        .find(|entity| entity.position.is_orthogonally_adjacent(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TypeId;
    use crate::state::{EntityId, PlacedEntity};

    fn place(act: &mut ActData, id: u64, name: &str, x: i32, y: i32) {
        act.insert_or_replace(PlacedEntity::new(
            EntityId(id),
            Position::new(x, y),
            TypeId::from_name(name).unwrap(),
        ));
    }

    #[test]
    fn moving_next_to_townsfolk_opens_dialogue() {
        let mut act = ActData::new();
        place(&mut act, 1, "Villager", 4, 5);
        let mut player = PlayerState::at(Position::new(4, 3));

        let outcome = player.step(Direction::Down, &act, GridDimensions::TOWN);

        assert_eq!(
            outcome,
            StepOutcome::Moved {
                from: Position::new(4, 3),
                to: Position::new(4, 4)
            }
        );
        assert_eq!(
            player.dialogue,
            Some(Dialogue {
                speaker: "Villager",
                text: "Hello traveler! Welcome to our humble village.".into(),
            })
        );

        player.step(Direction::Up, &act, GridDimensions::TOWN);
        assert_eq!(player.dialogue, None);
    }

    #[test]
    fn diagonal_neighbours_stay_silent() {
        let mut act = ActData::new();
        place(&mut act, 1, "Guard", 5, 5);
        let mut player = PlayerState::at(Position::new(3, 4));

        player.step(Direction::Right, &act, GridDimensions::TOWN);

        assert_eq!(player.position, Position::new(4, 4));
        assert_eq!(player.dialogue, None);
    }

    #[test]
    fn first_inserted_neighbour_wins() {
        let mut act = ActData::new();
        place(&mut act, 1, "Queen", 6, 5);
        place(&mut act, 2, "Knight", 5, 4);
        let mut player = PlayerState::at(Position::new(4, 5));

        player.step(Direction::Right, &act, GridDimensions::TOWN);

        assert_eq!(player.dialogue.map(|d| d.speaker), Some("Queen"));
    }

    #[test]
    fn edge_moves_keep_existing_dialogue() {
        let mut act = ActData::new();
        place(&mut act, 1, "Assassin", 1, 0);
        let mut player = PlayerState::at(Position::ORIGIN);
        let shown = Dialogue {
            speaker: "Merchant",
            text: "stale".into(),
        };
        player.dialogue = Some(shown.clone());

        assert_eq!(
            player.step(Direction::Left, &act, GridDimensions::TOWN),
            StepOutcome::Blocked
        );
        assert_eq!(
            player.step(Direction::Up, &act, GridDimensions::TOWN),
            StepOutcome::Blocked
        );
        assert_eq!(player.position, Position::ORIGIN);
        assert_eq!(player.dialogue, Some(shown));
    }
}
