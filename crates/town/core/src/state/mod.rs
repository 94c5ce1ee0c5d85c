//! Per-act editor data.
//!
//! Each act owns an ordered entity collection and a player start position.
//! Entities keep insertion order, which decides who speaks first when several
//! townsfolk stand next to the player. The collection upholds one invariant:
//! at most one entity per cell.
mod act;
mod entity;

pub use act::Act;
pub use entity::{EntityId, IdAllocator, PlacedEntity};

use strum::EnumCount;

use crate::catalog::TypeId;
use crate::grid::Position;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActData {
    entities: Vec<PlacedEntity>,
    pub player_start: Position,
}

impl ActData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities in insertion order.
    pub fn entities(&self) -> &[PlacedEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&PlacedEntity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut PlacedEntity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    pub fn entity_at(&self, position: Position) -> Option<&PlacedEntity> {
        self.entities
            .iter()
            .find(|entity| entity.position == position)
    }

    /// Inserts `entity`, or swaps it in place of whatever occupies its cell.
    ///
    /// A replacement keeps the occupant's slot in iteration order and returns
    /// the evicted entity.
    pub fn insert_or_replace(&mut self, entity: PlacedEntity) -> Option<PlacedEntity> {
        match self
            .entities
            .iter()
            .position(|existing| existing.position == entity.position)
        {
            Some(index) => Some(std::mem::replace(&mut self.entities[index], entity)),
            None => {
                self.entities.push(entity);
                None
            }
        }
    }

    pub fn remove(&mut self, id: EntityId) -> Option<PlacedEntity> {
        let index = self.entities.iter().position(|entity| entity.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Removes every entity, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entities.len();
        self.entities.clear();
        count
    }

    /// Per-type population in catalog order, omitting absent types.
    pub fn type_summary(&self) -> Vec<(TypeId, usize)> {
        TypeId::all()
            .filter_map(|type_id| {
                let count = self
                    .entities
                    .iter()
                    .filter(|entity| entity.type_id == type_id)
                    .count();
                (count > 0).then_some((type_id, count))
            })
            .collect()
    }
}

/// The three acts, indexed by [`Act`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Acts {
    acts: [ActData; Act::COUNT],
}

impl Acts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, act: Act) -> &ActData {
        &self.acts[act.slot()]
    }

    pub fn get_mut(&mut self, act: Act) -> &mut ActData {
        &mut self.acts[act.slot()]
    }
}
