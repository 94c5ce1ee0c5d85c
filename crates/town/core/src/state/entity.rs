use std::fmt;

use crate::catalog::TypeId;
use crate::grid::Position;

/// Unique identifier for a placed townsfolk, never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sequential entity id allocator (monotonically increasing).
#[derive(Clone, Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// A townsfolk instance placed on an act's map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedEntity {
    pub id: EntityId,
    pub position: Position,
    pub type_id: TypeId,
    /// Stored verbatim. `None` means "speak the archetype default".
    pub custom_dialogue: Option<String>,
}

impl PlacedEntity {
    pub fn new(id: EntityId, position: Position, type_id: TypeId) -> Self {
        Self {
            id,
            position,
            type_id,
            custom_dialogue: None,
        }
    }

    pub fn with_dialogue(mut self, dialogue: impl Into<String>) -> Self {
        self.custom_dialogue = Some(dialogue.into());
        self
    }

    /// Custom dialogue when set and non-empty, otherwise the archetype default.
    pub fn effective_dialogue(&self) -> &str {
        match self.custom_dialogue.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => self.type_id.entity_type().default_dialogue(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.type_id.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> TypeId {
        TypeId::from_name("Knight").unwrap()
    }

    #[test]
    fn effective_dialogue_falls_back_to_default() {
        let entity = PlacedEntity::new(EntityId(1), Position::ORIGIN, knight());
        assert_eq!(entity.effective_dialogue(), "Honor and valor guide my blade!");

        let custom = entity.clone().with_dialogue("Well met.");
        assert_eq!(custom.effective_dialogue(), "Well met.");

        let empty = entity.with_dialogue("");
        assert_eq!(empty.custom_dialogue.as_deref(), Some(""));
        assert_eq!(empty.effective_dialogue(), "Honor and valor guide my blade!");
    }

    #[test]
    fn allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert!(b > a);
    }
}
