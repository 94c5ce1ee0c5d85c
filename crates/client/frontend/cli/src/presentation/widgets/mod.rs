//! Individual panels composed by [`crate::presentation::ui`].
pub mod dialogue_box;
pub mod footer;
pub mod header;
pub mod map;
pub mod messages;
pub mod palette;
pub mod roster;
