use crate::catalog::TypeId;
use crate::state::Act;

/// Startup parameters for an editor session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Act selected when the editor opens.
    pub initial_act: Act,
    /// Palette entry selected when the editor opens.
    pub initial_type: TypeId,
    /// Seed for dialogue shuffling. `None` lets the host pick one.
    pub rng_seed: Option<u64>,
}

impl EditorConfig {
    pub const DEFAULT_SEED: u64 = 0x5EED_70A1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn seed(&self) -> u64 {
        self.rng_seed.unwrap_or(Self::DEFAULT_SEED)
    }
}
