//! Fixed catalog of townsfolk archetypes.
//!
//! Each archetype carries a display colour and five candidate dialogue lines.
//! The first line is the archetype's default: entities without custom
//! dialogue speak it, and CSV import uses it to decide whether a row carries
//! custom text.
use std::fmt;

pub const DIALOGUE_OPTIONS: usize = 5;

/// Immutable description of one townsfolk archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityType {
    pub name: &'static str,
    /// Hex colour tag (`#RRGGBB`).
    pub color: &'static str,
    pub dialogues: [&'static str; DIALOGUE_OPTIONS],
}

impl EntityType {
    pub const fn default_dialogue(&self) -> &'static str {
        self.dialogues[0]
    }

    /// Parses the colour tag into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Stable index into [`CATALOG`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct TypeId(u8);

impl TypeId {
    pub const COUNT: usize = 9;

    /// Returns the id for `index` if the catalog has an entry there.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn entity_type(self) -> &'static EntityType {
        &CATALOG[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.entity_type().name
    }

    /// Looks up an archetype by exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| Self(index as u8))
    }

    pub fn all() -> impl Iterator<Item = TypeId> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for TypeId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("no townsfolk type with index {value}"))
    }
}

impl From<TypeId> for u8 {
    fn from(value: TypeId) -> Self {
        value.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub static CATALOG: [EntityType; TypeId::COUNT] = [
    EntityType {
        name: "Knight",
        color: "#C0C0C0",
        dialogues: [
            "Honor and valor guide my blade!",
            "The kingdom's safety is my sworn duty.",
            "I have fought in many battles for our realm.",
            "A true knight never abandons their post.",
            "May your journey be blessed with courage.",
        ],
    },
    EntityType {
        name: "Squire",
        color: "#8B7355",
        dialogues: [
            "One day I'll be a knight like my master!",
            "I'm still learning, but I'll do my best!",
            "Polishing armor is harder than it looks...",
            "The knight's code is something I aspire to follow.",
            "Can you teach me some sword techniques?",
        ],
    },
    EntityType {
        name: "Villager",
        color: "#FF6B6B",
        dialogues: [
            "Hello traveler! Welcome to our humble village.",
            "Beautiful day, isn't it? Perfect for a stroll.",
            "Have you seen the sunrise today? Simply magnificent!",
            "The harvest this year has been wonderful!",
            "Welcome, friend! Make yourself at home.",
        ],
    },
    EntityType {
        name: "Merchant",
        color: "#4ECDC4",
        dialogues: [
            "Looking to buy some wares? I've got the finest goods!",
            "Special prices today only! Come take a look!",
            "I've traveled far and wide to bring you these treasures.",
            "Business is booming! What can I get for you?",
            "Rare items from distant lands, right here!",
        ],
    },
    EntityType {
        name: "Guard",
        color: "#45B7D1",
        dialogues: [
            "Halt! State your business... oh, you're friendly. Carry on.",
            "Stay vigilant. There are dangers on the roads.",
            "Everything is secure here. You may pass.",
            "I protect this town with my life!",
            "Keep your wits about you, traveler.",
        ],
    },
    EntityType {
        name: "Queen",
        color: "#FFD700",
        dialogues: [
            "Welcome to my court. What brings you here?",
            "The kingdom prospers under wise leadership.",
            "I rule with both strength and compassion.",
            "My people's welfare is my highest priority.",
            "Speak freely, you are among friends here.",
        ],
    },
    EntityType {
        name: "Evil Guard",
        color: "#8B0000",
        dialogues: [
            "Move along... or face the consequences.",
            "The old ways are gone. New order prevails now.",
            "Don't test my patience, stranger.",
            "You ask too many questions...",
            "Keep walking if you know what's good for you.",
        ],
    },
    EntityType {
        name: "Advisor",
        color: "#9370DB",
        dialogues: [
            "I counsel the throne on matters of state.",
            "Wisdom comes from careful observation.",
            "The political landscape shifts like sand...",
            "Knowledge is the greatest power of all.",
            "I've seen many rulers come and go.",
        ],
    },
    EntityType {
        name: "Assassin",
        color: "#2F4F4F",
        dialogues: [
            "You saw nothing. Understood?",
            "Some secrets are worth dying for...",
            "Everyone has a price. What's yours?",
            "The shadows are my domain.",
            "Trust no one in this place.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_types_with_distinct_options() {
        assert_eq!(TypeId::COUNT, 9);
        for entry in CATALOG.iter() {
            for (i, a) in entry.dialogues.iter().enumerate() {
                for b in entry.dialogues.iter().skip(i + 1) {
                    assert_ne!(a, b, "{} repeats a dialogue line", entry.name);
                }
            }
        }
    }

    #[test]
    fn lookup_by_name_is_exact() {
        assert_eq!(TypeId::from_name("Evil Guard"), TypeId::new(6));
        assert_eq!(TypeId::from_name("knight"), None);
        assert_eq!(TypeId::from_name("Knight "), None);
    }

    #[test]
    fn out_of_catalog_index_is_rejected() {
        assert!(TypeId::new(8).is_some());
        assert!(TypeId::new(9).is_none());
        assert!(TypeId::try_from(200u8).is_err());
    }

    #[test]
    fn colour_tags_parse() {
        assert_eq!(CATALOG[5].rgb(), Some((0xFF, 0xD7, 0x00)));
        assert!(CATALOG.iter().all(|entry| entry.rgb().is_some()));
    }
}
