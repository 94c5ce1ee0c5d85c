use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// One of the three independent town configurations.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount,
    strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Act {
    #[default]
    #[strum(to_string = "Act 1")]
    One,
    #[strum(to_string = "Act 2")]
    Two,
    #[strum(to_string = "Act 3")]
    Three,
}

impl Act {
    /// 1-based act number as shown to users and used in export file names.
    pub const fn number(self) -> u8 {
        match self {
            Act::One => 1,
            Act::Two => 2,
            Act::Three => 3,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Act::One),
            2 => Some(Act::Two),
            3 => Some(Act::Three),
            _ => None,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        self.number() as usize - 1
    }

    /// Next act, wrapping from the third back to the first.
    pub fn next(self) -> Self {
        Act::iter()
            .cycle()
            .skip_while(|act| *act != self)
            .nth(1)
            .unwrap_or(Act::One)
    }
}

impl TryFrom<u8> for Act {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or_else(|| format!("act must be 1, 2 or 3 (got {value})"))
    }
}

impl From<Act> for u8 {
    fn from(value: Act) -> Self {
        value.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for act in Act::iter() {
            assert_eq!(Act::from_number(act.number()), Some(act));
        }
        assert_eq!(Act::from_number(0), None);
        assert_eq!(Act::from_number(4), None);
        assert_eq!(Act::COUNT, 3);
    }

    #[test]
    fn display_matches_number() {
        for act in Act::iter() {
            assert_eq!(act.to_string(), format!("Act {}", act.number()));
        }
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Act::One.next(), Act::Two);
        assert_eq!(Act::Three.next(), Act::One);
    }
}
